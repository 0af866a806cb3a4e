//! Account actions: register, login, logout, profile and password changes.

use recommend_core::{NewUser, PasswordUpdate, UserId, UserNameUpdate};
use tracing::instrument;

use crate::dom::ids::{
    FIELD_EMAIL_ADDRESS, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_PASSWORD,
    FIELD_REPEAT_PASSWORD, FIELD_USER_NAME, FIRST_NAME_INPUT, LAST_NAME_INPUT,
    NEW_PASSWORD_INPUT, REPEAT_PASSWORD_INPUT,
};
use crate::dom::{Browser, Document, FormData, Location};
use crate::routes::{PAGE_LOGIN, PAGE_ME};

use super::{ActionError, FormActions, Outcome, PASSWORD_MISMATCH};

impl<B: Browser> FormActions<B> {
    /// Submit of the register form.
    ///
    /// Sends `POST /users` with the form's fields mapped to the backend's
    /// names, then goes to the login page. Nothing is sent when the password
    /// and its confirmation differ.
    ///
    /// # Errors
    ///
    /// Returns error if a register field is missing from the form.
    #[instrument(skip_all)]
    pub async fn register(&mut self, form: &FormData) -> Result<Outcome, ActionError> {
        let password = form.require(FIELD_PASSWORD)?;
        if password != form.require(FIELD_REPEAT_PASSWORD)? {
            return Ok(self.reject(PASSWORD_MISMATCH));
        }

        let user = NewUser {
            email_address: form.require(FIELD_EMAIL_ADDRESS)?,
            first_name: form.require(FIELD_FIRST_NAME)?,
            last_name: form.require(FIELD_LAST_NAME)?,
            user_name: form.require(FIELD_USER_NAME)?,
            password,
        };

        let result = self.api.register(&user).await;
        Ok(self.finish("register", result, Location::path(PAGE_LOGIN)))
    }

    /// Submit of the login form.
    ///
    /// Every field of the form is forwarded form-urlencoded to
    /// `POST /session/`; on success the browser goes to the landing page.
    #[instrument(skip_all)]
    pub async fn login(&mut self, form: &FormData) -> Outcome {
        let result = self.api.login(form.entries()).await;
        self.finish("login", result, Location::path(PAGE_ME))
    }

    /// Click on the logout button.
    #[instrument(skip_all)]
    pub async fn logout(&mut self) -> Outcome {
        let result = self.api.logout().await;
        self.finish("logout", result, Location::path(PAGE_LOGIN))
    }

    /// Click on "save" after [`edit_user_data`](crate::toggles::edit_user_data).
    ///
    /// # Errors
    ///
    /// Returns error if the name inputs are missing from the document.
    #[instrument(skip(self, document), fields(user_id = %user_id))]
    pub async fn update_user_data<D: Document + ?Sized>(
        &mut self,
        document: &D,
        user_id: &UserId,
    ) -> Result<Outcome, ActionError> {
        let update = UserNameUpdate {
            first_name: document.value(FIRST_NAME_INPUT)?,
            last_name: document.value(LAST_NAME_INPUT)?,
        };

        let result = self.api.update_user_name(user_id, &update).await;
        Ok(self.finish("update_user_data", result, Location::Reload))
    }

    /// Click on "save" after [`edit_password`](crate::toggles::edit_password).
    ///
    /// # Errors
    ///
    /// Returns error if the password inputs are missing from the document.
    #[instrument(skip(self, document), fields(user_id = %user_id))]
    pub async fn save_password<D: Document + ?Sized>(
        &mut self,
        document: &D,
        user_id: &UserId,
    ) -> Result<Outcome, ActionError> {
        let password = document.value(NEW_PASSWORD_INPUT)?;
        if password != document.value(REPEAT_PASSWORD_INPUT)? {
            return Ok(self.reject(PASSWORD_MISMATCH));
        }

        let result = self
            .api
            .update_password(user_id, &PasswordUpdate { password })
            .await;
        Ok(self.finish("save_password", result, Location::Reload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::config::ClientConfig;
    use crate::dom::{DocumentError, Element, MemoryDocument, RecordingBrowser};

    // Nothing listens on the discard port, so any request that does go out
    // shows up as the generic transport alert.
    fn actions() -> FormActions<RecordingBrowser> {
        let config = ClientConfig::new("http://127.0.0.1:9").expect("config");
        FormActions::new(ApiClient::new(&config).expect("client"), RecordingBrowser::new())
    }

    fn register_form(password: &str, repeat: &str) -> FormData {
        FormData::new()
            .with(FIELD_EMAIL_ADDRESS, "ada@example.com")
            .with(FIELD_FIRST_NAME, "Ada")
            .with(FIELD_LAST_NAME, "Lovelace")
            .with(FIELD_USER_NAME, "ada")
            .with(FIELD_PASSWORD, password)
            .with(FIELD_REPEAT_PASSWORD, repeat)
    }

    #[tokio::test]
    async fn test_register_password_mismatch_alerts_locally() {
        let mut actions = actions();
        let outcome = actions
            .register(&register_form("hunter22", "hunter23"))
            .await
            .expect("all fields present");

        assert_eq!(outcome, Outcome::Alerted(PASSWORD_MISMATCH.to_string()));
        assert_eq!(actions.browser().alerts().collect::<Vec<_>>(), [PASSWORD_MISMATCH]);
    }

    #[tokio::test]
    async fn test_register_missing_field_sends_nothing() {
        let mut actions = actions();
        let form = FormData::new()
            .with(FIELD_PASSWORD, "x")
            .with(FIELD_REPEAT_PASSWORD, "x");

        let err = actions.register(&form).await.expect_err("email missing");
        assert_eq!(
            err,
            ActionError::Document(DocumentError::MissingField(FIELD_EMAIL_ADDRESS.to_string()))
        );
        assert!(actions.browser().events().is_empty());
    }

    #[tokio::test]
    async fn test_save_password_mismatch_alerts_locally() {
        let mut actions = actions();
        let document = MemoryDocument::new()
            .with(NEW_PASSWORD_INPUT, Element::input("one"))
            .with(REPEAT_PASSWORD_INPUT, Element::input("two"));

        let outcome = actions
            .save_password(&document, &UserId::new("u1"))
            .await
            .expect("inputs present");
        assert_eq!(outcome.alert(), Some(PASSWORD_MISMATCH));
    }

    #[tokio::test]
    async fn test_update_user_data_missing_input() {
        let mut actions = actions();
        let document = MemoryDocument::new().with(FIRST_NAME_INPUT, Element::input("Ada"));

        let err = actions
            .update_user_data(&document, &UserId::new("u1"))
            .await
            .expect_err("last name input missing");
        assert_eq!(
            err,
            ActionError::Document(DocumentError::MissingElement(LAST_NAME_INPUT.to_string()))
        );
    }

    #[tokio::test]
    async fn test_transport_failure_alerts_generic_message() {
        let mut actions = actions();
        let outcome = actions.logout().await;

        assert_eq!(outcome.alert(), Some(crate::api::GENERIC_FAILURE));
        assert_eq!(actions.browser().navigations().count(), 0);
    }
}
