//! Account commands: register, login, profile.

use clap::Subcommand;
use recommend_client::dom::ids::{
    FIELD_EMAIL_ADDRESS, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_PASSWORD,
    FIELD_REPEAT_PASSWORD, FIELD_USER_NAME, FIRST_NAME_INPUT, LAST_NAME_INPUT,
    NEW_PASSWORD_INPUT, REPEAT_PASSWORD_INPUT,
};
use recommend_client::dom::{Browser, Element, FormData, MemoryDocument};
use recommend_client::{FormActions, Outcome};
use recommend_core::UserId;
use secrecy::ExposeSecret;

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum UserAction {
    /// Change first and last name
    Update {
        /// User ID
        id: String,

        /// New first name
        #[arg(short, long)]
        first_name: String,

        /// New last name
        #[arg(short, long)]
        last_name: String,
    },
    /// Change password
    Password {
        /// User ID
        id: String,

        /// New password
        #[arg(short, long)]
        password: String,

        /// New password again
        #[arg(short, long)]
        repeat_password: String,
    },
    /// Show a user and their public boards
    Show {
        /// User ID
        id: String,
    },
}

/// The register form as the page would submit it.
#[must_use]
pub fn register_form(
    email: String,
    first_name: String,
    last_name: String,
    user_name: String,
    password: String,
    repeat_password: String,
) -> FormData {
    FormData::new()
        .with(FIELD_EMAIL_ADDRESS, email)
        .with(FIELD_FIRST_NAME, first_name)
        .with(FIELD_LAST_NAME, last_name)
        .with(FIELD_USER_NAME, user_name)
        .with(FIELD_PASSWORD, password)
        .with(FIELD_REPEAT_PASSWORD, repeat_password)
}

/// Log in and print the session token for later invocations.
pub async fn login<B: Browser>(
    actions: &mut FormActions<B>,
    username: String,
    password: String,
) -> Result<Option<Outcome>, CommandError> {
    let form = FormData::new()
        .with("username", username)
        .with("password", password);

    let outcome = actions.login(&form).await;

    if outcome.is_navigation() {
        if let Some(token) = actions.api().session_token() {
            print_token(token.expose_secret());
        } else {
            tracing::warn!("Logged in, but the backend did not set a session cookie");
        }
    }

    Ok(Some(outcome))
}

#[allow(clippy::print_stdout)]
fn print_token(token: &str) {
    println!("RECOMMEND_ACCESS_TOKEN={token}");
}

pub async fn user<B: Browser>(
    actions: &mut FormActions<B>,
    action: UserAction,
) -> Result<Option<Outcome>, CommandError> {
    match action {
        UserAction::Update {
            id,
            first_name,
            last_name,
        } => {
            let page = MemoryDocument::new()
                .with(FIRST_NAME_INPUT, Element::input(first_name))
                .with(LAST_NAME_INPUT, Element::input(last_name));
            let outcome = actions
                .update_user_data(&page, &UserId::new(id))
                .await?;
            Ok(Some(outcome))
        }
        UserAction::Password {
            id,
            password,
            repeat_password,
        } => {
            let page = MemoryDocument::new()
                .with(NEW_PASSWORD_INPUT, Element::input(password))
                .with(REPEAT_PASSWORD_INPUT, Element::input(repeat_password));
            let outcome = actions.save_password(&page, &UserId::new(id)).await?;
            Ok(Some(outcome))
        }
        UserAction::Show { id } => {
            let user = actions.api().get_user(&UserId::new(id)).await?;
            print_json(&user)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_form_uses_page_field_names() {
        let form = register_form(
            "ada@example.com".into(),
            "Ada".into(),
            "Lovelace".into(),
            "ada".into(),
            "pw".into(),
            "pw".into(),
        );
        assert_eq!(form.get("emailAddress"), Some("ada@example.com"));
        assert_eq!(form.get("repeatPassword"), Some("pw"));
        assert_eq!(form.len(), 6);
    }
}
