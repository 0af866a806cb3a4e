//! Form-action adapter.
//!
//! Each action turns one user trigger (form submit or button click) into
//! exactly one backend request and reports the result to the [`Browser`]:
//!
//! 1. Read the fields from the submitted [`FormData`] or the [`Document`]
//! 2. Check the password confirmation where there is one
//! 3. Send the request through [`ApiClient`]
//! 4. On success navigate once; on failure alert once
//!
//! There are no retries and no deduplication: triggering an action twice
//! sends two requests.
//!
//! [`FormData`]: crate::dom::FormData
//! [`Document`]: crate::dom::Document

mod account;
mod boards;
mod cards;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::api::{ApiClient, ApiError};
use crate::dom::{Browser, DocumentError, Location};

/// Alert shown when a password and its confirmation differ.
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Errors that stop an action before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The page lacks a field or element the action reads.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// What an action did to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The browser was sent to this location.
    Navigated(Location),
    /// The user was shown this alert.
    Alerted(String),
}

impl Outcome {
    /// Whether the action navigated.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(self, Self::Navigated(_))
    }

    /// The alert text, if the action alerted.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        match self {
            Self::Alerted(message) => Some(message),
            Self::Navigated(_) => None,
        }
    }
}

/// Wires page triggers to backend calls.
#[derive(Debug)]
pub struct FormActions<B> {
    api: ApiClient,
    browser: B,
}

impl<B: Browser> FormActions<B> {
    /// Create the adapter over a client and the browser it reports to.
    #[must_use]
    pub const fn new(api: ApiClient, browser: B) -> Self {
        Self { api, browser }
    }

    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub const fn browser(&self) -> &B {
        &self.browser
    }

    /// Give back the browser, e.g. to inspect what was recorded.
    #[must_use]
    pub fn into_browser(self) -> B {
        self.browser
    }

    /// Alert without touching the network.
    fn reject(&mut self, message: &str) -> Outcome {
        self.browser.alert(message);
        Outcome::Alerted(message.to_string())
    }

    /// Report a backend result: navigate on success, alert on failure.
    fn finish<T>(&mut self, action: &str, result: Result<T, ApiError>, target: Location) -> Outcome {
        match result {
            Ok(_) => {
                info!(action, location = %target, "Action succeeded");
                self.browser.navigate(&target);
                Outcome::Navigated(target)
            }
            Err(err) => {
                if matches!(err, ApiError::Api { .. }) {
                    warn!(action, error = %err, "Action rejected by backend");
                } else {
                    error!(action, error = %err, "Action failed");
                }
                let message = err.alert_text();
                self.browser.alert(&message);
                Outcome::Alerted(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::dom::RecordingBrowser;

    fn actions() -> FormActions<RecordingBrowser> {
        let config = ClientConfig::new("http://127.0.0.1:9").expect("config");
        let api = ApiClient::new(&config).expect("client");
        FormActions::new(api, RecordingBrowser::new())
    }

    #[test]
    fn test_finish_success_navigates_once() {
        let mut actions = actions();
        let outcome = actions.finish("test", Ok(()), Location::path("/me/"));

        assert_eq!(outcome, Outcome::Navigated(Location::path("/me/")));
        assert_eq!(actions.browser().events().len(), 1);
        assert_eq!(actions.browser().alerts().count(), 0);
    }

    #[test]
    fn test_finish_api_error_alerts_server_message() {
        let mut actions = actions();
        let result: Result<(), ApiError> = Err(ApiError::Api {
            status: 401,
            message: "Only owner can remove it.".to_string(),
        });
        let outcome = actions.finish("test", result, Location::path("/me/"));

        assert_eq!(outcome.alert(), Some("Error: Only owner can remove it."));
        assert_eq!(actions.browser().navigations().count(), 0);
        assert_eq!(actions.browser().alerts().count(), 1);
    }

    #[test]
    fn test_finish_parse_error_alerts_generic_message() {
        let mut actions = actions();
        let result: Result<(), ApiError> = Err(ApiError::Parse("not json".to_string()));
        let outcome = actions.finish("test", result, Location::Reload);

        assert_eq!(outcome.alert(), Some(crate::api::GENERIC_FAILURE));
        assert!(!outcome.is_navigation());
    }
}
