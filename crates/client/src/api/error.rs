//! Error types for the Recommend API client.

use serde_json::Value;
use thiserror::Error;

/// Alert text for failures that carry no server message.
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Errors that can occur when calling the Recommend backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, offline).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Human-readable message taken from the response body.
        message: String,
    },

    /// A response body could not be read as the expected JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// An endpoint URL could not be built from the base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// The text shown to the user for this failure.
    ///
    /// Application errors surface the server's message; everything else
    /// collapses into [`GENERIC_FAILURE`].
    #[must_use]
    pub fn alert_text(&self) -> String {
        match self {
            Self::Api { message, .. } => format!("Error: {message}"),
            Self::Http(_) | Self::Parse(_) | Self::InvalidUrl(_) => GENERIC_FAILURE.to_string(),
        }
    }

    /// HTTP status of an application error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Find the human-readable message in an error body.
///
/// The backend is not consistent about where it puts the message, so the
/// lookup order is `detail.error`, `detail` (string), `message`, then the
/// `msg` entries of a validation error list under `detail`.
#[must_use]
pub fn error_message(body: &Value) -> Option<String> {
    if let Some(message) = body.pointer("/detail/error").and_then(Value::as_str) {
        return Some(message.to_string());
    }

    if let Some(message) = body.get("detail").and_then(Value::as_str) {
        return Some(message.to_string());
    }

    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }

    let messages: Vec<&str> = body
        .get("detail")
        .and_then(Value::as_array)?
        .iter()
        .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
        .collect();

    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_nested_detail_error() {
        let body = json!({"detail": {"error": "User already exists"}});
        assert_eq!(error_message(&body).as_deref(), Some("User already exists"));
    }

    #[test]
    fn test_detail_string() {
        let body = json!({"detail": "Invalid signin credentials"});
        assert_eq!(
            error_message(&body).as_deref(),
            Some("Invalid signin credentials")
        );
    }

    #[test]
    fn test_top_level_message() {
        let body = json!({"message": "Board not found"});
        assert_eq!(error_message(&body).as_deref(), Some("Board not found"));
    }

    #[test]
    fn test_nested_detail_wins_over_message() {
        let body = json!({"detail": {"error": "nested"}, "message": "top"});
        assert_eq!(error_message(&body).as_deref(), Some("nested"));
    }

    #[test]
    fn test_validation_list() {
        let body = json!({
            "detail": [
                {"loc": ["body", "name"], "msg": "field required", "type": "value_error.missing"},
                {"loc": ["body", "private"], "msg": "value could not be parsed to a boolean"}
            ]
        });
        assert_eq!(
            error_message(&body).as_deref(),
            Some("field required; value could not be parsed to a boolean")
        );
    }

    #[test]
    fn test_no_message() {
        assert_eq!(error_message(&json!({"status": "bad"})), None);
        assert_eq!(error_message(&json!({"detail": []})), None);
        assert_eq!(error_message(&json!("plain string")), None);
    }

    #[test]
    fn test_alert_text() {
        let err = ApiError::Api {
            status: 400,
            message: "Invalid user: None".to_string(),
        };
        assert_eq!(err.alert_text(), "Error: Invalid user: None");
        assert_eq!(err.status(), Some(400));

        let err = ApiError::Parse("expected value at line 1".to_string());
        assert_eq!(err.alert_text(), GENERIC_FAILURE);
        assert_eq!(err.status(), None);
    }
}
