//! Session types.

use serde::{Deserialize, Serialize};

/// Access token returned by `POST /session/`.
///
/// The backend also sets it as the `access_token` cookie, which is what
/// authenticates later requests. Implements `Debug` manually to redact it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Display name of the signed-in user.
    pub name: String,
    pub access_token: String,
    pub token_type: String,
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("name", &self.name)
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_deserialize() {
        let token: Token = serde_json::from_str(
            r#"{"name": "Ada", "access_token": "eyJ.abc", "token_type": "bearer"}"#,
        )
        .expect("deserialize");
        assert_eq!(token.token_type, "bearer");
        assert!(!format!("{token:?}").contains("eyJ.abc"));
    }
}
