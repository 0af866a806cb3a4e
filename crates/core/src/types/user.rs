//! User payloads and response models.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::id::UserId;

/// Payload for `POST /users`.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email_address", &self.email_address)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("user_name", &self.user_name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Payload for `PUT /users/{id}` when editing the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserNameUpdate {
    pub first_name: String,
    pub last_name: String,
}

/// Payload for `PUT /users/{id}` when changing the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordUpdate {
    pub password: String,
}

impl std::fmt::Debug for PasswordUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordUpdate")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email_address: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl User {
    /// Full name for display, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => self.email_address.clone(),
        }
    }
}

/// A user together with their public boards (`GET /users/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithBoards {
    pub user: User,
    #[serde(default)]
    pub boards: Vec<Board>,
}
