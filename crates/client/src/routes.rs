//! Backend paths used by the client.
//!
//! [`ApiRoute`] covers the resource endpoints; the `PAGE_*` constants are the
//! fixed locations the browser is sent to after a successful action.

use recommend_core::{BoardId, CardId, UserId};

/// Login page, shown after registering or logging out.
pub const PAGE_LOGIN: &str = "/session/new";

/// Landing page of the signed-in user.
pub const PAGE_ME: &str = "/me/";

/// Page of a single board.
#[must_use]
pub fn board_page(board_id: &BoardId) -> String {
    format!("/boards/{}", encode(board_id.as_str()))
}

/// A resource endpoint on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute<'a> {
    /// `/users`
    Users,
    /// `/users/{id}`
    User(&'a UserId),
    /// `/session/`
    Session,
    /// `/me/`
    Me,
    /// `/boards/`
    Boards,
    /// `/boards/{id}`
    Board(&'a BoardId),
    /// `/boards/{id}/cards`
    BoardCards(&'a BoardId),
    /// `/cards/{id}`
    Card(&'a CardId),
}

impl ApiRoute<'_> {
    /// Absolute path of the endpoint, ids percent-encoded.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Users => "/users".to_string(),
            Self::User(id) => format!("/users/{}", encode(id.as_str())),
            Self::Session => "/session/".to_string(),
            Self::Me => PAGE_ME.to_string(),
            Self::Boards => "/boards/".to_string(),
            Self::Board(id) => board_page(id),
            Self::BoardCards(id) => format!("/boards/{}/cards", encode(id.as_str())),
            Self::Card(id) => format!("/cards/{}", encode(id.as_str())),
        }
    }
}

impl std::fmt::Display for ApiRoute<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

fn encode(segment: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(segment)
}
