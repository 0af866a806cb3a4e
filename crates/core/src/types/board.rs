//! Board payloads and response models.

use serde::{Deserialize, Serialize};

use super::id::{BoardId, UserId};

/// Payload for `POST /boards/` and `PUT /boards/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPayload {
    pub name: String,
    pub private: bool,
}

/// A board as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub private: bool,
    pub owner_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = BoardPayload {
            name: "Movies to watch".to_string(),
            private: true,
        };
        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({"name": "Movies to watch", "private": true})
        );
    }

    #[test]
    fn test_board_private_defaults_to_false() {
        let board: Board = serde_json::from_str(
            r#"{"id": "b1", "name": "Books", "owner_id": "u1"}"#,
        )
        .expect("deserialize");
        assert!(!board.private);
        assert_eq!(board.owner_id.as_str(), "u1");
    }
}
