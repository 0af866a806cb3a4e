//! Card payloads and response models.

use serde::{Deserialize, Serialize};

use super::id::{BoardId, CardId};

/// Payload for `POST /boards/{board_id}/cards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCard {
    pub url: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

/// Payload for `PUT /cards/{id}`. The URL of a card is fixed once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardUpdate {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

/// A card as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub board_id: BoardId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_has_no_url() {
        let update = CardUpdate {
            title: "Godzilla".to_string(),
            description: "A movie".to_string(),
            thumbnail: "/img.jpg".to_string(),
        };
        let value = serde_json::to_value(&update).expect("serialize");
        assert!(value.get("url").is_none());
        assert_eq!(value["title"], "Godzilla");
    }

    #[test]
    fn test_card_deserializes_null_fields() {
        let card: Card = serde_json::from_str(
            r#"{
                "id": "c1",
                "url": "https://www.netflix.com/gb/title/81767635",
                "title": null,
                "board_id": "b1"
            }"#,
        )
        .expect("deserialize");
        assert_eq!(card.title, None);
        assert_eq!(card.thumbnail, None);
        assert_eq!(card.board_id.as_str(), "b1");
    }
}
