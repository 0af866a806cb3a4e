//! Card commands.

use clap::Subcommand;
use recommend_client::dom::ids::{
    CARD_DESCRIPTION_INPUT, CARD_THUMBNAIL_INPUT, CARD_TITLE_INPUT, FIELD_BOARD_ID,
    FIELD_CARD_DESCRIPTION, FIELD_CARD_THUMBNAIL, FIELD_CARD_TITLE, FIELD_CARD_URL,
};
use recommend_client::dom::{Browser, Element, FormData, MemoryDocument};
use recommend_client::{FormActions, Outcome};
use recommend_core::CardId;

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum CardAction {
    /// Add a card to a board
    Create {
        /// Board ID
        board_id: String,

        /// Link to recommend
        #[arg(short, long)]
        url: String,

        /// Title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Thumbnail URL
        #[arg(long, default_value = "")]
        thumbnail: String,
    },
    /// Edit a card
    Update {
        /// Card ID
        id: String,

        /// Title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Thumbnail URL
        #[arg(long, default_value = "")]
        thumbnail: String,
    },
    /// Delete a card
    Delete {
        /// Card ID
        id: String,
    },
    /// Show a card
    Show {
        /// Card ID
        id: String,
    },
}

pub async fn card<B: Browser>(
    actions: &mut FormActions<B>,
    action: CardAction,
) -> Result<Option<Outcome>, CommandError> {
    match action {
        CardAction::Create {
            board_id,
            url,
            title,
            description,
            thumbnail,
        } => {
            let form = FormData::new()
                .with(FIELD_BOARD_ID, board_id)
                .with(FIELD_CARD_URL, url)
                .with(FIELD_CARD_TITLE, title)
                .with(FIELD_CARD_DESCRIPTION, description)
                .with(FIELD_CARD_THUMBNAIL, thumbnail);
            Ok(Some(actions.create_card(&form).await?))
        }
        CardAction::Update {
            id,
            title,
            description,
            thumbnail,
        } => {
            let page = MemoryDocument::new()
                .with(CARD_TITLE_INPUT, Element::input(title))
                .with(CARD_DESCRIPTION_INPUT, Element::input(description))
                .with(CARD_THUMBNAIL_INPUT, Element::input(thumbnail));
            let outcome = actions.update_card_data(&page, &CardId::new(id)).await?;
            Ok(Some(outcome))
        }
        CardAction::Delete { id } => Ok(Some(actions.delete_card(&CardId::new(id)).await)),
        CardAction::Show { id } => {
            let card = actions.api().get_card(&CardId::new(id)).await?;
            print_json(&card)?;
            Ok(None)
        }
    }
}
