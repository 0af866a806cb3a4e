//! Board commands.

use clap::Subcommand;
use recommend_client::dom::ids::{
    BOARD_NAME_INPUT, BOARD_PRIVATE_INPUT, FIELD_BOARD_NAME, FIELD_BOARD_PRIVATE,
};
use recommend_client::dom::{Browser, Element, FormData, MemoryDocument};
use recommend_client::{FormActions, Outcome};
use recommend_core::BoardId;

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a board
    Create {
        /// Board name
        #[arg(short, long)]
        name: String,

        /// Only the owner can see the board
        #[arg(long)]
        private: bool,
    },
    /// Rename a board or change its privacy
    Update {
        /// Board ID
        id: String,

        /// New name
        #[arg(short, long)]
        name: String,

        /// Only the owner can see the board
        #[arg(long)]
        private: bool,
    },
    /// Delete a board
    Delete {
        /// Board ID
        id: String,
    },
    /// Show a board
    Show {
        /// Board ID
        id: String,
    },
    /// List the signed-in user's boards
    List,
}

pub async fn board<B: Browser>(
    actions: &mut FormActions<B>,
    action: BoardAction,
) -> Result<Option<Outcome>, CommandError> {
    match action {
        BoardAction::Create { name, private } => {
            let mut form = FormData::new().with(FIELD_BOARD_NAME, name);
            if private {
                form.append(FIELD_BOARD_PRIVATE, "on");
            }
            Ok(Some(actions.create_board(&form).await?))
        }
        BoardAction::Update { id, name, private } => {
            let page = MemoryDocument::new()
                .with(BOARD_NAME_INPUT, Element::input(name))
                .with(BOARD_PRIVATE_INPUT, Element::checkbox(private));
            let outcome = actions
                .update_board_data(&page, &BoardId::new(id))
                .await?;
            Ok(Some(outcome))
        }
        BoardAction::Delete { id } => Ok(Some(actions.delete_board(&BoardId::new(id)).await)),
        BoardAction::Show { id } => {
            let board = actions.api().get_board(&BoardId::new(id)).await?;
            print_json(&board)?;
            Ok(None)
        }
        BoardAction::List => {
            let boards = actions.api().my_boards().await?;
            print_json(&boards)?;
            Ok(None)
        }
    }
}
