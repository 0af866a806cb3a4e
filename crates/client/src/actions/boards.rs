//! Board actions.

use recommend_core::{BoardId, BoardPayload};
use tracing::instrument;

use crate::dom::ids::{BOARD_NAME_INPUT, BOARD_PRIVATE_INPUT, FIELD_BOARD_NAME, FIELD_BOARD_PRIVATE};
use crate::dom::{Browser, Document, FormData, Location};
use crate::routes::PAGE_ME;

use super::{ActionError, FormActions, Outcome};

impl<B: Browser> FormActions<B> {
    /// Submit of the create-board form.
    ///
    /// The board is private when the `private` checkbox was submitted.
    ///
    /// # Errors
    ///
    /// Returns error if the form has no `name` field.
    #[instrument(skip_all)]
    pub async fn create_board(&mut self, form: &FormData) -> Result<Outcome, ActionError> {
        let board = BoardPayload {
            name: form.require(FIELD_BOARD_NAME)?,
            private: form.is_set(FIELD_BOARD_PRIVATE),
        };

        let result = self.api.create_board(&board).await;
        Ok(self.finish("create_board", result, Location::path(PAGE_ME)))
    }

    /// Click on "save" after [`edit_board_data`](crate::toggles::edit_board_data).
    ///
    /// # Errors
    ///
    /// Returns error if the board inputs are missing from the document.
    #[instrument(skip(self, document), fields(board_id = %board_id))]
    pub async fn update_board_data<D: Document + ?Sized>(
        &mut self,
        document: &D,
        board_id: &BoardId,
    ) -> Result<Outcome, ActionError> {
        let board = BoardPayload {
            name: document.value(BOARD_NAME_INPUT)?,
            private: document.checked(BOARD_PRIVATE_INPUT)?,
        };

        let result = self.api.update_board(board_id, &board).await;
        Ok(self.finish("update_board_data", result, Location::Reload))
    }

    /// Click on the delete-board button.
    #[instrument(skip(self), fields(board_id = %board_id))]
    pub async fn delete_board(&mut self, board_id: &BoardId) -> Outcome {
        let result = self.api.delete_board(board_id).await;
        self.finish("delete_board", result, Location::path(PAGE_ME))
    }
}
