//! Card actions.

use recommend_core::{BoardId, CardId, CardUpdate, NewCard};
use tracing::instrument;

use crate::dom::ids::{
    CARD_DESCRIPTION_INPUT, CARD_THUMBNAIL_INPUT, CARD_TITLE_INPUT, FIELD_BOARD_ID,
    FIELD_CARD_DESCRIPTION, FIELD_CARD_THUMBNAIL, FIELD_CARD_TITLE, FIELD_CARD_URL,
};
use crate::dom::{Browser, Document, FormData, Location};
use crate::routes::{PAGE_ME, board_page};

use super::{ActionError, FormActions, Outcome};

impl<B: Browser> FormActions<B> {
    /// Submit of the create-card form.
    ///
    /// The parent board comes from the form's hidden `board_id` field; on
    /// success the browser goes to that board's page.
    ///
    /// # Errors
    ///
    /// Returns error if a card field is missing from the form.
    #[instrument(skip_all)]
    pub async fn create_card(&mut self, form: &FormData) -> Result<Outcome, ActionError> {
        let board_id = BoardId::new(form.require(FIELD_BOARD_ID)?);
        let card = NewCard {
            url: form.require(FIELD_CARD_URL)?,
            title: form.require(FIELD_CARD_TITLE)?,
            description: form.require(FIELD_CARD_DESCRIPTION)?,
            thumbnail: form.require(FIELD_CARD_THUMBNAIL)?,
        };

        let result = self.api.create_card(&board_id, &card).await;
        Ok(self.finish("create_card", result, Location::path(board_page(&board_id))))
    }

    /// Click on "save" after [`edit_card_data`](crate::toggles::edit_card_data).
    ///
    /// # Errors
    ///
    /// Returns error if the card inputs are missing from the document.
    #[instrument(skip(self, document), fields(card_id = %card_id))]
    pub async fn update_card_data<D: Document + ?Sized>(
        &mut self,
        document: &D,
        card_id: &CardId,
    ) -> Result<Outcome, ActionError> {
        let card = CardUpdate {
            title: document.value(CARD_TITLE_INPUT)?,
            description: document.value(CARD_DESCRIPTION_INPUT)?,
            thumbnail: document.value(CARD_THUMBNAIL_INPUT)?,
        };

        let result = self.api.update_card(card_id, &card).await;
        Ok(self.finish("update_card_data", result, Location::Reload))
    }

    /// Click on the delete-card button.
    #[instrument(skip(self), fields(card_id = %card_id))]
    pub async fn delete_card(&mut self, card_id: &CardId) -> Outcome {
        let result = self.api.delete_card(card_id).await;
        self.finish("delete_card", result, Location::path(PAGE_ME))
    }
}
