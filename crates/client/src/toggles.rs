//! Edit-mode toggles for the profile, board and card pages.
//!
//! Each toggle hides the clicked edit button, shows the save and cancel
//! buttons, and swaps every read-only span for its input, pre-filled with
//! what the span showed. They only touch the document.

use crate::dom::ids::{
    BOARD_NAME_INPUT, BOARD_NAME_SPAN, BOARD_PRIVATE_INPUT, BOARD_PRIVATE_SPAN,
    CANCEL_BOARD_DATA_BUTTON, CANCEL_CARD_DATA_BUTTON, CANCEL_PASSWORD_BUTTON,
    CANCEL_USER_DATA_BUTTON, CARD_DESCRIPTION_INPUT, CARD_DESCRIPTION_SPAN, CARD_THUMBNAIL_INPUT,
    CARD_THUMBNAIL_SPAN, CARD_TITLE_INPUT, CARD_TITLE_SPAN, FIRST_NAME_INPUT, FIRST_NAME_SPAN,
    LAST_NAME_INPUT, LAST_NAME_SPAN, NEW_PASSWORD_ROW, REPEAT_PASSWORD_ROW, SAVE_BOARD_DATA_BUTTON,
    SAVE_CARD_DATA_BUTTON, SAVE_PASSWORD_BUTTON, SAVE_USER_DATA_BUTTON,
};
use crate::dom::{Display, Document, DocumentError};

/// How the board page renders a private board's flag.
const PRIVATE_TRUE: &str = "True";

/// Profile page: edit first and last name.
///
/// # Errors
///
/// Returns error if one of the profile elements is missing.
pub fn edit_user_data<D: Document + ?Sized>(
    document: &mut D,
    edit_button: &str,
) -> Result<(), DocumentError> {
    swap_buttons(document, edit_button, SAVE_USER_DATA_BUTTON, CANCEL_USER_DATA_BUTTON)?;
    reveal_text_input(document, FIRST_NAME_INPUT, FIRST_NAME_SPAN)?;
    reveal_text_input(document, LAST_NAME_INPUT, LAST_NAME_SPAN)
}

/// Profile page: show the new-password rows.
///
/// # Errors
///
/// Returns error if one of the password elements is missing.
pub fn edit_password<D: Document + ?Sized>(
    document: &mut D,
    edit_button: &str,
) -> Result<(), DocumentError> {
    document.set_display(NEW_PASSWORD_ROW, Display::Inline)?;
    document.set_display(REPEAT_PASSWORD_ROW, Display::Inline)?;
    swap_buttons(document, edit_button, SAVE_PASSWORD_BUTTON, CANCEL_PASSWORD_BUTTON)
}

/// Board page: edit name and privacy.
///
/// # Errors
///
/// Returns error if one of the board elements is missing.
pub fn edit_board_data<D: Document + ?Sized>(
    document: &mut D,
    edit_button: &str,
) -> Result<(), DocumentError> {
    swap_buttons(document, edit_button, SAVE_BOARD_DATA_BUTTON, CANCEL_BOARD_DATA_BUTTON)?;
    reveal_text_input(document, BOARD_NAME_INPUT, BOARD_NAME_SPAN)?;

    let private = document.inner_html(BOARD_PRIVATE_SPAN)? == PRIVATE_TRUE;
    document.set_display(BOARD_PRIVATE_INPUT, Display::Block)?;
    document.set_display(BOARD_PRIVATE_SPAN, Display::None)?;
    document.set_checked(BOARD_PRIVATE_INPUT, private)
}

/// Card page: edit title, description and thumbnail.
///
/// # Errors
///
/// Returns error if one of the card elements is missing.
pub fn edit_card_data<D: Document + ?Sized>(
    document: &mut D,
    edit_button: &str,
) -> Result<(), DocumentError> {
    swap_buttons(document, edit_button, SAVE_CARD_DATA_BUTTON, CANCEL_CARD_DATA_BUTTON)?;
    reveal_text_input(document, CARD_TITLE_INPUT, CARD_TITLE_SPAN)?;
    reveal_text_input(document, CARD_DESCRIPTION_INPUT, CARD_DESCRIPTION_SPAN)?;
    reveal_text_input(document, CARD_THUMBNAIL_INPUT, CARD_THUMBNAIL_SPAN)
}

fn swap_buttons<D: Document + ?Sized>(
    document: &mut D,
    edit_button: &str,
    save_button: &str,
    cancel_button: &str,
) -> Result<(), DocumentError> {
    document.set_display(edit_button, Display::None)?;
    document.set_display(save_button, Display::Inline)?;
    document.set_display(cancel_button, Display::Inline)
}

fn reveal_text_input<D: Document + ?Sized>(
    document: &mut D,
    input: &str,
    span: &str,
) -> Result<(), DocumentError> {
    let current = document.inner_html(span)?;
    document.set_display(input, Display::Block)?;
    document.set_display(span, Display::None)?;
    document.set_value(input, &current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, MemoryDocument};

    const EDIT: &str = "editButton";

    fn board_page(private: &str) -> MemoryDocument {
        MemoryDocument::new()
            .with(EDIT, Element::button())
            .with(SAVE_BOARD_DATA_BUTTON, Element::button().hidden())
            .with(CANCEL_BOARD_DATA_BUTTON, Element::button().hidden())
            .with(BOARD_NAME_SPAN, Element::span("Movies to watch"))
            .with(BOARD_NAME_INPUT, Element::input("").hidden())
            .with(BOARD_PRIVATE_SPAN, Element::span(private))
            .with(BOARD_PRIVATE_INPUT, Element::checkbox(false).hidden())
    }

    #[test]
    fn test_edit_board_data_prefills_and_swaps() {
        let mut document = board_page("True");
        edit_board_data(&mut document, EDIT).expect("board page complete");

        assert_eq!(document.display(EDIT), Some(Display::None));
        assert_eq!(document.display(SAVE_BOARD_DATA_BUTTON), Some(Display::Inline));
        assert_eq!(document.display(CANCEL_BOARD_DATA_BUTTON), Some(Display::Inline));
        assert_eq!(document.display(BOARD_NAME_SPAN), Some(Display::None));
        assert_eq!(document.display(BOARD_NAME_INPUT), Some(Display::Block));
        assert_eq!(document.value(BOARD_NAME_INPUT).as_deref(), Ok("Movies to watch"));
        assert_eq!(document.checked(BOARD_PRIVATE_INPUT), Ok(true));
    }

    #[test]
    fn test_edit_board_data_public_board() {
        let mut document = board_page("False");
        edit_board_data(&mut document, EDIT).expect("board page complete");
        assert_eq!(document.checked(BOARD_PRIVATE_INPUT), Ok(false));
    }

    #[test]
    fn test_edit_user_data_prefills_and_swaps() {
        let mut document = MemoryDocument::new()
            .with(EDIT, Element::button())
            .with(SAVE_USER_DATA_BUTTON, Element::button().hidden())
            .with(CANCEL_USER_DATA_BUTTON, Element::button().hidden())
            .with(FIRST_NAME_SPAN, Element::span("Ada"))
            .with(FIRST_NAME_INPUT, Element::input("").hidden())
            .with(LAST_NAME_SPAN, Element::span("Lovelace"))
            .with(LAST_NAME_INPUT, Element::input("").hidden());

        edit_user_data(&mut document, EDIT).expect("profile page complete");

        assert_eq!(document.display(EDIT), Some(Display::None));
        assert_eq!(document.display(SAVE_USER_DATA_BUTTON), Some(Display::Inline));
        assert_eq!(document.display(CANCEL_USER_DATA_BUTTON), Some(Display::Inline));
        assert_eq!(document.display(FIRST_NAME_SPAN), Some(Display::None));
        assert_eq!(document.display(LAST_NAME_SPAN), Some(Display::None));
        assert_eq!(document.display(FIRST_NAME_INPUT), Some(Display::Block));
        assert_eq!(document.display(LAST_NAME_INPUT), Some(Display::Block));
        assert_eq!(document.value(FIRST_NAME_INPUT).as_deref(), Ok("Ada"));
        assert_eq!(document.value(LAST_NAME_INPUT).as_deref(), Ok("Lovelace"));
    }

    #[test]
    fn test_edit_password_shows_rows_and_swaps() {
        let mut document = MemoryDocument::new()
            .with(EDIT, Element::button())
            .with(SAVE_PASSWORD_BUTTON, Element::button().hidden())
            .with(CANCEL_PASSWORD_BUTTON, Element::button().hidden())
            .with(NEW_PASSWORD_ROW, Element::button().hidden())
            .with(REPEAT_PASSWORD_ROW, Element::button().hidden());

        edit_password(&mut document, EDIT).expect("password rows present");

        assert_eq!(document.display(NEW_PASSWORD_ROW), Some(Display::Inline));
        assert_eq!(document.display(REPEAT_PASSWORD_ROW), Some(Display::Inline));
        assert_eq!(document.display(EDIT), Some(Display::None));
        assert_eq!(document.display(SAVE_PASSWORD_BUTTON), Some(Display::Inline));
        assert_eq!(document.display(CANCEL_PASSWORD_BUTTON), Some(Display::Inline));
    }

    #[test]
    fn test_missing_save_button() {
        let mut document = MemoryDocument::new().with(EDIT, Element::button());
        assert_eq!(
            edit_user_data(&mut document, EDIT),
            Err(DocumentError::MissingElement(SAVE_USER_DATA_BUTTON.to_string()))
        );
    }
}
