//! Element ids and form field names the actions rely on.

// Register form.
pub const FIELD_EMAIL_ADDRESS: &str = "emailAddress";
pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_USER_NAME: &str = "userName";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_REPEAT_PASSWORD: &str = "repeatPassword";

// Board form.
pub const FIELD_BOARD_NAME: &str = "name";
pub const FIELD_BOARD_PRIVATE: &str = "private";

// Card form.
pub const FIELD_BOARD_ID: &str = "board_id";
pub const FIELD_CARD_URL: &str = "url";
pub const FIELD_CARD_TITLE: &str = "title";
pub const FIELD_CARD_DESCRIPTION: &str = "description";
pub const FIELD_CARD_THUMBNAIL: &str = "thumbnail";

// User profile.
pub const SAVE_USER_DATA_BUTTON: &str = "saveUserDataButton";
pub const CANCEL_USER_DATA_BUTTON: &str = "cancelUserDataButton";
pub const FIRST_NAME_INPUT: &str = "firstNameInputField";
pub const FIRST_NAME_SPAN: &str = "firstNameSpanField";
pub const LAST_NAME_INPUT: &str = "lastNameInputField";
pub const LAST_NAME_SPAN: &str = "lastNameSpanField";

// Password change.
pub const NEW_PASSWORD_ROW: &str = "newPasswordRow";
pub const REPEAT_PASSWORD_ROW: &str = "repeatPasswordRow";
pub const SAVE_PASSWORD_BUTTON: &str = "savePasswordButton";
pub const CANCEL_PASSWORD_BUTTON: &str = "cancelPasswordButton";
pub const NEW_PASSWORD_INPUT: &str = "newPasswordInputField";
pub const REPEAT_PASSWORD_INPUT: &str = "repeatPasswordInputField";

// Board page.
pub const SAVE_BOARD_DATA_BUTTON: &str = "saveBoardDataButton";
pub const CANCEL_BOARD_DATA_BUTTON: &str = "cancelBoardDataButton";
pub const BOARD_NAME_INPUT: &str = "boardNameInputField";
pub const BOARD_NAME_SPAN: &str = "boardNameSpanField";
pub const BOARD_PRIVATE_INPUT: &str = "boardPrivateInputField";
pub const BOARD_PRIVATE_SPAN: &str = "boardPrivateSpanField";

// Card page.
pub const SAVE_CARD_DATA_BUTTON: &str = "saveCardDataButton";
pub const CANCEL_CARD_DATA_BUTTON: &str = "cancelCardDataButton";
pub const CARD_TITLE_INPUT: &str = "cardTitleInputField";
pub const CARD_TITLE_SPAN: &str = "cardTitleSpanField";
pub const CARD_DESCRIPTION_INPUT: &str = "cardDescriptionInputField";
pub const CARD_DESCRIPTION_SPAN: &str = "cardDescriptionSpanField";
pub const CARD_THUMBNAIL_INPUT: &str = "cardThumbnailInputField";
pub const CARD_THUMBNAIL_SPAN: &str = "cardThumbnailSpanField";
