//! Document abstraction.

use thiserror::Error;

/// Errors raised when the page does not have what an action reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// No element with this id exists in the document.
    #[error("element not found: #{0}")]
    MissingElement(String),

    /// The submitted form has no field with this name.
    #[error("form field not found: {0}")]
    MissingField(String),
}

/// CSS `display` values the edit toggles switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    None,
    #[default]
    Inline,
    Block,
}

impl Display {
    /// Whether an element with this display value is rendered.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None)
    }

    /// CSS keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Inline => "inline",
            Self::Block => "block",
        }
    }
}

impl std::fmt::Display for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Elements of the current page, addressed by id.
///
/// Every accessor fails with [`DocumentError::MissingElement`] when the id is
/// not in the document.
pub trait Document {
    /// Current `value` of an input.
    ///
    /// # Errors
    ///
    /// Returns error if the element does not exist.
    fn value(&self, id: &str) -> Result<String, DocumentError>;

    /// Set the `value` of an input.
    ///
    /// # Errors
    ///
    /// Returns error if the element does not exist.
    fn set_value(&mut self, id: &str, value: &str) -> Result<(), DocumentError>;

    /// Rendered contents of a read-only element (a `<span>`).
    ///
    /// # Errors
    ///
    /// Returns error if the element does not exist.
    fn inner_html(&self, id: &str) -> Result<String, DocumentError>;

    /// `checked` state of a checkbox.
    ///
    /// # Errors
    ///
    /// Returns error if the element does not exist.
    fn checked(&self, id: &str) -> Result<bool, DocumentError>;

    /// Set the `checked` state of a checkbox.
    ///
    /// # Errors
    ///
    /// Returns error if the element does not exist.
    fn set_checked(&mut self, id: &str, checked: bool) -> Result<(), DocumentError>;

    /// Set the CSS `display` of an element.
    ///
    /// # Errors
    ///
    /// Returns error if the element does not exist.
    fn set_display(&mut self, id: &str, display: Display) -> Result<(), DocumentError>;
}
