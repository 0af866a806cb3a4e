//! In-memory [`Document`].

use std::collections::BTreeMap;

use super::document::{Display, Document, DocumentError};

/// A single element of a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub value: String,
    pub inner_html: String,
    pub checked: bool,
    pub display: Display,
}

impl Element {
    /// Read-only text element.
    #[must_use]
    pub fn span(text: impl Into<String>) -> Self {
        Self {
            inner_html: text.into(),
            ..Self::default()
        }
    }

    /// Text input with an initial value.
    #[must_use]
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Checkbox input.
    #[must_use]
    pub fn checkbox(checked: bool) -> Self {
        Self {
            checked,
            ..Self::default()
        }
    }

    /// Button (or row) with nothing but a visibility.
    #[must_use]
    pub fn button() -> Self {
        Self::default()
    }

    /// Same element, initially rendered with `display`.
    #[must_use]
    pub const fn displayed(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    /// Same element, initially hidden.
    #[must_use]
    pub const fn hidden(self) -> Self {
        self.displayed(Display::None)
    }
}

/// Document backed by a map of elements keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    elements: BTreeMap<String, Element>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an element.
    pub fn insert(&mut self, id: impl Into<String>, element: Element) {
        self.elements.insert(id.into(), element);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, element: Element) -> Self {
        self.insert(id, element);
        self
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Current `display` of an element, if it exists.
    #[must_use]
    pub fn display(&self, id: &str) -> Option<Display> {
        self.element(id).map(|element| element.display)
    }

    fn get(&self, id: &str) -> Result<&Element, DocumentError> {
        self.elements
            .get(id)
            .ok_or_else(|| DocumentError::MissingElement(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Element, DocumentError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| DocumentError::MissingElement(id.to_string()))
    }
}

impl Document for MemoryDocument {
    fn value(&self, id: &str) -> Result<String, DocumentError> {
        self.get(id).map(|element| element.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) -> Result<(), DocumentError> {
        self.get_mut(id)?.value = value.to_string();
        Ok(())
    }

    fn inner_html(&self, id: &str) -> Result<String, DocumentError> {
        self.get(id).map(|element| element.inner_html.clone())
    }

    fn checked(&self, id: &str) -> Result<bool, DocumentError> {
        self.get(id).map(|element| element.checked)
    }

    fn set_checked(&mut self, id: &str, checked: bool) -> Result<(), DocumentError> {
        self.get_mut(id)?.checked = checked;
        Ok(())
    }

    fn set_display(&mut self, id: &str, display: Display) -> Result<(), DocumentError> {
        self.get_mut(id)?.display = display;
        Ok(())
    }
}
