//! Submitted form fields.

use super::document::DocumentError;

/// Named fields of a submitted form, in document order.
///
/// A name may repeat (multi-select, repeated inputs); lookups return the
/// first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Builder-style [`append`](Self::append).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    /// First value submitted under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First value submitted under `name`, or an error naming the field.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MissingField`] if the form has no such field.
    pub fn require(&self, name: &str) -> Result<String, DocumentError> {
        self.get(name)
            .map(str::to_string)
            .ok_or_else(|| DocumentError::MissingField(name.to_string()))
    }

    /// Whether `name` was submitted with a non-empty value.
    ///
    /// An unchecked checkbox is not submitted at all, a checked one sends
    /// `on` (or its `value` attribute).
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    /// All fields, in order.
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of fields, repeats included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field was submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
