//! Newtype IDs for type-safe entity references.
//!
//! The backend hands out opaque document ids (e.g. `67407a5d14376db5b4218532`).
//! Use the `define_id!` macro to wrap them so a board id cannot be passed
//! where a card id is expected.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `new()`, `as_str()` and `Display` (the raw id, used as a path segment)
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use recommend_core::define_id;
/// define_id!(ShelfId);
/// define_id!(PinId);
///
/// let shelf = ShelfId::new("abc123");
/// assert_eq!(shelf.as_str(), "abc123");
///
/// // These are different types, so this won't compile:
/// // let _: ShelfId = PinId::new("abc123");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from its string form.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(UserId);
define_id!(BoardId);
define_id!(CardId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_id() {
        let id = BoardId::new("6744a0ddee62a60d03f06d99");
        assert_eq!(id.to_string(), "6744a0ddee62a60d03f06d99");
    }

    #[test]
    fn test_serde_transparent() {
        let id = CardId::from("abc");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"abc\"");

        let parsed: CardId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, id);
    }
}
