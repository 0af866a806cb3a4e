//! Page-side seams of the form actions.
//!
//! - [`Document`] - element lookup by id (values, inner text, checkboxes, visibility)
//! - [`Browser`] - the window: navigation and blocking alerts
//! - [`FormData`] - the named fields of a submitted form
//! - [`ids`] - element ids and field names the pages use
//!
//! [`MemoryDocument`] and [`RecordingBrowser`] implement the seams without a
//! real page, for the CLI and for tests.

pub mod ids;

mod browser;
mod document;
mod form;
mod memory;

pub use browser::{Browser, BrowserEvent, Location, RecordingBrowser};
pub use document::{Display, Document, DocumentError};
pub use form::FormData;
pub use memory::{Element, MemoryDocument};
