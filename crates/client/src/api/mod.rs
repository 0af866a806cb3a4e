//! Typed client for the Recommend board backend.
//!
//! This module provides:
//! - [`ApiClient`] with one method per backend endpoint
//! - [`ApiError`] separating application errors (non-2xx) from transport errors
//! - [`error_message`] to dig the human-readable message out of an error body

mod client;
mod error;

pub use client::{ApiClient, SESSION_COOKIE};
pub use error::{ApiError, GENERIC_FAILURE, error_message};
