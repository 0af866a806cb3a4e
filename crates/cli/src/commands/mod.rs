//! Subcommand implementations.
//!
//! Action commands fill a form or an in-memory page from their arguments and
//! hand it to the matching [`FormActions`](recommend_client::FormActions)
//! method. `show`/`list` commands call the API client directly and print
//! JSON.

mod account;
mod boards;
mod cards;

pub use account::{UserAction, login, register_form, user};
pub use boards::{BoardAction, board};
pub use cards::{CardAction, card};

use serde::Serialize;
use thiserror::Error;

use recommend_client::{ActionError, ApiError};

/// Errors that abort a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Building the client or a read request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The arguments did not provide what the action reads.
    #[error(transparent)]
    Action(#[from] ActionError),

    /// Output could not be encoded.
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Print a value as pretty JSON on stdout.
#[allow(clippy::print_stdout)]
fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
