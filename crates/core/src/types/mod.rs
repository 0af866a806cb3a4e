//! Core types for the Recommend board API.
//!
//! Payload types serialize to exactly the JSON objects the backend expects;
//! response types are lenient about optional fields.

pub mod board;
pub mod card;
pub mod id;
pub mod session;
pub mod user;

pub use board::{Board, BoardPayload};
pub use card::{Card, CardUpdate, NewCard};
pub use id::*;
pub use session::Token;
pub use user::{NewUser, PasswordUpdate, User, UserNameUpdate, UserWithBoards};
