//! Recommend Core - Shared types library.
//!
//! This crate provides the types exchanged with the Recommend board backend:
//! - request payloads sent by the form actions (register, update, create)
//! - response models returned by the read endpoints
//! - newtype IDs for users, boards and cards
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The
//! `recommend-client` crate builds on it.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the user, board, card and session models

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
