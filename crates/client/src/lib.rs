//! Recommend Client - form actions and typed API client for the Recommend
//! board backend.
//!
//! # Architecture
//!
//! ```text
//! trigger ──▶ FormActions ──▶ ApiClient ──▶ backend
//!                 │
//!                 ├──▶ Document (reads fields)
//!                 └──▶ Browser  (navigate / alert)
//! ```
//!
//! # Modules
//!
//! - [`actions`] - One method per user action (register, login, boards, cards)
//! - [`api`] - `reqwest` client with one method per endpoint
//! - [`config`] - Environment-based configuration
//! - [`dom`] - Document, browser and form seams plus in-memory implementations
//! - [`routes`] - Endpoint paths and navigation targets
//! - [`toggles`] - Edit-mode visibility toggles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod api;
pub mod config;
pub mod dom;
pub mod routes;
pub mod toggles;

pub use actions::{ActionError, FormActions, Outcome};
pub use api::{ApiClient, ApiError};
pub use config::{ClientConfig, ConfigError, LogFormat};
