//! orgdesk Server — HTTP surface over the organization registry.
//!
//! Routes map one-to-one onto the registry and authentication
//! operations. Organization routes require a bearer session token.

pub mod api;
pub mod settings;

pub use api::{AppState, router};
pub use settings::Settings;
