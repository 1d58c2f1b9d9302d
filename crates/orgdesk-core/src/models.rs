//! Domain models for orgdesk.
//!
//! These are the core types shared across all crates.

pub mod organization;
pub mod session;
pub mod user;
