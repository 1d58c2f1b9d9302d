//! orgdesk Core — shared domain types for the tenant administration
//! console.
//!
//! Every other crate in the workspace builds on the models, the error
//! taxonomy and the seam traits defined here. Storage, authentication
//! and presentation each live in their own crate and only meet through
//! the traits in [`repository`].

pub mod error;
pub mod latency;
pub mod models;
pub mod repository;

pub use error::{ConsoleError, ConsoleResult};
pub use latency::SimulatedLatency;
