//! Error types for the orgdesk console.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("{entity} name already exists: {name}")]
    AlreadyExists { entity: String, name: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}

impl ConsoleError {
    /// Short category name, used as a structured field in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            ConsoleError::AuthenticationFailed { .. } => "authentication",
            ConsoleError::AlreadyExists { .. } => "conflict",
            ConsoleError::NotFound { .. } => "not_found",
            ConsoleError::Validation { .. } => "validation",
            ConsoleError::Storage(_) => "storage",
            ConsoleError::Operation(_) => "operation",
        }
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
