//! Storage-specific error types and conversions.

use orgdesk_core::error::ConsoleError;

/// Storage-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Slot store lock poisoned")]
    Poisoned,

    #[error("Invalid slot name: {0}")]
    InvalidSlot(String),
}

impl From<StoreError> for ConsoleError {
    fn from(err: StoreError) -> Self {
        ConsoleError::Storage(err.to_string())
    }
}
