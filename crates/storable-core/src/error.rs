//! Error types for Storable core operations.
//!
//! Every failure is reported synchronously to the immediate caller. Nothing
//! is retried or recovered here; the CLI layer maps these to user-facing
//! messages.

use std::convert::Infallible;

use thiserror::Error;

/// Result type alias for Storable operations.
pub type Result<T> = std::result::Result<T, StorableError>;

/// Core error type for Storable operations.
#[derive(Debug, Error)]
pub enum StorableError {
    /// Unrecognized tier, empty key, or similar bad input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No record at the requested key and tier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Value could not be encoded as a JSON object
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored text is malformed or does not fit the requested type
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Backend failure (file I/O and similar)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl StorableError {
    /// True when the error means "nothing saved yet".
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorableError::NotFound(_))
    }
}

impl From<std::io::Error> for StorableError {
    fn from(err: std::io::Error) -> Self {
        StorableError::Storage(err.to_string())
    }
}

// Lets an already-typed `StorageTier` flow through the same conversion path
// as raw tier codes and names.
impl From<Infallible> for StorableError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
