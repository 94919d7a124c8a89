//! Error types for the persistence adapter

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while saving or resetting
///
/// Loads do not produce errors: a missing or corrupt key is discarded and
/// the caller keeps its current in-memory value (fail-open).
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error while touching the store directory
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while writing a key
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
