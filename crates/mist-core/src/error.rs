//! Error types for mist-core

use thiserror::Error;

/// Result type alias using mist-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mist-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Key-value storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Note is locked against edits and deletion
    #[error("Note is locked: {0}")]
    Locked(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
