//! Error Types
//!
//! Storage failures never reach the user; the repository logs them and
//! degrades. `NoteError` covers validation on the add path.

use thiserror::Error;

/// Result type for key-value store access
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures raised by a `KeyValueStore` or while decoding its contents
#[derive(Debug, Error)]
pub enum StorageError {
    /// The platform offers no store (private mode, sandboxed frame, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    /// The stored value is not a note list
    #[error("malformed note list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Validation errors for note operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("note content is empty")]
    EmptyContent,
}
