//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the collection document store.
///
/// Store failures are not handled locally; they surface to the HTTP layer
/// as a generic server fault (500).
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Document could not be read or written
    #[error("Store I/O error: {0}")]
    Io(String),

    /// Document exists but is not a valid talker collection
    #[error("Malformed collection document: {0}")]
    Malformed(String),
}
