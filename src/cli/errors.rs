//! CLI-specific error types
//!
//! CLI errors are fatal; main prints them and exits non-zero.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Fatal CLI failures
#[derive(Debug, Error)]
pub enum CliError {
    /// Collection document could not be initialized or opened
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Server failed to bind or run
    #[error("server error: {0}")]
    Server(String),
}
