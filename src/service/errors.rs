//! # Service Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for record operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Record operation failures.
///
/// Direct lookups 404; update/delete misses 400 with a different message.
/// The asymmetry is part of the service's public contract and is kept as-is.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// Direct lookup by id found nothing
    #[error("Talker not found")]
    NotFound,

    /// Update or delete target does not exist
    #[error("Talker does not exist")]
    DoesNotExist,

    /// Collection document could not be read or written
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound => 404,
            ServiceError::DoesNotExist => 400,
            ServiceError::Store(_) => 500,
        }
    }
}
