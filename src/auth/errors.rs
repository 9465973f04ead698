//! # Auth Errors

use thiserror::Error;

/// Result type for token checks
pub type AuthResult<T> = Result<T, AuthError>;

/// Token shape-check failures on protected routes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No authorization header on the request
    #[error("Token not found")]
    TokenMissing,

    /// Authorization header present but not exactly 16 characters
    #[error("Invalid token")]
    TokenInvalid,
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::TokenMissing => 401,
            AuthError::TokenInvalid => 401,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_errors_are_401() {
        assert_eq!(AuthError::TokenMissing.status_code(), 401);
        assert_eq!(AuthError::TokenInvalid.status_code(), 401);
    }
}
