//! # Validation Errors
//!
//! One variant per validator failure, each carrying its fixed user-facing
//! message. Responses always use status 400 with a `{ "message": ... }` body.

use thiserror::Error;

/// Result type for validator chains
pub type ValidationResult = Result<(), ValidationError>;

/// Field validation failures, one per validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // ==================
    // Login chain
    // ==================
    /// email field absent or empty
    #[error("The \"email\" field is required")]
    EmailRequired,

    /// email lacks '@' or '.com'
    #[error("The \"email\" must have the format \"email@email.com\"")]
    EmailFormat,

    /// password field absent or empty
    #[error("The \"password\" field is required")]
    PasswordRequired,

    /// password shorter than 6 characters
    #[error("The \"password\" must be at least 6 characters long")]
    PasswordTooShort,

    // ==================
    // Talker chain
    // ==================
    /// name field absent or empty
    #[error("The \"name\" field is required")]
    NameRequired,

    /// name shorter than 3 characters
    #[error("The \"name\" must be at least 3 characters long")]
    NameTooShort,

    /// age absent, zero, or not an integer
    #[error("The \"age\" field is required")]
    AgeRequired,

    /// age below 18
    #[error("The talker must be at least 18 years old")]
    Underage,

    /// talk object absent/empty, or watchedAt/rate missing inside it
    #[error("The \"talk\" field is required and \"watchedAt\" and \"rate\" cannot be empty")]
    TalkRequired,

    /// watchedAt does not match the dd/mm/yyyy shape
    #[error("The \"watchedAt\" field must have the format \"dd/mm/yyyy\"")]
    WatchedAtFormat,

    /// rate outside [1,5] or not an integer
    #[error("The \"rate\" field must be an integer from 1 to 5")]
    RateRange,
}

impl ValidationError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        400
    }
}
