//! # Token Issuance and Shape Check
//!
//! The token is a pure stand-in: 16 uniform draws from the alphanumeric
//! alphabet, never stored, never looked up. The only contract on later use
//! is "exactly 16 characters" in the `authorization` header.

use rand::Rng;

use super::errors::{AuthError, AuthResult};

/// Alphabet the token characters are drawn from
const TOKEN_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Required token length
pub const TOKEN_LEN: usize = 16;

/// Generates a fresh 16-character alphanumeric token.
///
/// Uniform per-character draws from `thread_rng`. Not cryptographically
/// secure; the service performs no real authentication.
pub fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Checks the raw `authorization` header value, if any.
///
/// Absent header is `TokenMissing`; any length other than 16 is
/// `TokenInvalid`. No lookup against issued tokens is ever made.
pub fn check_token(authorization: Option<&str>) -> AuthResult<()> {
    let token = authorization.ok_or(AuthError::TokenMissing)?;
    if token.chars().count() != TOKEN_LEN {
        return Err(AuthError::TokenInvalid);
    }
    Ok(())
}
