//! # Auth Stub
//!
//! Token issuance and shape checking. Deliberately not real authentication:
//! any syntactically valid login gets a token, and any 16-character header
//! passes the gate.

pub mod errors;
pub mod token;

pub use errors::{AuthError, AuthResult};
pub use token::{check_token, generate_token, TOKEN_LEN};
