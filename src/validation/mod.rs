//! # Request Validation
//!
//! Independent predicate+message validators over raw JSON request bodies,
//! composed into fixed-order chains per operation. The first failing
//! validator short-circuits the chain; errors are never accumulated.

pub mod errors;
pub mod login;
pub mod talker;

pub use errors::{ValidationError, ValidationResult};
pub use login::validate_login;
pub use talker::validate_talker;
