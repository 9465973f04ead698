//! # Talker Record Operations
//!
//! The service layer between the HTTP handlers and the collection store.

pub mod errors;
pub mod talkers;

pub use errors::{ServiceError, ServiceResult};
pub use talkers::TalkerService;
