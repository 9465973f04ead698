//! # Observability
//!
//! Structured logging for the service. Read-only, synchronous, no
//! background threads.

mod logger;

pub use logger::{Logger, Severity};
