//! # Collection Store
//!
//! Whole-document persistence for the talker collection: a trait with
//! `load_all`/`save_all`, a JSON file implementation, and an in-memory
//! test double.

pub mod backend;
pub mod errors;
pub mod file;
pub mod memory;

pub use backend::TalkerStore;
pub use errors::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
