//! # Collection Store Trait

use crate::model::Talker;

use super::errors::StoreResult;

/// Whole-document store for the talker collection.
///
/// The collection is one serialized blob: `load_all` reads and parses the
/// entire document, `save_all` rewrites it completely. Any durable backing
/// (file, embedded KV, table) satisfying these two calls suffices.
pub trait TalkerStore: Send + Sync + std::fmt::Debug {
    /// Read and parse the full collection document
    fn load_all(&self) -> StoreResult<Vec<Talker>>;

    /// Serialize and rewrite the full collection document
    fn save_all(&self, talkers: &[Talker]) -> StoreResult<()>;
}
