//! # JSON File Store

use std::fs;
use std::path::PathBuf;

use crate::model::Talker;

use super::backend::TalkerStore;
use super::errors::{StoreError, StoreResult};

/// File-backed store holding the collection as a single JSON array document.
///
/// Every load reads and parses the whole file; every save rewrites it from
/// scratch. A missing or unparseable file is a hard `StoreError` — there is
/// no partial recovery. Use [`JsonFileStore::init`] to seed a fresh document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given document path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Seed the document with an empty collection, creating parent
    /// directories as needed. Overwrites any existing document.
    pub fn init(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        self.save_all(&[])
    }

    /// Path of the backing document
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TalkerStore for JsonFileStore {
    fn load_all(&self) -> StoreResult<Vec<Talker>> {
        let data = fs::read(&self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        serde_json::from_slice(&data).map_err(|e| StoreError::Malformed(e.to_string()))
    }

    fn save_all(&self, talkers: &[Talker]) -> StoreResult<()> {
        let data =
            serde_json::to_vec(talkers).map_err(|e| StoreError::Malformed(e.to_string()))?;
        fs::write(&self.path, data).map_err(|e| StoreError::Io(e.to_string()))
    }
}
