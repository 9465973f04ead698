//! # In-Memory Store
//!
//! Test double for [`TalkerStore`]. Holds the collection behind a mutex and
//! can be armed to fail, for exercising the storage-fault path.

use std::sync::Mutex;

use crate::model::Talker;

use super::backend::TalkerStore;
use super::errors::{StoreError, StoreResult};

/// In-memory collection store
#[derive(Debug, Default)]
pub struct MemoryStore {
    talkers: Mutex<Vec<Talker>>,
    fail: Mutex<bool>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with records
    pub fn with_talkers(talkers: Vec<Talker>) -> Self {
        Self {
            talkers: Mutex::new(talkers),
            fail: Mutex::new(false),
        }
    }

    /// Make every subsequent load/save fail with an I/O error
    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    fn check_fail(&self) -> StoreResult<()> {
        if *self.fail.lock().unwrap() {
            return Err(StoreError::Io("injected failure".to_string()));
        }
        Ok(())
    }
}

impl TalkerStore for MemoryStore {
    fn load_all(&self) -> StoreResult<Vec<Talker>> {
        self.check_fail()?;
        Ok(self.talkers.lock().unwrap().clone())
    }

    fn save_all(&self, talkers: &[Talker]) -> StoreResult<()> {
        self.check_fail()?;
        *self.talkers.lock().unwrap() = talkers.to_vec();
        Ok(())
    }
}
