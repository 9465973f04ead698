//! # Record Operations
//!
//! List, lookup, search, create, update and delete over the talker
//! collection. Every operation loads the collection fresh from the store;
//! mutating operations hold a guard for the whole load-mutate-save sequence
//! so overlapping writers cannot clobber each other, and the save completes
//! before the caller gets a response.

use std::sync::{Arc, Mutex};

use crate::model::{Talker, TalkerPayload};
use crate::store::TalkerStore;

use super::errors::{ServiceError, ServiceResult};

/// Talker record operations over an injected store.
#[derive(Debug)]
pub struct TalkerService {
    store: Arc<dyn TalkerStore>,
    // Serializes the read-modify-write cycle of mutating operations.
    write_guard: Mutex<()>,
}

impl TalkerService {
    /// Create a service over the given store
    pub fn new(store: Arc<dyn TalkerStore>) -> Self {
        Self {
            store,
            write_guard: Mutex::new(()),
        }
    }

    /// Full collection, in insertion order.
    pub fn list(&self) -> ServiceResult<Vec<Talker>> {
        Ok(self.store.load_all()?)
    }

    /// Lookup by the raw path id. A non-numeric id never matches.
    pub fn get(&self, raw_id: &str) -> ServiceResult<Talker> {
        let id = parse_id(raw_id);
        let talkers = self.store.load_all()?;
        talkers
            .into_iter()
            .find(|t| Some(t.id) == id)
            .ok_or(ServiceError::NotFound)
    }

    /// Case-sensitive substring search over names.
    ///
    /// An absent or empty query returns the full collection; a query that
    /// matches nothing returns an empty sequence. Search never fails on
    /// content, only on storage.
    pub fn search(&self, query: Option<&str>) -> ServiceResult<Vec<Talker>> {
        let talkers = self.store.load_all()?;
        match query {
            None | Some("") => Ok(talkers),
            Some(q) => Ok(talkers
                .into_iter()
                .filter(|t| t.name.contains(q))
                .collect()),
        }
    }

    /// Appends a new record with id = collection length + 1.
    ///
    /// Ids are ordinals over the live collection length, so deleting a
    /// record and creating another can re-issue a previously used id only
    /// if the collection shrank; ids of surviving records are never touched.
    pub fn create(&self, payload: TalkerPayload) -> ServiceResult<Talker> {
        let _guard = self.write_guard.lock().unwrap();
        let mut talkers = self.store.load_all()?;
        let talker = payload.into_talker(talkers.len() as u64 + 1);
        talkers.push(talker.clone());
        self.store.save_all(&talkers)?;
        Ok(talker)
    }

    /// Replaces the record whose id matches the raw path id, keeping that id.
    pub fn update(&self, raw_id: &str, payload: TalkerPayload) -> ServiceResult<Talker> {
        let id = parse_id(raw_id);
        let _guard = self.write_guard.lock().unwrap();
        let mut talkers = self.store.load_all()?;
        let index = talkers
            .iter()
            .position(|t| Some(t.id) == id)
            .ok_or(ServiceError::DoesNotExist)?;
        let talker = payload.into_talker(id.unwrap_or_default());
        talkers[index] = talker.clone();
        self.store.save_all(&talkers)?;
        Ok(talker)
    }

    /// Removes the record whose id matches the raw path id.
    pub fn delete(&self, raw_id: &str) -> ServiceResult<()> {
        let id = parse_id(raw_id);
        let _guard = self.write_guard.lock().unwrap();
        let mut talkers = self.store.load_all()?;
        let index = talkers
            .iter()
            .position(|t| Some(t.id) == id)
            .ok_or(ServiceError::DoesNotExist)?;
        talkers.remove(index);
        self.store.save_all(&talkers)?;
        Ok(())
    }
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}
