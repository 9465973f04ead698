//! # Talker Data Model
//!
//! Wire and storage types for the talker registry. The whole collection is
//! persisted as a single JSON array of these records.

use serde::{Deserialize, Serialize};

/// A speaker profile record.
///
/// The `id` is a 1-based collection ordinal assigned at creation time
/// (`collection length + 1`). Ids are never reassigned on edit and never
/// reused after deletion, so id and position diverge once any record is
/// removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talker {
    pub id: u64,
    pub name: String,
    pub age: i64,
    pub talk: Talk,
}

/// The nested talk rating: a watch date string and an integer rating 1-5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    #[serde(rename = "watchedAt")]
    pub watched_at: String,
    pub rate: i64,
}

/// Fields accepted for create and update, after validation has passed.
///
/// Built from the raw request body only once the full validator chain has
/// accepted it, so the conversions here cannot fail.
#[derive(Debug, Clone)]
pub struct TalkerPayload {
    pub name: String,
    pub age: i64,
    pub talk: Talk,
}

impl TalkerPayload {
    /// Extracts the payload from a validated request body.
    pub fn from_validated(body: &serde_json::Value) -> Self {
        let talk = &body["talk"];
        Self {
            name: body["name"].as_str().unwrap_or_default().to_string(),
            age: body["age"].as_i64().unwrap_or_default(),
            talk: Talk {
                watched_at: talk["watchedAt"].as_str().unwrap_or_default().to_string(),
                rate: talk["rate"].as_i64().unwrap_or_default(),
            },
        }
    }

    /// Materializes a record with the given id.
    pub fn into_talker(self, id: u64) -> Talker {
        Talker {
            id,
            name: self.name,
            age: self.age,
            talk: self.talk,
        }
    }
}
