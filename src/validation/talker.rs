//! # Talker Validator Chain
//!
//! Shared by create and update. Fixed order: name-required, name-min-length,
//! age-required, age-min, talk-required, watchedAt-required-and-format,
//! rate-required, rate-range. The first failure wins; later validators never
//! run. Token checks happen upstream, against the request headers.
//!
//! Two boundary quirks are kept on purpose (they are part of the contract):
//! - an age of exactly 0 reports the "required" message, never "adult";
//! - a rate of 0 counts as provided, then fails the range check.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};

/// Minimum accepted name length
const NAME_MIN_LEN: usize = 3;

/// Minimum accepted age
const AGE_MIN: i64 = 18;

/// Accepted watch-date shape. Deliberately permissive: the separators `-`,
/// ` `, `.` and `/` mix freely, and the pattern is unanchored, so
/// `01-02/2020` passes while `2020/01/02` does not.
const WATCHED_AT_PATTERN: &str =
    r"(0[1-9]|[12][0-9]|3[01])[- /.](0[1-9]|1[012])[- /.](19|20)\d\d";

fn watched_at_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WATCHED_AT_PATTERN).expect("watchedAt pattern is valid"))
}

/// Runs the full create/update chain over a raw request body.
pub fn validate_talker(body: &Value) -> ValidationResult {
    name_required(body)?;
    name_min_length(body)?;
    age_required(body)?;
    age_min(body)?;
    talk_required(body)?;
    watched_at_required_and_format(body)?;
    rate_required(body)?;
    rate_range(body)?;
    Ok(())
}

fn name_required(body: &Value) -> ValidationResult {
    match body.get("name").and_then(Value::as_str) {
        None | Some("") => Err(ValidationError::NameRequired),
        Some(_) => Ok(()),
    }
}

fn name_min_length(body: &Value) -> ValidationResult {
    let name = body["name"].as_str().unwrap_or_default();
    if name.chars().count() < NAME_MIN_LEN {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}

/// Missing, non-integer, and exactly-zero ages all report "required".
fn age_required(body: &Value) -> ValidationResult {
    match body.get("age").and_then(Value::as_i64) {
        None | Some(0) => Err(ValidationError::AgeRequired),
        Some(_) => Ok(()),
    }
}

fn age_min(body: &Value) -> ValidationResult {
    let age = body["age"].as_i64().unwrap_or_default();
    if age < AGE_MIN {
        return Err(ValidationError::Underage);
    }
    Ok(())
}

fn talk_required(body: &Value) -> ValidationResult {
    let empty = match body.get("talk") {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(v) => v.as_i64() == Some(0),
    };
    if empty {
        return Err(ValidationError::TalkRequired);
    }
    Ok(())
}

/// A missing or empty `watchedAt` reports the talk-required message; a
/// present one that does not match the date shape reports the format message.
fn watched_at_required_and_format(body: &Value) -> ValidationResult {
    let watched_at = match body["talk"]["watchedAt"].as_str() {
        None | Some("") => return Err(ValidationError::TalkRequired),
        Some(s) => s,
    };
    if !watched_at_regex().is_match(watched_at) {
        return Err(ValidationError::WatchedAtFormat);
    }
    Ok(())
}

/// Only an absent field counts as missing: `rate: 0` passes this check and
/// fails the range check instead.
fn rate_required(body: &Value) -> ValidationResult {
    match body["talk"].get("rate") {
        None => Err(ValidationError::TalkRequired),
        Some(_) => Ok(()),
    }
}

fn rate_range(body: &Value) -> ValidationResult {
    match body["talk"]["rate"].as_i64() {
        Some(rate) if (1..=5).contains(&rate) => Ok(()),
        _ => Err(ValidationError::RateRange),
    }
}
