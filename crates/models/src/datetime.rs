//! Lenient parsing for appointment timestamps.
//!
//! Clients send ISO 8601 in several shapes: with or without seconds, with a
//! space instead of `T`, with a `Z` or numeric offset, or a bare date. Storage
//! keeps wall-clock time without a zone, so an offset is dropped and the
//! local reading is kept as written.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::patch::Patch;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

pub fn parse_lenient(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    let normalized = match trimmed.split_once(' ') {
        Some((date, time)) => format!("{date}T{}", time.trim_start()),
        None => trimmed.to_string(),
    };
    let normalized = if normalized.ends_with('Z') || normalized.ends_with('z') {
        format!("{}+00:00", &normalized[..normalized.len() - 1])
    } else {
        normalized
    };

    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
    {
        return Some(dt);
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
    {
        return Some(dt.naive_local());
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn invalid<E: serde::de::Error>(raw: &str) -> E {
    E::custom(format!("invalid datetime `{raw}`, expected ISO 8601 such as 2024-03-01T10:00:00"))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_lenient(&raw).ok_or_else(|| invalid(&raw))
}

/// Same as [`deserialize`] for a patch field; `null` stays [`Patch::Null`].
pub fn deserialize_patch<'de, D>(deserializer: D) -> Result<Patch<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(Patch::Null),
        Some(raw) => parse_lenient(&raw).map(Patch::Value).ok_or_else(|| invalid(&raw)),
    }
}
