// src/models/timestamp.rs
// DOCUMENTATION: ISO-8601 rendering of creation timestamps
// PURPOSE: Always six fractional digits, or none when the microseconds are zero

use chrono::{NaiveDateTime, Timelike};
use serde::Serializer;

pub fn format_iso(value: &NaiveDateTime) -> String {
    if value.nanosecond() / 1_000 == 0 {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// `serialize_with` helper for `Option<NaiveDateTime>` fields
pub fn serialize_opt<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) => serializer.serialize_str(&format_iso(ts)),
        None => serializer.serialize_none(),
    }
}
