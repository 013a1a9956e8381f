//! Serde adapter for record timestamps: ISO-8601 UTC with millisecond
//! precision and a `Z` suffix, e.g. `2024-05-01T10:20:30.123Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

pub type Timestamp = DateTime<Utc>;

pub fn format(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(ts))
}
