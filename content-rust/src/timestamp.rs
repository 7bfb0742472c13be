//! Stored-timestamp policy.
//!
//! The storage layer persists timestamps as timezone-naive strings.
//! They are interpreted as UTC, and every value leaving this crate is
//! rendered in the explicit `...Z` form with millisecond precision.
//! This is the single place that convention lives; nothing else in the
//! crate touches raw timestamp strings.

use chrono::{DateTime, NaiveDateTime, ParseError, Utc};

/// Accepted naive form, e.g. `2024-01-01T00:00:00.000`.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Emitted form, always UTC with millisecond precision.
const STORED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parses a stored timestamp string into a UTC instant.
///
/// Naive strings are interpreted as UTC. Strings that already carry a
/// `Z` suffix or an explicit offset are accepted too, which makes
/// [`normalize_stored_timestamp_to_utc`] idempotent.
///
/// # Errors
/// Returns the underlying parse error if the string matches neither
/// form.
pub fn parse_stored_timestamp(raw: &str) -> Result<DateTime<Utc>, ParseError> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT).map(|naive| naive.and_utc())
}

/// Renders a UTC instant in the stored form, e.g.
/// `2024-01-01T00:00:00.000Z`.
#[must_use]
pub fn format_stored_timestamp(at: DateTime<Utc>) -> String {
    at.format(STORED_FORMAT).to_string()
}

/// Converts a stored timestamp string to its normalized UTC form.
///
/// `"2024-01-01T00:00:00.000"` becomes `"2024-01-01T00:00:00.000Z"`.
/// Feeding the output back through is a no-op.
///
/// # Errors
/// Returns the underlying parse error for strings that are not
/// timestamps.
pub fn normalize_stored_timestamp_to_utc(raw: &str) -> Result<String, ParseError> {
    parse_stored_timestamp(raw).map(format_stored_timestamp)
}

/// Serde adapter applying the stored-timestamp policy to model fields,
/// for use with `#[serde(with = "crate::timestamp::stored")]`.
pub mod stored {
    use chrono::{DateTime, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_stored_timestamp(*at))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_stored_timestamp(&raw).map_err(D::Error::custom)
    }
}
