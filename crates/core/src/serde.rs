//! Serde helper functions for holiday API payloads.
//!
//! The holiday API is loose about a few representations: identifiers may be
//! strings or numbers and dates may carry a time component.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parse a date that may be `YYYY-MM-DD` or an ISO-8601 date-time.
///
/// Date-times are truncated to their calendar date. When an offset is present
/// the wall-clock date in that offset is kept.
pub fn parse_api_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local().date());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
}

/// Deserialize a date via [`parse_api_date`].
pub fn deserialize_api_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_api_date(&s).map_err(|e| serde::de::Error::custom(format!("invalid date {s:?}: {e}")))
}

/// Deserialize an identifier that may be a JSON string or number.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
