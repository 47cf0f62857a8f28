//! Lenient timestamp parsing for date inputs.
//!
//! Clients send either full RFC 3339 timestamps or bare `YYYY-MM-DD` dates
//! (interpreted as midnight UTC). The serde helpers here are meant for
//! `#[serde(deserialize_with = ...)]` on DTO date fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, CoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    Err(CoreError::Validation(format!("invalid date: {s}")))
}

/// Deserialize a required date field leniently.
pub fn deserialize_flexible<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_datetime(&s).map_err(serde::de::Error::custom)
}

/// Deserialize an optional date field leniently.
///
/// Pair with `#[serde(default)]` so an absent field maps to `None`.
pub fn deserialize_flexible_opt<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|s| parse_datetime(&s).map_err(serde::de::Error::custom))
        .transpose()
}
