//! Serde helpers for timestamp fields.
//!
//! Clients send expiry timestamps either as RFC3339 (`2026-12-31T23:59:59Z`)
//! or as a naive `YYYY-MM-DDTHH:MM:SS[.ffffff]` string, which is read as
//! UTC. Storage is always UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parses a timestamp from RFC3339 or a naive datetime string.
pub fn parse_flexible(input: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| format!("'{input}' is not a valid datetime"))
}

/// Deserializes an optional timestamp via [`parse_flexible`].
pub fn option_flexible<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(None),
        Some(s) => parse_flexible(&s).map(Some).map_err(serde::de::Error::custom),
    }
}
