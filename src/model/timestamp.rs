//! Serde helpers for the exports' timestamp columns.
//!
//! Accepts `YYYY-MM-DD HH:MM:SS` and bare `YYYY-MM-DD` (midnight). An empty
//! cell is "absent" for optional columns and an error for required ones.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a timestamp cell.
pub fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

pub fn required<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp `{}`", raw)))
}

pub fn optional<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp `{}`", raw))),
    }
}
