//! Timestamp normalization for records read from the document store
//!
//! Store records carry timestamps in several shapes: RFC 3339 strings, plain
//! `YYYY-MM-DD` dates, epoch milliseconds, or a `{ seconds, nanoseconds }`
//! wrapper object. Everything is normalized once, at deserialization time, into
//! `Option<DateTime<Utc>>`. Values that cannot be understood become `None`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Anything that carries a creation timestamp
pub trait Dated {
    /// Normalized creation time, `None` when missing or malformed
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

/// Normalize a raw store value into a UTC timestamp.
pub fn to_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_text(text),
        Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            let nanos = u32::try_from(nanos).ok().filter(|n| *n < 1_000_000_000)?;
            DateTime::<Utc>::from_timestamp(seconds, nanos)
        }
        _ => None,
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde adapter: optional timestamp, malformed values become `None`.
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let normalized = to_date(&value);
        if normalized.is_none() && !value.is_null() {
            debug!(?value, "dropping unparseable timestamp");
        }
        normalized
    }))
}

/// Serde adapter: optional calendar date.
///
/// The day is taken in UTC. A birth date the store saved as local midnight
/// east of UTC (a `{seconds}` wrapper or full RFC 3339 instant) therefore
/// reads as the previous day; plain `YYYY-MM-DD` strings are unaffected.
pub fn deserialize_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt(deserializer)?.map(|dt| dt.date_naive()))
}

/// Serde adapter: required calendar date, taken in UTC like
/// [`deserialize_opt_date`].
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    to_date(&value)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| D::Error::custom(format!("invalid date value: {}", value)))
}
