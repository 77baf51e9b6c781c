use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde_json::{Map, Value};

/// A row from the backend: field name to JSON value.
pub type Record = Map<String, Value>;

// Timestamps carrying an offset that RFC 3339 parsing rejects (e.g. `+00`).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

// Timestamps without an offset are taken as dashboard wall-clock time.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Reads the timestamp stored under `field`, in the wall clock of `tz`.
///
/// Missing fields and unparseable values yield `None`.
pub fn record_timestamp<Tz: TimeZone>(record: &Record, field: &str, tz: &Tz) -> Option<NaiveDateTime> {
    record.get(field).and_then(|value| parse_timestamp(value, tz))
}

/// Parses a JSON value as a timestamp in the wall clock of `tz`.
///
/// Strings may be RFC 3339, ISO 8601 without offset, or a bare date
/// (midnight). Integers are Unix epoch milliseconds.
pub fn parse_timestamp<Tz: TimeZone>(value: &Value, tz: &Tz) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_timestamp_str(s.trim(), tz),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|instant| instant.with_timezone(tz).naive_local()),
        _ => None,
    }
}

fn parse_timestamp_str<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<NaiveDateTime> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Some(instant.with_timezone(tz).naive_local());
    }

    if let Some(instant) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(s, format).ok())
    {
        return Some(instant.with_timezone(tz).naive_local());
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
    {
        return Some(naive);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
