use chrono::prelude::*;

// Unix timestamp in milliseconds.
pub type Timestamp = i64;

// Zero-argument clock, substitutable for deterministic tests.
pub type TimeFunc = fn() -> Timestamp;

pub fn now() -> Timestamp {
    Utc::now().timestamp_millis()
}

pub fn parse_time(s: &str, format: &str) -> std::result::Result<Timestamp, chrono::ParseError> {
    if format.contains("%z") {
        Ok(DateTime::parse_from_str(s, format)?.timestamp_millis())
    } else {
        Ok(NaiveDateTime::parse_from_str(s, format)?.timestamp_millis())
    }
}
