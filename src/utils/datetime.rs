//! Date and time utility functions
//!
//! Todo documents carry their timestamps as integer milliseconds since the
//! Unix epoch; this module provides the clock used when stamping items and
//! helpers for turning those integers back into something readable.

use chrono::{DateTime, Utc};

/// Timestamp format used for human-readable rendering of epoch milliseconds
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current time as milliseconds since the Unix epoch
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert epoch milliseconds to a UTC datetime
///
/// # Returns
/// * `Option<DateTime<Utc>>` - `None` if the value is out of chrono's range
pub fn ms_to_datetime(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
}

/// Format epoch milliseconds for display
///
/// Out-of-range values fall back to rendering the raw integer.
pub fn format_ms(ms: i64) -> String {
    match ms_to_datetime(ms) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => ms.to_string(),
    }
}
