//! Local timestamps attached to persisted records

use chrono::Local;

/// Local fetch time as `YYYY-MM-DD HH:MM:SS`
#[must_use]
pub fn fetch_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Compact local time as `mmddHHMMSS`, used in export file names
#[must_use]
pub fn short_timestamp() -> String {
    Local::now().format("%m%d%H%M%S").to_string()
}
