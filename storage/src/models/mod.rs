//! Persisted records: allow-list entries and activity log entries.

mod allowed_user;
mod log_entry;

pub use allowed_user::{AddOutcome, AllowList, AllowedUser};
pub use log_entry::LogEntry;

use chrono::Local;

/// Timestamp format used in both files: `YYYY-MM-DD HH:MM:SS`, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
