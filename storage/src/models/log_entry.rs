//! Activity log entry: one administrative action.

use serde::{Deserialize, Serialize};

use super::now_timestamp;

/// One line of the activity log, as stored in the JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub user_id: i64,
    pub username: String,
    pub action: String,
    #[serde(default)]
    pub details: String,
}

impl LogEntry {
    /// New entry stamped with the current time.
    pub fn new(
        user_id: i64,
        username: impl Into<String>,
        action: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: now_timestamp(),
            user_id,
            username: username.into(),
            action: action.into(),
            details: details.into(),
        }
    }
}
