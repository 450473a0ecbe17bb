//! Store traits injected into the bot handlers.
//!
//! Reads never fail: a missing, unreadable or malformed file is an empty store. Writes return
//! [`StorageError`].

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{AddOutcome, AllowList, AllowedUser, LogEntry};

/// Allow-list persistence: whole-store load/save plus the three mutations the bots need.
#[async_trait]
pub trait AllowListStore: Send + Sync {
    /// Loads the whole allow-list; problems are logged and yield an empty list.
    async fn load(&self) -> AllowList;

    /// Replaces the whole allow-list.
    async fn save(&self, list: &AllowList) -> Result<(), StorageError>;

    /// Appends `user` unless its id is already present (then nothing is written).
    async fn add(&self, user: AllowedUser) -> Result<AddOutcome, StorageError>;

    /// Removes every record with `user_id` and writes the store back; returns how many were removed.
    async fn remove(&self, user_id: i64) -> Result<usize, StorageError>;

    async fn is_allowed(&self, user_id: i64) -> bool {
        self.load().await.contains(user_id)
    }
}

/// Append-only activity log.
#[async_trait]
pub trait ActivityLogStore: Send + Sync {
    /// Loads every entry in file order; problems are logged and yield an empty log.
    async fn load(&self) -> Vec<LogEntry>;

    /// Replaces the whole log.
    async fn save(&self, entries: &[LogEntry]) -> Result<(), StorageError>;

    /// Appends one entry (read-modify-write). Fails without writing when the existing log cannot
    /// be read back.
    async fn append(&self, entry: LogEntry) -> Result<(), StorageError>;

    /// The last `n` entries, oldest first.
    async fn recent(&self, n: usize) -> Vec<LogEntry> {
        let mut entries = self.load().await;
        let skip = entries.len().saturating_sub(n);
        entries.split_off(skip)
    }
}
