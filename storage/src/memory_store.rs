//! In-memory stores for tests and development. Data is lost on drop.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::models::{AddOutcome, AllowList, AllowedUser, LogEntry};
use crate::repository::{ActivityLogStore, AllowListStore};

/// In-memory allow-list. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryAllowList {
    list: Arc<RwLock<AllowList>>,
    writes: Arc<RwLock<usize>>,
}

impl MemoryAllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded with the given users.
    pub fn with_users(users: Vec<AllowedUser>) -> Self {
        Self {
            list: Arc::new(RwLock::new(AllowList {
                users,
                ..Default::default()
            })),
            writes: Arc::default(),
        }
    }

    /// Number of whole-store writes so far.
    pub async fn write_count(&self) -> usize {
        *self.writes.read().await
    }

    async fn record_write(&self) {
        *self.writes.write().await += 1;
    }
}

#[async_trait]
impl AllowListStore for MemoryAllowList {
    async fn load(&self) -> AllowList {
        self.list.read().await.clone()
    }

    async fn save(&self, list: &AllowList) -> Result<(), StorageError> {
        *self.list.write().await = list.clone();
        self.record_write().await;
        Ok(())
    }

    async fn add(&self, user: AllowedUser) -> Result<AddOutcome, StorageError> {
        let outcome = self.list.write().await.insert(user);
        if outcome == AddOutcome::Added {
            self.record_write().await;
        }
        Ok(outcome)
    }

    async fn remove(&self, user_id: i64) -> Result<usize, StorageError> {
        let removed = self.list.write().await.remove(user_id);
        self.record_write().await;
        Ok(removed)
    }
}

/// In-memory activity log. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryActivityLog {
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl MemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ActivityLogStore for MemoryActivityLog {
    async fn load(&self) -> Vec<LogEntry> {
        self.entries.read().await.clone()
    }

    async fn save(&self, entries: &[LogEntry]) -> Result<(), StorageError> {
        *self.entries.write().await = entries.to_vec();
        Ok(())
    }

    async fn append(&self, entry: LogEntry) -> Result<(), StorageError> {
        self.entries.write().await.push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_allow_list_add_and_remove() {
        let store = MemoryAllowList::new();
        assert_eq!(store.add(AllowedUser::new(1, None)).await.unwrap(), AddOutcome::Added);
        assert_eq!(
            store.add(AllowedUser::new(1, None)).await.unwrap(),
            AddOutcome::AlreadyPresent
        );
        assert!(store.is_allowed(1).await);
        assert_eq!(store.write_count().await, 1);

        assert_eq!(store.remove(1).await.unwrap(), 1);
        assert!(!store.is_allowed(1).await);
    }

    #[tokio::test]
    async fn test_memory_activity_log_recent_keeps_order() {
        let log = MemoryActivityLog::new();
        for i in 0..15 {
            log.append(LogEntry::new(i, "admin", "add_user", "")).await.unwrap();
        }
        let recent = log.recent(10).await;
        assert_eq!(recent.len(), 10);
        assert_eq!(recent.first().unwrap().user_id, 5);
        assert_eq!(recent.last().unwrap().user_id, 14);
        assert_eq!(log.recent(100).await.len(), 15);
    }
}
