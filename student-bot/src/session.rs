//! Transient per-user search state: who is expected to send search text next. Lost on restart.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Set of user ids waiting for search text. Clones share the same set.
#[derive(Debug, Clone, Default)]
pub struct SearchSessions {
    waiting: Arc<RwLock<HashSet<i64>>>,
}

impl SearchSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user's next plain message is a search query.
    pub async fn mark_waiting(&self, user_id: i64) {
        self.waiting.write().await.insert(user_id);
    }

    /// Clears the flag and returns whether it was set.
    pub async fn take_waiting(&self, user_id: i64) -> bool {
        self.waiting.write().await.remove(&user_id)
    }

    pub async fn is_waiting(&self, user_id: i64) -> bool {
        self.waiting.read().await.contains(&user_id)
    }

    pub async fn clear(&self, user_id: i64) {
        self.waiting.write().await.remove(&user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_take_waiting_clears_flag() {
        let sessions = SearchSessions::new();
        assert!(!sessions.take_waiting(1).await);

        sessions.mark_waiting(1).await;
        assert!(sessions.is_waiting(1).await);
        assert!(!sessions.is_waiting(2).await);
        assert!(sessions.take_waiting(1).await);
        assert!(!sessions.is_waiting(1).await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let sessions = SearchSessions::new();
        let other = sessions.clone();
        other.mark_waiting(7).await;
        sessions.clear(7).await;
        assert!(!other.is_waiting(7).await);
    }
}
