//! Recording [`Bot`] for handler tests (`test-util` feature).
//!
//! Records every `send` and `edit` so tests can assert on the reply text without hitting Telegram.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use crate::{Bot, Chat, Outgoing, Result};

/// One recorded `send` or `edit`. `edited` is `Some(message_id)` for edits.
#[derive(Debug, Clone)]
pub struct SentRecord {
    pub chat_id: i64,
    pub edited: Option<String>,
    pub message: Outgoing,
}

/// Mock Bot that records outgoing messages and hands out increasing message ids.
#[derive(Default)]
pub struct MockBot {
    records: Mutex<Vec<SentRecord>>,
    next_id: AtomicUsize,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<SentRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Texts of every send and edit, in order.
    pub fn texts(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message.text).collect()
    }

    pub fn last_text(&self) -> Option<String> {
        self.texts().pop()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send(&self, chat: &Chat, message: Outgoing) -> Result<String> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.records.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            edited: None,
            message,
        });
        Ok(id.to_string())
    }

    async fn edit(&self, chat: &Chat, message_id: &str, message: Outgoing) -> Result<()> {
        self.records.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            edited: Some(message_id.to_string()),
            message,
        });
        Ok(())
    }
}
