//! Bot abstraction for sending and editing messages.
//!
//! [`Bot`] is transport-agnostic; `mhsbot_telegram::TelegramBotAdapter` implements it via teloxide
//! and tests substitute a recording mock.

use crate::error::{BotError, Result};
use crate::types::{Chat, Message, Outgoing};
use async_trait::async_trait;

/// Abstraction for sending and editing messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a message to the given chat and returns its id (transport-specific, e.g. Telegram numeric string).
    async fn send(&self, chat: &Chat, message: Outgoing) -> Result<String>;

    /// Replaces the text (and keyboard) of an already-sent message.
    async fn edit(&self, chat: &Chat, message_id: &str, message: Outgoing) -> Result<()>;

    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send(chat, Outgoing::plain(text)).await.map(|_| ())
    }

    /// Sends a plain text reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}

/// Parses a message id string into an i32. Used by edit implementations.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Bot(format!("Invalid message_id for edit: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(parse_message_id("12.3").is_err());
    }
}
