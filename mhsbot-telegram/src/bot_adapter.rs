//! Wraps teloxide::Bot and implements [`mhsbot_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use mhsbot_core::{parse_message_id, Bot as CoreBot, BotError, Chat, InlineButton, Outgoing, Result, TextFormat};
use teloxide::{
    prelude::*,
    types::{ChatId, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode},
};

/// Thin wrapper around teloxide::Bot that implements mhsbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Html => Some(ParseMode::Html),
    }
}

fn keyboard_markup(rows: &[Vec<InlineButton>]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.text.clone(), b.data.clone()))
            .collect::<Vec<_>>()
    }))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send(&self, chat: &Chat, message: Outgoing) -> Result<String> {
        let mut request = self.bot.send_message(ChatId(chat.id), message.text);
        if let Some(mode) = parse_mode(message.format) {
            request = request.parse_mode(mode);
        }
        if !message.keyboard.is_empty() {
            request = request.reply_markup(keyboard_markup(&message.keyboard));
        } else if message.force_reply {
            request = request.reply_markup(ForceReply::new().selective());
        }
        let sent = request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(sent.id.to_string())
    }

    async fn edit(&self, chat: &Chat, message_id: &str, message: Outgoing) -> Result<()> {
        let id = parse_message_id(message_id)?;
        let mut request = self
            .bot
            .edit_message_text(ChatId(chat.id), MessageId(id), message.text);
        if let Some(mode) = parse_mode(message.format) {
            request = request.parse_mode(mode);
        }
        if !message.keyboard.is_empty() {
            request = request.reply_markup(keyboard_markup(&message.keyboard));
        }
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_mapping() {
        assert_eq!(parse_mode(TextFormat::Plain), None);
        assert_eq!(parse_mode(TextFormat::Html), Some(ParseMode::Html));
    }

    #[test]
    fn test_keyboard_markup_keeps_rows() {
        let rows = vec![
            vec![InlineButton::new("1. Ahmad", "mhs_1"), InlineButton::new("2. Budi", "mhs_2")],
            vec![InlineButton::new("🔍 Cari Lagi", "cari_lagi")],
        ];
        let markup = keyboard_markup(&rows);
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[1][0].text, "🔍 Cari Lagi");
    }
}
