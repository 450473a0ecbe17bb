//! Outgoing message: text, formatting and optional reply markup.

use serde::{Deserialize, Serialize};

/// How the transport should interpret the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextFormat {
    Plain,
    /// Telegram HTML subset (`<b>`, `<code>`, ...). Dynamic values must be escaped by the caller.
    Html,
}

/// One inline-keyboard button; `data` comes back as [`super::CallbackQuery::data`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub text: String,
    pub data: String,
}

impl InlineButton {
    pub fn new(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data: data.into(),
        }
    }
}

/// A message to send or an edit to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outgoing {
    pub text: String,
    pub format: TextFormat,
    /// Inline keyboard rows; empty means no keyboard.
    pub keyboard: Vec<Vec<InlineButton>>,
    /// Ask the client to open a reply box (ignored on edits).
    pub force_reply: bool,
}

impl Outgoing {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            keyboard: Vec::new(),
            force_reply: false,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            format: TextFormat::Html,
            ..Self::plain(text)
        }
    }

    pub fn with_keyboard(mut self, keyboard: Vec<Vec<InlineButton>>) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn with_force_reply(mut self) -> Self {
        self.force_reply = true;
        self
    }
}
