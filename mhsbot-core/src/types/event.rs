//! Incoming update: a message or an inline-keyboard callback.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, message::Message, user::User};

/// Inline-keyboard button press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub user: User,
    /// Chat of the message that carried the keyboard, when still accessible.
    pub chat: Option<Chat>,
    /// Id of the message that carried the keyboard, when still accessible.
    pub message_id: Option<String>,
    pub data: String,
}

/// What the handler chain receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Message(Message),
    Callback(CallbackQuery),
}

impl Event {
    pub fn user(&self) -> &User {
        match self {
            Event::Message(m) => &m.user,
            Event::Callback(q) => &q.user,
        }
    }

    pub fn chat(&self) -> Option<&Chat> {
        match self {
            Event::Message(m) => Some(&m.chat),
            Event::Callback(q) => q.chat.as_ref(),
        }
    }

    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Event::Message(m) => Some(m),
            Event::Callback(_) => None,
        }
    }

    pub fn as_callback(&self) -> Option<&CallbackQuery> {
        match self {
            Event::Callback(q) => Some(q),
            Event::Message(_) => None,
        }
    }

    /// `message` or `callback`, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Message(_) => "message",
            Event::Callback(_) => "callback",
        }
    }
}

impl From<Message> for Event {
    fn from(message: Message) -> Self {
        Event::Message(message)
    }
}

impl From<CallbackQuery> for Event {
    fn from(query: CallbackQuery) -> Self {
        Event::Callback(query)
    }
}
