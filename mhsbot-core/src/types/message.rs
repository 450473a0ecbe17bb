//! Message, attachment and forward-origin types for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};
use crate::command::Command;

/// Non-text payload carried by a message. Captions stay on the variant they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Attachment {
    Photo { caption: Option<String> },
    Document { file_name: Option<String> },
    Voice,
    Video { caption: Option<String> },
    Sticker { emoji: Option<String> },
    Location { latitude: f64, longitude: f64 },
    Contact { first_name: String, last_name: Option<String> },
    Animation,
    Audio { title: Option<String> },
}

impl Attachment {
    /// Short lowercase kind name, used as `message_type` in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Attachment::Photo { .. } => "photo",
            Attachment::Document { .. } => "document",
            Attachment::Voice => "voice",
            Attachment::Video { .. } => "video",
            Attachment::Sticker { .. } => "sticker",
            Attachment::Location { .. } => "location",
            Attachment::Contact { .. } => "contact",
            Attachment::Animation => "animation",
            Attachment::Audio { .. } => "audio",
        }
    }
}

/// Where a forwarded message originally came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForwardOrigin {
    /// Forwarded from a user whose account is visible.
    User { id: i64, name: String },
    /// Forwarded from a user who hides their account; only a display name is known.
    HiddenUser { name: String },
    /// Forwarded from a group, supergroup or channel.
    Chat {
        id: i64,
        chat_type: String,
        title: Option<String>,
    },
}

/// A single incoming message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for media without text.
    pub content: String,
    pub attachment: Option<Attachment>,
    pub forward_origin: Option<ForwardOrigin>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Plain text message from `user` in the user's private chat.
    pub fn text(id: impl Into<String>, user: User, content: impl Into<String>) -> Self {
        let chat = Chat::private(user.id);
        Self {
            id: id.into(),
            user,
            chat,
            content: content.into(),
            attachment: None,
            forward_origin: None,
            created_at: Utc::now(),
        }
    }

    /// Parses the text as a slash command. Forwarded messages are never commands.
    pub fn command(&self) -> Option<Command> {
        if self.is_forwarded() {
            return None;
        }
        Command::parse(&self.content)
    }

    pub fn is_forwarded(&self) -> bool {
        self.forward_origin.is_some()
    }

    /// `text` for plain messages, otherwise the attachment kind.
    pub fn message_type(&self) -> &'static str {
        self.attachment.as_ref().map(Attachment::kind).unwrap_or("text")
    }
}
