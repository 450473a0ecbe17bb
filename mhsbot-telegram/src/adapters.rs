//! Adapters from Telegram (teloxide) types to mhsbot_core types.
//! Depends only on teloxide and mhsbot_core type definitions.

use mhsbot_core::{
    Attachment, CallbackQuery, Chat, Event, ForwardOrigin, Message, ToCoreEvent, ToCoreUser, User,
};
use teloxide::types::MessageOrigin;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Converts a teloxide chat to core [`Chat`].
pub fn chat_to_core(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: chat_type_name(chat).to_string(),
        title: chat.title().map(str::to_string),
    }
}

fn chat_type_name(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

/// Wraps a teloxide Message for conversion to core [`Event::Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreEvent for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Event {
        Event::Message(self.to_message())
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Converts to core [`Message`]. Messages without a sender (channel posts) get user id 0.
    pub fn to_message(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: chat_to_core(&self.0.chat),
            content: self.0.text().unwrap_or("").to_string(),
            attachment: self.attachment(),
            forward_origin: self.forward_origin(),
            created_at: self.0.date,
        }
    }

    /// Media payload, checked in the order the admin notification labels expect.
    fn attachment(&self) -> Option<Attachment> {
        let m = self.0;
        let caption = || m.caption().map(str::to_string);

        if m.photo().is_some() {
            return Some(Attachment::Photo { caption: caption() });
        }
        if let Some(doc) = m.document() {
            return Some(Attachment::Document {
                file_name: doc.file_name.clone(),
            });
        }
        if m.voice().is_some() {
            return Some(Attachment::Voice);
        }
        if m.video().is_some() {
            return Some(Attachment::Video { caption: caption() });
        }
        if let Some(sticker) = m.sticker() {
            return Some(Attachment::Sticker {
                emoji: sticker.emoji.clone(),
            });
        }
        if let Some(location) = m.location() {
            return Some(Attachment::Location {
                latitude: location.latitude,
                longitude: location.longitude,
            });
        }
        if let Some(contact) = m.contact() {
            return Some(Attachment::Contact {
                first_name: contact.first_name.clone(),
                last_name: contact.last_name.clone(),
            });
        }
        if m.animation().is_some() {
            return Some(Attachment::Animation);
        }
        if let Some(audio) = m.audio() {
            return Some(Attachment::Audio {
                title: audio.title.clone(),
            });
        }
        None
    }

    fn forward_origin(&self) -> Option<ForwardOrigin> {
        let origin = match self.0.forward_origin()? {
            MessageOrigin::User { sender_user, .. } => ForwardOrigin::User {
                id: sender_user.id.0 as i64,
                name: sender_user.full_name(),
            },
            MessageOrigin::HiddenUser {
                sender_user_name, ..
            } => ForwardOrigin::HiddenUser {
                name: sender_user_name.clone(),
            },
            MessageOrigin::Chat { sender_chat, .. } => chat_origin(sender_chat),
            MessageOrigin::Channel { chat, .. } => chat_origin(chat),
        };
        Some(origin)
    }
}

fn chat_origin(chat: &teloxide::types::Chat) -> ForwardOrigin {
    let chat = chat_to_core(chat);
    ForwardOrigin::Chat {
        id: chat.id,
        chat_type: chat.chat_type,
        title: chat.title,
    }
}

/// Wraps a teloxide CallbackQuery for conversion to core [`Event::Callback`].
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreEvent for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Event {
        let query = self.0;
        Event::Callback(CallbackQuery {
            user: TelegramUserWrapper(&query.from).to_core(),
            chat: query.message.as_ref().map(|m| chat_to_core(m.chat())),
            message_id: query.message.as_ref().map(|m| m.id().to_string()),
            data: query.data.clone().unwrap_or_default(),
        })
    }
}
