//! Core types: user, chat, message, callback query, outgoing message, handler response, and the
//! Handler trait.
//!
//! One file per main type.

mod chat;
mod event;
mod handler;
mod message;
mod outgoing;
mod response;
mod user;

pub use chat::Chat;
pub use event::{CallbackQuery, Event};
pub use handler::{Handler, ToCoreEvent, ToCoreUser};
pub use message::{Attachment, ForwardOrigin, Message};
pub use outgoing::{InlineButton, Outgoing, TextFormat};
pub use response::HandlerResponse;
pub use user::User;
