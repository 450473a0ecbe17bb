//! # mhsbot-core
//!
//! Core types and traits shared by both bots: [`Bot`], [`Handler`], [`Event`], message and user
//! types, command parsing, errors and tracing initialization. Transport-agnostic; the teloxide
//! bindings live in `mhsbot-telegram`.

pub mod bot;
pub mod command;
pub mod error;
pub mod logger;
#[cfg(feature = "test-util")]
pub mod mock_bot;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use command::Command;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Attachment, CallbackQuery, Chat, Event, ForwardOrigin, Handler, HandlerResponse, InlineButton,
    Message, Outgoing, TextFormat, ToCoreEvent, ToCoreUser, User,
};
