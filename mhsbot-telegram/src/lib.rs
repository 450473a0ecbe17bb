//! # mhsbot-telegram
//!
//! Telegram layer: adapters from teloxide types to core [`mhsbot_core::Event`], the
//! [`mhsbot_core::Bot`] implementation, base config shared by both bots, and the dispatcher runner.
//! Handles only Telegram connectivity and handler-chain execution; no persistence or bot logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{
    chat_to_core, TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper,
};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{BaseConfig, TelegramConfig};
pub use runner::{run_dispatcher, shutdown_channel, ShutdownSender};
