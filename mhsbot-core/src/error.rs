//! Error types for the bot core.
//!
//! Handlers return [`BotError`]; each bot turns it into a `❌ Terjadi kesalahan: ...` reply at its
//! handler boundary.

use thiserror::Error;

/// Handler failure: a store write, a Telegram call or a student directory lookup.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Directory error: {0}")]
    Directory(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
