//! Student bot config: TELEGRAM_BOT_TOKEN, ADMIN_BOT_TOKEN, ADMIN_CHAT_ID and REGISTRATION_TOKEN.

use anyhow::{Context, Result};
use mhsbot_telegram::TelegramConfig;
use std::env;

pub const DEFAULT_REGISTRATION_TOKEN: &str = "ordalnant";

#[derive(Debug, Clone)]
pub struct StudentConfig {
    pub telegram: TelegramConfig,
    /// Token of the admin bot; the notifier posts through it.
    pub admin_bot_token: String,
    /// Chat that receives user activity notifications.
    pub admin_chat_id: i64,
    /// Secret for `/regist`, compared case-insensitively.
    pub registration_token: String,
}

impl StudentConfig {
    /// Loads from env. `token` overrides TELEGRAM_BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load("TELEGRAM_BOT_TOKEN", token)?;
        let admin_bot_token = env::var("ADMIN_BOT_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("ADMIN_BOT_TOKEN not set"))?;
        let raw_chat_id =
            env::var("ADMIN_CHAT_ID").map_err(|_| anyhow::anyhow!("ADMIN_CHAT_ID not set"))?;
        let admin_chat_id = raw_chat_id
            .trim()
            .parse::<i64>()
            .with_context(|| format!("ADMIN_CHAT_ID must be an integer, got {:?}", raw_chat_id))?;
        if admin_chat_id == 0 {
            anyhow::bail!("ADMIN_CHAT_ID must not be 0");
        }
        let registration_token = env::var("REGISTRATION_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGISTRATION_TOKEN.to_string());

        Ok(Self {
            telegram,
            admin_bot_token,
            admin_chat_id,
            registration_token,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }
}
