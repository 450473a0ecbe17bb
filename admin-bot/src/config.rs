//! Admin bot config: ADMIN_BOT_TOKEN and ADMIN_ID (falls back to ADMIN_CHAT_ID).

use anyhow::{Context, Result};
use mhsbot_telegram::TelegramConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub telegram: TelegramConfig,
    /// The only user allowed to run admin commands.
    pub admin_id: i64,
}

impl AdminConfig {
    /// Loads from env. `token` overrides ADMIN_BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load("ADMIN_BOT_TOKEN", token)?;
        let raw_admin_id = env::var("ADMIN_ID")
            .or_else(|_| env::var("ADMIN_CHAT_ID"))
            .map_err(|_| anyhow::anyhow!("ADMIN_ID (or ADMIN_CHAT_ID) not set"))?;
        let admin_id = raw_admin_id
            .trim()
            .parse::<i64>()
            .with_context(|| format!("ADMIN_ID must be an integer, got {:?}", raw_admin_id))?;

        Ok(Self {
            telegram,
            admin_id,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }
}
