//! Shared configuration: Telegram connection per bot, plus data/log paths common to both bots.
//! Loaded from env: TELEGRAM_API_URL / TELOXIDE_API_URL, LOG_FILE, ALLOWED_USERS_FILE, USER_LOGS_FILE.

use anyhow::Result;
use std::env;

pub const DEFAULT_ALLOWED_USERS_FILE: &str = "allowed_users.json";
pub const DEFAULT_USER_LOGS_FILE: &str = "user_logs.json";
pub const DEFAULT_LOG_FILE: &str = "logs/mhsbot.log";

/// Telegram connection for one bot: token and optional API URL override.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env: `token_var` is required, TELEGRAM_API_URL / TELOXIDE_API_URL optional.
    /// `token` overrides `token_var` if provided.
    pub fn load(token_var: &str, token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => required_var(token_var)?,
        };
        Ok(Self {
            bot_token,
            telegram_api_url: api_url_from_env(),
        })
    }

    /// Builds with the given token and no API override.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Token must be non-empty; telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("bot token is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Base URL for raw Bot API calls (no trailing slash).
    pub fn api_base(&self) -> String {
        self.telegram_api_url
            .as_deref()
            .unwrap_or("https://api.telegram.org")
            .trim_end_matches('/')
            .to_string()
    }

    /// Builds a teloxide Bot, applying the API URL override when set.
    pub fn build_bot(&self) -> teloxide::Bot {
        let bot = teloxide::Bot::new(&self.bot_token);
        match self
            .telegram_api_url
            .as_deref()
            .and_then(|u| reqwest::Url::parse(u).ok())
        {
            Some(url) => bot.set_api_url(url),
            None => bot,
        }
    }
}

/// Paths shared by both bots: allow-list file, activity log file and process log file.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// ALLOWED_USERS_FILE
    pub allowed_users_file: String,
    /// USER_LOGS_FILE
    pub user_logs_file: String,
    /// LOG_FILE
    pub log_file: String,
}

impl BaseConfig {
    pub fn load() -> Self {
        Self {
            allowed_users_file: env::var("ALLOWED_USERS_FILE")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_USERS_FILE.to_string()),
            user_logs_file: env::var("USER_LOGS_FILE")
                .unwrap_or_else(|_| DEFAULT_USER_LOGS_FILE.to_string()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
        }
    }
}

/// Reads a required variable; empty values count as missing.
pub(crate) fn required_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => anyhow::bail!("{} not set", name),
    }
}

fn api_url_from_env() -> Option<String> {
    env::var("TELEGRAM_API_URL")
        .or_else(|_| env::var("TELOXIDE_API_URL"))
        .ok()
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.api_base(), "https://api.telegram.org");
    }

    #[test]
    #[serial]
    fn test_load_requires_token_var() {
        env::remove_var("MHSBOT_TEST_TOKEN");
        let err = TelegramConfig::load("MHSBOT_TEST_TOKEN", None).unwrap_err();
        assert!(err.to_string().contains("MHSBOT_TEST_TOKEN not set"));

        let config = TelegramConfig::load("MHSBOT_TEST_TOKEN", Some("override".to_string())).unwrap();
        assert_eq!(config.bot_token, "override");
    }

    #[test]
    #[serial]
    fn test_load_reads_api_url_fallback() {
        env::set_var("MHSBOT_TEST_TOKEN", "123:abc");
        env::remove_var("TELEGRAM_API_URL");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081/");

        let config = TelegramConfig::load("MHSBOT_TEST_TOKEN", None).unwrap();
        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.api_base(), "http://127.0.0.1:8081");
        assert!(config.validate().is_ok());

        env::remove_var("TELOXIDE_API_URL");
        env::remove_var("MHSBOT_TEST_TOKEN");
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.telegram_api_url = Some("not a url".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_base_config_defaults() {
        env::remove_var("ALLOWED_USERS_FILE");
        env::remove_var("USER_LOGS_FILE");
        env::remove_var("LOG_FILE");

        let base = BaseConfig::load();
        assert_eq!(base.allowed_users_file, "allowed_users.json");
        assert_eq!(base.user_logs_file, "user_logs.json");
        assert_eq!(base.log_file, "logs/mhsbot.log");
    }
}
