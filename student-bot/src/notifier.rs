//! Admin notifications: posts user activity to the admin chat through the admin bot's token.
//!
//! Uses a raw Bot API call (`POST {api}/bot{token}/sendMessage`) so the student bot never needs a
//! second teloxide client. Failures are logged and swallowed.

use std::time::Duration;

use async_trait::async_trait;
use mhsbot_core::User;
use reqwest::Client;
use serde::Serialize;
use teloxide::utils::html::escape;
use thiserror::Error;
use tracing::{error, info, instrument};

/// Total timeout for one notification request.
pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(30);

/// Notification failure. Never carries the request URL, which holds the bot token.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
    #[error("Telegram returned {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        NotifyError::Http(e.without_url())
    }
}

/// Tells the admin about a user's message. Never fails from the caller's point of view.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_admin(&self, user: &User, label: &str);
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    parse_mode: &'a str,
}

/// [`Notifier`] that calls the Bot API's sendMessage with the admin bot token.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: Client,
    api_base: String,
    admin_bot_token: String,
    admin_chat_id: i64,
}

impl HttpNotifier {
    /// `api_base` is e.g. `https://api.telegram.org` (no trailing slash).
    pub fn new(
        api_base: impl Into<String>,
        admin_bot_token: impl Into<String>,
        admin_chat_id: i64,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(NOTIFY_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            admin_bot_token: admin_bot_token.into(),
            admin_chat_id,
        })
    }

    /// Sends `text` (HTML) to the admin chat.
    pub async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.admin_bot_token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: self.admin_chat_id,
                text,
                parse_mode: "HTML",
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    #[instrument(skip(self, user, label), fields(user_id = user.id))]
    async fn notify_admin(&self, user: &User, label: &str) {
        let text = notification_text(user, label, &storage::now_timestamp());
        match self.send(&text).await {
            Ok(()) => info!(admin_chat_id = self.admin_chat_id, "Notification sent to admin"),
            Err(e) => error!(error = %e, "Failed to send notification to admin"),
        }
    }
}

/// HTML body of an admin notification.
pub fn notification_text(user: &User, label: &str, timestamp: &str) -> String {
    format!(
        "📱 <b>Pesan Baru dari User</b>\n\n\
         ⏰ Waktu: {}\n\
         👤 User ID: <code>{}</code>\n\
         Username: @{}\n\
         Pesan: {}",
        timestamp,
        user.id,
        escape(user.username_or_unknown()),
        escape(label)
    )
}
