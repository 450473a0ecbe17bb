//! Single-admin gate. Refuses commands and forwarded messages from anyone but the configured admin.

use std::sync::Arc;

use async_trait::async_trait;
use mhsbot_core::{Bot, Event, Handler, Result};
use tracing::{instrument, warn};

use crate::messages;

/// Stops the chain (after sending the refusal text) when a non-admin sends a command or a
/// forwarded message. Other chatter passes through untouched.
pub struct AdminGate {
    admin_id: i64,
    bot: Arc<dyn Bot>,
}

impl AdminGate {
    pub fn new(admin_id: i64, bot: Arc<dyn Bot>) -> Self {
        Self { admin_id, bot }
    }
}

#[async_trait]
impl Handler for AdminGate {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        let Some(message) = event.as_message() else {
            return Ok(true);
        };
        if message.user.id == self.admin_id {
            return Ok(true);
        }
        if message.command().is_none() && !message.is_forwarded() {
            return Ok(true);
        }

        warn!(
            user_id = message.user.id,
            username = %message.user.username_or_unknown(),
            "Unauthorized admin command"
        );
        self.bot.reply_to(message, messages::REFUSAL).await?;
        Ok(false)
    }
}
