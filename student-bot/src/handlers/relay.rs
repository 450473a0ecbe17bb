//! Catch-all for non-command messages: pending search text, otherwise relayed to the admin.

use async_trait::async_trait;
use mhsbot_core::{Event, Handler, HandlerResponse, Message, Result};
use tracing::{debug, error, instrument, warn};

use super::{search, StudentContext};
use crate::messages;

pub struct MessageRelayHandler {
    ctx: StudentContext,
}

impl MessageRelayHandler {
    pub fn new(ctx: StudentContext) -> Self {
        Self { ctx }
    }

    async fn on_message(&self, message: &Message) -> Result<()> {
        let user = &message.user;
        if self.ctx.sessions.take_waiting(user.id).await {
            return search::search(&self.ctx, message, &message.content).await;
        }

        let label = messages::message_label(message);
        debug!(user_id = user.id, label = %label, "Classified message");

        if !self.ctx.allow_list.is_allowed(user.id).await {
            warn!(user_id = user.id, "Message from user not in allow-list");
            return self.ctx.bot.reply_to(message, messages::REFUSAL).await;
        }

        self.ctx.notifier.notify_admin(user, &label).await;
        Ok(())
    }
}

#[async_trait]
impl Handler for MessageRelayHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Some(message) = event.as_message() else {
            return Ok(HandlerResponse::Continue);
        };
        if message.command().is_some() {
            return Ok(HandlerResponse::Continue);
        }

        if let Err(e) = self.on_message(message).await {
            error!(error = %e, user_id = message.user.id, "Message handling failed");
            self.ctx
                .bot
                .reply_to(message, &messages::error_reply(&e))
                .await?;
        }
        Ok(HandlerResponse::Stop)
    }
}
