//! Inline button callbacks: `mhs_<id>` (student detail) and `cari_lagi` (search again).

use async_trait::async_trait;
use mhsbot_core::{CallbackQuery, Chat, Event, Handler, HandlerResponse, Outgoing, Result};
use tracing::{debug, error, instrument, warn};

use super::{directory_error, StudentContext};
use crate::directory::DirectoryError;
use crate::messages;

/// Handles button presses. The dispatcher has already answered the callback query.
pub struct SearchCallbackHandler {
    ctx: StudentContext,
}

impl SearchCallbackHandler {
    pub fn new(ctx: StudentContext) -> Self {
        Self { ctx }
    }

    /// Edits the message carrying the button; sends a new message to the user when the original
    /// is no longer accessible.
    async fn respond(&self, query: &CallbackQuery, message: Outgoing) -> Result<()> {
        match (&query.chat, &query.message_id) {
            (Some(chat), Some(message_id)) => self.ctx.bot.edit(chat, message_id, message).await,
            _ => self
                .ctx
                .bot
                .send(&Chat::private(query.user.id), message)
                .await
                .map(|_| ()),
        }
    }

    async fn on_callback(&self, query: &CallbackQuery) -> Result<()> {
        let user_id = query.user.id;
        if !self.ctx.allow_list.is_allowed(user_id).await {
            warn!(user_id, data = %query.data, "Callback denied, user not in allow-list");
            return self
                .respond(query, Outgoing::html(messages::RESTRICTED))
                .await;
        }

        if let Some(student_id) = query.data.strip_prefix(messages::STUDENT_PREFIX) {
            let reply = match self.ctx.directory.detail(student_id).await {
                Ok(record) => {
                    let (text, keyboard) = messages::student_detail(&record);
                    Outgoing::html(text).with_keyboard(keyboard)
                }
                Err(DirectoryError::Unavailable) => Outgoing::plain(messages::DETAIL_MAINTENANCE),
                Err(e) => return Err(directory_error(e)),
            };
            return self.respond(query, reply).await;
        }

        if query.data == messages::CARI_LAGI {
            self.ctx.sessions.clear(user_id).await;
            self.respond(query, Outgoing::html(messages::SEARCH_AGAIN_PROMPT))
                .await?;
            self.ctx.sessions.mark_waiting(user_id).await;
            return Ok(());
        }

        debug!(user_id, data = %query.data, "Unknown callback data ignored");
        Ok(())
    }
}

#[async_trait]
impl Handler for SearchCallbackHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Some(query) = event.as_callback() else {
            return Ok(HandlerResponse::Continue);
        };

        if let Err(e) = self.on_callback(query).await {
            error!(error = %e, user_id = query.user.id, data = %query.data, "Callback failed");
            self.respond(query, Outgoing::plain(messages::error_reply(&e)))
                .await?;
        }
        Ok(HandlerResponse::Stop)
    }
}
