//! Handler that logs every event in before() and the final response in after().

use async_trait::async_trait;
use mhsbot_core::{Event, Handler, HandlerResponse, Result};
use tracing::{debug, info, instrument};

/// Logs each event in before() and the response in after(); always continues.
#[derive(Debug, Clone, Default)]
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        let user = event.user();
        match event {
            Event::Message(message) => info!(
                user_id = user.id,
                username = %user.username_or_unknown(),
                chat_id = message.chat.id,
                message_type = message.message_type(),
                forwarded = message.is_forwarded(),
                message_content = %message.content,
                "Received message"
            ),
            Event::Callback(query) => info!(
                user_id = user.id,
                username = %user.username_or_unknown(),
                data = %query.data,
                "Received callback"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &Event, response: &HandlerResponse) -> Result<()> {
        debug!(
            user_id = event.user().id,
            response = ?response,
            "Processed event"
        );
        Ok(())
    }
}
