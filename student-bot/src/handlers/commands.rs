//! `/start`, `/regist <token>` and `/cari <query>`.

use async_trait::async_trait;
use mhsbot_core::{Command, Event, Handler, HandlerResponse, Message, Result};
use storage::{AddOutcome, AllowedUser};
use tracing::{debug, error, info, instrument, warn};

use super::{search, storage_error, StudentContext};
use crate::messages;

pub struct StudentCommandHandler {
    ctx: StudentContext,
}

impl StudentCommandHandler {
    pub fn new(ctx: StudentContext) -> Self {
        Self { ctx }
    }

    /// Returns false for commands this bot does not know.
    async fn run_command(&self, message: &Message, cmd: &Command) -> Result<bool> {
        match cmd.name.as_str() {
            "start" => {
                self.ctx.sessions.clear(message.user.id).await;
                self.ctx.bot.reply_to(message, messages::START_HELP).await?;
            }
            "regist" => self.register(message, cmd).await?,
            "cari" => search::search(&self.ctx, message, &cmd.args_joined()).await?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    async fn register(&self, message: &Message, cmd: &Command) -> Result<()> {
        let user = &message.user;
        let supplied = cmd.args_joined().to_lowercase();
        if supplied.is_empty() || supplied != self.ctx.registration_token.to_lowercase() {
            warn!(user_id = user.id, "Registration with wrong token");
            return self.ctx.bot.reply_to(message, messages::WRONG_TOKEN).await;
        }

        let record = AllowedUser::new(user.id, Some(user.username_or_unknown().to_string()));
        let outcome = self
            .ctx
            .allow_list
            .add(record)
            .await
            .map_err(storage_error)?;
        match outcome {
            AddOutcome::AlreadyPresent => {
                self.ctx
                    .bot
                    .reply_to(message, messages::ALREADY_REGISTERED)
                    .await
            }
            AddOutcome::Added => {
                info!(user_id = user.id, username = %user.username_or_unknown(), "User registered");
                self.ctx.bot.reply_to(message, messages::REGISTERED).await
            }
        }
    }
}

#[async_trait]
impl Handler for StudentCommandHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Some(message) = event.as_message() else {
            return Ok(HandlerResponse::Continue);
        };
        let Some(cmd) = message.command() else {
            return Ok(HandlerResponse::Continue);
        };

        match self.run_command(message, &cmd).await {
            Ok(known) => {
                if !known {
                    debug!(command = %cmd.name, "Unknown command ignored");
                }
                // Commands are never relayed to the admin.
                Ok(HandlerResponse::Stop)
            }
            Err(e) => {
                error!(error = %e, user_id = message.user.id, command = %cmd.name, "Command failed");
                self.ctx
                    .bot
                    .reply_to(message, &messages::error_reply(&e))
                    .await?;
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
