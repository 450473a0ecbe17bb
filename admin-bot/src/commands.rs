//! Admin commands: /start, /list, /add, /remove, /logs, /getid (and forwarded messages), /chatid.
//! Runs behind [`crate::AdminGate`], so every message reaching a command here is from the admin.

use std::sync::Arc;

use async_trait::async_trait;
use mhsbot_core::{
    Bot, BotError, Command, Event, Handler, HandlerResponse, Message, Outgoing, Result, User,
};
use storage::{ActivityLogStore, AddOutcome, AllowListStore, AllowedUser, LogEntry, StorageError};
use tracing::{error, info, instrument};

use crate::messages;

fn storage_error(e: StorageError) -> BotError {
    BotError::Storage(e.to_string())
}

/// Executes admin commands against the injected stores. Failures are reported to the chat as
/// `❌ Terjadi kesalahan: ...` and never escape to the dispatcher.
pub struct AdminCommandHandler {
    bot: Arc<dyn Bot>,
    allow_list: Arc<dyn AllowListStore>,
    activity: Arc<dyn ActivityLogStore>,
}

impl AdminCommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        allow_list: Arc<dyn AllowListStore>,
        activity: Arc<dyn ActivityLogStore>,
    ) -> Self {
        Self {
            bot,
            allow_list,
            activity,
        }
    }

    async fn log_activity(&self, user: &User, action: &str, details: String) -> Result<()> {
        self.activity
            .append(LogEntry::new(
                user.id,
                user.username_or_unknown(),
                action,
                details,
            ))
            .await
            .map_err(storage_error)
    }

    /// Returns false for commands this bot does not know.
    async fn run_command(&self, message: &Message, cmd: &Command) -> Result<bool> {
        info!(user_id = message.user.id, command = %cmd.name, "Admin command");
        match cmd.name.as_str() {
            "start" => self.bot.reply_to(message, messages::HELP).await?,
            "list" => self.list_users(message).await?,
            "add" => self.add_user(message, cmd).await?,
            "remove" => self.remove_user(message, cmd).await?,
            "logs" => self.view_logs(message).await?,
            "getid" => self.get_user_id(message).await?,
            "chatid" => {
                self.bot
                    .send(&message.chat, Outgoing::html(messages::chat_id(message.chat.id)))
                    .await?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    async fn list_users(&self, message: &Message) -> Result<()> {
        let list = self.allow_list.load().await;
        match messages::format_user_list(&list) {
            Some(text) => {
                self.bot.send(&message.chat, Outgoing::html(text)).await?;
            }
            None => self.bot.reply_to(message, messages::NO_USERS).await?,
        }
        Ok(())
    }

    async fn add_user(&self, message: &Message, cmd: &Command) -> Result<()> {
        let Some(raw_id) = cmd.first_arg() else {
            return self.bot.reply_to(message, messages::ADD_USAGE).await;
        };
        let Ok(new_id) = raw_id.parse::<i64>() else {
            return self.bot.reply_to(message, messages::INVALID_ID).await;
        };
        let username = cmd
            .args
            .get(1)
            .map(|name| name.trim_start_matches('@').to_string())
            .filter(|name| !name.is_empty());

        let outcome = self
            .allow_list
            .add(AllowedUser::new(new_id, username))
            .await
            .map_err(storage_error)?;
        if outcome == AddOutcome::AlreadyPresent {
            return self.bot.reply_to(message, messages::ALREADY_REGISTERED).await;
        }

        self.log_activity(&message.user, "add_user", format!("Added user ID: {}", new_id))
            .await?;
        info!(admin_id = message.user.id, user_id = new_id, "User added to allow-list");
        self.bot
            .reply_to(message, &messages::user_added(new_id))
            .await
    }

    async fn remove_user(&self, message: &Message, cmd: &Command) -> Result<()> {
        let Some(raw_id) = cmd.first_arg() else {
            return self.bot.reply_to(message, messages::REMOVE_USAGE).await;
        };
        let Ok(target) = raw_id.parse::<i64>() else {
            return self.bot.reply_to(message, messages::INVALID_ID).await;
        };

        let removed = self.allow_list.remove(target).await.map_err(storage_error)?;
        self.log_activity(
            &message.user,
            "remove_user",
            format!("Removed user ID: {}", target),
        )
        .await?;
        info!(admin_id = message.user.id, user_id = target, removed, "User removed from allow-list");
        self.bot
            .reply_to(message, &messages::user_removed(target))
            .await
    }

    async fn view_logs(&self, message: &Message) -> Result<()> {
        let recent = self.activity.recent(messages::RECENT_LOGS).await;
        if recent.is_empty() {
            return self.bot.reply_to(message, messages::NO_LOGS).await;
        }
        let text = messages::format_logs(&recent);
        self.log_activity(&message.user, "view_logs", "Viewed recent logs".to_string())
            .await?;
        self.bot.reply_to(message, &text).await
    }

    async fn get_user_id(&self, message: &Message) -> Result<()> {
        let info = messages::describe_origin(message.forward_origin.as_ref());
        self.log_activity(&message.user, "get_user_id", format!("Got user info: {}", info))
            .await?;
        self.bot
            .reply_to(message, &messages::sender_info(&info))
            .await
    }
}

#[async_trait]
impl Handler for AdminCommandHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Some(message) = event.as_message() else {
            return Ok(HandlerResponse::Continue);
        };

        let result = match message.command() {
            Some(cmd) => self.run_command(message, &cmd).await,
            None if message.is_forwarded() => self.get_user_id(message).await.map(|_| true),
            None => return Ok(HandlerResponse::Continue),
        };

        match result {
            Ok(true) => Ok(HandlerResponse::Stop),
            Ok(false) => Ok(HandlerResponse::Continue),
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Admin command failed");
                self.bot
                    .reply_to(message, &messages::error_reply(&e))
                    .await?;
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
