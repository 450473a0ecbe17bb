//! # admin_bot
//!
//! Admin bot: one configured admin manages the allow-list (`/list`, `/add`, `/remove`), reads the
//! activity log (`/logs`) and looks up ids (`/getid`, forwarded messages, `/chatid`).
//! **Public API:** [`AdminConfig`], [`build_handler_chain`], [`run`].

mod commands;
mod config;
mod gate;
pub mod messages;

pub use commands::AdminCommandHandler;
pub use config::AdminConfig;
pub use gate::AdminGate;

use std::sync::Arc;

use anyhow::Result;
use handler_chain::{HandlerChain, LoggingHandler};
use mhsbot_core::Bot;
use mhsbot_telegram::{run_dispatcher, TelegramBotAdapter};
use storage::{ActivityLogStore, AllowListStore};
use tokio::sync::watch;
use tracing::{info, instrument};

/// Logging → admin gate → command handler.
pub fn build_handler_chain(
    admin_id: i64,
    bot: Arc<dyn Bot>,
    allow_list: Arc<dyn AllowListStore>,
    activity: Arc<dyn ActivityLogStore>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(AdminGate::new(admin_id, bot.clone())))
        .add_handler(Arc::new(AdminCommandHandler::new(bot, allow_list, activity)))
}

/// Runs the admin bot until `shutdown` fires.
#[instrument(skip_all)]
pub async fn run(
    config: AdminConfig,
    allow_list: Arc<dyn AllowListStore>,
    activity: Arc<dyn ActivityLogStore>,
    shutdown: watch::Receiver<bool>,
) -> Result<()> {
    config.validate()?;
    info!(
        admin_id = config.admin_id,
        token = %mhsbot_core::logger::mask_secret(&config.telegram.bot_token),
        "Starting admin bot"
    );

    let teloxide_bot = config.telegram.build_bot();
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let chain = build_handler_chain(config.admin_id, bot, allow_list, activity);

    run_dispatcher("admin", teloxide_bot, chain, shutdown).await
}
