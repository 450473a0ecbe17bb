//! # student_bot
//!
//! Student search bot: `/start`, `/regist <token>`, `/cari <query>`, result buttons and a catch-all
//! that relays allowed users' messages to the admin chat. Lookups go through [`StudentDirectory`];
//! the shipped [`MaintenanceDirectory`] answers every lookup with the maintenance text.

mod config;
pub mod directory;
pub mod handlers;
pub mod messages;
mod notifier;
mod session;

pub use config::{StudentConfig, DEFAULT_REGISTRATION_TOKEN};
pub use directory::{DirectoryError, MaintenanceDirectory, StudentDirectory, StudentRecord, StudentSummary};
pub use handlers::StudentContext;
pub use notifier::{notification_text, HttpNotifier, Notifier, NotifyError, NOTIFY_TIMEOUT};
pub use session::SearchSessions;

use std::sync::Arc;

use anyhow::Result;
use handler_chain::{HandlerChain, LoggingHandler};
use handlers::{MessageRelayHandler, SearchCallbackHandler, StudentCommandHandler};
use mhsbot_core::logger::mask_secret;
use mhsbot_core::Bot;
use mhsbot_telegram::{run_dispatcher, TelegramBotAdapter};
use storage::AllowListStore;
use tokio::sync::watch;
use tracing::{info, instrument};

/// Logging → commands → callbacks → catch-all relay.
pub fn build_handler_chain(ctx: StudentContext) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StudentCommandHandler::new(ctx.clone())))
        .add_handler(Arc::new(SearchCallbackHandler::new(ctx.clone())))
        .add_handler(Arc::new(MessageRelayHandler::new(ctx)))
}

/// Runs the student bot with the given directory backend until `shutdown` fires.
#[instrument(skip_all)]
pub async fn run(
    config: StudentConfig,
    allow_list: Arc<dyn AllowListStore>,
    directory: Arc<dyn StudentDirectory>,
    shutdown: watch::Receiver<bool>,
) -> Result<()> {
    config.validate()?;
    info!(
        token = %mask_secret(&config.telegram.bot_token),
        admin_bot_token = %mask_secret(&config.admin_bot_token),
        admin_chat_id = config.admin_chat_id,
        "Starting student bot"
    );

    let notifier = HttpNotifier::new(
        config.telegram.api_base(),
        config.admin_bot_token.clone(),
        config.admin_chat_id,
    )?;
    let teloxide_bot = config.telegram.build_bot();
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let ctx = StudentContext {
        bot,
        allow_list,
        directory,
        notifier: Arc::new(notifier),
        sessions: SearchSessions::new(),
        registration_token: config.registration_token.clone(),
    };

    run_dispatcher("student", teloxide_bot, build_handler_chain(ctx), shutdown).await
}
