//! Dispatcher runner: converts teloxide messages and callback queries to core [`Event`]s and hands
//! them to the [`HandlerChain`]. Stops when the shutdown channel fires.

use anyhow::Result;
use handler_chain::HandlerChain;
use mhsbot_core::{Event, ToCoreEvent};
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::RequestError;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Sending side of the shutdown channel; `send(true)` stops every dispatcher subscribed to it.
pub type ShutdownSender = watch::Sender<bool>;

/// Creates a shutdown channel. Pass receivers to [`run_dispatcher`].
pub fn shutdown_channel() -> (ShutdownSender, watch::Receiver<bool>) {
    watch::channel(false)
}

fn schema() -> UpdateHandler<RequestError> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback))
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    let event = TelegramMessageWrapper(&msg).to_core();
    run_chain(&chain, event).await;
    Ok(())
}

async fn on_callback(bot: Bot, query: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }
    let event = TelegramCallbackWrapper(&query).to_core();
    run_chain(&chain, event).await;
    Ok(())
}

async fn run_chain(chain: &HandlerChain, event: Event) {
    let user_id = event.user().id;
    debug!(user_id, kind = event.kind(), "step: processing event (handler chain started)");
    if let Err(e) = chain.handle(&event).await {
        error!(error = %e, user_id, "Handler chain failed");
    }
}

/// Runs a long-polling dispatcher for `bot` until `shutdown` turns true.
/// Calls get_me() first so a bad token shows up in the log with the bot name.
#[instrument(skip(bot, handler_chain, shutdown))]
pub async fn run_dispatcher(
    name: &'static str,
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            bot = name,
            username = me.user.username.as_deref().unwrap_or("unknown"),
            "Bot identity resolved"
        ),
        Err(e) => warn!(bot = name, error = %e, "getMe failed"),
    }

    let mut dispatcher = Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![handler_chain])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .build();

    let token = dispatcher.shutdown_token();
    let watcher = tokio::spawn(async move {
        if shutdown.wait_for(|stop| *stop).await.is_err() {
            return;
        }
        info!(bot = name, "Shutdown requested");
        loop {
            match token.shutdown() {
                Ok(done) => {
                    done.await;
                    break;
                }
                // Dispatcher not polling yet.
                Err(_) => tokio::time::sleep(std::time::Duration::from_millis(100)).await,
            }
        }
    });

    info!(bot = name, "Dispatcher started");
    dispatcher.dispatch().await;
    watcher.abort();
    info!(bot = name, "Dispatcher stopped");
    Ok(())
}
