//! Search flow shared by `/cari <query>` and the "waiting for search text" reply.

use mhsbot_core::{Chat, Message, Outgoing, Result};
use tracing::{info, warn};

use super::{directory_error, StudentContext};
use crate::directory::DirectoryError;
use crate::messages;

/// Permission check, then either the prompt (no query) or a directory lookup.
pub(super) async fn search(ctx: &StudentContext, message: &Message, query: &str) -> Result<()> {
    let user_id = message.user.id;
    if !ctx.allow_list.is_allowed(user_id).await {
        warn!(user_id, "Search denied, user not in allow-list");
        ctx.bot
            .send(&message.chat, Outgoing::html(messages::RESTRICTED))
            .await?;
        return Ok(());
    }

    let query = query.trim();
    if query.is_empty() {
        ctx.bot
            .send(
                &message.chat,
                Outgoing::plain(messages::SEARCH_PROMPT).with_force_reply(),
            )
            .await?;
        ctx.sessions.mark_waiting(user_id).await;
        return Ok(());
    }

    info!(user_id, query, "Searching students");
    run_lookup(ctx, &message.chat, query).await
}

async fn run_lookup(ctx: &StudentContext, chat: &Chat, query: &str) -> Result<()> {
    let progress_id = ctx
        .bot
        .send(chat, Outgoing::plain(messages::progress_text(0)))
        .await?;

    let results = match ctx.directory.search(query).await {
        Ok(results) => results,
        Err(DirectoryError::Unavailable) => {
            return ctx
                .bot
                .send_message(chat, messages::SEARCH_MAINTENANCE)
                .await;
        }
        Err(e) => return Err(directory_error(e)),
    };

    ctx.bot
        .edit(chat, &progress_id, Outgoing::plain(messages::progress_text(10)))
        .await?;

    let (text, keyboard) = if results.is_empty() {
        messages::not_found(query)
    } else {
        messages::search_results(query, &results)
    };
    info!(query, found = results.len(), "Search finished");
    ctx.bot
        .send(chat, Outgoing::html(text).with_keyboard(keyboard))
        .await?;
    Ok(())
}
