//! Student bot handlers. All share one [`StudentContext`]; each reports its own failures to the
//! chat as `❌ Terjadi kesalahan: ...` and stops the chain.

mod callback;
mod commands;
mod relay;
mod search;

pub use callback::SearchCallbackHandler;
pub use commands::StudentCommandHandler;
pub use relay::MessageRelayHandler;

use std::sync::Arc;

use mhsbot_core::{Bot, BotError};
use storage::{AllowListStore, StorageError};

use crate::directory::{DirectoryError, StudentDirectory};
use crate::notifier::Notifier;
use crate::session::SearchSessions;

/// Dependencies shared by the student bot handlers.
#[derive(Clone)]
pub struct StudentContext {
    pub bot: Arc<dyn Bot>,
    pub allow_list: Arc<dyn AllowListStore>,
    pub directory: Arc<dyn StudentDirectory>,
    pub notifier: Arc<dyn Notifier>,
    pub sessions: SearchSessions,
    pub registration_token: String,
}

pub(crate) fn storage_error(e: StorageError) -> BotError {
    BotError::Storage(e.to_string())
}

pub(crate) fn directory_error(e: DirectoryError) -> BotError {
    BotError::Directory(e.to_string())
}
