//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat (private, group, supergroup or channel) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// `private`, `group`, `supergroup` or `channel`.
    pub chat_type: String,
    pub title: Option<String>,
}

impl Chat {
    /// A private chat with the given id (private chat ids equal the user id).
    pub fn private(id: i64) -> Self {
        Self {
            id,
            chat_type: "private".to_string(),
            title: None,
        }
    }
}
