//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Username, or `Unknown` when the account has none. This is what gets written to the stores.
    pub fn username_or_unknown(&self) -> &str {
        self.username.as_deref().unwrap_or("Unknown")
    }

    /// First and last name joined; falls back to the username, then the id.
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !name.is_empty() {
            name
        } else if let Some(username) = &self.username {
            username.clone()
        } else {
            self.id.to_string()
        }
    }
}
