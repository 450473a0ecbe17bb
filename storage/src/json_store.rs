//! JSON file stores: `allowed_users.json` and `user_logs.json`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::error::StorageError;
use crate::json_file::JsonFile;
use crate::models::{AddOutcome, AllowList, AllowedUser, LogEntry};
use crate::repository::{ActivityLogStore, AllowListStore};

/// Allow-list backed by a JSON file shaped `{ "users": [...] }`.
///
/// A bare array is accepted on load (and written back in the object shape on the next save).
/// Anything else loads as an empty list.
#[derive(Debug)]
pub struct JsonAllowListStore {
    file: JsonFile,
}

impl JsonAllowListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn read_list(&self) -> AllowList {
        match self.file.read().await {
            Some(value) => allow_list_from_value(value, self.file.path()),
            None => AllowList::default(),
        }
    }
}

/// Interprets a parsed allow-list file. Records that do not deserialize are kept aside in
/// [`AllowList::unparsed`] so the next write puts them back.
fn allow_list_from_value(value: Value, path: &Path) -> AllowList {
    let (records, extra) = match value {
        Value::Object(mut map) if map.contains_key("users") => match map.remove("users") {
            Some(Value::Array(records)) => (records, map),
            _ => {
                warn!(path = %path.display(), "'users' is not a list, using empty store");
                return AllowList::default();
            }
        },
        Value::Array(records) => {
            info!(path = %path.display(), "Converting list to dictionary structure");
            (records, Map::new())
        }
        _ => {
            warn!(path = %path.display(), "Invalid data structure, using empty store");
            return AllowList::default();
        }
    };

    let mut list = AllowList {
        extra,
        ..Default::default()
    };
    for record in records {
        match serde_json::from_value::<AllowedUser>(record.clone()) {
            Ok(user) => list.users.push(user),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Keeping unrecognized allow-list record as is");
                list.unparsed.push(record);
            }
        }
    }
    list
}

#[async_trait]
impl AllowListStore for JsonAllowListStore {
    async fn load(&self) -> AllowList {
        self.read_list().await
    }

    async fn save(&self, list: &AllowList) -> Result<(), StorageError> {
        let _guard = self.file.lock.lock().await;
        self.file.write(list).await
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn add(&self, user: AllowedUser) -> Result<AddOutcome, StorageError> {
        let _guard = self.file.lock.lock().await;
        let mut list = self.read_list().await;
        let outcome = list.insert(user);
        if outcome == AddOutcome::Added {
            self.file.write(&list).await?;
            info!(total = list.len(), "Allowed user added");
        }
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn remove(&self, user_id: i64) -> Result<usize, StorageError> {
        let _guard = self.file.lock.lock().await;
        let mut list = self.read_list().await;
        let removed = list.remove(user_id);
        self.file.write(&list).await?;
        info!(removed, total = list.len(), "Allowed user removed");
        Ok(removed)
    }
}

/// Activity log backed by a JSON array file.
#[derive(Debug)]
pub struct JsonActivityLog {
    file: JsonFile,
}

impl JsonActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Raw records in file order. A missing file is empty; anything unreadable is an error.
    async fn read_records(&self) -> Result<Vec<Value>, StorageError> {
        match self.file.read_strict().await? {
            None => Ok(Vec::new()),
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(StorageError::NotAnArray {
                path: self.file.path().display().to_string(),
            }),
        }
    }

    /// Entries that deserialize; the rest are skipped with a warning.
    async fn read_entries(&self) -> Vec<LogEntry> {
        let records = match self.read_records().await {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.file.path().display(), error = %e, "Invalid log file, using empty log");
                return Vec::new();
            }
        };
        records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<LogEntry>(record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(path = %self.file.path().display(), error = %e, "Skipping malformed log entry");
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl ActivityLogStore for JsonActivityLog {
    async fn load(&self) -> Vec<LogEntry> {
        self.read_entries().await
    }

    async fn save(&self, entries: &[LogEntry]) -> Result<(), StorageError> {
        let _guard = self.file.lock.lock().await;
        self.file.write(entries).await
    }

    #[instrument(skip(self, entry), fields(action = %entry.action, user_id = entry.user_id))]
    async fn append(&self, entry: LogEntry) -> Result<(), StorageError> {
        let _guard = self.file.lock.lock().await;
        // Unparseable records are carried over untouched; an unreadable file is never replaced.
        let mut records = self.read_records().await?;
        records.push(serde_json::to_value(&entry)?);
        self.file.write(&records).await
    }
}
