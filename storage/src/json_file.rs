//! Whole-file JSON read/write shared by the JSON stores.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::StorageError;

/// A JSON file plus the lock that serializes read-modify-write cycles within this process.
#[derive(Debug)]
pub(crate) struct JsonFile {
    path: PathBuf,
    pub(crate) lock: Mutex<()>,
}

impl JsonFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file. Missing file, IO failure and invalid JSON all yield None.
    pub(crate) async fn read(&self) -> Option<Value> {
        match self.read_strict().await {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to load file, using empty store");
                None
            }
        }
    }

    /// Like [`JsonFile::read`], but only a missing file is `Ok(None)`; unreadable or invalid
    /// content is an error.
    pub(crate) async fn read_strict(&self) -> Result<Option<Value>, StorageError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "File does not exist, using empty store");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Writes `value` pretty-printed with 4-space indentation through a temp file and a rename.
    pub(crate) async fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), StorageError> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        value.serialize(&mut ser)?;

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).await?;
            }
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, &buf).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), bytes = buf.len(), "File written");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
