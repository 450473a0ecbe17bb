//! Storage error types.
//!
//! Writes can fail. Plain reads downgrade every problem to an empty store, but a read-modify-write
//! refuses to overwrite a log file it could not read.

use thiserror::Error;

/// Errors that can occur when writing a store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{path} is not a JSON array of log entries")]
    NotAnArray { path: String },
}
