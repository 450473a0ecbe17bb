//! Storage crate: allow-list and activity-log persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – AllowedUser, AllowList, LogEntry
//! - [`repository`] – AllowListStore / ActivityLogStore traits
//! - [`json_store`] – JSON file implementations
//! - [`memory_store`] – in-memory implementations for tests

mod error;
mod json_file;
mod json_store;
mod memory_store;
mod models;
mod repository;


pub use error::StorageError;
pub use json_store::{JsonActivityLog, JsonAllowListStore};
pub use memory_store::{MemoryActivityLog, MemoryAllowList};
pub use models::{now_timestamp, AddOutcome, AllowList, AllowedUser, LogEntry, TIMESTAMP_FORMAT};
pub use repository::{ActivityLogStore, AllowListStore};
