//! Student directory contract. The bot only knows this trait; the lookup backend plugs in behind it.

use async_trait::async_trait;
use thiserror::Error;

/// One search hit, enough to render a result button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSummary {
    /// Backend id, used as `mhs_<id>` callback data.
    pub id: String,
    pub name: String,
    pub nim: String,
    pub university: String,
    pub study_program: String,
}

/// Full record shown when a result button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub nim: String,
    pub university: String,
    pub study_program: String,
    pub degree: Option<String>,
    pub status: Option<String>,
    pub entry_year: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The backend is switched off; users get the maintenance text.
    #[error("student directory is unavailable")]
    Unavailable,
    #[error("student directory error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait StudentDirectory: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<StudentSummary>, DirectoryError>;

    async fn detail(&self, id: &str) -> Result<StudentRecord, DirectoryError>;
}

/// The shipped backend: every lookup is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaintenanceDirectory;

#[async_trait]
impl StudentDirectory for MaintenanceDirectory {
    async fn search(&self, _query: &str) -> Result<Vec<StudentSummary>, DirectoryError> {
        Err(DirectoryError::Unavailable)
    }

    async fn detail(&self, _id: &str) -> Result<StudentRecord, DirectoryError> {
        Err(DirectoryError::Unavailable)
    }
}
