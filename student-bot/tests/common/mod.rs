use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mhsbot_core::User;
use student_bot::{
    DirectoryError, Notifier, StudentDirectory, StudentRecord, StudentSummary,
};

#[allow(dead_code)]
pub fn user(id: i64, username: Option<&str>) -> User {
    User {
        id,
        username: username.map(str::to_string),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

/// Records every notification instead of calling Telegram.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(i64, String)>>,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn labels(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|(_, l)| l.clone()).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_admin(&self, user: &User, label: &str) {
        self.sent.lock().unwrap().push((user.id, label.to_string()));
    }
}

/// Directory with a fixed data set, for exercising the result rendering.
#[allow(dead_code)]
pub struct FixedDirectory {
    pub students: Vec<StudentRecord>,
    pub queries: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl FixedDirectory {
    pub fn new(students: Vec<StudentRecord>) -> Self {
        Self {
            students,
            queries: Arc::default(),
        }
    }
}

#[async_trait]
impl StudentDirectory for FixedDirectory {
    async fn search(&self, query: &str) -> Result<Vec<StudentSummary>, DirectoryError> {
        self.queries.lock().unwrap().push(query.to_string());
        let needle = query.to_lowercase();
        Ok(self
            .students
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle) || s.nim == query)
            .map(|s| StudentSummary {
                id: s.id.clone(),
                name: s.name.clone(),
                nim: s.nim.clone(),
                university: s.university.clone(),
                study_program: s.study_program.clone(),
            })
            .collect())
    }

    async fn detail(&self, id: &str) -> Result<StudentRecord, DirectoryError> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| DirectoryError::Backend(format!("no student {}", id)))
    }
}

#[allow(dead_code)]
pub fn ahmad() -> StudentRecord {
    StudentRecord {
        id: "a1".to_string(),
        name: "Ahmad Fauzi".to_string(),
        nim: "2020123456".to_string(),
        university: "Universitas Indonesia".to_string(),
        study_program: "Teknik Informatika".to_string(),
        degree: Some("S1".to_string()),
        status: Some("Aktif".to_string()),
        entry_year: Some("2020".to_string()),
    }
}
