use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{ApplicationLogEntry, AuditLog};
use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntry {
    pub entry: ApplicationLogEntry,
    pub timestamp: DateTime<Utc>,
}

/// In-process keyed store with the same overwrite semantics as `PgAuditLog`.
#[derive(Default)]
pub struct InMemoryAuditLog {
    documents: Mutex<HashMap<String, StoredEntry>>,
    writes: Mutex<usize>,
}

impl InMemoryAuditLog {
    pub fn get(&self, job_id: &str) -> Option<StoredEntry> {
        self.documents.lock().unwrap().get(job_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn write(
        &self,
        job_id: &str,
        entry: &ApplicationLogEntry,
    ) -> Result<DateTime<Utc>, AppError> {
        let timestamp = Utc::now();
        self.documents.lock().unwrap().insert(
            job_id.to_string(),
            StoredEntry {
                entry: entry.clone(),
                timestamp,
            },
        );
        *self.writes.lock().unwrap() += 1;
        Ok(timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::ApplicationStatus;

    fn rejected(score: f64) -> ApplicationLogEntry {
        ApplicationLogEntry {
            status: ApplicationStatus::Rejected,
            score: serde_json::Number::from_f64(score).unwrap(),
            reason: Some("Score below 80% threshold".into()),
            gemini_details: None,
            job_data: None,
        }
    }

    #[tokio::test]
    async fn test_second_write_replaces_first() {
        let log = InMemoryAuditLog::default();
        log.write("j1", &rejected(10.0)).await.unwrap();
        log.write("j1", &rejected(20.0)).await.unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(log.write_count(), 2);
        assert_eq!(log.get("j1").unwrap().entry.score.as_f64(), Some(20.0));
    }

    #[tokio::test]
    async fn test_identical_writes_leave_one_document() {
        let log = InMemoryAuditLog::default();
        let entry = rejected(42.0);
        log.write("j1", &entry).await.unwrap();
        log.write("j1", &entry).await.unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(log.get("j1").unwrap().entry, entry);
    }

    #[tokio::test]
    async fn test_distinct_jobs_do_not_interfere() {
        let log = InMemoryAuditLog::default();
        log.write("j1", &rejected(10.0)).await.unwrap();
        log.write("j2", &rejected(20.0)).await.unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.get("j1").unwrap().entry.score.as_f64(), Some(10.0));
    }
}
