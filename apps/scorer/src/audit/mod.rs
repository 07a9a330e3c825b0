//! Audit log — one decision record per `job_id`, overwritten on resubmission.
//!
//! `AppState` holds an `Arc<dyn AuditLog>`; production uses `PgAuditLog`.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::errors::AppError;
use crate::scoring::gate::Decision;
use crate::scoring::models::{JobPosting, ScoreResult};

pub use postgres::PgAuditLog;

pub const COLLECTION: &str = "application_log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Rejected,
    ReadyForSubmission,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Rejected => "REJECTED",
            ApplicationStatus::ReadyForSubmission => "READY_FOR_SUBMISSION",
        }
    }
}

/// The document written for a job. The write timestamp is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationLogEntry {
    pub status: ApplicationStatus,
    pub score: Number,
    pub reason: Option<String>,
    pub gemini_details: Option<ScoreResult>,
    pub job_data: Option<JobPosting>,
}

impl ApplicationLogEntry {
    /// Builds the record for a gate decision. Details and job data are only
    /// kept for accepted postings.
    pub fn from_decision(decision: &Decision, result: &ScoreResult, posting: &JobPosting) -> Self {
        let (gemini_details, job_data) = if decision.persist_details {
            (Some(result.clone()), Some(posting.clone()))
        } else {
            (None, None)
        };

        Self {
            status: decision.status,
            score: decision.score.clone(),
            reason: decision.reason.map(str::to_string),
            gemini_details,
            job_data,
        }
    }
}

#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Upserts the entry under `job_id`, fully replacing any previous one.
    /// Returns the server-assigned write timestamp.
    async fn write(
        &self,
        job_id: &str,
        entry: &ApplicationLogEntry,
    ) -> Result<DateTime<Utc>, AppError>;
}
