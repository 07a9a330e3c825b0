use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use super::{ApplicationLogEntry, AuditLog};
use crate::errors::AppError;

/// `application_log` as a keyed document table. JSON payloads live in JSONB columns.
pub const CREATE_APPLICATION_LOG: &str = r#"
    CREATE TABLE IF NOT EXISTS application_log (
        job_id          TEXT PRIMARY KEY,
        status          TEXT NOT NULL,
        score           DOUBLE PRECISION NOT NULL,
        reason          TEXT,
        gemini_details  JSONB,
        job_data        JSONB,
        "timestamp"     TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

/// Every column is replaced on conflict, so a resubmitted job never keeps
/// fields from its previous decision.
const UPSERT_ENTRY: &str = r#"
    INSERT INTO application_log
        (job_id, status, score, reason, gemini_details, job_data, "timestamp")
    VALUES ($1, $2, $3, $4, $5, $6, now())
    ON CONFLICT (job_id) DO UPDATE SET
        status         = EXCLUDED.status,
        score          = EXCLUDED.score,
        reason         = EXCLUDED.reason,
        gemini_details = EXCLUDED.gemini_details,
        job_data       = EXCLUDED.job_data,
        "timestamp"    = EXCLUDED."timestamp"
    RETURNING "timestamp"
"#;

#[derive(Clone)]
pub struct PgAuditLog {
    pool: PgPool,
}

impl PgAuditLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLog for PgAuditLog {
    async fn write(
        &self,
        job_id: &str,
        entry: &ApplicationLogEntry,
    ) -> Result<DateTime<Utc>, AppError> {
        let score = entry.score.as_f64().ok_or_else(|| {
            AppError::Persistence(format!("score {} has no float form", entry.score))
        })?;

        let written_at: DateTime<Utc> = sqlx::query_scalar(UPSERT_ENTRY)
            .bind(job_id)
            .bind(entry.status.as_str())
            .bind(score)
            .bind(entry.reason.as_deref())
            .bind(entry.gemini_details.as_ref().map(Json))
            .bind(entry.job_data.as_ref().map(Json))
            .fetch_one(&self.pool)
            .await?;

        Ok(written_at)
    }
}
