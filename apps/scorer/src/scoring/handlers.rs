//! Axum route handler for the scoring endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Number;
use tracing::{debug, warn};

use crate::audit::ApplicationStatus;
use crate::errors::AppError;
use crate::scoring::models::{JobPosting, ScoreRequest, ScoreResult};
use crate::scoring::pipeline::evaluate_posting;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ScoreResponse {
    Rejected { score: Number },
    Success { score: Number, details: ScoreResult },
}

/// POST /
///
/// Scores a job posting against the candidate profile and records the
/// decision under its `job_id`.
pub async fn handle_score_job(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected scoring request body: {rejection}");
        AppError::Validation(format!("Invalid JSON body: {}", rejection.body_text()))
    })?;

    let posting = JobPosting::try_from(request)?;

    let evaluation = evaluate_posting(
        state.model.as_ref(),
        state.audit_log.as_ref(),
        &state.context,
        &posting,
    )
    .await?;

    debug!(
        job_id = %posting.job_id,
        written_at = %evaluation.written_at,
        "Decision recorded"
    );

    let score = evaluation.decision.score;
    let response = match evaluation.decision.status {
        ApplicationStatus::Rejected => ScoreResponse::Rejected { score },
        ApplicationStatus::ReadyForSubmission => ScoreResponse::Success {
            score,
            details: evaluation.result,
        },
    };

    Ok(Json(response))
}
