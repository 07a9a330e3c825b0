//! Scoring pipeline: prompt → model → parse → gate → audit write.
//!
//! Each step's failure keeps its own `AppError` kind. The audit write is the
//! last step, so a failure anywhere earlier leaves the log untouched.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::audit::{ApplicationLogEntry, AuditLog};
use crate::context::StaticContext;
use crate::errors::AppError;
use crate::llm_client::{parse_structured, ScoringModel};
use crate::scoring::gate::{decide, Decision};
use crate::scoring::models::{JobPosting, ScoreResult};
use crate::scoring::prompts::{build_scoring_prompt, SCORING_SYSTEM};

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub decision: Decision,
    pub result: ScoreResult,
    pub written_at: DateTime<Utc>,
}

pub async fn evaluate_posting(
    model: &dyn ScoringModel,
    audit_log: &dyn AuditLog,
    context: &StaticContext,
    posting: &JobPosting,
) -> Result<Evaluation, AppError> {
    let request = build_scoring_prompt(
        &context.profile,
        SCORING_SYSTEM,
        &posting.job_description,
    );

    let raw = model
        .generate_structured(
            &request.prompt,
            request.system_instruction,
            &context.score_schema,
        )
        .await?;
    debug!(job_id = %posting.job_id, "Raw model output: {raw}");

    let result: ScoreResult = parse_structured(&raw)?;
    let decision = decide(&result)?;

    let entry = ApplicationLogEntry::from_decision(&decision, &result, posting);
    let written_at = audit_log.write(&posting.job_id, &entry).await?;

    info!(
        job_id = %posting.job_id,
        score = %decision.score,
        status = decision.status.as_str(),
        "Job posting scored"
    );

    Ok(Evaluation {
        decision,
        result,
        written_at,
    })
}
