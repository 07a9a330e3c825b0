//! Decision gate: a strictly binary threshold on the weighted score.

use serde_json::Number;

use crate::audit::ApplicationStatus;
use crate::errors::AppError;
use crate::scoring::models::ScoreResult;

/// Scores at or above this value pass the gate.
pub const SCORE_THRESHOLD: f64 = 80.0;
pub const REJECTION_REASON: &str = "Score below 80% threshold";

#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub status: ApplicationStatus,
    /// The model's score as it was returned.
    pub score: Number,
    pub reason: Option<&'static str>,
    /// Accepted postings persist the full model output and job data.
    pub persist_details: bool,
}

/// Applies the threshold. Scores outside 0–100 are a model contract
/// violation and are reported as parse errors rather than decided on.
pub fn decide(result: &ScoreResult) -> Result<Decision, AppError> {
    let raw = &result.weighted_score;
    let value = raw
        .as_f64()
        .filter(|v| v.is_finite() && (0.0..=100.0).contains(v))
        .ok_or_else(|| AppError::Parse(format!("weighted_score {raw} is outside 0-100")))?;
    let score = raw.clone();

    let decision = if value < SCORE_THRESHOLD {
        Decision {
            status: ApplicationStatus::Rejected,
            score,
            reason: Some(REJECTION_REASON),
            persist_details: false,
        }
    } else {
        Decision {
            status: ApplicationStatus::ReadyForSubmission,
            score,
            reason: None,
            persist_details: true,
        }
    };

    Ok(decision)
}
