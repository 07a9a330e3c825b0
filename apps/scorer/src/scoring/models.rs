use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::errors::AppError;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing job_id or job_description";

/// Raw request body. Fields are optional here so that a missing field is a
/// validation error with our own message instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ScoreRequest {
    pub job_id: Option<String>,
    pub job_description: Option<String>,
}

/// A validated job posting. Both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: String,
    pub job_description: String,
}

impl TryFrom<ScoreRequest> for JobPosting {
    type Error = AppError;

    fn try_from(request: ScoreRequest) -> Result<Self, Self::Error> {
        match (request.job_id, request.job_description) {
            (Some(job_id), Some(job_description))
                if !job_id.is_empty() && !job_description.is_empty() =>
            {
                Ok(JobPosting {
                    job_id,
                    job_description,
                })
            }
            _ => Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// Parsed structured output of the scoring model.
///
/// `weighted_score` is required and kept in the model's own number form, so an
/// integer score is echoed back as an integer. The rubric sub-scores and
/// anything else the model returns are kept as-is in `criteria`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub weighted_score: Number,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(flatten)]
    pub criteria: Map<String, Value>,
}
