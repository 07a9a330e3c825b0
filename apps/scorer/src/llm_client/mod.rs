/// LLM Client — the single point of entry for all Gemini API calls in the scorer.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Everything else depends on the `ScoringModel` trait.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all scoring calls.
pub const MODEL: &str = "gemini-2.5-flash";
const RESPONSE_MIME_TYPE: &str = "application/json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "PROHIBITED_CONTENT",
    "BLOCKLIST",
    "SPII",
];

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response blocked by the model: {0}")]
    Blocked(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A model that can produce JSON text constrained to a schema.
///
/// Carried in `AppState` as `Arc<dyn ScoringModel>` so tests can swap in a stub.
#[async_trait]
pub trait ScoringModel: Send + Sync {
    /// Returns the raw JSON text produced by the model. Callers deserialize it.
    async fn generate_structured(
        &self,
        prompt: &str,
        system_instruction: &str,
        schema: &Value,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    ///
    /// A prompt block or a `SAFETY`/`RECITATION` finish without text is reported
    /// as `Blocked` so it never reaches the decision gate as an empty score.
    pub fn into_text(self) -> Result<String, LlmError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(LlmError::Blocked(reason));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyContent)?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.unwrap_or_default();
            return Err(if BLOCKING_FINISH_REASONS.contains(&reason.as_str()) {
                LlmError::Blocked(reason)
            } else {
                LlmError::EmptyContent
            });
        }

        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Gemini `generateContent` client with structured (schema-constrained) output.
/// A single attempt per call; failures are returned to the caller as-is.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_base: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, MODEL)
    }
}

#[async_trait]
impl ScoringModel for GeminiClient {
    async fn generate_structured(
        &self,
        prompt: &str,
        system_instruction: &str,
        schema: &Value,
    ) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE,
                response_schema: schema,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let gemini_response: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &gemini_response.usage_metadata {
            debug!(
                "Gemini call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        gemini_response.into_text()
    }
}

/// Deserializes structured model output, tolerating markdown code fences.
pub fn parse_structured<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    serde_json::from_str(strip_json_fences(text)).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(|s| s.trim())
                .unwrap_or(stripped)
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_body_uses_gemini_field_names() {
        let schema = json!({"type": "object"});
        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: "rubric" }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: "prompt" }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE,
                response_schema: &schema,
            },
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "rubric");
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"], schema);
    }

    #[test]
    fn test_into_text_joins_parts_of_first_candidate() {
        let r = response(json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"weighted_"}, {"text": "score\": 90}"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5}
        }));
        assert_eq!(r.into_text().unwrap(), "{\"weighted_score\": 90}");
    }

    #[test]
    fn test_into_text_reports_prompt_block() {
        let r = response(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        assert!(matches!(r.into_text(), Err(LlmError::Blocked(reason)) if reason == "SAFETY"));
    }

    #[test]
    fn test_into_text_reports_safety_finish_without_text() {
        let r = response(json!({"candidates": [{"finishReason": "SAFETY"}]}));
        assert!(matches!(r.into_text(), Err(LlmError::Blocked(_))));
    }

    #[test]
    fn test_into_text_without_candidates_is_empty_content() {
        let r = response(json!({"candidates": []}));
        assert!(matches!(r.into_text(), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_endpoint_uses_fixed_model() {
        let client = GeminiClient::new("key".into(), "http://localhost:9999/v1beta/".into()).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_parse_structured_reads_fenced_output() {
        let value: Value = parse_structured("```json\n{\"weighted_score\": 81}\n```").unwrap();
        assert_eq!(value["weighted_score"], 81);
    }

    #[test]
    fn test_parse_structured_rejects_malformed_json() {
        let result = parse_structured::<Value>("{\"weighted_score\": ");
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }
}
