use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only `Validation` is a client error. Every other kind answers 500 but keeps
/// its own `code` so callers and logs can tell the failures apart.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream model error: {0}")]
    Upstream(String),

    #[error("Model output parse error: {0}")]
    Parse(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(_) | LlmError::EmptyContent => AppError::Parse(err.to_string()),
            LlmError::Http(_) | LlmError::Api { .. } | LlmError::Blocked(_) => {
                AppError::Upstream(err.to_string())
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Parse(_) => "PARSE_ERROR",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream model error: {msg}");
                "The scoring model request failed".to_string()
            }
            AppError::Parse(msg) => {
                tracing::error!("Model output parse error: {msg}");
                "The scoring model returned an unusable result".to_string()
            }
            AppError::Persistence(msg) => {
                tracing::error!("Persistence error: {msg}");
                "Failed to record the scoring decision".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(json!({
            "status": "error",
            "code": self.code(),
            "message": message,
        }));

        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_validation_is_client_error() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        for err in [
            AppError::Upstream("x".into()),
            AppError::Parse("x".into()),
            AppError::Persistence("x".into()),
            AppError::Internal(anyhow::anyhow!("x")),
        ] {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_llm_errors_split_between_upstream_and_parse() {
        let blocked: AppError = LlmError::Blocked("SAFETY".into()).into();
        assert_eq!(blocked.code(), "UPSTREAM_ERROR");

        let api: AppError = LlmError::Api {
            status: 403,
            message: "quota".into(),
        }
        .into();
        assert_eq!(api.code(), "UPSTREAM_ERROR");

        let empty: AppError = LlmError::EmptyContent.into();
        assert_eq!(empty.code(), "PARSE_ERROR");

        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let parse: AppError = LlmError::Parse(bad_json).into();
        assert_eq!(parse.code(), "PARSE_ERROR");
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = AppError::Persistence("connection reset".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], "PERSISTENCE_ERROR");
        // internal details stay in the logs
        assert!(!body["message"].as_str().unwrap().contains("connection reset"));
    }
}
