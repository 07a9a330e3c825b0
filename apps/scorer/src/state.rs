use std::sync::Arc;

use crate::audit::AuditLog;
use crate::context::StaticContext;
use crate::llm_client::ScoringModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built once in `main` and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Structured-output model. Default: `GeminiClient`.
    pub model: Arc<dyn ScoringModel>,
    /// Decision record store. Default: `PgAuditLog`.
    pub audit_log: Arc<dyn AuditLog>,
    pub context: Arc<StaticContext>,
}
