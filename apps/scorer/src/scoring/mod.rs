// Relevance scoring: prompt composition, the structured model call, the
// threshold gate and the HTTP entry point that ties them together.
// All model calls go through llm_client::ScoringModel.

pub mod gate;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
