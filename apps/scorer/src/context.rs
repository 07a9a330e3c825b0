//! Static prompt context: the score schema and the candidate profile.
//!
//! Both are read once at startup and shared read-only behind an `Arc`.
//! Changing either file requires a restart.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::info;

#[derive(Debug, Clone)]
pub struct StaticContext {
    /// JSON Schema handed to the model as the structured-output contract.
    pub score_schema: Value,
    /// Free-text candidate profile embedded in every prompt.
    pub profile: String,
}

impl StaticContext {
    pub fn load(schema_path: &Path, profile_path: &Path) -> Result<Self> {
        let score_schema = load_schema(schema_path)?;
        let profile = load_profile(profile_path)?;

        info!(
            "Static context loaded: schema={}, profile={} ({} bytes)",
            schema_path.display(),
            profile_path.display(),
            profile.len()
        );

        Ok(Self {
            score_schema,
            profile,
        })
    }
}

/// Reads the score schema. It must be a JSON object that declares `weighted_score`.
pub fn load_schema(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read score schema at {}", path.display()))?;
    let schema: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Score schema at {} is not valid JSON", path.display()))?;

    if !schema.is_object() {
        bail!("Score schema at {} must be a JSON object", path.display());
    }
    if schema.pointer("/properties/weighted_score").is_none() {
        bail!(
            "Score schema at {} does not declare a weighted_score property",
            path.display()
        );
    }

    Ok(schema)
}

/// Reads the candidate profile verbatim; the prompt treats it as opaque text.
pub fn load_profile(path: &Path) -> Result<String> {
    let profile = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read candidate profile at {}", path.display()))?;

    if profile.trim().is_empty() {
        bail!("Candidate profile at {} is empty", path.display());
    }

    Ok(profile)
}
