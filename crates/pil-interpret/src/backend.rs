use async_trait::async_trait;
use pil_domain::PilDocument;
use serde_json::{Value, json};

pub const FALLBACK_SUMMARY_PREFIX: &str = "Perceptual intent analysis: ";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("backend timed out")]
    Timeout,

    #[error("backend produced a malformed response: {0}")]
    Malformed(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// External reasoning collaborator.
///
/// The response must be a JSON object with a string `summary`. An optional `judgments`
/// array is carried through untouched.
#[async_trait]
pub trait ReasoningBackend: Send + Sync {
    /// Short label recorded on each interpretation.
    fn name(&self) -> &str {
        "external"
    }

    async fn analyze(&self, document: &PilDocument) -> Result<Value, BackendError>;
}

/// Used when no collaborator is configured: echoes the normalized document.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallbackBackend;

#[async_trait]
impl ReasoningBackend for FallbackBackend {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn analyze(&self, document: &PilDocument) -> Result<Value, BackendError> {
        let pretty = serde_json::to_string_pretty(document)
            .map_err(|e| BackendError::Malformed(e.to_string()))?;
        Ok(json!({ "summary": format!("{FALLBACK_SUMMARY_PREFIX}{pretty}") }))
    }
}
