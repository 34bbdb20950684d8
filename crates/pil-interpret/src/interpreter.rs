use crate::backend::{BackendError, FallbackBackend, ReasoningBackend};
use crate::error::{InterpretationError, InterpretationErrorKind};
use futures::future::join_all;
use pil_domain::{BatchId, PerceptualData, PerceptualDomain, PilDocument};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Backend judgment for one batch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Interpretation {
    pub batch_id: BatchId,
    /// Backend that produced the judgment.
    pub source: String,
    pub domains: Vec<PerceptualDomain>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judgments: Option<Value>,
}

/// Delegates interpretation to a [`ReasoningBackend`] under a timeout.
///
/// Cheap to clone; clones share the backend. Concurrent calls share nothing else.
#[derive(Clone)]
pub struct PilInterpreter {
    backend: Arc<dyn ReasoningBackend>,
    timeout: Duration,
}

impl std::fmt::Debug for PilInterpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PilInterpreter")
            .field("backend", &self.backend.name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for PilInterpreter {
    fn default() -> Self {
        Self::fallback()
    }
}

impl PilInterpreter {
    pub fn new(backend: Arc<dyn ReasoningBackend>) -> Self {
        Self {
            backend,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn fallback() -> Self {
        Self::new(Arc::new(FallbackBackend))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Interpret one batch. The backend call is the only suspension point.
    pub async fn interpret(
        &self,
        batch: &[PerceptualData],
    ) -> Result<Interpretation, InterpretationError> {
        let document = PilDocument::from_batch(batch);
        let batch_id = document.batch_id.clone();
        debug!(%batch_id, backend = self.backend.name(), items = batch.len(), "interpreting batch");

        let response = match tokio::time::timeout(self.timeout, self.backend.analyze(&document)).await
        {
            Ok(Ok(value)) => value,
            Ok(Err(BackendError::Timeout)) | Err(_) => {
                warn!(%batch_id, timeout_ms = self.timeout.as_millis() as u64, "interpretation timed out");
                return Err(InterpretationError::new(
                    batch_id,
                    InterpretationErrorKind::Timeout(self.timeout),
                ));
            }
            Ok(Err(BackendError::Malformed(msg))) => {
                return Err(InterpretationError::new(
                    batch_id,
                    InterpretationErrorKind::Malformed(msg),
                ));
            }
            Ok(Err(BackendError::Unavailable(msg))) => {
                warn!(%batch_id, error = %msg, "reasoning backend unavailable");
                return Err(InterpretationError::new(
                    batch_id,
                    InterpretationErrorKind::Backend(msg),
                ));
            }
        };

        let (summary, judgments) = match parse_response(response) {
            Ok(parts) => parts,
            Err(msg) => {
                warn!(%batch_id, error = %msg, "malformed backend response");
                return Err(InterpretationError::new(
                    batch_id,
                    InterpretationErrorKind::Malformed(msg),
                ));
            }
        };

        Ok(Interpretation {
            domains: document.domains().collect(),
            batch_id,
            source: self.backend.name().to_string(),
            summary,
            judgments,
        })
    }

    /// Interpret several batches concurrently on the current task. Results keep input order.
    pub async fn interpret_many(
        &self,
        batches: &[Vec<PerceptualData>],
    ) -> Vec<Result<Interpretation, InterpretationError>> {
        join_all(batches.iter().map(|batch| self.interpret(batch))).await
    }

    /// Run one interpretation as its own tokio task so it can be cancelled on its own.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, batch: Vec<PerceptualData>) -> InterpretationTask {
        let batch_id = BatchId::for_batch(&batch);
        let interpreter = self.clone();
        let handle = tokio::spawn(async move { interpreter.interpret(&batch).await });
        InterpretationTask {
            batch_id,
            handle: Some(handle),
        }
    }
}

fn parse_response(response: Value) -> Result<(String, Option<Value>), String> {
    let Value::Object(mut map) = response else {
        return Err(format!("expected a JSON object, got {}", kind_of(&response)));
    };
    let summary = match map.remove("summary") {
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(format!("`summary` must be a string, got {}", kind_of(&other)));
        }
        None => return Err("missing `summary`".to_string()),
    };
    let judgments = match map.remove("judgments") {
        None | Some(Value::Null) => None,
        Some(j @ Value::Array(_)) => Some(j),
        Some(other) => {
            return Err(format!("`judgments` must be an array, got {}", kind_of(&other)));
        }
    };
    Ok((summary, judgments))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Handle to a spawned interpretation.
///
/// Cancelling aborts only this task; the in-flight backend future is dropped. Dropping an
/// unjoined handle cancels the task.
#[derive(Debug)]
pub struct InterpretationTask {
    batch_id: BatchId,
    handle: Option<JoinHandle<Result<Interpretation, InterpretationError>>>,
}

impl InterpretationTask {
    pub fn batch_id(&self) -> &BatchId {
        &self.batch_id
    }

    pub fn cancel(&self) {
        if let Some(handle) = &self.handle {
            debug!(batch_id = %self.batch_id, "cancelling interpretation");
            handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    pub async fn join(mut self) -> Result<Interpretation, InterpretationError> {
        let batch_id = self.batch_id.clone();
        let Some(handle) = self.handle.take() else {
            return Err(InterpretationError::new(
                batch_id,
                InterpretationErrorKind::Cancelled,
            ));
        };
        match handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(InterpretationError::new(
                batch_id,
                InterpretationErrorKind::Cancelled,
            )),
            Err(e) => Err(InterpretationError::new(
                batch_id,
                InterpretationErrorKind::Backend(format!("interpretation task failed: {e}")),
            )),
        }
    }
}

impl Drop for InterpretationTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_needs_string_summary() {
        assert!(parse_response(json!("text")).is_err());
        assert!(parse_response(json!({})).is_err());
        assert!(parse_response(json!({"summary": 1})).is_err());
        let (summary, judgments) = parse_response(json!({"summary": "ok"})).expect("valid");
        assert_eq!(summary, "ok");
        assert_eq!(judgments, None);
    }

    #[test]
    fn judgments_must_be_an_array_when_present() {
        let err = parse_response(json!({"summary": "ok", "judgments": {"a": 1}})).unwrap_err();
        assert!(err.contains("array"));
        let (_, judgments) =
            parse_response(json!({"summary": "ok", "judgments": [{"rule": "x"}]})).expect("valid");
        assert_eq!(judgments, Some(json!([{"rule": "x"}])));
    }
}
