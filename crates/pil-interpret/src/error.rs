use pil_domain::BatchId;
use std::time::Duration;

/// Why an interpretation did not produce a result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InterpretationErrorKind {
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("malformed backend response: {0}")]
    Malformed(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("cancelled")]
    Cancelled,
}

/// Failure of one interpretation call. Never affects other in-flight calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("interpretation of batch {batch_id} failed: {kind}")]
pub struct InterpretationError {
    pub batch_id: BatchId,
    #[source]
    pub kind: InterpretationErrorKind,
}

impl InterpretationError {
    pub fn new(batch_id: BatchId, kind: InterpretationErrorKind) -> Self {
        Self { batch_id, kind }
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind == InterpretationErrorKind::Cancelled
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, InterpretationErrorKind::Timeout(_))
    }
}
