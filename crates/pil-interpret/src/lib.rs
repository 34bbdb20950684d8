//! Interpretation of perceptual batches.
//!
//! Validation is deterministic and lives in `pil-domain`. This crate hands the same batch,
//! normalized into a [`PilDocument`](pil_domain::PilDocument), to a [`ReasoningBackend`]
//! and returns its judgment. It never enforces policy.

#![forbid(unsafe_code)]

mod backend;
mod error;
mod interpreter;

pub use backend::{BackendError, FALLBACK_SUMMARY_PREFIX, FallbackBackend, ReasoningBackend};
pub use error::{InterpretationError, InterpretationErrorKind};
pub use interpreter::{
    DEFAULT_TIMEOUT, Interpretation, InterpretationTask, PilInterpreter,
};
