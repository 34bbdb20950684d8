//! Use case orchestration for PIL.
//!
//! This crate provides the application layer: use cases that coordinate settings, the
//! validator and the interpreter. It is intentionally thin and delegates heavy lifting to
//! the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod assets;
mod check;
mod explain;
mod input;
mod interpret;
mod report;

pub use assets::{AssetsInput, run_assets};
pub use check::{CheckInput, CheckOutput, load_config, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use input::{parse_assets_json, parse_batch_json};
pub use interpret::{InterpretInput, run_interpret};
pub use report::{build_report, parse_report_json, runtime_error_report, serialize_report};
