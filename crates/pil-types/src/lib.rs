//! Stable DTOs and IDs used across the PIL workspace.
//!
//! This crate is intentionally boring:
//! - the perceptual domain enumeration
//! - data types for violations, suggestions and the emitted report
//! - stable string IDs for rules and violation codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod domain;
pub mod explain;
pub mod ids;
pub mod receipt;

pub use domain::{PerceptualDomain, UnknownDomain};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    PilReport, SCHEMA_REPORT_V1, Severity, SeverityCounts, Suggestion, ToolMeta,
    ValidationResult, Verdict, Violation,
};
