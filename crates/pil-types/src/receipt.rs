use crate::PerceptualDomain;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for PIL reports.
pub const SCHEMA_REPORT_V1: &str = "pil.report.v1";

/// Severity is intentionally small: it maps cleanly to pass/warn/fail.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// One level down: error -> warning -> info. Info stays info.
    pub fn degrade(self) -> Severity {
        match self {
            Severity::Error => Severity::Warning,
            Severity::Warning | Severity::Info => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    /// Absent only when an asset group could not be mapped to a domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<PerceptualDomain>,
    pub rule_name: String,
    pub code: String,
    pub message: String,
    pub severity: Severity,

    /// Position of the offending item in the input batch.
    pub item: u32,

    /// Asset group name, when the item came from the asset entry point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Set when severity was lowered because the item confidence was below the floor.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub degraded: bool,

    /// Rule-specific measured values and thresholds.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

/// Advisory remediation text. Always paired with the violation that shares its
/// `item` and `rule_name`; never applied automatically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<PerceptualDomain>,
    pub rule_name: String,
    pub message: String,
    pub item: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Warn => "warn",
            Verdict::Fail => "fail",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut counts = SeverityCounts::default();
        for v in violations {
            match v.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// Aggregate outcome of validating one batch.
///
/// Violations and suggestions follow input order, then rule declaration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    pub suggestions: Vec<Suggestion>,
    pub counts: SeverityCounts,
    /// Mean per-item confidence after rule weighting; 0.0 for an empty batch.
    pub confidence_score: f64,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        self.counts.error > 0
    }

    /// Suggestions attached to one violation.
    pub fn suggestions_for<'a>(&'a self, v: &'a Violation) -> impl Iterator<Item = &'a Suggestion> {
        self.suggestions
            .iter()
            .filter(move |s| s.item == v.item && s.rule_name == v.rule_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Report envelope written by the CLI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PilReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub profile: String,
    pub items_validated: u32,
    pub result: ValidationResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violation(severity: Severity) -> Violation {
        Violation {
            domain: Some(PerceptualDomain::Sight),
            rule_name: "sight.contrast_ratio".to_string(),
            code: "insufficient_contrast".to_string(),
            message: "m".to_string(),
            severity,
            item: 0,
            subject: None,
            degraded: false,
            data: JsonValue::Null,
        }
    }

    #[test]
    fn degrade_steps_down_once() {
        assert_eq!(Severity::Error.degrade(), Severity::Warning);
        assert_eq!(Severity::Warning.degrade(), Severity::Info);
        assert_eq!(Severity::Info.degrade(), Severity::Info);
    }

    #[test]
    fn counts_tally_each_severity() {
        let vs = vec![
            violation(Severity::Error),
            violation(Severity::Warning),
            violation(Severity::Warning),
            violation(Severity::Info),
        ];
        let c = SeverityCounts::from_violations(&vs);
        assert_eq!((c.info, c.warning, c.error), (1, 2, 1));
    }

    #[test]
    fn violation_serialization_omits_defaults() {
        let v = violation(Severity::Warning);
        let value = serde_json::to_value(&v).expect("serialize");
        assert_eq!(value["severity"], json!("warning"));
        assert_eq!(value["domain"], json!("sight"));
        assert!(value.get("degraded").is_none());
        assert!(value.get("subject").is_none());
        assert!(value.get("data").is_none());
    }
}
