use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `pil.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and falls back to the profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PilConfigV1 {
    /// Optional schema string for tooling (`pil.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `default`, `strict` or `lenient`. Unknown names use `default`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the batch: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    #[serde(default)]
    pub confidence: ConfidenceConfig,

    /// Map of rule_id -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,

    #[serde(default)]
    pub interpreter: InterpreterConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ThresholdsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_max_db: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toxicity_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haptic_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haptic_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haptic_strong: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfidenceConfig {
    /// Items below this confidence have their violations lowered one severity level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degrade: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InterpreterConfig {
    /// Upper bound on one reasoning call, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}
