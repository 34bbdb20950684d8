use pil_types::{Severity, ids};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

/// Numeric limits the rule sets compare against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Minimum acceptable `contrast_ratio`.
    pub contrast_min: f64,
    /// Maximum `complexity_score` before cognitive load is reported.
    pub complexity_max: f64,
    /// Hearing-safety ceiling for `volume_db`.
    pub volume_max_db: f64,
    /// Moderation ceiling for `toxicity_score`.
    pub toxicity_max: f64,
    /// Safe band for `vibration_intensity`, inclusive.
    pub haptic_min: f64,
    pub haptic_max: f64,
    /// Intensity at which feedback counts as strong and needs a safety cutoff.
    pub haptic_strong: f64,
}

impl Thresholds {
    pub const DEFAULT: Thresholds = Thresholds {
        contrast_min: 4.5,
        complexity_max: 7.0,
        volume_max_db: 85.0,
        toxicity_max: 0.5,
        haptic_min: 0.0,
        haptic_max: 8.0,
        haptic_strong: 6.0,
    };
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds::DEFAULT
    }
}

/// Low-confidence handling: items below `floor` have every violation lowered one level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidencePolicy {
    pub floor: f64,
    pub degrade: bool,
}

impl ConfidencePolicy {
    pub const DEFAULT: ConfidencePolicy = ConfidencePolicy {
        floor: 0.3,
        degrade: true,
    };

    pub fn is_low(&self, confidence: f64) -> bool {
        self.degrade && confidence < self.floor
    }
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        ConfidencePolicy::DEFAULT
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RulePolicy {
    pub enabled: bool,
    pub severity: Severity,
}

impl RulePolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
        }
    }
}

/// Resolved, read-only configuration shared by every validation call.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub thresholds: Thresholds,
    pub confidence: ConfidencePolicy,
    pub rules: BTreeMap<String, RulePolicy>,
}

impl EffectiveConfig {
    pub fn rule_policy(&self, rule_id: &str) -> Option<&RulePolicy> {
        self.rules.get(rule_id).filter(|p| p.enabled)
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        EffectiveConfig {
            profile: "default".to_string(),
            fail_on: FailOn::Error,
            thresholds: Thresholds::DEFAULT,
            confidence: ConfidencePolicy::DEFAULT,
            rules: default_rule_policies(),
        }
    }
}

/// Base severity of every built-in rule.
pub fn default_rule_policies() -> BTreeMap<String, RulePolicy> {
    use ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        RULE_SIGHT_CONTRAST_RATIO.to_string(),
        RulePolicy::enabled(Severity::Warning),
    );
    m.insert(
        RULE_SIGHT_COLOR_BLIND_SAFE.to_string(),
        RulePolicy::enabled(Severity::Warning),
    );
    m.insert(
        RULE_SIGHT_VISUAL_COMPLEXITY.to_string(),
        RulePolicy::enabled(Severity::Info),
    );
    m.insert(
        RULE_SOUND_VOLUME_LEVEL.to_string(),
        RulePolicy::enabled(Severity::Error),
    );
    m.insert(
        RULE_SOUND_AUDIO_DESCRIPTIONS.to_string(),
        RulePolicy::enabled(Severity::Warning),
    );
    m.insert(
        RULE_SOUND_TOXICITY.to_string(),
        RulePolicy::enabled(Severity::Error),
    );
    m.insert(
        RULE_TOUCH_HAPTIC_INTENSITY.to_string(),
        RulePolicy::enabled(Severity::Error),
    );
    m.insert(
        RULE_TOUCH_SAFETY_CUTOFF.to_string(),
        RulePolicy::enabled(Severity::Warning),
    );

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_configurable_rule_has_a_default_policy() {
        let policies = default_rule_policies();
        for id in ids::CONFIGURABLE_RULES {
            assert!(policies.contains_key(*id), "missing policy for {id}");
        }
        assert_eq!(policies.len(), ids::CONFIGURABLE_RULES.len());
    }

    #[test]
    fn disabled_rules_are_not_returned() {
        let mut cfg = EffectiveConfig::default();
        cfg.rules
            .insert(ids::RULE_SOUND_TOXICITY.to_string(), RulePolicy::disabled());
        assert!(cfg.rule_policy(ids::RULE_SOUND_TOXICITY).is_none());
        assert!(cfg.rule_policy(ids::RULE_SOUND_VOLUME_LEVEL).is_some());
    }

    #[test]
    fn low_confidence_respects_floor_and_toggle() {
        let policy = ConfidencePolicy::DEFAULT;
        assert!(policy.is_low(0.29));
        assert!(!policy.is_low(0.3));
        let off = ConfidencePolicy {
            degrade: false,
            ..policy
        };
        assert!(!off.is_low(0.0));
    }
}
