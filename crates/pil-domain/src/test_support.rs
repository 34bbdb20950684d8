use crate::model::{AttributeValue, PerceptualData, PerceptualDataBuilder};
use crate::policy::{EffectiveConfig, FailOn, RulePolicy};
use pil_types::{PerceptualDomain, Severity};

pub fn item(domain: PerceptualDomain, attrs: &[(&str, AttributeValue)]) -> PerceptualDataBuilder {
    attrs
        .iter()
        .fold(PerceptualData::builder(domain), |b, (k, v)| b.attr(*k, v.clone()))
}

pub fn sight(attrs: &[(&str, AttributeValue)]) -> PerceptualDataBuilder {
    item(PerceptualDomain::Sight, attrs)
}

pub fn sound(attrs: &[(&str, AttributeValue)]) -> PerceptualDataBuilder {
    item(PerceptualDomain::Sound, attrs)
}

pub fn touch(attrs: &[(&str, AttributeValue)]) -> PerceptualDataBuilder {
    item(PerceptualDomain::Touch, attrs)
}

pub fn config_with_fail_on(fail_on: FailOn) -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on,
        ..EffectiveConfig::default()
    }
}

/// Default config with exactly one rule enabled.
pub fn config_with_only(rule_id: &str, severity: Severity) -> EffectiveConfig {
    let mut cfg = EffectiveConfig::default();
    for (id, policy) in cfg.rules.iter_mut() {
        *policy = if id == rule_id {
            RulePolicy::enabled(severity)
        } else {
            RulePolicy::disabled()
        };
    }
    cfg
}
