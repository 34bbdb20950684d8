use crate::{model::PilConfigV1, presets};
use anyhow::Context;
use pil_domain::policy::{EffectiveConfig, FailOn, RulePolicy};
use pil_types::{Severity, ids};

pub const DEFAULT_INTERPRET_TIMEOUT_MS: u64 = 5000;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub interpret_timeout_ms: u64,
}

pub fn resolve_config(cfg: PilConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let mut effective = presets::preset(&profile);

    // Thresholds
    let t = &cfg.thresholds;
    let th = &mut effective.thresholds;
    for (name, value, slot) in [
        ("contrast_min", t.contrast_min, &mut th.contrast_min),
        ("complexity_max", t.complexity_max, &mut th.complexity_max),
        ("volume_max_db", t.volume_max_db, &mut th.volume_max_db),
        ("toxicity_max", t.toxicity_max, &mut th.toxicity_max),
        ("haptic_min", t.haptic_min, &mut th.haptic_min),
        ("haptic_max", t.haptic_max, &mut th.haptic_max),
        ("haptic_strong", t.haptic_strong, &mut th.haptic_strong),
    ] {
        if let Some(v) = value {
            if !v.is_finite() {
                anyhow::bail!("threshold {name} must be a finite number, got {v}");
            }
            *slot = v;
        }
    }
    if th.haptic_min > th.haptic_max {
        anyhow::bail!(
            "haptic_min ({}) must not exceed haptic_max ({})",
            th.haptic_min,
            th.haptic_max
        );
    }

    // Confidence
    if let Some(floor) = cfg.confidence.floor {
        if !(0.0..=1.0).contains(&floor) {
            anyhow::bail!("confidence floor must be within [0, 1], got {floor}");
        }
        effective.confidence.floor = floor;
    }
    if let Some(degrade) = cfg.confidence.degrade {
        effective.confidence.degrade = degrade;
    }

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        if !ids::CONFIGURABLE_RULES.contains(&rule_id.as_str()) {
            anyhow::bail!(
                "unknown rule id: {rule_id} (expected one of: {})",
                ids::CONFIGURABLE_RULES.join(", ")
            );
        }
        let entry = effective
            .rules
            .entry(rule_id.clone())
            .or_insert_with(RulePolicy::disabled);

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = rc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {rule_id}"))?;
        }
    }

    // fail_on: CLI beats config beats profile
    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    let interpret_timeout_ms = cfg
        .interpreter
        .timeout_ms
        .unwrap_or(DEFAULT_INTERPRET_TIMEOUT_MS);
    if interpret_timeout_ms == 0 {
        anyhow::bail!("interpreter timeout_ms must be greater than zero");
    }

    Ok(ResolvedConfig {
        effective,
        interpret_timeout_ms,
    })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

pub fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
