use pil_domain::policy::{EffectiveConfig, FailOn, Thresholds};

pub const PROFILES: &[&str] = &["default", "strict", "lenient"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        "lenient" => lenient_profile(),
        // default
        _ => EffectiveConfig::default(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Warning,
        thresholds: Thresholds {
            contrast_min: 7.0,
            complexity_max: 5.0,
            toxicity_max: 0.5,
            ..Thresholds::DEFAULT
        },
        ..EffectiveConfig::default()
    }
}

fn lenient_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "lenient".to_string(),
        fail_on: FailOn::Error,
        thresholds: Thresholds {
            toxicity_max: 0.8,
            ..Thresholds::DEFAULT
        },
        ..EffectiveConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_is_default() {
        assert_eq!(preset("paranoid"), EffectiveConfig::default());
        assert_eq!(preset("paranoid").profile, "default");
    }

    #[test]
    fn strict_tightens_sight_and_fails_on_warnings() {
        let cfg = preset("strict");
        assert_eq!(cfg.thresholds.contrast_min, 7.0);
        assert_eq!(cfg.thresholds.complexity_max, 5.0);
        assert_eq!(cfg.fail_on, FailOn::Warning);
    }

    #[test]
    fn lenient_relaxes_toxicity_only() {
        let cfg = preset("lenient");
        assert_eq!(cfg.thresholds.toxicity_max, 0.8);
        assert_eq!(cfg.thresholds.volume_max_db, Thresholds::DEFAULT.volume_max_db);
        assert_eq!(cfg.fail_on, FailOn::Error);
    }

    #[test]
    fn every_named_profile_resolves_to_itself() {
        for name in PROFILES {
            assert_eq!(preset(name).profile, *name);
        }
    }
}
