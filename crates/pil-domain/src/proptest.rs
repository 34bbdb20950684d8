//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Rule thresholds (contrast, colorblind safety, volume)
//! - Violation ordering determinism
//! - Confidence degradation never dropping violations

use crate::engine::PilValidator;
use crate::model::{AttributeValue, PerceptualData};
use crate::policy::{EffectiveConfig, FailOn};
use crate::test_support::{config_with_fail_on, item, sight, sound};
use pil_types::{PerceptualDomain, Severity};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_domain() -> impl Strategy<Value = PerceptualDomain> {
    prop::sample::select(PerceptualDomain::ALL.to_vec())
}

fn arb_confidence() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(0.3), Just(1.0), 0.0f64..=1.0]
}

/// Attribute sets mixing every recognized key with some free-form ones.
fn arb_attributes() -> impl Strategy<Value = Vec<(String, AttributeValue)>> {
    let number = |key: &'static str, range: std::ops::Range<f64>| {
        prop::option::of(range.prop_map(move |n| (key.to_string(), AttributeValue::Number(n))))
    };
    let flag = |key: &'static str| {
        prop::option::of(any::<bool>().prop_map(move |b| (key.to_string(), AttributeValue::Bool(b))))
    };
    (
        number("contrast_ratio", 1.0..21.0),
        flag("color_blind_safe"),
        number("complexity_score", 0.0..10.0),
        number("volume_db", 0.0..140.0),
        flag("has_descriptions"),
        number("toxicity_score", 0.0..1.0),
        number("vibration_intensity", -2.0..12.0),
        flag("has_safety_cutoff"),
        prop::option::of("[a-z]{1,8}".prop_map(|s| ("rhythm".to_string(), AttributeValue::Text(s)))),
    )
        .prop_map(|(a, b, c, d, e, f, g, h, i)| {
            [a, b, c, d, e, f, g, h, i].into_iter().flatten().collect()
        })
}

fn arb_item() -> impl Strategy<Value = PerceptualData> {
    (arb_domain(), arb_attributes(), arb_confidence()).prop_map(|(domain, attrs, confidence)| {
        let pairs: Vec<(&str, AttributeValue)> =
            attrs.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        item(domain, &pairs)
            .confidence(confidence)
            .build()
            .expect("generated attributes are well-kinded")
    })
}

fn arb_batch() -> impl Strategy<Value = Vec<PerceptualData>> {
    prop::collection::vec(arb_item(), 0..12)
}

fn degrade_disabled() -> EffectiveConfig {
    let mut cfg = EffectiveConfig::default();
    cfg.confidence.degrade = false;
    cfg
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn safe_contrast_and_palette_yield_no_sight_violations(
        ratio in 4.5f64..21.0,
        complexity in 0.0f64..=7.0,
    ) {
        let data = sight(&[
            ("contrast_ratio", ratio.into()),
            ("color_blind_safe", true.into()),
            ("complexity_score", complexity.into()),
        ])
        .build()
        .expect("valid");
        let (_, result) = PilValidator::default().validate(&[data]);
        prop_assert!(result.violations.is_empty(), "violations: {:?}", result.violations);
        prop_assert!(result.is_valid);
    }

    #[test]
    fn volume_over_ceiling_is_invalid(volume in 85.0001f64..200.0) {
        let data = sound(&[("volume_db", volume.into())]).build().expect("valid");
        let (_, result) = PilValidator::default().validate(&[data]);
        prop_assert!(!result.is_valid);
    }

    #[test]
    fn violations_follow_input_order(batch in arb_batch()) {
        let (_, result) = PilValidator::default().validate(&batch);
        let items: Vec<u32> = result.violations.iter().map(|v| v.item).collect();
        let mut sorted = items.clone();
        sorted.sort();
        prop_assert_eq!(items, sorted);
        for v in &result.violations {
            prop_assert!((v.item as usize) < batch.len());
        }
    }

    #[test]
    fn validation_is_idempotent(batch in arb_batch()) {
        let validator = PilValidator::new(config_with_fail_on(FailOn::Warning));
        let (data_a, first) = validator.validate(&batch);
        let (data_b, second) = validator.validate(&batch);
        prop_assert_eq!(&data_a, &batch);
        prop_assert_eq!(data_a, data_b);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn low_confidence_never_drops_violations(batch in arb_batch()) {
        let (_, degraded) = PilValidator::default().validate(&batch);
        let (_, strict) = PilValidator::new(degrade_disabled()).validate(&batch);

        prop_assert_eq!(degraded.violations.len(), strict.violations.len());
        for (d, s) in degraded.violations.iter().zip(&strict.violations) {
            prop_assert_eq!(&d.rule_name, &s.rule_name);
            prop_assert!(d.severity <= s.severity);
            prop_assert_eq!(d.degraded, d.severity != s.severity);
            if d.degraded {
                prop_assert_eq!(d.severity, s.severity.degrade());
            }
        }
    }

    #[test]
    fn verdict_matches_error_presence(batch in arb_batch()) {
        let (_, result) = PilValidator::default().validate(&batch);
        let has_error = result.violations.iter().any(|v| v.severity == Severity::Error);
        prop_assert_eq!(result.has_errors(), has_error);
        prop_assert_eq!(result.is_valid, !result.has_errors());
        prop_assert!((0.0..=1.0).contains(&result.confidence_score));
    }
}
