use super::utils::advise;
use super::{Rule, RuleHit};
use crate::model::PerceptualData;
use crate::policy::Thresholds;
use pil_types::ids;
use serde_json::json;

pub(super) const RULES: [Rule; 2] = [
    Rule {
        id: ids::RULE_TOUCH_HAPTIC_INTENSITY,
        weight: 0.5,
        eval: haptic_intensity,
    },
    Rule {
        id: ids::RULE_TOUCH_SAFETY_CUTOFF,
        weight: 0.8,
        eval: safety_cutoff,
    },
];

fn haptic_intensity(data: &PerceptualData, t: &Thresholds) -> Option<RuleHit> {
    let intensity = data.number("vibration_intensity")?;
    if (t.haptic_min..=t.haptic_max).contains(&intensity) {
        return None;
    }
    Some(RuleHit {
        code: ids::CODE_INTENSITY_OUT_OF_BAND,
        message: format!(
            "vibration intensity {intensity} is outside the safe band [{}, {}]",
            t.haptic_min, t.haptic_max
        ),
        suggestion: Some(advise(
            data,
            format!(
                "Scale vibration intensity into the range {} to {}",
                t.haptic_min, t.haptic_max
            ),
        )),
        data: json!({
            "vibration_intensity": intensity,
            "minimum": t.haptic_min,
            "maximum": t.haptic_max,
        }),
    })
}

// Only the intensity is required; an absent flag on strong feedback is the breach.
fn safety_cutoff(data: &PerceptualData, t: &Thresholds) -> Option<RuleHit> {
    let intensity = data.number("vibration_intensity")?;
    if intensity < t.haptic_strong || data.flag("has_safety_cutoff") == Some(true) {
        return None;
    }
    Some(RuleHit {
        code: ids::CODE_MISSING_SAFETY_CUTOFF,
        message: format!("strong haptic feedback (intensity {intensity}) declares no safety cutoff"),
        suggestion: Some(advise(
            data,
            "Add an automatic duration limit or user cutoff and declare has_safety_cutoff",
        )),
        data: json!({
            "vibration_intensity": intensity,
            "strong_threshold": t.haptic_strong,
        }),
    })
}
