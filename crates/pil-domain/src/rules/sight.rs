use super::utils::advise;
use super::{Rule, RuleHit};
use crate::model::PerceptualData;
use crate::policy::Thresholds;
use pil_types::ids;
use serde_json::json;

pub(super) const RULES: [Rule; 3] = [
    Rule {
        id: ids::RULE_SIGHT_CONTRAST_RATIO,
        weight: 0.7,
        eval: contrast_ratio,
    },
    Rule {
        id: ids::RULE_SIGHT_COLOR_BLIND_SAFE,
        weight: 0.8,
        eval: color_blind_safe,
    },
    Rule {
        id: ids::RULE_SIGHT_VISUAL_COMPLEXITY,
        weight: 0.6,
        eval: visual_complexity,
    },
];

fn contrast_ratio(data: &PerceptualData, t: &Thresholds) -> Option<RuleHit> {
    let ratio = data.number("contrast_ratio")?;
    if ratio >= t.contrast_min {
        return None;
    }
    Some(RuleHit {
        code: ids::CODE_INSUFFICIENT_CONTRAST,
        message: format!(
            "insufficient contrast: ratio {ratio} is below the minimum {}",
            t.contrast_min
        ),
        suggestion: Some(advise(
            data,
            format!(
                "Raise the contrast ratio to at least {} by increasing the difference between foreground and background colors",
                t.contrast_min
            ),
        )),
        data: json!({ "contrast_ratio": ratio, "minimum": t.contrast_min }),
    })
}

fn color_blind_safe(data: &PerceptualData, _t: &Thresholds) -> Option<RuleHit> {
    if data.flag("color_blind_safe")? {
        return None;
    }
    Some(RuleHit {
        code: ids::CODE_NOT_COLOR_BLIND_SAFE,
        message: "color scheme is not accessible for color-blind users".to_string(),
        suggestion: Some(advise(
            data,
            "Use visual cues beyond color (shapes, patterns, labels)",
        )),
        data: json!({ "color_blind_safe": false }),
    })
}

fn visual_complexity(data: &PerceptualData, t: &Thresholds) -> Option<RuleHit> {
    let score = data.number("complexity_score")?;
    if score <= t.complexity_max {
        return None;
    }
    Some(RuleHit {
        code: ids::CODE_COGNITIVE_OVERLOAD,
        message: format!(
            "visual complexity {score} exceeds the cognitive load limit {}",
            t.complexity_max
        ),
        suggestion: Some(advise(
            data,
            "Simplify visual elements or break them into smaller chunks",
        )),
        data: json!({ "complexity_score": score, "maximum": t.complexity_max }),
    })
}
