use super::utils::advise;
use super::{Rule, RuleHit};
use crate::model::PerceptualData;
use crate::policy::Thresholds;
use pil_types::ids;
use serde_json::json;

pub(super) const RULES: [Rule; 3] = [
    Rule {
        id: ids::RULE_SOUND_VOLUME_LEVEL,
        weight: 0.5,
        eval: volume_level,
    },
    Rule {
        id: ids::RULE_SOUND_AUDIO_DESCRIPTIONS,
        weight: 0.9,
        eval: audio_descriptions,
    },
    Rule {
        id: ids::RULE_SOUND_TOXICITY,
        weight: 0.4,
        eval: toxicity,
    },
];

fn volume_level(data: &PerceptualData, t: &Thresholds) -> Option<RuleHit> {
    let volume = data.number("volume_db")?;
    if volume <= t.volume_max_db {
        return None;
    }
    Some(RuleHit {
        code: ids::CODE_UNSAFE_VOLUME,
        message: format!(
            "audio volume {volume} dB exceeds the safe hearing level of {} dB",
            t.volume_max_db
        ),
        suggestion: Some(advise(
            data,
            format!(
                "Reduce audio volume to {} dB or below, or provide user volume controls",
                t.volume_max_db
            ),
        )),
        data: json!({ "volume_db": volume, "maximum": t.volume_max_db }),
    })
}

fn audio_descriptions(data: &PerceptualData, _t: &Thresholds) -> Option<RuleHit> {
    if data.flag("has_descriptions")? {
        return None;
    }
    Some(RuleHit {
        code: ids::CODE_MISSING_DESCRIPTIONS,
        message: "audio content is missing descriptions for accessibility".to_string(),
        suggestion: Some(advise(
            data,
            "Add audio descriptions for visually impaired users",
        )),
        data: json!({ "has_descriptions": false }),
    })
}

fn toxicity(data: &PerceptualData, t: &Thresholds) -> Option<RuleHit> {
    let score = data.number("toxicity_score")?;
    if score <= t.toxicity_max {
        return None;
    }
    Some(RuleHit {
        code: ids::CODE_TOXIC_CONTENT,
        message: format!(
            "audio content toxicity score {score} exceeds the moderation threshold {}",
            t.toxicity_max
        ),
        suggestion: Some(advise(data, "Review and moderate the audio content")),
        data: json!({ "toxicity_score": score, "maximum": t.toxicity_max }),
    })
}
