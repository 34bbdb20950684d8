//! Named asset groups (`{"lighting": {...}, "audio": {...}}`) as a validation entry point.

use crate::engine::{Accumulator, PilValidator};
use crate::model::{ConstructionError, DEFAULT_CONFIDENCE, PerceptualData};
use pil_types::{PerceptualDomain, ValidationResult};
use serde_json::{Map, Value};
use tracing::debug;

const GROUP_ALIASES: &[(&str, PerceptualDomain)] = &[
    ("lighting", PerceptualDomain::Sight),
    ("visual", PerceptualDomain::Sight),
    ("visuals", PerceptualDomain::Sight),
    ("graphics", PerceptualDomain::Sight),
    ("ui", PerceptualDomain::Sight),
    ("textures", PerceptualDomain::Sight),
    ("color", PerceptualDomain::Sight),
    ("colors", PerceptualDomain::Sight),
    ("audio", PerceptualDomain::Sound),
    ("music", PerceptualDomain::Sound),
    ("sfx", PerceptualDomain::Sound),
    ("voice", PerceptualDomain::Sound),
    ("dialogue", PerceptualDomain::Sound),
    ("ambience", PerceptualDomain::Sound),
    ("haptic", PerceptualDomain::Touch),
    ("haptics", PerceptualDomain::Touch),
    ("vibration", PerceptualDomain::Touch),
    ("rumble", PerceptualDomain::Touch),
    ("controller", PerceptualDomain::Touch),
    ("flavor", PerceptualDomain::Taste),
    ("scent", PerceptualDomain::Smell),
    ("aroma", PerceptualDomain::Smell),
    ("balance", PerceptualDomain::Proprioception),
    ("motion", PerceptualDomain::Proprioception),
    ("temperature", PerceptualDomain::Thermoception),
    ("thermal", PerceptualDomain::Thermoception),
];

/// Domain an asset group name stands for. Domain names themselves always match.
pub fn infer_domain(group: &str) -> Option<PerceptualDomain> {
    if let Ok(domain) = group.parse::<PerceptualDomain>() {
        return Some(domain);
    }
    let name = group.trim().to_ascii_lowercase();
    GROUP_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, domain)| *domain)
}

pub fn intent_for_group(group: &str) -> String {
    format!("game_{group}")
}

impl PilValidator {
    /// Validate named asset groups.
    ///
    /// Every group is converted before any rule runs, so a malformed group fails the call
    /// without partial results. Groups are reported in key order; `item` is the group's
    /// position in that order and `subject` is its name.
    pub fn validate_assets(
        &self,
        assets: &Map<String, Value>,
    ) -> Result<(Map<String, Value>, ValidationResult), ConstructionError> {
        let mut groups: Vec<(&String, &Value)> = assets.iter().collect();
        groups.sort_by(|a, b| a.0.cmp(b.0));

        let mut items: Vec<(&str, Option<PerceptualData>)> = Vec::with_capacity(groups.len());
        for (group, value) in groups {
            let Value::Object(attributes) = value else {
                return Err(ConstructionError::AttributesNotMapping {
                    subject: format!("asset group '{group}'"),
                });
            };
            let data = match infer_domain(group) {
                Some(domain) => Some(PerceptualData::from_json_attributes(
                    domain,
                    attributes,
                    Some(intent_for_group(group)),
                    DEFAULT_CONFIDENCE,
                )?),
                None => None,
            };
            items.push((group.as_str(), data));
        }

        let mut acc = Accumulator::default();
        for (index, &(group, ref data)) in items.iter().enumerate() {
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            match data {
                Some(data) => self.evaluate_item(index, data, Some(group), &mut acc),
                None => {
                    debug!(group, "asset group has no perceptual domain");
                    acc.unsupported(index, None, Some(group), DEFAULT_CONFIDENCE);
                }
            }
        }

        let result = acc.finish(self.config().fail_on);
        debug!(
            groups = items.len(),
            violations = result.violations.len(),
            verdict = ?result.verdict,
            "assets validated"
        );
        Ok((assets.clone(), result))
    }
}
