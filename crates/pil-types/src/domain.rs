use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sensory modality used to select a rule set.
///
/// The set is closed. Adding a modality means adding a variant here and, if it should be
/// checked, a rule set in `pil-domain`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PerceptualDomain {
    Sight,
    Sound,
    Touch,
    Taste,
    Smell,
    Proprioception,
    Thermoception,
}

impl PerceptualDomain {
    pub const ALL: [PerceptualDomain; 7] = [
        PerceptualDomain::Sight,
        PerceptualDomain::Sound,
        PerceptualDomain::Touch,
        PerceptualDomain::Taste,
        PerceptualDomain::Smell,
        PerceptualDomain::Proprioception,
        PerceptualDomain::Thermoception,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PerceptualDomain::Sight => "sight",
            PerceptualDomain::Sound => "sound",
            PerceptualDomain::Touch => "touch",
            PerceptualDomain::Taste => "taste",
            PerceptualDomain::Smell => "smell",
            PerceptualDomain::Proprioception => "proprioception",
            PerceptualDomain::Thermoception => "thermoception",
        }
    }
}

impl fmt::Display for PerceptualDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown perceptual domain: {name:?}")]
pub struct UnknownDomain {
    pub name: String,
}

impl FromStr for PerceptualDomain {
    type Err = UnknownDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        PerceptualDomain::ALL
            .into_iter()
            .find(|d| d.as_str() == lowered)
            .ok_or_else(|| UnknownDomain {
                name: s.to_string(),
            })
    }
}
