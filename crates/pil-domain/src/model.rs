use pil_types::{PerceptualDomain, UnknownDomain};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// Attribute keys the built-in rule sets read, with the kind each must hold.
///
/// Any other key is accepted as-is and ignored by validation.
const RECOGNIZED_ATTRIBUTES: &[(&str, AttributeKind)] = &[
    ("contrast_ratio", AttributeKind::Number),
    ("color_blind_safe", AttributeKind::Bool),
    ("complexity_score", AttributeKind::Number),
    ("volume_db", AttributeKind::Number),
    ("has_descriptions", AttributeKind::Bool),
    ("toxicity_score", AttributeKind::Number),
    ("vibration_intensity", AttributeKind::Number),
    ("has_safety_cutoff", AttributeKind::Bool),
];

pub const DEFAULT_CONFIDENCE: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    Number,
    Bool,
    Text,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AttributeKind::Number => "number",
            AttributeKind::Bool => "boolean",
            AttributeKind::Text => "string",
        })
    }
}

pub fn recognized_kind(key: &str) -> Option<AttributeKind> {
    RECOGNIZED_ATTRIBUTES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, kind)| *kind)
}

/// A single attribute value.
///
/// Rules only read numbers and booleans. Text values are descriptive context
/// (e.g. `"rhythm": "slow"`) passed through to interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AttributeValue {
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Bool(_) => AttributeKind::Bool,
            AttributeValue::Number(_) => AttributeKind::Number,
            AttributeValue::Text(_) => AttributeKind::Text,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(b) => write!(f, "{b}"),
            AttributeValue::Number(n) => write!(f, "{n}"),
            AttributeValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Number(f64::from(value))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

/// Raised when perceptual data cannot be built. Never raised by validation itself.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    #[error(transparent)]
    UnknownDomain(#[from] UnknownDomain),

    #[error("confidence {value} is outside [0, 1]")]
    ConfidenceOutOfRange { value: f64 },

    #[error("attribute {key:?} is not a finite number")]
    NonFiniteNumber { key: String },

    #[error("attribute {key:?} has unsupported value type {found} (expected number, boolean or string)")]
    UnsupportedAttributeValue { key: String, found: &'static str },

    #[error("attribute {key:?} must be a {expected}, found {found}")]
    AttributeKind {
        key: String,
        expected: AttributeKind,
        found: AttributeKind,
    },

    #[error("attributes for {subject} must be a mapping")]
    AttributesNotMapping { subject: String },
}

/// One perceptual observation.
///
/// Fields are private: every instance went through [`PerceptualDataBuilder::build`]
/// (directly or via deserialization), so domain, attribute kinds and confidence are
/// known to be valid. The domain cannot change after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPerceptualData")]
pub struct PerceptualData {
    domain: PerceptualDomain,
    attributes: BTreeMap<String, AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intent: Option<String>,
    confidence: f64,
}

impl PerceptualData {
    pub fn builder(domain: PerceptualDomain) -> PerceptualDataBuilder {
        PerceptualDataBuilder {
            domain,
            attributes: BTreeMap::new(),
            intent: None,
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    /// Build from a JSON attribute object (the shape used by asset groups and input files).
    pub fn from_json_attributes(
        domain: PerceptualDomain,
        attributes: &serde_json::Map<String, JsonValue>,
        intent: Option<String>,
        confidence: f64,
    ) -> Result<Self, ConstructionError> {
        let mut builder = PerceptualData::builder(domain).confidence(confidence);
        builder.intent = intent;
        for (key, value) in attributes {
            builder.attributes.insert(key.clone(), attribute_from_json(key, value)?);
        }
        builder.build()
    }

    pub fn domain(&self) -> PerceptualDomain {
        self.domain
    }

    pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    pub fn intent(&self) -> Option<&str> {
        self.intent.as_deref()
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).and_then(AttributeValue::as_f64)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.attributes.get(key).and_then(AttributeValue::as_bool)
    }
}

#[derive(Clone, Debug)]
pub struct PerceptualDataBuilder {
    domain: PerceptualDomain,
    attributes: BTreeMap<String, AttributeValue>,
    intent: Option<String>,
    confidence: f64,
}

impl PerceptualDataBuilder {
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn build(self) -> Result<PerceptualData, ConstructionError> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(ConstructionError::ConfidenceOutOfRange {
                value: self.confidence,
            });
        }

        for (key, value) in &self.attributes {
            if let AttributeValue::Number(n) = value
                && !n.is_finite()
            {
                return Err(ConstructionError::NonFiniteNumber { key: key.clone() });
            }
            if let Some(expected) = recognized_kind(key)
                && value.kind() != expected
            {
                return Err(ConstructionError::AttributeKind {
                    key: key.clone(),
                    expected,
                    found: value.kind(),
                });
            }
        }

        Ok(PerceptualData {
            domain: self.domain,
            attributes: self.attributes,
            intent: self.intent,
            confidence: self.confidence,
        })
    }
}

/// Wire shape accepted on input. `data` is accepted as an alias for `attributes`.
#[derive(Clone, Debug, Deserialize)]
pub struct RawPerceptualData {
    pub domain: String,
    #[serde(default, alias = "data")]
    pub attributes: JsonValue,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    DEFAULT_CONFIDENCE
}

impl TryFrom<RawPerceptualData> for PerceptualData {
    type Error = ConstructionError;

    fn try_from(raw: RawPerceptualData) -> Result<Self, Self::Error> {
        let domain: PerceptualDomain = raw.domain.parse()?;
        let empty = serde_json::Map::new();
        let attributes = match &raw.attributes {
            JsonValue::Object(map) => map,
            JsonValue::Null => &empty,
            _ => {
                return Err(ConstructionError::AttributesNotMapping {
                    subject: format!("{domain} item"),
                });
            }
        };
        PerceptualData::from_json_attributes(domain, attributes, raw.intent, raw.confidence)
    }
}

fn attribute_from_json(key: &str, value: &JsonValue) -> Result<AttributeValue, ConstructionError> {
    let unsupported = |found| ConstructionError::UnsupportedAttributeValue {
        key: key.to_string(),
        found,
    };
    match value {
        JsonValue::Bool(b) => Ok(AttributeValue::Bool(*b)),
        JsonValue::Number(n) => n
            .as_f64()
            .map(AttributeValue::Number)
            .ok_or_else(|| ConstructionError::NonFiniteNumber {
                key: key.to_string(),
            }),
        JsonValue::String(s) => Ok(AttributeValue::Text(s.clone())),
        JsonValue::Null => Err(unsupported("null")),
        JsonValue::Array(_) => Err(unsupported("array")),
        JsonValue::Object(_) => Err(unsupported("object")),
    }
}
