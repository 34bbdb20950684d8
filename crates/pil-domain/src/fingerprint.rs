use crate::model::{AttributeValue, PerceptualData};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Stable SHA-256 identity of a batch. Identical batches share an id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(String);

impl BatchId {
    /// Identity fields per item, in batch order:
    /// - domain
    /// - intent (tagged, absent differs from empty)
    /// - confidence
    /// - attributes sorted by key, each value tagged with its kind
    ///
    /// Every variable-length field is length-prefixed, so caller-controlled keys
    /// and text cannot imitate field or item boundaries.
    pub fn for_batch(batch: &[PerceptualData]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((batch.len() as u64).to_le_bytes());
        for data in batch {
            hash_item(&mut hasher, data);
        }
        BatchId(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn hash_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

fn hash_item(hasher: &mut Sha256, data: &PerceptualData) {
    hash_field(hasher, data.domain().as_str().as_bytes());
    match data.intent() {
        Some(intent) => {
            hasher.update([1u8]);
            hash_field(hasher, intent.as_bytes());
        }
        None => hasher.update([0u8]),
    }
    hasher.update(data.confidence().to_bits().to_le_bytes());

    let attributes = data.attributes();
    hasher.update((attributes.len() as u64).to_le_bytes());
    for (key, value) in attributes {
        hash_field(hasher, key.as_bytes());
        match value {
            AttributeValue::Number(n) => {
                hasher.update(b"n");
                hasher.update(n.to_bits().to_le_bytes());
            }
            AttributeValue::Bool(b) => hasher.update(if *b { b"t" } else { b"f" }),
            AttributeValue::Text(text) => {
                hasher.update(b"s");
                hash_field(hasher, text.as_bytes());
            }
        }
    }
}
