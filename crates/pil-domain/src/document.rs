//! Normalized batch representation handed to reasoning collaborators.

use crate::fingerprint::BatchId;
use crate::model::{AttributeValue, PerceptualData};
use pil_types::PerceptualDomain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DOCUMENT_VERSION: &str = "1.0";

/// A batch grouped by domain, in domain order. Within a domain, entries keep batch order.
///
/// Carries no timestamp, so the same batch always yields the same document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PilDocument {
    pub version: String,
    pub batch_id: BatchId,
    pub perceptual_domains: BTreeMap<PerceptualDomain, Vec<DocumentEntry>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub attributes: BTreeMap<String, AttributeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    pub confidence: f64,
}

impl PilDocument {
    pub fn from_batch(batch: &[PerceptualData]) -> Self {
        let mut perceptual_domains: BTreeMap<PerceptualDomain, Vec<DocumentEntry>> =
            BTreeMap::new();
        for data in batch {
            perceptual_domains
                .entry(data.domain())
                .or_default()
                .push(DocumentEntry::from(data));
        }
        PilDocument {
            version: DOCUMENT_VERSION.to_string(),
            batch_id: BatchId::for_batch(batch),
            perceptual_domains,
        }
    }

    pub fn domains(&self) -> impl Iterator<Item = PerceptualDomain> + '_ {
        self.perceptual_domains.keys().copied()
    }

    pub fn entry_count(&self) -> usize {
        self.perceptual_domains.values().map(Vec::len).sum()
    }
}

impl From<&PerceptualData> for DocumentEntry {
    fn from(data: &PerceptualData) -> Self {
        DocumentEntry {
            attributes: data.attributes().clone(),
            intent: data.intent().map(str::to_string),
            confidence: data.confidence(),
        }
    }
}
