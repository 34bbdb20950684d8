//! Pure perceptual policy evaluation (no IO).
//!
//! Input: perceptual data constructed (and validated) by the caller.
//! Output: violations + suggestions + verdict, in input order.

#![forbid(unsafe_code)]

pub mod assets;
pub mod document;
pub mod model;
pub mod policy;
pub mod rules;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use document::{DocumentEntry, PilDocument};
pub use engine::PilValidator;
pub use fingerprint::BatchId;
pub use model::{AttributeKind, AttributeValue, ConstructionError, PerceptualData};
pub use pil_types::PerceptualDomain;
