//! Fuzz target for the named asset group entry point.
//!
//! Structured input keeps group names close to the inference table so most
//! cases reach rule evaluation instead of failing JSON parsing.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pil_domain::PilValidator;
use serde_json::{Map, Value};

#[derive(Arbitrary, Debug)]
enum FuzzValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Null,
}

#[derive(Arbitrary, Debug)]
struct Group {
    name: String,
    /// When false the group value is a bare number instead of an object.
    is_object: bool,
    attributes: Vec<(String, FuzzValue)>,
}

const NAMES: &[&str] = &[
    "lighting", "audio", "haptics", "flavor", "scent", "balance", "thermal", "physics",
];
const KEYS: &[&str] = &[
    "contrast_ratio",
    "color_blind_safe",
    "complexity_score",
    "volume_db",
    "has_descriptions",
    "toxicity_score",
    "vibration_intensity",
    "has_safety_cutoff",
];

fn pick<'a>(choices: &'a [&'a str], raw: &'a str) -> &'a str {
    match raw.len() % (choices.len() + 1) {
        i if i < choices.len() => choices[i],
        _ => raw,
    }
}

fuzz_target!(|groups: Vec<Group>| {
    if groups.len() > 16 {
        return;
    }
    let mut assets = Map::new();
    for group in &groups {
        let value = if group.is_object {
            let mut attrs = Map::new();
            for (key, v) in group.attributes.iter().take(16) {
                let v = match v {
                    FuzzValue::Number(n) => serde_json::Number::from_f64(*n)
                        .map(Value::Number)
                        .unwrap_or(Value::Null),
                    FuzzValue::Bool(b) => Value::Bool(*b),
                    FuzzValue::Text(s) => Value::String(s.clone()),
                    FuzzValue::Null => Value::Null,
                };
                attrs.insert(pick(KEYS, key).to_string(), v);
            }
            Value::Object(attrs)
        } else {
            Value::from(1)
        };
        assets.insert(pick(NAMES, &group.name).to_string(), value);
    }

    if let Ok((copy, result)) = PilValidator::default().validate_assets(&assets) {
        assert_eq!(copy, assets);
        assert!(result.violations.iter().all(|v| v.subject.is_some()));
    }
});
