//! Input documents: perceptual batches and named asset groups.

use anyhow::Context;
use pil_domain::PerceptualData;
use serde_json::{Map, Value};

/// Parse a batch given as `{"items": [...]}` or a bare array.
pub fn parse_batch_json(text: &str) -> anyhow::Result<Vec<PerceptualData>> {
    let value: Value = serde_json::from_str(text).context("parse input json")?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            Some(_) => anyhow::bail!("`items` must be an array"),
            None => anyhow::bail!("expected an array of items or an object with `items`"),
        },
        _ => anyhow::bail!("expected an array of items or an object with `items`"),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<PerceptualData>(item).with_context(|| format!("item {i}"))
        })
        .collect()
}

/// Parse named asset groups: a JSON object of group name -> attributes.
pub fn parse_assets_json(text: &str) -> anyhow::Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(text).context("parse assets json")?;
    match value {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("assets must be a JSON object of named groups"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pil_domain::PerceptualDomain;

    #[test]
    fn wrapped_and_bare_batches_are_equivalent() {
        let item = r#"{"domain": "sound", "attributes": {"volume_db": 75}}"#;
        let wrapped = parse_batch_json(&format!(r#"{{"items": [{item}]}}"#)).expect("wrapped");
        let bare = parse_batch_json(&format!("[{item}]")).expect("bare");
        assert_eq!(wrapped, bare);
        assert_eq!(bare[0].domain(), PerceptualDomain::Sound);
    }

    #[test]
    fn construction_errors_name_the_item() {
        let err = parse_batch_json(
            r#"[{"domain": "sight"}, {"domain": "sight", "confidence": 2.0}]"#,
        )
        .unwrap_err();
        let text = format!("{err:#}");
        assert!(text.contains("item 1"), "{text}");
        assert!(text.contains("confidence"), "{text}");
    }

    #[test]
    fn unknown_domain_is_rejected() {
        let err = parse_batch_json(r#"[{"domain": "echolocation"}]"#).unwrap_err();
        assert!(format!("{err:#}").contains("echolocation"));
    }

    #[test]
    fn other_shapes_are_rejected() {
        assert!(parse_batch_json("42").is_err());
        assert!(parse_batch_json(r#"{"items": {}}"#).is_err());
        assert!(parse_batch_json("not json").is_err());
        assert!(parse_assets_json("[]").is_err());
    }
}
