//! Shared test utilities for the PIL workspace.
//!
//! Lives in its own crate so CLI integration tests and `xtask` can use it outside
//! `#[cfg(test)]`.

use serde_json::Value;

const TIMESTAMP_KEYS: &[&str] = &["started_at", "finished_at"];
const ENVELOPE_KEYS: &[&str] = &["schema", "tool", "verdict", "result"];

/// Normalize non-deterministic report fields for golden comparison.
///
/// `tool.version` is replaced only on a root report envelope, so rule `data`
/// payloads that happen to carry a `tool` object stay intact. Timestamps are
/// replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut()
        && ENVELOPE_KEYS.iter().all(|k| obj.contains_key(*k))
        && let Some(Value::Object(tool)) = obj.get_mut("tool")
        && tool.contains_key("version")
    {
        tool.insert("version".to_string(), Value::from("__VERSION__"));
    }
    normalize_timestamps(&mut value);
    value
}

fn normalize_timestamps(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if let Some(slot) = map.get_mut(*key) {
                    *slot = Value::from("__TIMESTAMP__");
                }
            }
            map.values_mut().for_each(normalize_timestamps);
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_timestamps),
        _ => {}
    }
}

/// Parse report bytes and normalize them in one step.
pub fn normalized_report(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(bytes).map(normalize_nondeterministic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_version_and_timestamps_are_replaced() {
        let input = json!({
            "schema": "pil.report.v1",
            "tool": {"name": "pil", "version": "0.1.0"},
            "started_at": "2026-01-01T00:00:00Z",
            "finished_at": "2026-01-01T00:00:01Z",
            "verdict": "pass",
            "result": {"violations": []}
        });
        let out = normalize_nondeterministic(input);
        assert_eq!(out["tool"]["version"], "__VERSION__");
        assert_eq!(out["tool"]["name"], "pil");
        assert_eq!(out["started_at"], "__TIMESTAMP__");
        assert_eq!(out["finished_at"], "__TIMESTAMP__");
    }

    #[test]
    fn nested_tool_objects_are_untouched() {
        let input = json!({
            "schema": "pil.report.v1",
            "tool": {"name": "pil", "version": "0.1.0"},
            "verdict": "warn",
            "result": {
                "violations": [{"data": {"tool": {"name": "mixer", "version": "2.0"}}}]
            }
        });
        let out = normalize_nondeterministic(input);
        assert_eq!(out["result"]["violations"][0]["data"]["tool"]["version"], "2.0");
    }

    #[test]
    fn non_envelope_keeps_version() {
        let input = json!({"tool": {"name": "pil", "version": "0.1.0"}});
        let out = normalize_nondeterministic(input);
        assert_eq!(out["tool"]["version"], "0.1.0");
    }

    #[test]
    fn normalized_report_rejects_garbage() {
        assert!(normalized_report(b"not json").is_err());
        assert!(normalized_report(br#"{"started_at": "x"}"#).is_ok());
    }
}
