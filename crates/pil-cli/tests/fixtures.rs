//! End-to-end CLI tests over the fixtures in `tests/fixtures/`.
//!
//! Each fixture contains:
//! - `input.json`: a batch (`check`) or named asset groups (`assets`)
//! - optionally `pil.toml`
//! - `expected.json`: mode, exit code, verdict, counts, and the ordered
//!   `rule@item:severity` list the report must contain

use assert_cmd::Command;
use pil_test_util::normalize_nondeterministic;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn pil_cmd() -> Command {
    Command::cargo_bin("pil").expect("pil binary not found - run `cargo build` first")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("pil-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("parse {}: {e}", path.display()))
}

/// Run the fixture and return (exit code, report JSON).
fn run_fixture(name: &str, mode: &str) -> (i32, Value) {
    let dir = fixtures_dir().join(name);
    let temp = TempDir::new().expect("temp dir");
    let report_path = temp.path().join("report.json");

    let output = pil_cmd()
        .arg("--config")
        .arg(dir.join("pil.toml"))
        .arg(mode)
        .arg("--input")
        .arg(dir.join("input.json"))
        .arg("--report-out")
        .arg(&report_path)
        .output()
        .expect("run pil");

    let code = output.status.code().unwrap_or(-1);
    (code, read_json(&report_path))
}

fn violation_keys(report: &Value) -> Vec<String> {
    report["result"]["violations"]
        .as_array()
        .expect("violations array")
        .iter()
        .map(|v| {
            format!(
                "{}@{}:{}",
                v["rule_name"].as_str().unwrap_or_default(),
                v["item"],
                v["severity"].as_str().unwrap_or_default()
            )
        })
        .collect()
}

fn check_fixture(name: &str) {
    let expected = read_json(&fixtures_dir().join(name).join("expected.json"));
    let mode = expected["mode"].as_str().expect("mode");
    let (code, report) = run_fixture(name, mode);

    assert_eq!(i64::from(code), expected["exit_code"].as_i64().expect("exit_code"), "{name}");
    assert_eq!(report["schema"], "pil.report.v1", "{name}");
    assert_eq!(report["verdict"], expected["verdict"], "{name}");
    assert_eq!(report["result"]["is_valid"], expected["is_valid"], "{name}");
    assert_eq!(report["result"]["counts"], expected["counts"], "{name}");

    let want: Vec<String> = expected["violations"]
        .as_array()
        .expect("violations")
        .iter()
        .map(|v| v.as_str().expect("string").to_string())
        .collect();
    assert_eq!(violation_keys(&report), want, "{name}");

    let got = report["result"]["confidence_score"].as_f64().expect("score");
    let want = expected["confidence_score"].as_f64().expect("score");
    assert!((got - want).abs() < 1e-9, "{name}: confidence {got} != {want}");
}

#[test]
fn fixture_sight_default() {
    check_fixture("sight_default");
}

#[test]
fn fixture_sight_strict() {
    check_fixture("sight_strict");
}

#[test]
fn fixture_safe_sound() {
    check_fixture("safe_sound");
}

#[test]
fn fixture_mixed_batch() {
    check_fixture("mixed_batch");
}

#[test]
fn fixture_game_assets() {
    check_fixture("game_assets");
}

#[test]
fn reports_are_deterministic_after_normalization() {
    let (_, first) = run_fixture("mixed_batch", "check");
    let (_, second) = run_fixture("mixed_batch", "check");
    let first = normalize_nondeterministic(first);
    assert_eq!(first, normalize_nondeterministic(second));
    assert_eq!(first["tool"]["version"], "__VERSION__");
    assert_eq!(first["started_at"], "__TIMESTAMP__");
}

#[test]
fn suggestions_pair_with_violations() {
    let (_, report) = run_fixture("sight_default", "check");
    let suggestions = report["result"]["suggestions"].as_array().expect("suggestions");
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0]["rule_name"], "sight.contrast_ratio");
    assert!(
        suggestions[0]["message"]
            .as_str()
            .expect("message")
            .contains("intent: ui_design")
    );
}
