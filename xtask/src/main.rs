//! Developer tasks (schema generation, explain coverage, report normalization).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Project root: the parent of the xtask directory.
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };
    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "pil.report.v1.json",
            generate: || schema_for!(pil_types::PilReport),
        },
        SchemaSpec {
            filename: "pil.config.v1.json",
            generate: || schema_for!(pil_settings::PilConfigV1),
        },
    ]
}

/// Pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json).with_context(|| format!("write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Fails when schemas/ differs from what the types generate.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut stale = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let expected = serialize_schema(&(spec.generate)())?;
        match fs::read_to_string(&path) {
            Ok(actual) if actual == expected => {}
            Ok(_) => stale.push(format!("{} (out of date)", spec.filename)),
            Err(_) => stale.push(format!("{} (missing)", spec.filename)),
        }
    }

    if stale.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    for entry in &stale {
        eprintln!("  - {entry}");
    }
    eprintln!("\nRun `cargo xtask schemas` to regenerate.");
    bail!("schema validation failed")
}

/// Every rule id and code must resolve to a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    use pil_types::explain::{all_codes, all_rule_ids, lookup_explanation};

    let mut errors = Vec::new();
    for (kind, ident) in all_rule_ids()
        .iter()
        .map(|id| ("rule id", id))
        .chain(all_codes().iter().map(|code| ("code", code)))
    {
        match lookup_explanation(ident) {
            Some(exp) => {
                for (field, text) in [
                    ("title", exp.title),
                    ("description", exp.description),
                    ("remediation", exp.remediation),
                ] {
                    if text.trim().is_empty() {
                        errors.push(format!("{kind} '{ident}' has empty {field}"));
                    }
                }
                for (field, example) in [("before", exp.examples.before), ("after", exp.examples.after)]
                {
                    if serde_json::from_str::<serde_json::Value>(example).is_err() {
                        errors.push(format!("{kind} '{ident}' has non-JSON {field} example"));
                    }
                }
            }
            None => errors.push(format!("{kind} '{ident}' has no explanation")),
        }
    }

    if errors.is_empty() {
        println!(
            "{} rule ids and {} codes have explanations",
            all_rule_ids().len(),
            all_codes().len()
        );
        return Ok(());
    }
    for error in &errors {
        eprintln!("  - {error}");
    }
    bail!("explain coverage failed with {} errors", errors.len())
}

/// Run every fixture in tests/fixtures through the app layer and validate the
/// resulting report against the generated report schema.
fn conform() -> anyhow::Result<()> {
    let mut schema_value = serde_json::to_value(schema_for!(pil_types::PilReport))
        .context("serialize report schema")?;
    // $id is a logical identifier; don't let the validator try to resolve it.
    if let Some(obj) = schema_value.as_object_mut() {
        obj.remove("$id");
    }
    let validator = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("compile report schema: {e}"))?;

    let fixtures = project_root()?.join("tests").join("fixtures");
    let mut entries: Vec<PathBuf> = fs::read_dir(&fixtures)
        .with_context(|| format!("read {}", fixtures.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.join("input.json").exists())
        .collect();
    entries.sort();

    let mut errors = Vec::new();
    for dir in &entries {
        let name = dir.file_name().unwrap_or_default().to_string_lossy().to_string();
        let input_text = fs::read_to_string(dir.join("input.json"))
            .with_context(|| format!("read {name}/input.json"))?;
        let config_text = fs::read_to_string(dir.join("pil.toml")).unwrap_or_default();
        let mode = fs::read_to_string(dir.join("expected.json"))
            .ok()
            .and_then(|text| serde_json::from_str::<serde_json::Value>(&text).ok())
            .and_then(|v| v["mode"].as_str().map(str::to_string))
            .unwrap_or_else(|| "check".to_string());

        let output = if mode == "assets" {
            pil_app::run_assets(pil_app::AssetsInput {
                input_text: &input_text,
                config_text: &config_text,
                overrides: Default::default(),
            })
        } else {
            pil_app::run_check(pil_app::CheckInput {
                input_text: &input_text,
                config_text: &config_text,
                overrides: Default::default(),
            })
        }
        .with_context(|| format!("run fixture {name}"))?;

        let report = serde_json::to_value(&output.report).context("serialize report")?;
        for error in validator.iter_errors(&report) {
            errors.push(format!("{name}: {error}"));
        }
        println!("✓ {name}");
    }

    if errors.is_empty() {
        println!("\n{} fixture reports conform to pil.report.v1", entries.len());
        return Ok(());
    }
    for error in &errors {
        eprintln!("  - {error}");
    }
    bail!("{} schema violations", errors.len())
}

/// Print a report with timestamps and tool version replaced, for golden diffs.
fn normalize_report(path: &Path) -> anyhow::Result<()> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let value = pil_test_util::normalized_report(&bytes).context("parse report")?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help                     Show this message");
    eprintln!("  schemas                  Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas         Check that schemas/ matches generated output (for CI)");
    eprintln!("  explain-coverage         Check every rule id and code has an explanation");
    eprintln!("  conform                  Validate fixture reports against the report schema");
    eprintln!("  normalize-report <path>  Print a report with nondeterministic fields masked");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(String::as_str).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "schemas" | "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "explain-coverage" => explain_coverage(),
        "conform" => conform(),
        "normalize-report" => match args.get(2) {
            Some(path) => normalize_report(Path::new(path)),
            None => bail!("normalize-report requires a report path"),
        },
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
