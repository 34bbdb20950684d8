//! The `check` use case: validate a perceptual batch and produce a report.

use anyhow::Context;
use pil_domain::PilValidator;
use pil_settings::{Overrides, PilConfigV1, ResolvedConfig};
use pil_types::{PilReport, Verdict};
use time::OffsetDateTime;
use tracing::info;

use crate::input::parse_batch_json;
use crate::report::build_report;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Batch document contents (`{"items": [...]}` or a bare array).
    pub input_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check and assets use cases.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: PilReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve configuration. Empty text means defaults.
pub fn load_config(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        PilConfigV1::default()
    } else {
        pil_settings::parse_config_toml(config_text).context("parse config")?
    };
    pil_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Run the check use case: parse config, parse the batch, validate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = load_config(input.config_text, input.overrides.clone())?;
    let batch = parse_batch_json(input.input_text).context("parse batch")?;

    let validator = PilValidator::new(resolved.effective.clone());
    let (_, result) = validator.validate(&batch);
    info!(
        items = batch.len(),
        errors = result.counts.error,
        warnings = result.counts.warning,
        verdict = ?result.verdict,
        "check finished"
    );

    let finished_at = OffsetDateTime::now_utc();
    let report = build_report(
        started_at,
        finished_at,
        &resolved.effective.profile,
        batch.len(),
        result,
    );

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pil_types::{Severity, ids};

    const SIGHT_EXAMPLE: &str = r#"{"items": [{
        "domain": "sight",
        "attributes": {"contrast_ratio": 3.2, "color_blind_safe": false},
        "intent": "ui_design"
    }]}"#;

    fn check(input_text: &str, config_text: &str, overrides: Overrides) -> CheckOutput {
        run_check(CheckInput {
            input_text,
            config_text,
            overrides,
        })
        .expect("run check")
    }

    #[test]
    fn default_profile_warns_on_sight_example() {
        let out = check(SIGHT_EXAMPLE, "", Overrides::default());
        assert_eq!(out.report.verdict, Verdict::Warn);
        assert_eq!(out.report.profile, "default");
        assert_eq!(out.report.items_validated, 1);
        assert_eq!(out.report.result.counts.warning, 2);
        assert!(out.report.result.is_valid);
    }

    #[test]
    fn strict_profile_fails_sight_example() {
        let out = check(
            SIGHT_EXAMPLE,
            "",
            Overrides {
                profile: Some("strict".to_string()),
                fail_on: None,
            },
        );
        assert_eq!(out.report.verdict, Verdict::Fail);
        assert!(!out.report.result.is_valid);
        assert_eq!(verdict_exit_code(out.report.verdict), 2);
    }

    #[test]
    fn config_rule_overrides_apply() {
        let config = r#"
[rules."sight.color_blind_safe"]
enabled = false

[rules."sight.contrast_ratio"]
severity = "error"
"#;
        let out = check(SIGHT_EXAMPLE, config, Overrides::default());
        let result = &out.report.result;
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule_name, ids::RULE_SIGHT_CONTRAST_RATIO);
        assert_eq!(result.violations[0].severity, Severity::Error);
        assert_eq!(out.report.verdict, Verdict::Fail);
    }

    #[test]
    fn bad_config_is_an_error() {
        let err = run_check(CheckInput {
            input_text: SIGHT_EXAMPLE,
            config_text: "fail_on = \"never\"",
            overrides: Overrides::default(),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("resolve config"));
    }

    #[test]
    fn bad_batch_is_an_error() {
        let err = run_check(CheckInput {
            input_text: r#"[{"domain": "sight", "attributes": {"contrast_ratio": "high"}}]"#,
            config_text: "",
            overrides: Overrides::default(),
        })
        .unwrap_err();
        let text = format!("{err:#}");
        assert!(text.contains("parse batch"), "{text}");
        assert!(text.contains("contrast_ratio"), "{text}");
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
