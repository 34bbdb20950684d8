//! The `assets` use case: validate named asset groups and produce a report.

use anyhow::Context;
use pil_domain::PilValidator;
use pil_settings::Overrides;
use time::OffsetDateTime;
use tracing::info;

use crate::check::{CheckOutput, load_config};
use crate::input::parse_assets_json;
use crate::report::build_report;

#[derive(Clone, Debug)]
pub struct AssetsInput<'a> {
    /// JSON object of group name -> attributes.
    pub input_text: &'a str,
    pub config_text: &'a str,
    pub overrides: Overrides,
}

pub fn run_assets(input: AssetsInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = load_config(input.config_text, input.overrides.clone())?;
    let assets = parse_assets_json(input.input_text)?;

    let validator = PilValidator::new(resolved.effective.clone());
    let (_, result) = validator
        .validate_assets(&assets)
        .context("build perceptual data from assets")?;
    info!(groups = assets.len(), verdict = ?result.verdict, "assets check finished");

    let report = build_report(
        started_at,
        OffsetDateTime::now_utc(),
        &resolved.effective.profile,
        assets.len(),
        result,
    );
    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}
