//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{ConfidenceConfig, InterpreterConfig, PilConfigV1, RuleConfig, ThresholdsConfig};
pub use presets::{PROFILES, preset};
pub use resolve::{DEFAULT_INTERPRET_TIMEOUT_MS, Overrides, ResolvedConfig, parse_fail_on};

/// Parse `pil.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PilConfigV1> {
    let cfg: PilConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the validator (profile + overrides + per-rule config).
pub fn resolve_config(cfg: PilConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
