//! The `interpret` use case: hand a batch to a reasoning backend.

use anyhow::Context;
use pil_interpret::{Interpretation, PilInterpreter};
use pil_settings::Overrides;
use std::time::Duration;
use tracing::debug;

use crate::check::load_config;
use crate::input::parse_batch_json;

#[derive(Clone, Debug)]
pub struct InterpretInput<'a> {
    pub input_text: &'a str,
    pub config_text: &'a str,
    pub overrides: Overrides,
}

/// Interpret a batch with `interpreter`, bounded by the configured timeout.
pub async fn run_interpret(
    input: InterpretInput<'_>,
    interpreter: PilInterpreter,
) -> anyhow::Result<Interpretation> {
    let resolved = load_config(input.config_text, input.overrides.clone())?;
    let batch = parse_batch_json(input.input_text).context("parse batch")?;

    let interpreter =
        interpreter.with_timeout(Duration::from_millis(resolved.interpret_timeout_ms));
    debug!(
        backend = interpreter.backend_name(),
        timeout_ms = interpreter.timeout().as_millis() as u64,
        items = batch.len(),
        "interpreting batch"
    );
    let interpretation = interpreter
        .interpret(&batch)
        .await
        .context("interpret batch")?;
    Ok(interpretation)
}
