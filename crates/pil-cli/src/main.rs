//! CLI entry point for pil.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `pil-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand};
use pil_app::{
    AssetsInput, CheckInput, CheckOutput, ExplainOutput, InterpretInput, run_assets, run_check,
    run_explain, run_interpret, runtime_error_report, serialize_report, verdict_exit_code,
};
use pil_interpret::PilInterpreter;
use pil_settings::Overrides;
use pil_types::PilReport;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pil",
    version,
    about = "Perceptual intent validation for visual, audio and haptic content"
)]
struct Cli {
    /// Path to pil config TOML (missing file means defaults).
    #[arg(long, global = true, default_value = "pil.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|strict|lenient).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override when to fail (error|warning).
    #[arg(long, global = true)]
    fail_on: Option<String>,

    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a batch of perceptual data and write a report.
    Check {
        /// Batch JSON: `{"items": [...]}` or a bare array.
        #[arg(long)]
        input: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/pil/report.json")]
        report_out: Utf8PathBuf,
    },

    /// Validate named asset groups (e.g. `lighting`, `audio`) and write a report.
    Assets {
        /// Assets JSON: an object of group name -> attributes.
        #[arg(long)]
        input: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/pil/report.json")]
        report_out: Utf8PathBuf,
    },

    /// Interpret a batch and print the interpretation as JSON.
    Interpret {
        /// Batch JSON: `{"items": [...]}` or a bare array.
        #[arg(long)]
        input: Utf8PathBuf,
    },

    /// Explain a rule id or code with remediation guidance.
    Explain {
        /// The rule id (e.g., "sight.contrast_ratio") or code (e.g., "insufficient_contrast").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            ref input,
            ref report_out,
        } => cmd_validate(&cli, input, report_out, Mode::Batch),
        Commands::Assets {
            ref input,
            ref report_out,
        } => cmd_validate(&cli, input, report_out, Mode::Assets),
        Commands::Interpret { ref input } => cmd_interpret(&cli, input),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        fail_on: cli.fail_on.clone(),
    }
}

fn read_config(path: &Utf8Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            debug!(%path, %err, "no config loaded; using defaults");
            String::new()
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Mode {
    Batch,
    Assets,
}

fn cmd_validate(
    cli: &Cli,
    input: &Utf8Path,
    report_out: &Utf8Path,
    mode: Mode,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let input_text = std::fs::read_to_string(input)
            .with_context(|| format!("read input: {input}"))?;
        let config_text = read_config(&cli.config);

        let output = match mode {
            Mode::Batch => run_check(CheckInput {
                input_text: &input_text,
                config_text: &config_text,
                overrides: overrides(cli),
            })?,
            Mode::Assets => run_assets(AssetsInput {
                input_text: &input_text,
                config_text: &config_text,
                overrides: overrides(cli),
            })?,
        };

        write_report_file(report_out, &output.report).context("write report json")?;
        print_summary(&output);
        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("pil error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn print_summary(output: &CheckOutput) {
    let report = &output.report;
    let counts = &report.result.counts;
    println!(
        "pil: {} ({} error(s), {} warning(s), {} info) across {} item(s), profile {}",
        report.verdict.as_str(),
        counts.error,
        counts.warning,
        counts.info,
        report.items_validated,
        report.profile,
    );
    for v in &report.result.violations {
        let subject = v.subject.as_deref().map(|s| format!(" [{s}]")).unwrap_or_default();
        println!(
            "  {:<7} item {}{subject} {}: {}",
            v.severity.as_str(),
            v.item,
            v.rule_name,
            v.message
        );
        for s in report.result.suggestions_for(v) {
            println!("          suggestion: {}", s.message);
        }
    }
}

fn cmd_interpret(cli: &Cli, input: &Utf8Path) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<String> {
        let input_text = std::fs::read_to_string(input)
            .with_context(|| format!("read input: {input}"))?;
        let config_text = read_config(&cli.config);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .context("build async runtime")?;
        let interpretation = runtime.block_on(run_interpret(
            InterpretInput {
                input_text: &input_text,
                config_text: &config_text,
                overrides: overrides(cli),
            },
            PilInterpreter::fallback(),
        ))?;
        serde_json::to_string_pretty(&interpretation).context("serialize interpretation")
    })();

    match result {
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
        Err(err) => {
            eprintln!("pil error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &PilReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", pil_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                pil_app::format_not_found(&identifier, available_rule_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
