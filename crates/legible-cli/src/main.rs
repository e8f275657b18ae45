//! Legible: contrast and accessibility report for OKLCH palettes.
//!
//! Reads a palette, analyzes every foreground/background pair with
//! `legible-core`, and prints the reports as JSON on stdout. Logs go to
//! stderr.

mod config;
mod error;
mod palette;

use std::process::ExitCode;

use clap::Parser;
use legible_core::{PairReport, analyze_grid};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::palette::Palette;

fn main() -> ExitCode {
    let config = CliConfig::parse();
    init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::builder()
        .with_default_directive(config.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(config: &CliConfig) -> Result<(), CliError> {
    let palette = match &config.palette {
        Some(path) => Palette::load(path)?,
        None => {
            tracing::info!("no palette given, analyzing the default pair");
            Palette::default()
        }
    };

    let reports = analyze(&palette);
    let failing = reports.iter().filter(|r| !r.compliance.aa.normal).count();
    tracing::info!(
        pairs = reports.len(),
        failing_aa = failing,
        "analysis complete"
    );

    let json = if config.compact {
        serde_json::to_string(&reports)?
    } else {
        serde_json::to_string_pretty(&reports)?
    };
    println!("{json}");
    Ok(())
}

fn analyze(palette: &Palette) -> Vec<PairReport> {
    let visual_config = palette.resolved_config();
    analyze_grid(
        &palette.foregrounds,
        &palette.backgrounds,
        visual_config.as_ref(),
    )
}
