pub mod api;
pub mod cli;
pub mod config;
pub mod curve;
pub mod domain;
pub mod errors;
pub mod report;
pub mod services;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::curve::TargetDistribution;
use crate::services::calibration::CalibrationService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_force(
    input: &Path,
    mean: Option<f64>,
    std_dev: Option<f64>,
    output: Option<&Path>,
) -> Result<()> {
    let service = CalibrationService::new(AppConfig::new());
    let defaults = service.default_target();
    let target = TargetDistribution::new(
        mean.unwrap_or(defaults.mean),
        std_dev.unwrap_or(defaults.standard_deviation),
    );

    let records = service.load_records(input)?;
    let report = service.calibrate(&records, &target)?;
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn handle_stats(input: &Path, as_json: bool) -> Result<()> {
    let config = AppConfig::new();
    let service = CalibrationService::new(config.clone());
    let records = service.load_records(input)?;
    let summary = report::PopulationSummary::from_records(&records, &config.grid);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary);
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
