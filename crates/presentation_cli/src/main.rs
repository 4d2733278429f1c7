//! weather.gov CLI
//!
//! Command-line interface for point lookups, forecasts and active alerts.

#![allow(clippy::print_stdout)]

mod cli;
mod commands;
mod render;

use anyhow::Context;
use clap::Parser;
use infrastructure::{AppConfig, LogFormat, init_telemetry};
use integration_weather_gov::NwsClient;
use tracing::debug;

use crate::{cli::Cli, render::OutputFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    init_telemetry(&config.telemetry)?;
    debug!(
        base_url = %config.weather.base_url,
        timeout_secs = config.weather.timeout_secs,
        json_logs = config.telemetry.format == LogFormat::Json,
        "Configuration loaded"
    );

    let client = NwsClient::new(config.weather)?;
    let output = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let text = commands::run(&client, &cli.command, output).await?;
    println!("{text}");

    Ok(())
}
