//! Command-line interface for flight-stats
//!
//! Reads the flight dataset, prints the three summary answers and exits
//! non-zero if the dataset cannot be read or any line fails to decode.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use flight_stats::{analyze_file, init_tracing, render, AnalysisConfig, LogConfig, OutputFormat};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Summarise a line-delimited log of completed flights
#[derive(Parser, Debug)]
#[command(name = "flight-stats")]
#[command(version = flight_stats::VERSION)]
#[command(about = "Longest flights, missed landings and overnight stays from a JSONL flight log", long_about = None)]
struct Cli {
    /// Path to the JSONL dataset
    #[arg(short, long, value_name = "FILE", default_value = flight_stats::config::DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output format for the report
    #[arg(short, long, value_enum, default_value = "human")]
    format: Format,

    /// Enable JSON structured logging
    #[arg(long)]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Fixed text layout
    Human,
    /// Pretty-printed JSON
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl From<Cli> for AnalysisConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            format: cli.format.into(),
            log: LogConfig {
                level: cli.log_level,
                json: cli.json_logs,
            },
        }
    }
}

fn main() -> Result<()> {
    let config = AnalysisConfig::from(Cli::parse());
    init_tracing(&config.log);
    debug!(?config, "starting");

    let report = analyze_file(&config.input)
        .with_context(|| format!("failed to analyse {}", config.input.display()))?;
    let output = render(&report, config.format).context("failed to render report")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write report")?;

    Ok(())
}
