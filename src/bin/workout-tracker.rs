// ABOUTME: Command-line entry point printing one report line per sensor package
// ABOUTME: Falls back to the built-in sample dataset when no packages are given
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Report the built-in sample packages
//! workout-tracker
//!
//! # Report custom packages
//! workout-tracker -p RUN:15000,1,75 -p SWM:720,1,80,25,40
//!
//! # JSON output, keep going past bad packages
//! workout-tracker -p XYZ:1,1,1 -p WLK:9000,1,75,180 --format json --skip-invalid
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use workout_core::formatters::OutputFormat;
use workout_tracker::batch;
use workout_tracker::config::{ErrorPolicy, TrackerConfig};
use workout_tracker::logging::LoggingConfig;
use workout_tracker::packages::{sample_packages, SensorPackage};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    version,
    about = "Summarize fitness tracker sensor packages",
    long_about = "Compute distance, mean speed and calories for running (RUN), sports walking (WLK) and swimming (SWM) sensor packages."
)]
struct Cli {
    /// Sensor package as CODE:v1,v2,... (repeatable; defaults to the sample dataset)
    #[arg(long = "package", short = 'p', value_name = "CODE:VALUES")]
    packages: Vec<SensorPackage>,

    /// Output format: text or json (overrides `WORKOUT_OUTPUT_FORMAT`)
    #[arg(long, short = 'f')]
    format: Option<OutputFormat>,

    /// Skip invalid packages instead of aborting the batch
    #[arg(long)]
    skip_invalid: bool,

    /// Compute records in parallel
    #[arg(long)]
    parallel: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = TrackerConfig::from_env()?;
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if cli.skip_invalid {
        config.error_policy = ErrorPolicy::Skip;
    }
    config.parallel |= cli.parallel;

    let packages = if cli.packages.is_empty() {
        info!("No packages given, reporting the sample dataset");
        sample_packages()
    } else {
        cli.packages
    };
    debug!(packages = packages.len(), config = ?config, "Starting report run");

    let summary = batch::run(&packages, &config, |line| println!("{line}"))?;
    for failure in &summary.failures {
        eprintln!("{}", failure.render(config.output_format)?);
    }

    Ok(())
}
