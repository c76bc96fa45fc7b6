// ABOUTME: Batch runner turning a list of sensor packages into report lines
// ABOUTME: Applies the abort/skip error policy sequentially or on the rayon thread pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Batch Processing
//!
//! Each package is independent: dispatch, compute, render. Parallel runs
//! compute every record on the rayon pool first and then walk the results in
//! input order, so both modes emit the same lines and stop at the same package.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};
use workout_core::errors::{AppError, AppResult, ErrorResponse};
use workout_core::formatters::{format_json, OutputFormat};

use crate::config::{ErrorPolicy, TrackerConfig};
use crate::packages::SensorPackage;
use crate::report::render;
use crate::training::Training;

/// A package that could not be reported
#[derive(Debug)]
pub struct PackageFailure {
    /// Position of the package in the input
    pub index: usize,
    /// The package in `CODE:v1,v2,...` form
    pub package: String,
    /// Why it failed
    pub error: AppError,
}

impl PackageFailure {
    /// Render the failure for stderr in the requested output format
    ///
    /// Text keeps the `Skipped package #N (...)` line. JSON emits one object
    /// with the zero-based index, the package and an [`ErrorResponse`] body.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if JSON rendering fails.
    pub fn render(&self, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Text => Ok(format!(
                "Skipped package #{} ({}): {}",
                self.index + 1,
                self.package,
                self.error
            )),
            OutputFormat::Json => format_json(&SkippedPackage {
                index: self.index,
                package: &self.package,
                response: ErrorResponse::from(&self.error),
            }),
        }
    }
}

#[derive(Serialize)]
struct SkippedPackage<'a> {
    index: usize,
    package: &'a str,
    #[serde(flatten)]
    response: ErrorResponse,
}

/// Result of a batch run under the `Skip` policy (or a clean `Abort` run)
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of lines emitted
    pub reported: usize,
    /// Packages skipped because they failed
    pub failures: Vec<PackageFailure>,
}

impl BatchSummary {
    /// Whether every package was reported
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Dispatch, compute and render a single package
///
/// # Errors
///
/// Returns any dispatch error from [`SensorPackage::read`] or a rendering error.
pub fn process_package(package: &SensorPackage, format: OutputFormat) -> AppResult<String> {
    let record = package.read()?.show_training_info();
    render(&record, format)
}

/// Process every package, handing each rendered line to `emit` in input order
///
/// Under [`ErrorPolicy::Abort`] the first failure is returned and no later
/// package is emitted. Under [`ErrorPolicy::Skip`] failures are logged and
/// collected in the summary.
///
/// # Errors
///
/// Returns the first package error when the policy is `Abort`.
pub fn run<F>(
    packages: &[SensorPackage],
    config: &TrackerConfig,
    emit: F,
) -> AppResult<BatchSummary>
where
    F: FnMut(&str),
{
    if config.parallel {
        let results: Vec<AppResult<String>> = packages
            .par_iter()
            .map(|package| process_package(package, config.output_format))
            .collect();
        apply_policy(packages, results, config.error_policy, emit)
    } else {
        let results = packages
            .iter()
            .map(|package| process_package(package, config.output_format));
        apply_policy(packages, results, config.error_policy, emit)
    }
}

/// Process every package and collect the rendered lines
///
/// # Errors
///
/// Returns the first package error when the policy is `Abort`.
pub fn collect_lines(
    packages: &[SensorPackage],
    config: &TrackerConfig,
) -> AppResult<(Vec<String>, BatchSummary)> {
    let mut lines = Vec::with_capacity(packages.len());
    let summary = run(packages, config, |line| lines.push(line.to_owned()))?;
    Ok((lines, summary))
}

fn apply_policy<I, F>(
    packages: &[SensorPackage],
    results: I,
    policy: ErrorPolicy,
    mut emit: F,
) -> AppResult<BatchSummary>
where
    I: IntoIterator<Item = AppResult<String>>,
    F: FnMut(&str),
{
    let mut summary = BatchSummary::default();

    for (index, (package, result)) in packages.iter().zip(results).enumerate() {
        match result {
            Ok(line) => {
                emit(&line);
                summary.reported += 1;
            }
            Err(error) => {
                warn!(
                    batch.index = index,
                    batch.package = %package,
                    error.code = error.code.as_str(),
                    error.message = %error.message,
                    "Sensor package rejected"
                );
                match policy {
                    ErrorPolicy::Abort => return Err(error),
                    ErrorPolicy::Skip => summary.failures.push(PackageFailure {
                        index,
                        package: package.to_string(),
                        error,
                    }),
                }
            }
        }
    }

    info!(
        batch.total = packages.len(),
        batch.reported = summary.reported,
        batch.skipped = summary.failures.len(),
        "Batch complete"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::sample_packages;
    use workout_core::errors::ErrorCode;

    fn with_bad_package() -> Vec<SensorPackage> {
        let mut packages = sample_packages();
        packages.insert(1, SensorPackage::new("XYZ", vec![1.0, 1.0, 1.0]));
        packages
    }

    #[test]
    fn test_abort_stops_at_first_failure() {
        let mut lines = Vec::new();
        let error = run(&with_bad_package(), &TrackerConfig::default(), |line| {
            lines.push(line.to_owned());
        })
        .unwrap_err();

        assert_eq!(error.code, ErrorCode::UnsupportedWorkoutType);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Training type: Swimming;"));
    }

    #[test]
    fn test_skip_reports_remaining_packages() {
        let config = TrackerConfig {
            error_policy: ErrorPolicy::Skip,
            ..TrackerConfig::default()
        };
        let (lines, summary) = collect_lines(&with_bad_package(), &config).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(summary.reported, 3);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].index, 1);
        assert_eq!(summary.failures[0].package, "XYZ:1,1,1");
    }

    #[test]
    fn test_failure_renders_as_error_response_json() {
        let config = TrackerConfig {
            error_policy: ErrorPolicy::Skip,
            ..TrackerConfig::default()
        };
        let (_, summary) = collect_lines(&with_bad_package(), &config).unwrap();
        let failure = &summary.failures[0];

        let value: serde_json::Value =
            serde_json::from_str(&failure.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["index"], 1);
        assert_eq!(value["package"], "XYZ:1,1,1");
        assert_eq!(value["error"]["code"], "UNSUPPORTED_WORKOUT_TYPE");
        assert_eq!(value["error"]["details"]["workout_type"], "XYZ");

        let text = failure.render(OutputFormat::Text).unwrap();
        assert!(text.starts_with("Skipped package #2 (XYZ:1,1,1): "));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = collect_lines(&sample_packages(), &TrackerConfig::default()).unwrap();
        let parallel_config = TrackerConfig {
            parallel: true,
            ..TrackerConfig::default()
        };
        let parallel = collect_lines(&sample_packages(), &parallel_config).unwrap();

        assert_eq!(sequential.0, parallel.0);
        assert!(parallel.1.is_clean());
    }
}
