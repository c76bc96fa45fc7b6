// ABOUTME: Environment configuration for batch report runs
// ABOUTME: Reads WORKOUT_* variables into a strongly typed TrackerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Default | Values |
//! |----------|---------|--------|
//! | `WORKOUT_OUTPUT_FORMAT` | `text` | `text`, `json` |
//! | `WORKOUT_ERROR_POLICY` | `abort` | `abort`, `skip` |
//! | `WORKOUT_PARALLEL` | `false` | `true`/`false`, `1`/`0`, `yes`/`no` |

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use workout_core::errors::{AppError, AppResult};
use workout_core::formatters::OutputFormat;

/// Environment variable selecting the output format
pub const OUTPUT_FORMAT_VAR: &str = "WORKOUT_OUTPUT_FORMAT";
/// Environment variable selecting the error policy
pub const ERROR_POLICY_VAR: &str = "WORKOUT_ERROR_POLICY";
/// Environment variable enabling parallel batch processing
pub const PARALLEL_VAR: &str = "WORKOUT_PARALLEL";

/// What the batch runner does when one package fails
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failing package; later packages are not processed
    #[default]
    Abort,
    /// Log the failure and continue with the remaining packages
    Skip,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abort => f.write_str("abort"),
            Self::Skip => f.write_str("skip"),
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" | "fail_fast" => Ok(Self::Abort),
            "skip" | "continue" => Ok(Self::Skip),
            other => Err(AppError::config(format!(
                "Unknown error policy: '{other}'. Valid options: abort, skip"
            ))),
        }
    }
}

/// Runtime configuration for a report run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerConfig {
    /// How each record is printed
    pub output_format: OutputFormat,
    /// Behavior when a package fails
    pub error_policy: ErrorPolicy,
    /// Compute records on the rayon thread pool
    pub parallel: bool,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error naming the variable if a value cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            output_format: env_var_or(OUTPUT_FORMAT_VAR, "text")
                .parse::<OutputFormat>()
                .map_err(|e| for_variable(e, OUTPUT_FORMAT_VAR))?,
            error_policy: env_var_or(ERROR_POLICY_VAR, "abort")
                .parse::<ErrorPolicy>()
                .map_err(|e| for_variable(e, ERROR_POLICY_VAR))?,
            parallel: parse_bool(PARALLEL_VAR, &env_var_or(PARALLEL_VAR, "false"))?,
        };

        debug!(
            config.output_format = %config.output_format,
            config.error_policy = %config.error_policy,
            config.parallel = config.parallel,
            "Loaded tracker configuration from environment"
        );

        Ok(config)
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn for_variable(error: AppError, key: &str) -> AppError {
    error.with_details(json!({ "variable": key }))
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::config(format!(
            "{key} must be a boolean (true/false), got '{other}'"
        ))),
    }
}
