// ABOUTME: Tests for environment-driven tracker configuration
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use workout_core::formatters::OutputFormat;
use workout_tracker::config::environment::{ERROR_POLICY_VAR, OUTPUT_FORMAT_VAR, PARALLEL_VAR};
use workout_tracker::config::{ErrorPolicy, TrackerConfig};
use workout_tracker::ErrorCode;

fn clear_env() {
    env::remove_var(OUTPUT_FORMAT_VAR);
    env::remove_var(ERROR_POLICY_VAR);
    env::remove_var(PARALLEL_VAR);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    assert_eq!(TrackerConfig::from_env().unwrap(), TrackerConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(OUTPUT_FORMAT_VAR, "json");
    env::set_var(ERROR_POLICY_VAR, "skip");
    env::set_var(PARALLEL_VAR, "true");

    let config = TrackerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.error_policy, ErrorPolicy::Skip);
    assert!(config.parallel);
}

#[test]
#[serial]
fn test_invalid_value_names_the_variable() {
    clear_env();
    env::set_var(OUTPUT_FORMAT_VAR, "xml");

    let error = TrackerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.details["variable"], OUTPUT_FORMAT_VAR);
}
