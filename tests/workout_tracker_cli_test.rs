// ABOUTME: Integration tests for the workout-tracker binary
// ABOUTME: Runs the CLI and checks stdout report lines, stderr diagnostics and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

/// Run the CLI with a clean configuration environment and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_workout-tracker"))
        .args(args)
        .env_remove("WORKOUT_OUTPUT_FORMAT")
        .env_remove("WORKOUT_ERROR_POLICY")
        .env_remove("WORKOUT_PARALLEL")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_default_run_prints_sample_report() {
    let (exit_code, stdout, _stderr) = run_cli(&[]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750."
    );
}

#[test]
fn test_custom_packages_in_order() {
    let (exit_code, stdout, _stderr) =
        run_cli(&["-p", "WLK:9000,1,75,180", "-p", "SWM:720,1,80,25,40"]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("Training type: SportsWalking;"));
    assert!(lines[1].starts_with("Training type: Swimming;"));
}

#[test]
fn test_unsupported_type_aborts_batch() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "-p",
        "RUN:15000,1,75",
        "-p",
        "XYZ:1,1,1",
        "-p",
        "SWM:720,1,80,25,40",
    ]);

    assert_ne!(exit_code, 0);
    assert_eq!(
        stdout.lines().count(),
        1,
        "only the package before the failure is reported"
    );
    assert!(stderr.contains("XYZ"));
}

#[test]
fn test_skip_invalid_continues_batch() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "--skip-invalid",
        "-p",
        "RUN:15000,1,75",
        "-p",
        "RUN:15000,1",
        "-p",
        "SWM:720,1,80,25,40",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stderr.contains("Skipped package #2"));
}

#[test]
fn test_json_format() {
    let (exit_code, stdout, _stderr) = run_cli(&["--format", "json", "-p", "RUN:15000,1,75"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["training_type"], "Running");
}

#[test]
fn test_json_skip_reports_error_response_on_stderr() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "--format",
        "json",
        "--skip-invalid",
        "-p",
        "XYZ:1,1,1",
        "-p",
        "WLK:9000,1,75,180",
    ]);

    assert_eq!(exit_code, 0);
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["training_type"], "SportsWalking");

    // warn-level diagnostics precede the skipped-package object
    let skipped: serde_json::Value = serde_json::from_str(stderr.lines().last().unwrap()).unwrap();
    assert_eq!(skipped["index"], 0);
    assert_eq!(skipped["package"], "XYZ:1,1,1");
    assert_eq!(skipped["error"]["code"], "UNSUPPORTED_WORKOUT_TYPE");
}

#[test]
fn test_non_finite_package_is_a_usage_error() {
    let (exit_code, stdout, stderr) = run_cli(&["-p", "RUN:15000,1,nan"]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("not a finite number"));
}

#[test]
fn test_non_numeric_package_is_a_usage_error() {
    let (exit_code, stdout, stderr) = run_cli(&["-p", "RUN:lots,1,75"]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("not a number"));
}
