// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Computes distance, speed and calories from tracker sensor packages and renders reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Turns raw fitness tracker readings into a one-line summary per session.
//! A reading ("sensor package") is a workout code plus positional numbers:
//!
//! - `SWM`: strokes, hours, kg, pool length (m), pool count
//! - `RUN`: steps, hours, kg
//! - `WLK`: steps, hours, kg, height (cm)
//!
//! ## Architecture
//!
//! - **training**: calculators behind the `Training` trait, wrapped by `Workout`
//! - **packages**: the dispatcher from code + data to a calculator
//! - **report**: fixed-format text line or JSON for a `WorkoutRecord`
//! - **batch**: runs many packages with an abort/skip error policy
//! - **config**, **logging**: environment-driven runtime settings
//!
//! ## Example
//!
//! ```rust
//! use workout_tracker::packages::read_package;
//! use workout_tracker::report::format_message;
//! use workout_tracker::training::Training;
//!
//! let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
//! let line = format_message(&workout.show_training_info());
//! assert!(line.ends_with("Calories burned: 336.000."));
//! # Ok::<(), workout_core::errors::AppError>(())
//! ```

/// Workout calculators and the `Training` trait
pub mod training;

/// Sensor package parsing and dispatch
pub mod packages;

/// Report rendering
pub mod report;

/// Batch processing with error policies
pub mod batch;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use workout_core::errors::{AppError, AppResult, ErrorCode};
pub use workout_core::models::{WorkoutRecord, WorkoutType};
