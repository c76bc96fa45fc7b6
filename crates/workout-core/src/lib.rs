// ABOUTME: Core types and constants for the workout tracker
// ABOUTME: Foundation crate with error handling, unit constants, models and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! tracker. It has no knowledge of the calculation formulas, which keeps it
//! stable while the calculators evolve.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions, stride lengths, calorie coefficients
//! - **models**: `WorkoutType` and `WorkoutRecord`
//! - **formatters**: Output format selection and JSON serialization

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutType`, `WorkoutRecord`)
pub mod models;

/// Output format abstraction (text, JSON)
pub mod formatters;
