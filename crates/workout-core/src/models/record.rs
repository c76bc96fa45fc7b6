// ABOUTME: Computed summary of a single workout session
// ABOUTME: Immutable record produced by a calculator and consumed by the reporter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Normalized results of one workout calculation
///
/// Values are kept at full precision; rounding to three decimals happens only
/// when the record is rendered as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Display name of the workout type (e.g. `Running`)
    pub training_type: String,
    /// Session duration in hours
    pub duration: f64,
    /// Distance covered in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Energy spent in kcal
    pub calories: f64,
}

impl WorkoutRecord {
    /// Create a record from already computed values
    #[must_use]
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }
}
