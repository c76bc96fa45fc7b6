// ABOUTME: Sensor package dispatcher turning raw tracker readings into workout calculators
// ABOUTME: Maps SWM/RUN/WLK codes to calculators and assigns numeric fields positionally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sensor Package Dispatch
//!
//! A package is a workout code plus an ordered list of numbers. Field order is
//! fixed per workout:
//!
//! | Code | Fields |
//! |------|--------|
//! | `RUN` | action, duration, weight |
//! | `WLK` | action, duration, weight, height |
//! | `SWM` | action, duration, weight, pool length, pool count |

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use workout_core::constants::workout_codes;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::WorkoutType;

use crate::training::{Running, SportsWalking, Swimming, Workout};

/// Build the calculator matching `workout_type` from positional sensor data
///
/// # Errors
///
/// - `UnsupportedWorkoutType` if the code is not `SWM`, `RUN` or `WLK`
/// - `InvalidArity` if `data` does not hold exactly the fields the workout expects
/// - `InvalidInput` if a calculator rejects the values (non-positive duration or height)
pub fn read_package(workout_type: &str, data: &[f64]) -> AppResult<Workout> {
    let kind: WorkoutType = workout_type.parse()?;
    debug!(workout.code = %workout_type, workout.fields = data.len(), "Reading sensor package");

    match (kind, data) {
        (WorkoutType::Running, &[action, duration, weight]) => {
            Ok(Running::new(action, duration, weight)?.into())
        }
        (WorkoutType::SportsWalking, &[action, duration, weight, height]) => {
            Ok(SportsWalking::new(action, duration, weight, height)?.into())
        }
        (WorkoutType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Ok(Swimming::new(action, duration, weight, length_pool, count_pool)?.into())
        }
        (kind, data) => Err(AppError::invalid_arity(
            kind.display_name(),
            kind.field_count(),
            data.len(),
        )),
    }
}

/// One raw reading from the tracker: a workout code and its numeric fields
#[derive(Debug, Clone, PartialEq)]
pub struct SensorPackage {
    /// Workout code as received (not yet validated)
    pub workout_type: String,
    /// Positional numeric fields
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a package from a code and its fields
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Dispatch this package to its calculator
    ///
    /// # Errors
    ///
    /// Same as [`read_package`].
    pub fn read(&self) -> AppResult<Workout> {
        read_package(&self.workout_type, &self.data)
    }
}

impl fmt::Display for SensorPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.workout_type)?;
        for (index, value) in self.data.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl FromStr for SensorPackage {
    type Err = AppError;

    /// Parse the `CODE:v1,v2,...` form, e.g. `RUN:15000,1,75`
    ///
    /// Only the numbers are checked here; the code and field count are
    /// validated when the package is read.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, values) = s.split_once(':').ok_or_else(|| {
            AppError::invalid_format(format!(
                "Sensor package '{s}' must look like CODE:v1,v2,... (e.g. RUN:15000,1,75)"
            ))
        })?;

        let values = values.trim();
        let data = if values.is_empty() {
            Vec::new()
        } else {
            values
                .split(',')
                .enumerate()
                .map(|(index, raw)| parse_field(s, index + 1, raw.trim()))
                .collect::<AppResult<Vec<_>>>()?
        };

        Ok(Self::new(code.trim(), data))
    }
}

fn parse_field(package: &str, position: usize, raw: &str) -> AppResult<f64> {
    let value = raw.parse::<f64>().map_err(|e| {
        AppError::invalid_format(format!(
            "Field {position} of package '{package}' is not a number: '{raw}'"
        ))
        .with_source(e)
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::invalid_format(format!(
            "Field {position} of package '{package}' is not a finite number: '{raw}'"
        )))
    }
}

/// Demonstration dataset used when no packages are supplied
#[must_use]
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new(workout_codes::SWIMMING, vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new(workout_codes::RUNNING, vec![15000.0, 1.0, 75.0]),
        SensorPackage::new(workout_codes::SPORTS_WALKING, vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
