// ABOUTME: Workout calculators computing distance, mean speed and calories from sensor data
// ABOUTME: Defines the Training trait and its running, sports walking and swimming implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout Calculation Module
//!
//! Every workout kind implements [`Training`]. The trait supplies the generic
//! step-based distance and speed formulas; implementations override what differs
//! and always provide their own calorie formula. [`Workout`] wraps the three
//! calculators in a single enum so callers can hold any of them by value.
//!
//! # Example
//!
//! ```rust
//! use workout_tracker::training::{Running, Training};
//!
//! let running = Running::new(15000.0, 1.0, 75.0)?;
//! assert!((running.distance() - 9.75).abs() < 1e-9);
//! # Ok::<(), workout_core::errors::AppError>(())
//! ```

mod running;
mod swimming;
mod walking;
mod workout;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;
pub use workout::Workout;

use workout_core::constants::units::{LEN_STEP_M, MIN_IN_HOUR, M_IN_KM};
use workout_core::errors::{AppError, AppResult};
use workout_core::models::{WorkoutRecord, WorkoutType};

/// Sensor fields shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingData {
    /// Counted actions: steps for running and walking, strokes for swimming
    pub action: f64,
    /// Session duration in hours
    pub duration: f64,
    /// Athlete weight in kilograms
    pub weight: f64,
}

impl TrainingData {
    /// Build the shared fields, rejecting a duration that cannot be divided by
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if `duration` is zero, negative or NaN.
    pub fn new(action: f64, duration: f64, weight: f64) -> AppResult<Self> {
        if duration.is_nan() || duration <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Duration must be greater than zero hours, got {duration}"
            )));
        }
        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    /// Session duration in minutes
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration * MIN_IN_HOUR
    }
}

/// Common contract of all workout calculators
pub trait Training {
    /// Shared sensor fields
    fn data(&self) -> &TrainingData;

    /// Workout kind of this calculator
    fn workout_type(&self) -> WorkoutType;

    /// Distance covered by one counted action, in meters
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance covered, in kilometers
    ///
    /// Negative action counts are not rejected and yield a negative distance.
    fn distance(&self) -> f64 {
        self.data().action * self.step_length_m() / M_IN_KM
    }

    /// Mean speed over the session, in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.data().duration
    }

    /// Energy spent during the session, in kcal
    fn spent_calories(&self) -> f64;

    /// Summarize the session into an immutable record
    fn show_training_info(&self) -> WorkoutRecord {
        WorkoutRecord::new(
            self.workout_type().display_name(),
            self.data().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

/// Floor division of two floats, rounding the quotient toward negative infinity
///
/// Follows the float floor-division operator exactly: the quotient is derived
/// from the floating remainder rather than from `(a / b).floor()`, so results
/// agree even where `a / b` rounds up to an integer. `b` must be non-zero.
#[must_use]
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
