// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, stride lengths and calorie coefficients for workout calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Unit conversion and stride length constants
pub mod units;

/// Per-workout calorie formula coefficients
pub mod calories {
    /// Running: multiplier applied to mean speed
    pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
    /// Running: offset subtracted from the scaled speed
    pub const RUN_SPEED_SHIFT: f64 = 20.0;

    /// Walking: weight coefficient of the base term
    pub const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Walking: weight coefficient of the speed/height term
    pub const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// Swimming: offset added to mean speed
    pub const SWIM_SPEED_SHIFT: f64 = 1.1;
    /// Swimming: multiplier applied to the shifted speed
    pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Sensor package codes emitted by the tracker hardware
pub mod workout_codes {
    /// Swimming package code
    pub const SWIMMING: &str = "SWM";
    /// Running package code
    pub const RUNNING: &str = "RUN";
    /// Sports walking package code
    pub const SPORTS_WALKING: &str = "WLK";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at startup
    pub const WORKOUT_TRACKER: &str = "workout-tracker";
}
