// ABOUTME: Workout type enumeration for sensor packages
// ABOUTME: Maps tracker package codes to workout kinds with display names and field counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::workout_codes;
use crate::errors::AppError;

/// Enumeration of workout kinds the tracker reports on
///
/// Each variant corresponds to one fixed sensor package code. The code set is
/// closed: anything else is rejected when parsing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Pool swimming (`SWM`)
    Swimming,
    /// Running (`RUN`)
    Running,
    /// Sports (race) walking (`WLK`)
    SportsWalking,
}

impl WorkoutType {
    /// All supported workout types, in package-code order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Sensor package code for this workout type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Swimming => workout_codes::SWIMMING,
            Self::Running => workout_codes::RUNNING,
            Self::SportsWalking => workout_codes::SPORTS_WALKING,
        }
    }

    /// Name shown in the training report
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Number of raw numeric fields a package of this type carries
    ///
    /// - Running: action, duration, weight
    /// - Sports walking: action, duration, weight, height
    /// - Swimming: action, duration, weight, pool length, pool count
    #[must_use]
    pub const fn field_count(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    /// Parse a sensor package code. Codes are matched exactly (`"run"` is rejected).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            workout_codes::SWIMMING => Ok(Self::Swimming),
            workout_codes::RUNNING => Ok(Self::Running),
            workout_codes::SPORTS_WALKING => Ok(Self::SportsWalking),
            other => Err(AppError::unsupported_workout_type(other)),
        }
    }
}
