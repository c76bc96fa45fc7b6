// ABOUTME: Core data models for workout calculations
// ABOUTME: Re-exports WorkoutType and WorkoutRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `WorkoutType`: closed set of workouts identified by sensor package code
//! - `WorkoutRecord`: computed distance, speed and calories for one session

mod record;
mod workout_type;

pub use record::WorkoutRecord;
pub use workout_type::WorkoutType;
