// ABOUTME: Integration tests for the workout calculators through the public Training trait
// ABOUTME: Checks distance, speed and calorie formulas for running, walking and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_tracker::training::{floor_div, Running, SportsWalking, Swimming, Training, Workout};
use workout_tracker::{ErrorCode, WorkoutType};

const TOLERANCE: f64 = 1e-9;

// === Running ===

#[test]
fn test_running_distance_is_steps_times_stride() {
    for steps in [0.0, 1.0, 1234.0, 15000.0, 42195.0] {
        let running = Running::new(steps, 1.5, 70.0).unwrap();
        assert!(
            (running.distance() - steps * 0.00065).abs() < TOLERANCE,
            "distance mismatch for {steps} steps"
        );
    }
}

#[test]
fn test_running_calories_formula() {
    let running = Running::new(15000.0, 1.0, 75.0).unwrap();
    let expected = (18.0 * 9.75 - 20.0) * 75.0 / 1000.0 * 60.0;

    assert!((running.spent_calories() - expected).abs() < TOLERANCE);
    assert!((running.spent_calories() - 699.75).abs() < TOLERANCE);
}

#[test]
fn test_negative_steps_are_not_rejected() {
    let running = Running::new(-1000.0, 1.0, 75.0).unwrap();
    assert!(running.distance() < 0.0);
}

#[test]
fn test_zero_duration_is_rejected() {
    let error = Running::new(15000.0, 0.0, 75.0).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

// === Sports walking ===

#[test]
fn test_walking_floor_division_drops_fractional_ratio() {
    let walking = SportsWalking::new(9000.0, 1.0, 75.0, 180.0).unwrap();
    let ratio = walking.mean_speed().powi(2) / 180.0;

    // True division would add a non-zero speed term
    assert!(ratio > 0.0 && ratio < 1.0);
    assert!((walking.spent_calories() - 0.035 * 75.0 * 60.0).abs() < TOLERANCE);
}

#[test]
fn test_walking_floor_division_matches_hand_computed_value() {
    // 30000 steps in 1 h: 19.5 km/h, 380.25 / 150 floors to 2
    let walking = SportsWalking::new(30000.0, 1.0, 60.0, 150.0).unwrap();
    let expected = (0.035 * 60.0 + 2.0 * 0.029 * 60.0) * 60.0;

    assert!((walking.mean_speed() - 19.5).abs() < TOLERANCE);
    assert!((walking.spent_calories() - expected).abs() < TOLERANCE);
}

#[test]
fn test_floor_div_is_not_truncation() {
    assert!((floor_div(-0.5, 180.0) - -1.0).abs() < f64::EPSILON);
    assert!((floor_div(0.5, 180.0) - 0.0).abs() < f64::EPSILON);
}

// === Swimming ===

#[test]
fn test_swimming_speed_uses_pool_geometry() {
    for strokes in [0.0, 720.0, 10_000.0] {
        let swimming = Swimming::new(strokes, 1.0, 80.0, 25.0, 40.0).unwrap();
        assert!((swimming.mean_speed() - 25.0 * 40.0 / 1000.0 / 1.0).abs() < TOLERANCE);
    }
}

#[test]
fn test_swimming_distance_uses_stroke_length() {
    let swimming = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();

    assert!((swimming.step_length_m() - 1.38).abs() < f64::EPSILON);
    assert!((swimming.distance() - 720.0 * 1.38 / 1000.0).abs() < TOLERANCE);
}

#[test]
fn test_swimming_calories() {
    let swimming = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();
    assert!((swimming.spent_calories() - 336.0).abs() < TOLERANCE);
}

// === Shared behavior ===

#[test]
fn test_calories_are_deterministic() {
    let workouts: [Workout; 3] = [
        Running::new(15000.0, 1.0, 75.0).unwrap().into(),
        SportsWalking::new(9000.0, 1.0, 75.0, 180.0).unwrap().into(),
        Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap().into(),
    ];

    for workout in workouts {
        assert_eq!(
            workout.spent_calories().to_bits(),
            workout.spent_calories().to_bits()
        );
        assert_eq!(workout.show_training_info(), workout.show_training_info());
    }
}

#[test]
fn test_workout_enum_delegates_overrides() {
    let swimming = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();
    let workout = Workout::from(swimming);

    assert_eq!(workout.workout_type(), WorkoutType::Swimming);
    assert!((workout.mean_speed() - swimming.mean_speed()).abs() < f64::EPSILON);
    assert!((workout.distance() - swimming.distance()).abs() < f64::EPSILON);
}

#[test]
fn test_record_carries_raw_duration_and_display_name() {
    let walking = SportsWalking::new(9000.0, 1.25, 75.0, 180.0).unwrap();
    let record = walking.show_training_info();

    assert_eq!(record.training_type, "SportsWalking");
    assert!((record.duration - 1.25).abs() < f64::EPSILON);
    assert!((record.speed - walking.mean_speed()).abs() < f64::EPSILON);
}
