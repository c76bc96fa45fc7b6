// ABOUTME: Renders workout records as report lines
// ABOUTME: Fixed three-decimal text message or compact JSON, selected by output format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::errors::AppResult;
use workout_core::formatters::{format_json, OutputFormat};
use workout_core::models::WorkoutRecord;

/// Build the human-readable report line for a workout
///
/// Every number is rendered with exactly three decimals:
///
/// ```rust
/// use workout_core::models::WorkoutRecord;
/// use workout_tracker::report::format_message;
///
/// let record = WorkoutRecord::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
/// assert_eq!(
///     format_message(&record),
///     "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
///      Avg speed: 1.000 km/h; Calories burned: 336.000."
/// );
/// ```
#[must_use]
pub fn format_message(record: &WorkoutRecord) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
        record.training_type, record.duration, record.distance, record.speed, record.calories
    )
}

/// Render a record in the requested output format
///
/// # Errors
///
/// Returns a `SerializationError` if JSON rendering fails.
pub fn render(record: &WorkoutRecord, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(format_message(record)),
        OutputFormat::Json => format_json(record),
    }
}
