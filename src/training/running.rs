// ABOUTME: Running calculator with the speed-scaled calorie formula
// ABOUTME: Uses the generic step-based distance and mean speed

use workout_core::constants::calories::{RUN_SPEED_MULTIPLIER, RUN_SPEED_SHIFT};
use workout_core::constants::units::M_IN_KM;
use workout_core::errors::AppResult;
use workout_core::models::WorkoutType;

use super::{Training, TrainingData};

/// Running session
///
/// Calories: `(18 × mean_speed − 20) × weight / 1000 × duration_minutes`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    data: TrainingData,
}

impl Running {
    /// Create a running calculator
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if `duration` is not positive.
    pub fn new(action: f64, duration: f64, weight: f64) -> AppResult<Self> {
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    #[allow(clippy::suboptimal_flops)]
    fn spent_calories(&self) -> f64 {
        (RUN_SPEED_MULTIPLIER * self.mean_speed() - RUN_SPEED_SHIFT) * self.data.weight / M_IN_KM
            * self.data.duration_minutes()
    }
}
