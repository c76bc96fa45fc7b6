// ABOUTME: Sports walking calculator using athlete height in the calorie formula
// ABOUTME: Applies floor division between squared speed and height

use workout_core::constants::calories::{WALK_SPEED_HEIGHT_MULTIPLIER, WALK_WEIGHT_MULTIPLIER};
use workout_core::errors::{AppError, AppResult};
use workout_core::models::WorkoutType;

use super::{floor_div, Training, TrainingData};

/// Sports (race) walking session
///
/// Calories: `(0.035 × weight + ⌊mean_speed² / height⌋ × 0.029 × weight) × minutes`
///
/// The speed/height term uses floor division, so for typical walking speeds
/// and heights it contributes nothing and only the weight term remains. A
/// negative height floors the term to a negative whole number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    data: TrainingData,
    height: f64,
}

impl SportsWalking {
    /// Create a sports walking calculator
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if `duration` is not positive or
    /// `height` is zero or NaN.
    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> AppResult<Self> {
        if height.is_nan() || height == 0.0 {
            return Err(AppError::invalid_input(format!(
                "Height must be non-zero centimeters, got {height}"
            )));
        }
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
            height,
        })
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    #[allow(clippy::suboptimal_flops)]
    fn spent_calories(&self) -> f64 {
        let weight = self.data.weight;
        let speed_height_ratio = floor_div(self.mean_speed().powi(2), self.height);
        let weight_term = WALK_WEIGHT_MULTIPLIER * weight;
        let speed_term = speed_height_ratio * WALK_SPEED_HEIGHT_MULTIPLIER * weight;

        (weight_term + speed_term) * self.data.duration_minutes()
    }
}
