// ABOUTME: Swimming calculator deriving speed from pool geometry
// ABOUTME: Distance still counts strokes; speed uses pool length times lap count

use workout_core::constants::calories::{SWIM_SPEED_SHIFT, SWIM_WEIGHT_MULTIPLIER};
use workout_core::constants::units::{LEN_STROKE_M, M_IN_KM};
use workout_core::errors::AppResult;
use workout_core::models::WorkoutType;

use super::{Training, TrainingData};

/// Pool swimming session
///
/// - Distance: `strokes × 1.38 m`
/// - Speed: `pool_length × pool_count / 1000 / duration`
/// - Calories: `(mean_speed + 1.1) × 2 × weight`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    data: TrainingData,
    length_pool: f64,
    count_pool: f64,
}

impl Swimming {
    /// Create a swimming calculator
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if `duration` is not positive.
    pub fn new(
        action: f64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> AppResult<Self> {
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
            length_pool,
            count_pool,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub const fn length_pool(&self) -> f64 {
        self.length_pool
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn count_pool(&self) -> f64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn step_length_m(&self) -> f64 {
        LEN_STROKE_M
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.data.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.data.weight
    }
}
