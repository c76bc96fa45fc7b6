// ABOUTME: Tagged union over the three workout calculators
// ABOUTME: Delegates the Training contract to the wrapped calculator

use workout_core::models::{WorkoutRecord, WorkoutType};

use super::{Running, SportsWalking, Swimming, Training, TrainingData};

/// Any supported workout calculator, held by value
///
/// Produced by the package dispatcher. The variant set is closed, so every
/// workout always has a concrete calorie formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    /// Running calculator
    Running(Running),
    /// Sports walking calculator
    SportsWalking(SportsWalking),
    /// Swimming calculator
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Self::Running(running) => running,
            Self::SportsWalking(walking) => walking,
            Self::Swimming(swimming) => swimming,
        }
    }
}

impl Training for Workout {
    fn data(&self) -> &TrainingData {
        self.as_training().data()
    }

    fn workout_type(&self) -> WorkoutType {
        self.as_training().workout_type()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }

    fn show_training_info(&self) -> WorkoutRecord {
        self.as_training().show_training_info()
    }
}

impl From<Running> for Workout {
    fn from(running: Running) -> Self {
        Self::Running(running)
    }
}

impl From<SportsWalking> for Workout {
    fn from(walking: SportsWalking) -> Self {
        Self::SportsWalking(walking)
    }
}

impl From<Swimming> for Workout {
    fn from(swimming: Swimming) -> Self {
        Self::Swimming(swimming)
    }
}
