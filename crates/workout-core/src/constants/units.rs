// ABOUTME: Unit conversion constants for distance and time
// ABOUTME: Stride and stroke lengths used to turn action counts into distance

/// Meters in one kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in one hour
pub const MIN_IN_HOUR: f64 = 60.0;

/// Distance covered by one running or walking step, in meters
pub const LEN_STEP_M: f64 = 0.65;

/// Distance covered by one swimming stroke, in meters
pub const LEN_STROKE_M: f64 = 1.38;
