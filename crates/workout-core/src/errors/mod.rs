// ABOUTME: Unified error handling for workout calculations and report rendering
// ABOUTME: Defines ErrorCode, AppError and the AppResult alias shared by every crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Errors carry
//! a stable [`ErrorCode`], a human-readable message and optional structured
//! details, so the CLI can print them and the JSON formatter can serialize them
//! without losing context.

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Dispatch (1000-1999)
    /// Workout type code is not one of the supported tags
    #[serde(rename = "UNSUPPORTED_WORKOUT_TYPE")]
    UnsupportedWorkoutType = 1000,

    // Validation (3000-3999)
    /// General input validation failure
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Raw sensor sequence has the wrong number of fields
    #[serde(rename = "INVALID_ARITY")]
    InvalidArity = 3001,
    /// Raw field could not be parsed as a number
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Configuration (6000-6999)
    /// Configuration value could not be parsed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,

    // Internal Errors (9000-9999)
    /// Output serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnsupportedWorkoutType => "The workout type is not supported",
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidArity => "The sensor data has the wrong number of fields",
            Self::InvalidFormat => "The sensor data format is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Get the wire name of this error code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedWorkoutType => "UNSUPPORTED_WORKOUT_TYPE",
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidArity => "INVALID_ARITY",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::SerializationError => "SERIALIZATION_ERROR",
        }
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Attach structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Workout type code outside the supported set
    #[must_use]
    pub fn unsupported_workout_type(code: &str) -> Self {
        Self::new(
            ErrorCode::UnsupportedWorkoutType,
            format!("Unsupported workout type '{code}'. Valid options: SWM, RUN, WLK"),
        )
        .with_details(json!({ "workout_type": code }))
    }

    /// Raw sequence length does not match the workout's field count
    #[must_use]
    pub fn invalid_arity(workout_type: &str, expected: usize, actual: usize) -> Self {
        Self::new(
            ErrorCode::InvalidArity,
            format!("{workout_type} expects {expected} fields, got {actual}"),
        )
        .with_details(json!({
            "workout_type": workout_type,
            "expected": expected,
            "actual": actual,
        }))
    }

    /// Raw field is not numeric
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error shape reported for skipped packages in JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured context, omitted when empty
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
                details: error.details.clone(),
            },
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}
