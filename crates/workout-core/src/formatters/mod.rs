// ABOUTME: Output format abstraction for printing workout reports
// ABOUTME: Supports the plain text report line (default) and compact JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! The text format is the fixed report line built by the reporter. The JSON
//! format serializes the same data with serde so other tools can consume it.
//!
//! ```rust
//! use workout_core::formatters::{format_json, OutputFormat};
//!
//! let format: OutputFormat = "json".parse().unwrap_or_default();
//! assert_eq!(format, OutputFormat::Json);
//! assert_eq!(format_json(&[1, 2, 3]).ok().as_deref(), Some("[1,2,3]"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report line (default)
    #[default]
    Text,
    /// Compact JSON, one object per line
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

/// Serialize data to a single-line JSON string
///
/// # Errors
///
/// Returns a `SerializationError` if serde cannot serialize the value
/// (for example a map with non-string keys).
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string(data)?)
}
