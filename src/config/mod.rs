// ABOUTME: Configuration module for the workout tracker
// ABOUTME: Environment-only settings for output format, error policy and parallelism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing into `TrackerConfig`
pub mod environment;

pub use environment::{ErrorPolicy, TrackerConfig};
