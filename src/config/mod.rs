// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Environment-driven paths and output settings, plus adaptation rule re-exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for `MuscleMap`
//!
//! - **Environment**: data directory, default session, and output format
//! - **Adaptation**: rule thresholds, re-exported from `musclemap-intelligence`

/// Environment configuration
pub mod environment;

pub use environment::AppConfig;
pub use musclemap_intelligence::config::{AdaptationConfig, ConfigError};
