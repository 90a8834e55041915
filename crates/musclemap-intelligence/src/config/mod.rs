// ABOUTME: Configuration module for musclemap-intelligence crate
// ABOUTME: Re-exports adaptation rule configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Adaptation rule thresholds and increments
pub mod adaptation;

/// Configuration validation errors
pub mod error;

pub use adaptation::{AdaptationConfig, MuscleGainRules, WeightReductionRules};
pub use error::ConfigError;
