// ABOUTME: Validation error types for profile and check-in input
// ABOUTME: Raised at the input-collection boundary so invalid values never reach the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised while turning raw user input into domain values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Numeric value outside its declared bounds
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// Value that was supplied
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// NaN or infinite weight
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Name of the offending field
        field: &'static str,
    },

    /// Value that is not one of the enumerated choices
    #[error("Unknown {kind} '{value}'. Expected one of: {expected}")]
    UnknownVariant {
        /// Kind of value being parsed (goal, experience level, ...)
        kind: &'static str,
        /// Raw value that was supplied
        value: String,
        /// Comma-separated list of accepted values
        expected: &'static str,
    },

    /// Session name containing characters outside `[A-Za-z0-9_-]`
    #[error("Invalid session name '{name}': use letters, digits, '-' or '_' (max 64 chars)")]
    InvalidName {
        /// Name that was rejected
        name: String,
    },
}
