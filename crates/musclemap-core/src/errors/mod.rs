// ABOUTME: Unified error handling with standard error codes and process exit statuses
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Centralized error type for everything that sits around the plan engine:
//! input collection, session persistence and output rendering. The engine
//! itself is total over validated input and never produces an `AppError`.

/// Input validation errors raised at the collection boundary
pub mod validation;

pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be accepted
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input was not in a recognized format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric input outside its declared bounds
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Requested session or record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Record already exists and overwrite was not requested
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // Configuration (6000-6999)
    /// Generic configuration failure
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration values failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Reading or writing session records failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Encoding or decoding structured records failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status for this error (BSD `sysexits.h` values)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            // EX_DATAERR
            Self::InvalidInput | Self::InvalidFormat | Self::ValueOutOfRange => 65,

            // EX_NOINPUT
            Self::ResourceNotFound => 66,

            // EX_CANTCREAT
            Self::ResourceAlreadyExists => 73,

            // EX_IOERR
            Self::StorageError | Self::SerializationError => 74,

            // EX_CONFIG
            Self::ConfigError | Self::ConfigInvalid => 78,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Resource already exists
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match &error {
            ValidationError::OutOfRange { .. } | ValidationError::NotFinite { .. } => {
                ErrorCode::ValueOutOfRange
            }
            ValidationError::UnknownVariant { .. } => ErrorCode::InvalidFormat,
            ValidationError::InvalidName { .. } => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_status() {
        assert_eq!(ErrorCode::ValueOutOfRange.exit_code(), 65);
        assert_eq!(ErrorCode::ResourceNotFound.exit_code(), 66);
        assert_eq!(ErrorCode::StorageError.exit_code(), 74);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
    }

    #[test]
    fn test_validation_error_conversion_keeps_source() {
        let error: AppError = ValidationError::OutOfRange {
            field: "age",
            value: 12.0,
            min: 16.0,
            max: 100.0,
        }
        .into();

        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert!(error.message.contains("age"));
        assert!(Error::source(&error).is_some());
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::not_found("Session 'alice'");
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Session 'alice' not found"
        );
    }
}
