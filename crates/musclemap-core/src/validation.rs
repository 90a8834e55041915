// ABOUTME: Input validation for profile fields, check-in weights, and session names
// ABOUTME: Enforces the declared numeric bounds before values reach the plan engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Boundary checks for user-supplied values.

use crate::constants::profile_bounds::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::constants::session::MAX_NAME_LEN;
use crate::errors::ValidationError;
use tracing::debug;

/// Check that an age is within 16-100 years
///
/// # Errors
///
/// Returns `ValidationError::OutOfRange` for ages outside the bounds.
pub fn validate_age(age: u32) -> Result<(), ValidationError> {
    check_range("age", f64::from(age), f64::from(MIN_AGE), f64::from(MAX_AGE))
}

/// Check that a height is within 100-250 cm
///
/// # Errors
///
/// Returns `ValidationError::OutOfRange` for heights outside the bounds.
pub fn validate_height(height_cm: u32) -> Result<(), ValidationError> {
    check_range(
        "height",
        f64::from(height_cm),
        f64::from(MIN_HEIGHT_CM),
        f64::from(MAX_HEIGHT_CM),
    )
}

/// Check that a body weight is finite and within 40.0-200.0 kg
///
/// # Errors
///
/// Returns `ValidationError::NotFinite` or `ValidationError::OutOfRange`.
pub fn validate_weight(field: &'static str, weight_kg: f64) -> Result<(), ValidationError> {
    if !weight_kg.is_finite() {
        debug!(field, "rejected non-finite weight");
        return Err(ValidationError::NotFinite { field });
    }
    check_range(field, weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)
}

/// Check that a session name is usable as a record key
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` for empty, overlong, or
/// non `[A-Za-z0-9_-]` names.
pub fn validate_session_name(name: &str) -> Result<(), ValidationError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidName {
            name: name.to_owned(),
        })
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        debug!(field, value, min, max, "rejected out-of-range input");
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_age_and_height_bounds_are_inclusive() {
        assert!(validate_age(16).is_ok());
        assert!(validate_age(100).is_ok());
        assert!(validate_age(101).is_err());
        assert!(validate_height(100).is_ok());
        assert!(validate_height(250).is_ok());
        assert!(validate_height(99).is_err());
    }

    #[test]
    fn test_session_names() {
        assert!(validate_session_name("alice_2025-spring").is_ok());
        assert!(validate_session_name("").is_err());
        assert!(validate_session_name("../etc").is_err());
        assert!(validate_session_name(&"a".repeat(65)).is_err());
    }
}
