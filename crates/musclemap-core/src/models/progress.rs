// ABOUTME: Progress check-in model recording the weight at the end of an interval
// ABOUTME: Check-ins are appended to session history and never mutated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ValidationError;
use crate::validation::validate_weight;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single weight check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressLog {
    /// Weight reported at the end of the interval (kg)
    pub current_weight_kg: f64,
    /// How the interval felt, if the user said anything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the check-in was recorded
    pub logged_at: DateTime<Utc>,
}

impl ProgressLog {
    /// Record a check-in now
    ///
    /// Blank notes are stored as `None`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when the weight is outside 40.0-200.0 kg.
    pub fn new(current_weight_kg: f64, notes: Option<String>) -> Result<Self, ValidationError> {
        Self::recorded_at(current_weight_kg, notes, Utc::now())
    }

    /// Record a check-in with an explicit timestamp
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when the weight is outside 40.0-200.0 kg.
    pub fn recorded_at(
        current_weight_kg: f64,
        notes: Option<String>,
        logged_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        validate_weight("current weight", current_weight_kg)?;
        let notes = notes
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());

        Ok(Self {
            current_weight_kg,
            notes,
            logged_at,
        })
    }
}
