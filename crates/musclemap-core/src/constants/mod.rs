// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Input bounds, plan wording, and history table labels for MuscleMap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Fixed wording of plans produced by the plan factory and the adaptation engine
pub mod plan_text;

/// Inclusive bounds accepted at the input-collection boundary
pub mod profile_bounds {
    /// Youngest accepted age (years)
    pub const MIN_AGE: u32 = 16;
    /// Oldest accepted age (years)
    pub const MAX_AGE: u32 = 100;
    /// Shortest accepted height (cm)
    pub const MIN_HEIGHT_CM: u32 = 100;
    /// Tallest accepted height (cm)
    pub const MAX_HEIGHT_CM: u32 = 250;
    /// Lightest accepted body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 40.0;
    /// Heaviest accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 200.0;
}

/// Labels used when rendering the weight history
pub mod history {
    /// Note shown on the check-in #0 row
    pub const INITIAL_ROW_NOTE: &str = "Initial Profile";
    /// Placeholder for check-ins logged without notes
    pub const MISSING_NOTES: &str = "N/A";
}

/// Session naming rules
pub mod session {
    /// Longest accepted session name
    pub const MAX_NAME_LEN: usize = 64;
    /// Session used when none is named explicitly
    pub const DEFAULT_NAME: &str = "default";
}
