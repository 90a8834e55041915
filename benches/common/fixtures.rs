// ABOUTME: Deterministic data generators for adaptation benchmarks
// ABOUTME: Produces profiles for every goal and long check-in weight sequences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use musclemap::models::{ExperienceLevel, Goal, Profile, ProgressLog, TimeInterval};

/// Check-in history sizes used across benchmarks
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One year of fortnightly check-ins
    Small,
    /// Several years of check-ins
    Medium,
    /// Stress size
    Large,
}

impl HistorySize {
    /// Number of check-ins
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 26,
            Self::Medium => 260,
            Self::Large => 2_600,
        }
    }

    /// Label for benchmark ids
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Profile with mid-range values for the given goal
#[must_use]
pub fn bench_profile(goal: Goal) -> Profile {
    Profile {
        age: 34,
        height_cm: 178,
        start_weight_kg: 85.0,
        goal,
        time_interval: TimeInterval::FourWeeks,
        experience_level: ExperienceLevel::Intermediate,
    }
}

/// Weights that oscillate around the start so every rule fires
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_check_ins(count: usize) -> Vec<ProgressLog> {
    let at = Utc.with_ymd_and_hms(2025, 1, 6, 7, 0, 0).unwrap();
    (0..count)
        .map(|index| {
            let swing = ((index * 37) % 11) as f64 * 0.3 - 1.5;
            ProgressLog {
                current_weight_kg: 85.0 + swing,
                notes: None,
                logged_at: at,
            }
        })
        .collect()
}
