// ABOUTME: Structured workout and diet plan models
// ABOUTME: Plan snapshots with title, diet, feedback, and workout details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Workout prescription for one interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDetails {
    /// Training split (e.g. "Full Body", "Push-Pull-Legs")
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Strength sessions per week
    pub frequency_per_week: u32,
    /// Main lifts in the order they should be trained
    pub main_lifts: Vec<String>,
    /// Working sets per lift
    pub sets_per_lift: u32,
    /// Repetitions per set
    pub reps_per_set: u32,
    /// Cardio sessions per week
    pub cardio_days_per_week: u32,
    /// Length of each cardio session (minutes)
    pub cardio_minutes_per_session: u32,
    /// Free-form coaching notes
    pub notes: String,
}

/// A plan snapshot valid for one interval
///
/// Plans are values: the adaptation engine borrows the previous plan and
/// returns a new one, so a stored plan never changes after it is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan heading
    pub title: String,
    /// Calorie and macro guidance
    pub diet_recommendation: String,
    /// Feedback explaining why the plan looks the way it does
    pub ai_feedback: String,
    /// Workout prescription
    #[serde(rename = "plan_details")]
    pub details: PlanDetails,
}

impl PlanDetails {
    /// Total weekly cardio volume in minutes
    #[must_use]
    pub const fn weekly_cardio_minutes(&self) -> u32 {
        self.cardio_days_per_week * self.cardio_minutes_per_session
    }

    /// Main lifts joined for display
    #[must_use]
    pub fn lifts_summary(&self) -> String {
        self.main_lifts.join(", ")
    }
}
