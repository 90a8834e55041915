// ABOUTME: Output format abstraction for plans, profiles, and weight history
// ABOUTME: Renders structured values as human-readable text or JSON documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output rendering
//!
//! Text output follows the dashboard layout users already know: plan card,
//! profile metrics, and a check-in table. JSON output is the `serde` form of
//! the same values.

use crate::errors::{AppResult, ValidationError};
use crate::session::{HistoryRow, SessionSummary};
use musclemap_core::models::{Plan, Profile};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ValidationError::UnknownVariant {
                kind: "output format",
                value: s.to_owned(),
                expected: "text, json",
            }),
        }
    }
}

const SESSION_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a plan card
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn render_plan(plan: &Plan, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(plan),
        OutputFormat::Text => {
            let details = &plan.details;
            let lines = [
                format!("### {}", plan.title),
                format!("AI Feedback: {}", plan.ai_feedback),
                "-".repeat(60),
                "Your Diet:".to_owned(),
                plan.diet_recommendation.clone(),
                String::new(),
                "Your Workout:".to_owned(),
                format!(
                    "- Type: {} ({} days/week)",
                    details.workout_type, details.frequency_per_week
                ),
                format!("- Main Lifts: {}", details.lifts_summary()),
                format!(
                    "- Structure: {} sets of {} reps",
                    details.sets_per_lift, details.reps_per_set
                ),
                format!(
                    "- Cardio: {} days/week for {} min",
                    details.cardio_days_per_week, details.cardio_minutes_per_session
                ),
                format!("- Notes: {}", details.notes),
            ];
            Ok(lines.join("\n"))
        }
    }
}

/// Render profile metrics
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn render_profile(profile: &Profile, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(profile),
        OutputFormat::Text => {
            let lines = [
                format!(
                    "Your Goal: {} ({})",
                    profile.goal, profile.experience_level
                ),
                format!("Age: {}", profile.age),
                format!("Height: {} cm", profile.height_cm),
                format!(
                    "Weight (Start of Interval): {:.1} kg",
                    profile.start_weight_kg
                ),
                format!("Goal Interval: {}", profile.time_interval),
            ];
            Ok(lines.join("\n"))
        }
    }
}

/// Render the check-in history table
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn render_history(rows: &[HistoryRow], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(rows),
        OutputFormat::Text => {
            let mut lines = vec![
                format!("{:<12}{:<14}{}", "Check-in #", "Weight (kg)", "Notes"),
                "-".repeat(48),
            ];
            lines.extend(rows.iter().map(|row| {
                format!(
                    "{:<12}{:<14}{}",
                    row.check_in,
                    format!("{:.1}", row.weight_kg),
                    row.notes
                )
            }));
            Ok(lines.join("\n"))
        }
    }
}

/// Render the list of stored sessions
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn render_sessions(sessions: &[SessionSummary], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(sessions),
        OutputFormat::Text => {
            if sessions.is_empty() {
                return Ok("No sessions found.".to_owned());
            }
            let mut lines = vec![format!(
                "{:<24}{:<20}{:<10}{:<18}{}",
                "Session", "Goal", "Check-ins", "Updated", "Current Plan"
            )];
            lines.extend(sessions.iter().map(|session| {
                let updated = session
                    .updated_at
                    .format(SESSION_TIMESTAMP_FORMAT)
                    .to_string();
                format!(
                    "{:<24}{:<20}{:<10}{:<18}{}",
                    session.name, session.goal, session.check_ins, updated, session.plan_title
                )
            }));
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use musclemap_core::models::{ExperienceLevel, Goal};
    use musclemap_intelligence::build_initial_plan;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_plan_lists_workout_structure() {
        let plan = build_initial_plan(Goal::MuscleGain, ExperienceLevel::Intermediate);
        let text = render_plan(&plan, OutputFormat::Text).unwrap();

        assert!(text.starts_with("### Initial Plan: Muscle Gain"));
        assert!(text.contains("- Type: Push-Pull-Legs (4 days/week)"));
        assert!(text.contains("- Main Lifts: Bench Press, Overhead Press, Deadlift, Squat"));
        assert!(text.contains("- Structure: 4 sets of 6 reps"));
        assert!(text.contains("- Cardio: 0 days/week for 20 min"));
    }

    #[test]
    fn test_json_plan_uses_record_field_names() {
        let plan = build_initial_plan(Goal::GeneralFitness, ExperienceLevel::Beginner);
        let json = render_plan(&plan, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["plan_details"]["type"], "Full Body");
        assert_eq!(value["title"], "Initial Plan: General Fitness");
    }

    #[test]
    fn test_session_list_shows_last_update() {
        let updated_at = Utc.with_ymd_and_hms(2025, 5, 3, 18, 45, 0).unwrap();
        let sessions = vec![SessionSummary {
            name: "alice".to_owned(),
            goal: "Muscle Gain".to_owned(),
            check_ins: 2,
            plan_title: "Adapted Plan (Check-in #2)".to_owned(),
            created_at: Utc.with_ymd_and_hms(2025, 4, 5, 9, 0, 0).unwrap(),
            updated_at,
        }];

        let text = render_sessions(&sessions, OutputFormat::Text).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("alice"));
        assert!(row.contains("2025-05-03 18:45"));
        assert!(row.ends_with("Adapted Plan (Check-in #2)"));

        let json = render_sessions(&sessions, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["updated_at"], "2025-05-03T18:45:00Z");
    }

    #[test]
    fn test_history_table_rows() {
        let rows = vec![
            HistoryRow {
                check_in: 0,
                weight_kg: 80.0,
                notes: "Initial Profile".to_owned(),
            },
            HistoryRow {
                check_in: 1,
                weight_kg: 78.5,
                notes: "N/A".to_owned(),
            },
        ];
        let text = render_history(&rows, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("0"));
        assert!(lines[2].contains("80.0"));
        assert!(lines[3].contains("78.5"));
        assert!(lines[3].ends_with("N/A"));
    }
}
