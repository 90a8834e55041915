// ABOUTME: Fixture builders for profiles, check-ins, and sessions
// ABOUTME: Keeps integration tests focused on behavior instead of setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{TimeZone, Utc};
use musclemap::models::{ExperienceLevel, Goal, Profile, ProgressLog, TimeInterval};
use musclemap::session::Session;

/// Profile with typical age/height and the given goal, interval and start weight
pub fn profile(goal: Goal, interval: TimeInterval, start_weight_kg: f64) -> Profile {
    profile_with_experience(goal, ExperienceLevel::Beginner, interval, start_weight_kg)
}

/// Profile with an explicit experience level
pub fn profile_with_experience(
    goal: Goal,
    experience: ExperienceLevel,
    interval: TimeInterval,
    start_weight_kg: f64,
) -> Profile {
    Profile::new(27, 172, start_weight_kg, goal, interval, experience).unwrap()
}

/// Check-in with a fixed timestamp so records compare equal across runs
pub fn check_in(weight_kg: f64) -> ProgressLog {
    check_in_with_notes(weight_kg, None)
}

/// Check-in with notes
pub fn check_in_with_notes(weight_kg: f64, notes: Option<&str>) -> ProgressLog {
    let at = Utc.with_ymd_and_hms(2025, 4, 12, 7, 30, 0).unwrap();
    ProgressLog::recorded_at(weight_kg, notes.map(str::to_owned), at).unwrap()
}

/// Fresh session for the given profile
pub fn session(name: &str, profile: Profile) -> Session {
    Session::start(name, profile).unwrap()
}
