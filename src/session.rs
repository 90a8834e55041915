// ABOUTME: Per-user session state owning the profile, current plan, and check-in history
// ABOUTME: Drives the plan factory and adaptation engine and rebases the interval start weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session state
//!
//! A `Session` is the single owner of one user's profile, current plan and
//! ordered check-in history. It is passed explicitly to every operation; no
//! state is shared between sessions.
//!
//! A session cannot exist without a plan: the only constructor builds the
//! initial plan, so adapting always has a previous plan to start from.

use crate::errors::AppResult;
use crate::logging::PlanLogger;
use chrono::{DateTime, Utc};
use musclemap_core::constants::history::{INITIAL_ROW_NOTE, MISSING_NOTES};
use musclemap_core::models::{Plan, Profile, ProgressLog};
use musclemap_core::validation::{validate_session_name, validate_weight};
use musclemap_intelligence::{build_initial_plan, PlanAdapter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the weight history table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    /// 0 for the initial profile weight, then 1-based check-in number
    pub check_in: usize,
    /// Weight recorded at that point (kg)
    pub weight_kg: f64,
    /// Check-in notes, or a placeholder
    pub notes: String,
}

/// Compact description used when listing sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session name
    pub name: String,
    /// Goal display name
    pub goal: String,
    /// Number of check-ins performed
    pub check_ins: usize,
    /// Title of the current plan
    pub plan_title: String,
    /// When the session was started
    pub created_at: DateTime<Utc>,
    /// When the session last changed
    pub updated_at: DateTime<Utc>,
}

/// A user's profile, current plan, and check-in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
    name: String,
    profile: Profile,
    current_plan: Plan,
    progress_history: Vec<ProgressLog>,
    initial_weight_kg: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Session {
    /// Start a session and build its initial plan
    ///
    /// # Errors
    ///
    /// Returns an error if the session name is not a valid record key
    pub fn start(name: impl Into<String>, profile: Profile) -> AppResult<Self> {
        let name = name.into();
        validate_session_name(&name)?;

        let current_plan = build_initial_plan(profile.goal, profile.experience_level);
        let now = Utc::now();

        PlanLogger::log_session_started(
            &name,
            profile.goal.display_name(),
            profile.experience_level.display_name(),
            &current_plan.title,
        );

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            initial_weight_kg: profile.start_weight_kg,
            profile,
            current_plan,
            progress_history: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Record a check-in and replace the current plan with its adaptation
    ///
    /// The next plan is computed before any state changes, then the history,
    /// current plan and interval start weight are replaced together.
    pub fn check_in<A>(&mut self, progress: ProgressLog, adapter: &A) -> &Plan
    where
        A: PlanAdapter + ?Sized,
    {
        let check_in_index = self.progress_history.len() + 1;
        let next_plan = adapter.adapt(
            &self.profile,
            &self.current_plan,
            &progress,
            check_in_index,
        );

        PlanLogger::log_check_in(
            &self.name,
            check_in_index,
            progress.current_weight_kg,
            &next_plan.title,
        );

        self.profile.rebase_start_weight(progress.current_weight_kg);
        self.progress_history.push(progress);
        self.current_plan = next_plan;
        self.updated_at = Utc::now();
        &self.current_plan
    }

    /// Re-check invariants of a record loaded from storage
    ///
    /// # Errors
    ///
    /// Returns an error if the name, profile values, or any recorded weight
    /// is out of bounds
    pub fn validate(&self) -> AppResult<()> {
        validate_session_name(&self.name)?;
        self.profile.validate()?;
        validate_weight("initial weight", self.initial_weight_kg)?;
        for log in &self.progress_history {
            validate_weight("current weight", log.current_weight_kg)?;
        }
        Ok(())
    }

    /// Weight history table: the initial weight, then one row per check-in
    #[must_use]
    pub fn history_table(&self) -> Vec<HistoryRow> {
        let initial = HistoryRow {
            check_in: 0,
            weight_kg: self.initial_weight_kg,
            notes: INITIAL_ROW_NOTE.to_owned(),
        };

        std::iter::once(initial)
            .chain(
                self.progress_history
                    .iter()
                    .enumerate()
                    .map(|(index, log)| HistoryRow {
                        check_in: index + 1,
                        weight_kg: log.current_weight_kg,
                        notes: log
                            .notes
                            .clone()
                            .unwrap_or_else(|| MISSING_NOTES.to_owned()),
                    }),
            )
            .collect()
    }

    /// Chronological weights: initial weight followed by each check-in
    #[must_use]
    pub fn weight_series(&self) -> Vec<f64> {
        std::iter::once(self.initial_weight_kg)
            .chain(self.progress_history.iter().map(|log| log.current_weight_kg))
            .collect()
    }

    /// Latest weight minus the weight the session started at
    #[must_use]
    pub fn total_change_kg(&self) -> f64 {
        self.profile.start_weight_kg - self.initial_weight_kg
    }

    /// Compact description for listings
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            name: self.name.clone(),
            goal: self.profile.goal.display_name().to_owned(),
            check_ins: self.progress_history.len(),
            plan_title: self.current_plan.title.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Unique session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Session name, also the storage key
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current profile; `start_weight_kg` is the current interval's start
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Plan for the current interval
    #[must_use]
    pub const fn current_plan(&self) -> &Plan {
        &self.current_plan
    }

    /// Check-ins in the order they were recorded
    #[must_use]
    pub fn progress_history(&self) -> &[ProgressLog] {
        &self.progress_history
    }

    /// Number of check-ins performed
    #[must_use]
    pub fn check_in_count(&self) -> usize {
        self.progress_history.len()
    }

    /// Weight entered when the profile was created
    #[must_use]
    pub const fn initial_weight_kg(&self) -> f64 {
        self.initial_weight_kg
    }
}
