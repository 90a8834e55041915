// ABOUTME: Rule-based adaptation engine turning a weight check-in into the next plan
// ABOUTME: Compares the interval's weight change against goal targets and adjusts diet and cardio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Check-in driven plan adaptation
//!
//! The engine borrows the previous plan and returns a new one. Fields not
//! named by a rule carry over unchanged, so cardio increments accumulate
//! across consecutive check-ins. The profile is read-only here: rebasing the
//! start weight for the next interval is the session's job.

use crate::config::{AdaptationConfig, ConfigError};
use musclemap_core::constants::plan_text::{diet, feedback, notes, titles};
use musclemap_core::models::{Goal, Plan, Profile, ProgressLog};
use tracing::debug;

/// Tolerance for weight comparisons. Absorbs binary representation error so
/// that e.g. 70.3 kg -> 68.3 kg counts as exactly 2.0 kg lost.
const WEIGHT_EPSILON_KG: f64 = 1e-9;

/// Anything that can derive the next plan from a check-in
pub trait PlanAdapter {
    /// Produce the plan for the next interval
    ///
    /// `check_in_index` is the 1-based number of check-ins performed so far,
    /// including this one.
    fn adapt(
        &self,
        profile: &Profile,
        previous_plan: &Plan,
        progress: &ProgressLog,
        check_in_index: usize,
    ) -> Plan;
}

/// Which rule fired for a check-in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdaptationDecision {
    /// Lost at least the expected amount; plan repeats
    LossOnTrack {
        /// Kilograms lost this interval
        lost_kg: f64,
    },
    /// Lost something but less than expected; more cardio
    LossBelowTarget {
        /// Kilograms lost this interval
        lost_kg: f64,
    },
    /// Lost nothing or gained; stricter diet and more cardio
    LossSetback {
        /// Kilograms lost this interval (zero or negative)
        lost_kg: f64,
    },
    /// Gained at least the expected amount; push progressive overload
    GainOnTarget {
        /// Kilograms gained this interval
        gained_kg: f64,
    },
    /// Gained less than expected; bigger surplus
    GainBelowTarget {
        /// Kilograms gained this interval
        gained_kg: f64,
    },
    /// General fitness; plan repeats
    Maintain,
}

impl AdaptationDecision {
    /// Feedback text shown with the adapted plan
    #[must_use]
    pub fn feedback(&self) -> String {
        match self {
            Self::LossOnTrack { lost_kg } => format!(
                "Great job! You've lost {lost_kg:.1} kg, meeting your target. We'll stick to a similar plan to keep the progress steady."
            ),
            Self::LossBelowTarget { lost_kg } => format!(
                "Good progress! You've lost {lost_kg:.1} kg. To help you hit your next target, we will slightly increase your cardio."
            ),
            Self::LossSetback { .. } => "It looks like we didn't lose weight this period. Don't worry, this is common. We'll adjust your plan. Please double-check your diet logs and we will increase workout intensity.".to_owned(),
            Self::GainOnTarget { gained_kg } => format!(
                "Excellent work! You've gained {gained_kg:.1} kg, right on target. We'll increase the weights or reps on your main lifts to continue progressing."
            ),
            Self::GainBelowTarget { gained_kg } => format!(
                "We've gained {gained_kg:.1} kg. This is a solid start. To boost progress, let's slightly increase your calorie surplus and focus on lifting heavier."
            ),
            Self::Maintain => feedback::GENERAL_FITNESS.to_owned(),
        }
    }

    /// Short machine-friendly label for logs
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LossOnTrack { .. } => "loss_on_track",
            Self::LossBelowTarget { .. } => "loss_below_target",
            Self::LossSetback { .. } => "loss_setback",
            Self::GainOnTarget { .. } => "gain_on_target",
            Self::GainBelowTarget { .. } => "gain_below_target",
            Self::Maintain => "maintain",
        }
    }
}

/// Rule-based adaptation engine with configurable thresholds
#[derive(Debug, Clone, Default)]
pub struct AdaptationEngine {
    config: AdaptationConfig,
}

impl AdaptationEngine {
    /// Create an engine with the standard rules
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails validation.
    pub fn with_config(config: AdaptationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Rules in effect
    #[must_use]
    pub const fn config(&self) -> &AdaptationConfig {
        &self.config
    }

    /// Classify a check-in against the profile's goal
    #[must_use]
    pub fn decide(&self, profile: &Profile, progress: &ProgressLog) -> AdaptationDecision {
        let weeks = f64::from(profile.time_interval.weeks());

        match profile.goal {
            Goal::WeightReduction => {
                let lost_kg = profile.start_weight_kg - progress.current_weight_kg;
                let expected_kg = self.config.weight_reduction.target_loss_per_week_kg * weeks;

                if lost_kg + WEIGHT_EPSILON_KG >= expected_kg {
                    AdaptationDecision::LossOnTrack { lost_kg }
                } else if lost_kg > WEIGHT_EPSILON_KG {
                    AdaptationDecision::LossBelowTarget { lost_kg }
                } else {
                    AdaptationDecision::LossSetback { lost_kg }
                }
            }
            Goal::MuscleGain => {
                let gained_kg = progress.current_weight_kg - profile.start_weight_kg;
                let expected_kg = self.config.muscle_gain.target_gain_per_week_kg * weeks;

                if gained_kg + WEIGHT_EPSILON_KG >= expected_kg {
                    AdaptationDecision::GainOnTarget { gained_kg }
                } else {
                    AdaptationDecision::GainBelowTarget { gained_kg }
                }
            }
            Goal::GeneralFitness => AdaptationDecision::Maintain,
        }
    }

    /// Apply a decision to a copy of the previous plan
    #[must_use]
    pub fn apply(
        &self,
        decision: &AdaptationDecision,
        previous_plan: &Plan,
        check_in_index: usize,
    ) -> Plan {
        let mut plan = previous_plan.clone();
        plan.title = titles::adapted(check_in_index);
        plan.ai_feedback = decision.feedback();

        let rules = &self.config.weight_reduction;
        match decision {
            AdaptationDecision::LossOnTrack { .. }
            | AdaptationDecision::Maintain => {}
            AdaptationDecision::LossBelowTarget { .. } => {
                plan.details.cardio_minutes_per_session = plan
                    .details
                    .cardio_minutes_per_session
                    .saturating_add(rules.below_target_cardio_increase_minutes);
            }
            AdaptationDecision::LossSetback { .. } => {
                plan.diet_recommendation = diet::DEFICIT_400.to_owned();
                plan.details.cardio_minutes_per_session = plan
                    .details
                    .cardio_minutes_per_session
                    .saturating_add(rules.setback_cardio_increase_minutes);
            }
            AdaptationDecision::GainOnTarget { .. } => {
                plan.details.notes = notes::PROGRESSIVE_OVERLOAD.to_owned();
            }
            AdaptationDecision::GainBelowTarget { .. } => {
                plan.diet_recommendation = diet::SURPLUS_350.to_owned();
            }
        }

        plan
    }
}

impl PlanAdapter for AdaptationEngine {
    fn adapt(
        &self,
        profile: &Profile,
        previous_plan: &Plan,
        progress: &ProgressLog,
        check_in_index: usize,
    ) -> Plan {
        let decision = self.decide(profile, progress);
        debug!(
            goal = %profile.goal,
            check_in = check_in_index,
            start_weight_kg = profile.start_weight_kg,
            current_weight_kg = progress.current_weight_kg,
            decision = decision.label(),
            "adapting plan"
        );
        self.apply(&decision, previous_plan, check_in_index)
    }
}

/// Adapt a plan with the standard rules
#[must_use]
pub fn adapt(
    profile: &Profile,
    previous_plan: &Plan,
    progress: &ProgressLog,
    check_in_index: usize,
) -> Plan {
    AdaptationEngine::new().adapt(profile, previous_plan, progress, check_in_index)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::plan_factory::build_initial_plan;
    use chrono::{TimeZone, Utc};
    use musclemap_core::models::{ExperienceLevel, TimeInterval};

    fn profile(goal: Goal, interval: TimeInterval, start_weight_kg: f64) -> Profile {
        Profile::new(
            30,
            175,
            start_weight_kg,
            goal,
            interval,
            ExperienceLevel::Beginner,
        )
        .unwrap()
    }

    fn check_in(weight_kg: f64) -> ProgressLog {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        ProgressLog::recorded_at(weight_kg, None, at).unwrap()
    }

    #[test]
    fn test_loss_boundary_absorbs_float_noise() {
        let engine = AdaptationEngine::new();
        let profile = profile(Goal::WeightReduction, TimeInterval::FourWeeks, 70.3);
        let decision = engine.decide(&profile, &check_in(68.3));
        assert!(matches!(decision, AdaptationDecision::LossOnTrack { .. }));
    }

    #[test]
    fn test_zero_loss_is_a_setback() {
        let engine = AdaptationEngine::new();
        let profile = profile(Goal::WeightReduction, TimeInterval::TwoWeeks, 80.0);
        let decision = engine.decide(&profile, &check_in(80.0));
        assert!(matches!(decision, AdaptationDecision::LossSetback { .. }));
    }

    #[test]
    fn test_feedback_reports_one_decimal() {
        let decision = AdaptationDecision::LossBelowTarget { lost_kg: 1.04 };
        assert!(decision.feedback().contains("lost 1.0 kg"));
    }

    #[test]
    fn test_custom_config_changes_increment() {
        let mut config = AdaptationConfig::default();
        config.weight_reduction.below_target_cardio_increase_minutes = 7;
        let engine = AdaptationEngine::with_config(config).unwrap();

        let profile = profile(Goal::WeightReduction, TimeInterval::FourWeeks, 80.0);
        let previous = build_initial_plan(Goal::WeightReduction, ExperienceLevel::Beginner);
        let next = engine.adapt(&profile, &previous, &check_in(79.0), 1);
        assert_eq!(next.details.cardio_minutes_per_session, 37);
    }

    #[test]
    fn test_with_config_rejects_invalid_rules() {
        let mut config = AdaptationConfig::default();
        config.weight_reduction.target_loss_per_week_kg = -0.5;
        assert!(AdaptationEngine::with_config(config).is_err());
    }
}
