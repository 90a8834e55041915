// ABOUTME: Initial plan factory mapping goal and experience level to a starting plan
// ABOUTME: Applies goal overrides to a fixed baseline, then experience refinements on top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Initial plan construction
//!
//! Every plan starts from the same Full Body baseline. Goal overrides are
//! applied first; experience overrides refine them and never contradict the
//! goal's intent. Weight reduction has no Advanced-specific override, so an
//! Advanced lifter gets the Beginner weight-reduction plan.

use musclemap_core::constants::plan_text::{diet, feedback, lifts, notes, titles, workout_types};
use musclemap_core::models::{ExperienceLevel, Goal, Plan, PlanDetails};
use tracing::debug;

/// Builds first plans for new profiles
pub struct PlanFactory;

impl PlanFactory {
    /// The plan every goal starts from before overrides
    #[must_use]
    pub fn baseline() -> Plan {
        Plan {
            title: titles::INITIAL.to_owned(),
            diet_recommendation: diet::BALANCED.to_owned(),
            ai_feedback: feedback::WELCOME.to_owned(),
            details: PlanDetails {
                workout_type: workout_types::FULL_BODY.to_owned(),
                frequency_per_week: 3,
                main_lifts: vec![
                    lifts::SQUAT.to_owned(),
                    lifts::BENCH_PRESS.to_owned(),
                    lifts::ROW.to_owned(),
                ],
                sets_per_lift: 3,
                reps_per_set: 10,
                cardio_days_per_week: 2,
                cardio_minutes_per_session: 20,
                notes: notes::GOOD_FORM.to_owned(),
            },
        }
    }

    /// Build the first plan for a goal and experience level
    #[must_use]
    pub fn build_initial_plan(goal: Goal, experience: ExperienceLevel) -> Plan {
        let mut plan = Self::baseline();

        match goal {
            Goal::WeightReduction => Self::apply_weight_reduction(&mut plan, experience),
            Goal::MuscleGain => Self::apply_muscle_gain(&mut plan, experience),
            Goal::GeneralFitness => Self::apply_general_fitness(&mut plan, experience),
        }

        debug!(
            goal = %goal,
            experience = %experience,
            workout_type = %plan.details.workout_type,
            "built initial plan"
        );
        plan
    }

    fn apply_weight_reduction(plan: &mut Plan, experience: ExperienceLevel) {
        plan.title = titles::INITIAL_WEIGHT_REDUCTION.to_owned();
        plan.diet_recommendation = diet::DEFICIT_300.to_owned();
        plan.details.cardio_days_per_week = 3;
        plan.details.cardio_minutes_per_session = 30;

        if experience == ExperienceLevel::Intermediate {
            plan.details.reps_per_set = 12;
            plan.details.cardio_minutes_per_session = 35;
        }
    }

    fn apply_muscle_gain(plan: &mut Plan, experience: ExperienceLevel) {
        plan.title = titles::INITIAL_MUSCLE_GAIN.to_owned();
        plan.diet_recommendation = diet::SURPLUS_250.to_owned();
        plan.details.cardio_days_per_week = 0;
        plan.details.reps_per_set = 8;

        match experience {
            ExperienceLevel::Beginner => {}
            ExperienceLevel::Intermediate => {
                let details = &mut plan.details;
                details.workout_type = workout_types::PUSH_PULL_LEGS.to_owned();
                details.frequency_per_week = 4;
                details.main_lifts = vec![
                    lifts::BENCH_PRESS.to_owned(),
                    lifts::OVERHEAD_PRESS.to_owned(),
                    lifts::DEADLIFT.to_owned(),
                    lifts::SQUAT.to_owned(),
                ];
                details.sets_per_lift = 4;
                details.reps_per_set = 6;
            }
            ExperienceLevel::Advanced => {
                plan.title = titles::INITIAL_MUSCLE_GAIN_ADVANCED.to_owned();
                let details = &mut plan.details;
                details.workout_type = workout_types::ADVANCED_PPL.to_owned();
                details.frequency_per_week = 6;
                details.sets_per_lift = 5;
                details.reps_per_set = 5;
                details.notes = notes::COMPOUND_OVERLOAD.to_owned();
            }
        }
    }

    fn apply_general_fitness(plan: &mut Plan, experience: ExperienceLevel) {
        plan.title = titles::INITIAL_GENERAL_FITNESS.to_owned();
        if experience == ExperienceLevel::Beginner {
            plan.details.notes = notes::LEARN_MOVEMENTS.to_owned();
        }
    }
}

/// Build the first plan for a goal and experience level
#[must_use]
pub fn build_initial_plan(goal: Goal, experience: ExperienceLevel) -> Plan {
    PlanFactory::build_initial_plan(goal, experience)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_shape() {
        let plan = PlanFactory::baseline();
        assert_eq!(plan.title, "Initial Plan");
        assert_eq!(plan.details.main_lifts, vec!["Squat", "Bench Press", "Row"]);
        assert_eq!(plan.details.weekly_cardio_minutes(), 40);
    }

    #[test]
    fn test_weight_reduction_advanced_has_no_extra_override() {
        let beginner = build_initial_plan(Goal::WeightReduction, ExperienceLevel::Beginner);
        let advanced = build_initial_plan(Goal::WeightReduction, ExperienceLevel::Advanced);
        assert_eq!(beginner, advanced);
        assert_eq!(advanced.details.reps_per_set, 10);
        assert_eq!(advanced.details.cardio_minutes_per_session, 30);
    }

    #[test]
    fn test_muscle_gain_intermediate_keeps_goal_cardio() {
        let plan = build_initial_plan(Goal::MuscleGain, ExperienceLevel::Intermediate);
        assert_eq!(plan.title, "Initial Plan: Muscle Gain");
        assert_eq!(plan.details.cardio_days_per_week, 0);
        assert_eq!(plan.details.notes, "Focus on good form.");
    }
}
