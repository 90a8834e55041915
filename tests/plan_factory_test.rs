// ABOUTME: Unit tests for initial plan construction
// ABOUTME: Validates the full goal x experience override table and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use musclemap::intelligence::{build_initial_plan, PlanFactory};
use musclemap::models::{ExperienceLevel, Goal, Plan, PlanDetails};

/// Expected plan for one goal/experience pair, written out field by field
fn expected_plan(goal: Goal, experience: ExperienceLevel) -> Plan {
    let welcome =
        "Welcome! Here is your starting plan. Stick to it and we'll check your progress soon.";
    let full_body_lifts = vec!["Squat".to_owned(), "Bench Press".to_owned(), "Row".to_owned()];

    let details = |workout_type: &str,
                   frequency: u32,
                   lifts: Vec<String>,
                   sets: u32,
                   reps: u32,
                   cardio_days: u32,
                   cardio_minutes: u32,
                   notes: &str| PlanDetails {
        workout_type: workout_type.to_owned(),
        frequency_per_week: frequency,
        main_lifts: lifts,
        sets_per_lift: sets,
        reps_per_set: reps,
        cardio_days_per_week: cardio_days,
        cardio_minutes_per_session: cardio_minutes,
        notes: notes.to_owned(),
    };

    let (title, diet, plan_details) = match (goal, experience) {
        (Goal::WeightReduction, ExperienceLevel::Intermediate) => (
            "Initial Plan: Weight Reduction",
            "Start with a 300-calorie deficit. Focus on protein and vegetables.",
            details("Full Body", 3, full_body_lifts, 3, 12, 3, 35, "Focus on good form."),
        ),
        (Goal::WeightReduction, _) => (
            "Initial Plan: Weight Reduction",
            "Start with a 300-calorie deficit. Focus on protein and vegetables.",
            details("Full Body", 3, full_body_lifts, 3, 10, 3, 30, "Focus on good form."),
        ),
        (Goal::MuscleGain, ExperienceLevel::Beginner) => (
            "Initial Plan: Muscle Gain",
            "Start with a 250-calorie surplus. Eat 1.8g of protein per kg of bodyweight.",
            details("Full Body", 3, full_body_lifts, 3, 8, 0, 20, "Focus on good form."),
        ),
        (Goal::MuscleGain, ExperienceLevel::Intermediate) => (
            "Initial Plan: Muscle Gain",
            "Start with a 250-calorie surplus. Eat 1.8g of protein per kg of bodyweight.",
            details(
                "Push-Pull-Legs",
                4,
                vec![
                    "Bench Press".to_owned(),
                    "Overhead Press".to_owned(),
                    "Deadlift".to_owned(),
                    "Squat".to_owned(),
                ],
                4,
                6,
                0,
                20,
                "Focus on good form.",
            ),
        ),
        (Goal::MuscleGain, ExperienceLevel::Advanced) => (
            "Initial Plan: Muscle Gain (Advanced)",
            "Start with a 250-calorie surplus. Eat 1.8g of protein per kg of bodyweight.",
            details(
                "Advanced PPL",
                6,
                full_body_lifts,
                5,
                5,
                0,
                20,
                "Focus on compound lifts and progressive overload.",
            ),
        ),
        (Goal::GeneralFitness, ExperienceLevel::Beginner) => (
            "Initial Plan: General Fitness",
            "Eat a balanced diet.",
            details(
                "Full Body",
                3,
                full_body_lifts,
                3,
                10,
                2,
                20,
                "Welcome! Focus on learning the movements.",
            ),
        ),
        (Goal::GeneralFitness, _) => (
            "Initial Plan: General Fitness",
            "Eat a balanced diet.",
            details("Full Body", 3, full_body_lifts, 3, 10, 2, 20, "Focus on good form."),
        ),
    };

    Plan {
        title: title.to_owned(),
        diet_recommendation: diet.to_owned(),
        ai_feedback: welcome.to_owned(),
        details: plan_details,
    }
}

#[test]
fn test_every_goal_and_experience_matches_override_table() {
    for goal in Goal::ALL {
        for experience in ExperienceLevel::ALL {
            assert_eq!(
                build_initial_plan(goal, experience),
                expected_plan(goal, experience),
                "plan drifted for {goal} / {experience}"
            );
        }
    }
}

#[test]
fn test_initial_plan_is_deterministic() {
    for goal in Goal::ALL {
        for experience in ExperienceLevel::ALL {
            let first = build_initial_plan(goal, experience);
            let second = build_initial_plan(goal, experience);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_baseline_is_untouched_by_overrides() {
    let baseline = PlanFactory::baseline();
    let _ = build_initial_plan(Goal::MuscleGain, ExperienceLevel::Advanced);

    assert_eq!(PlanFactory::baseline(), baseline);
    assert_eq!(baseline.details.workout_type, "Full Body");
    assert_eq!(baseline.details.frequency_per_week, 3);
    assert_eq!(baseline.details.cardio_days_per_week, 2);
}

#[test]
fn test_weight_reduction_keeps_advanced_asymmetry() {
    let intermediate = build_initial_plan(Goal::WeightReduction, ExperienceLevel::Intermediate);
    let advanced = build_initial_plan(Goal::WeightReduction, ExperienceLevel::Advanced);

    assert_eq!(intermediate.details.reps_per_set, 12);
    assert_eq!(advanced.details.reps_per_set, 10);
    assert_eq!(advanced.details.cardio_minutes_per_session, 30);
}
