// ABOUTME: Fixed plan wording for initial and adapted plans
// ABOUTME: Titles, diet recommendations, and workout notes reproduced verbatim by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Plan titles
pub mod titles {
    /// Baseline title before any goal override
    pub const INITIAL: &str = "Initial Plan";
    /// Initial weight-reduction plan
    pub const INITIAL_WEIGHT_REDUCTION: &str = "Initial Plan: Weight Reduction";
    /// Initial muscle-gain plan
    pub const INITIAL_MUSCLE_GAIN: &str = "Initial Plan: Muscle Gain";
    /// Initial muscle-gain plan for advanced lifters
    pub const INITIAL_MUSCLE_GAIN_ADVANCED: &str = "Initial Plan: Muscle Gain (Advanced)";
    /// Initial general-fitness plan
    pub const INITIAL_GENERAL_FITNESS: &str = "Initial Plan: General Fitness";

    /// Title of the plan produced by the given 1-based check-in
    #[must_use]
    pub fn adapted(check_in_index: usize) -> String {
        format!("Adapted Plan (Check-in #{check_in_index})")
    }
}

/// Diet recommendations
pub mod diet {
    /// Baseline diet
    pub const BALANCED: &str = "Eat a balanced diet.";
    /// Initial weight-reduction diet (300 kcal deficit)
    pub const DEFICIT_300: &str =
        "Start with a 300-calorie deficit. Focus on protein and vegetables.";
    /// Initial muscle-gain diet (250 kcal surplus)
    pub const SURPLUS_250: &str =
        "Start with a 250-calorie surplus. Eat 1.8g of protein per kg of bodyweight.";
    /// Weight-reduction setback diet (400 kcal deficit)
    pub const DEFICIT_400: &str =
        "Let's try a 400-calorie deficit. Please track your food intake carefully.";
    /// Muscle-gain below-target diet (350 kcal surplus)
    pub const SURPLUS_350: &str =
        "Let's try a 350-calorie surplus. Ensure you're hitting your protein target.";
}

/// Workout notes
pub mod notes {
    /// Baseline note
    pub const GOOD_FORM: &str = "Focus on good form.";
    /// General-fitness beginners
    pub const LEARN_MOVEMENTS: &str = "Welcome! Focus on learning the movements.";
    /// Advanced muscle-gain plan
    pub const COMPOUND_OVERLOAD: &str = "Focus on compound lifts and progressive overload.";
    /// Muscle gain on target after a check-in
    pub const PROGRESSIVE_OVERLOAD: &str =
        "Focus on progressive overload: add +2.5kg or +1 rep to your main lifts.";
}

/// Workout split names
pub mod workout_types {
    /// Baseline split
    pub const FULL_BODY: &str = "Full Body";
    /// Intermediate muscle-gain split
    pub const PUSH_PULL_LEGS: &str = "Push-Pull-Legs";
    /// Advanced muscle-gain split
    pub const ADVANCED_PPL: &str = "Advanced PPL";
}

/// Main lift names
pub mod lifts {
    /// Back squat
    pub const SQUAT: &str = "Squat";
    /// Bench press
    pub const BENCH_PRESS: &str = "Bench Press";
    /// Barbell row
    pub const ROW: &str = "Row";
    /// Overhead press
    pub const OVERHEAD_PRESS: &str = "Overhead Press";
    /// Conventional deadlift
    pub const DEADLIFT: &str = "Deadlift";
}

/// Feedback attached to initial plans
pub mod feedback {
    /// Feedback on every initial plan
    pub const WELCOME: &str =
        "Welcome! Here is your starting plan. Stick to it and we'll check your progress soon.";
    /// General-fitness check-in feedback
    pub const GENERAL_FITNESS: &str = "You've logged a check-in for 'General Fitness'. We'll keep the plan the same. Keep up the great consistency!";
}
