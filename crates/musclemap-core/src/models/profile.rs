// ABOUTME: User profile model with goal, experience level, and check-in interval
// ABOUTME: Parses enumerated choices from user input and enforces numeric bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ValidationError;
use crate::validation::{validate_age, validate_height, validate_weight};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Lose body weight
    WeightReduction,
    /// Gain lean mass
    MuscleGain,
    /// Stay consistent without a weight target
    GeneralFitness,
}

impl Goal {
    /// All goals in display order
    pub const ALL: [Self; 3] = [Self::WeightReduction, Self::MuscleGain, Self::GeneralFitness];

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WeightReduction => "Weight Reduction",
            Self::MuscleGain => "Muscle Gain",
            Self::GeneralFitness => "General Fitness",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Goal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "weightreduction" | "weightloss" => Ok(Self::WeightReduction),
            "musclegain" => Ok(Self::MuscleGain),
            "generalfitness" => Ok(Self::GeneralFitness),
            _ => Err(ValidationError::UnknownVariant {
                kind: "goal",
                value: s.to_owned(),
                expected: "Weight Reduction, Muscle Gain, General Fitness",
            }),
        }
    }
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to structured training
    Beginner,
    /// A year or more of consistent training
    Intermediate,
    /// Several years of structured training
    Advanced,
}

impl ExperienceLevel {
    /// All experience levels in display order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ValidationError::UnknownVariant {
                kind: "experience level",
                value: s.to_owned(),
                expected: "Beginner, Intermediate, Advanced",
            }),
        }
    }
}

/// Length of one check-in interval
///
/// Only 2, 4 and 6 week intervals are offered. Serialized as the plain week
/// count so stored records read `"time_interval_weeks": 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeInterval {
    /// Two weeks
    TwoWeeks,
    /// Four weeks
    FourWeeks,
    /// Six weeks
    SixWeeks,
}

impl TimeInterval {
    /// Number of weeks in the interval
    #[must_use]
    pub const fn weeks(self) -> u32 {
        match self {
            Self::TwoWeeks => 2,
            Self::FourWeeks => 4,
            Self::SixWeeks => 6,
        }
    }
}

impl TryFrom<u32> for TimeInterval {
    type Error = ValidationError;

    fn try_from(weeks: u32) -> Result<Self, Self::Error> {
        match weeks {
            2 => Ok(Self::TwoWeeks),
            4 => Ok(Self::FourWeeks),
            6 => Ok(Self::SixWeeks),
            other => Err(ValidationError::UnknownVariant {
                kind: "time interval",
                value: other.to_string(),
                expected: "2, 4, 6 (weeks)",
            }),
        }
    }
}

impl From<TimeInterval> for u32 {
    fn from(interval: TimeInterval) -> Self {
        interval.weeks()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} weeks", self.weeks())
    }
}

impl FromStr for TimeInterval {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix("weeks")
            .or_else(|| trimmed.strip_suffix('w'))
            .unwrap_or(trimmed)
            .trim();

        digits
            .parse::<u32>()
            .map_err(|_| ValidationError::UnknownVariant {
                kind: "time interval",
                value: s.to_owned(),
                expected: "2, 4, 6 (weeks)",
            })
            .and_then(Self::try_from)
    }
}

/// User attributes that stay fixed for one interval
///
/// `start_weight_kg` is the weight at the start of the *current* interval. The
/// session rebases it to the latest check-in weight after every adaptation;
/// the engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: u32,
    /// Weight at the start of the current interval (kg)
    pub start_weight_kg: f64,
    /// Primary goal
    pub goal: Goal,
    /// Check-in interval length
    #[serde(rename = "time_interval_weeks")]
    pub time_interval: TimeInterval,
    /// Training experience
    pub experience_level: ExperienceLevel,
}

impl Profile {
    /// Build a profile, rejecting numeric values outside the accepted bounds
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` or `ValidationError::NotFinite`
    /// when age, height or weight fall outside their bounds.
    pub fn new(
        age: u32,
        height_cm: u32,
        start_weight_kg: f64,
        goal: Goal,
        time_interval: TimeInterval,
        experience_level: ExperienceLevel,
    ) -> Result<Self, ValidationError> {
        let profile = Self {
            age,
            height_cm,
            start_weight_kg,
            goal,
            time_interval,
            experience_level,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Re-check numeric bounds, e.g. after loading a stored record
    ///
    /// # Errors
    ///
    /// Returns the first bound violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_age(self.age)?;
        validate_height(self.height_cm)?;
        validate_weight("start weight", self.start_weight_kg)?;
        Ok(())
    }

    /// Start a new interval from the given weight
    pub fn rebase_start_weight(&mut self, weight_kg: f64) {
        self.start_weight_kg = weight_kg;
    }
}

/// Lowercase and strip separators so "Weight Reduction", "weight-reduction"
/// and "weight_reduction" all compare equal
fn normalize_choice(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
