// ABOUTME: Adaptation rule configuration for check-in driven plan changes
// ABOUTME: Weekly weight-change targets and cardio increments per goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptation Rule Configuration
//!
//! The defaults are the product rules and must not drift: 0.5 kg/week loss,
//! 0.25 kg/week gain, +5 minutes of cardio when loss is below target and +10
//! minutes when nothing was lost.

use super::ConfigError;

/// Adaptation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdaptationConfig {
    /// Rules applied to `Goal::WeightReduction` profiles
    pub weight_reduction: WeightReductionRules,
    /// Rules applied to `Goal::MuscleGain` profiles
    pub muscle_gain: MuscleGainRules,
}

/// Weight-reduction targets and cardio increments
#[derive(Debug, Clone, PartialEq)]
pub struct WeightReductionRules {
    /// Expected loss per week of the interval (kg)
    pub target_loss_per_week_kg: f64,
    /// Cardio minutes added when some weight was lost but less than expected
    pub below_target_cardio_increase_minutes: u32,
    /// Cardio minutes added when no weight was lost
    pub setback_cardio_increase_minutes: u32,
}

/// Muscle-gain targets
#[derive(Debug, Clone, PartialEq)]
pub struct MuscleGainRules {
    /// Expected gain per week of the interval (kg)
    pub target_gain_per_week_kg: f64,
}

impl Default for WeightReductionRules {
    fn default() -> Self {
        Self {
            target_loss_per_week_kg: 0.5,
            below_target_cardio_increase_minutes: 5,
            setback_cardio_increase_minutes: 10,
        }
    }
}

impl Default for MuscleGainRules {
    fn default() -> Self {
        Self {
            target_gain_per_week_kg: 0.25,
        }
    }
}

impl AdaptationConfig {
    /// Validate the configured rates
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a weekly target is not a positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rate(
            "weight_reduction.target_loss_per_week_kg",
            self.weight_reduction.target_loss_per_week_kg,
        )?;
        check_rate(
            "muscle_gain.target_gain_per_week_kg",
            self.muscle_gain.target_gain_per_week_kg,
        )?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite(name));
    }
    if value <= 0.0 {
        return Err(ConfigError::ValueOutOfRange(name));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_product_rules() {
        let config = AdaptationConfig::default();
        assert!((config.weight_reduction.target_loss_per_week_kg - 0.5).abs() < f64::EPSILON);
        assert!((config.muscle_gain.target_gain_per_week_kg - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.weight_reduction.below_target_cardio_increase_minutes, 5);
        assert_eq!(config.weight_reduction.setback_cardio_increase_minutes, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_or_nan_rates() {
        let mut config = AdaptationConfig::default();
        config.muscle_gain.target_gain_per_week_kg = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(
                "muscle_gain.target_gain_per_week_kg"
            ))
        );

        config = AdaptationConfig::default();
        config.weight_reduction.target_loss_per_week_kg = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::NotFinite(_))));
    }
}
