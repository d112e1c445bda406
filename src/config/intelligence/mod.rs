// ABOUTME: Nutrition engine configuration loading with environment overrides and validation
// ABOUTME: Layers FUELPLAN_* environment overrides on top of the compiled-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Intelligence Configuration Module
//!
//! Configuration is layered: compiled-in defaults, then `FUELPLAN_*` environment
//! overrides, then validation. Only callers that ask for it get the environment
//! layer: `fuelplan::compute` and `NutritionTargetEngine::new` always use the
//! defaults, and the engine never reads the environment during a computation.

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    BmrConfig, ConflictConfig, ExplanationConfig, GoalPolicyTable, GoalPolicyValues,
    MacroAllocationConfig, NutritionTargetConfig, ProgressionConfig, RecommendationConfig,
};

use std::env;
use std::str::FromStr;
use tracing::debug;

impl NutritionTargetConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(locale = %config.explanation.locale, "nutrition config loaded");
        Ok(config)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Goal policy overrides
        Self::apply_env_var(
            "FUELPLAN_WEIGHT_LOSS_ADJUSTMENT_KCAL",
            &mut self.goal_policies.weight_loss.adjustment_kcal,
        )?;
        Self::apply_env_var(
            "FUELPLAN_MUSCLE_GAIN_ADJUSTMENT_KCAL",
            &mut self.goal_policies.muscle_gain.adjustment_kcal,
        )?;
        Self::apply_env_var(
            "FUELPLAN_MALE_BODY_FAT_THRESHOLD",
            &mut self.goal_policies.male_body_fat_threshold,
        )?;
        Self::apply_env_var(
            "FUELPLAN_FEMALE_BODY_FAT_THRESHOLD",
            &mut self.goal_policies.female_body_fat_threshold,
        )?;

        // Conflict overrides
        Self::apply_env_var(
            "FUELPLAN_AGGRESSIVE_LOSS_THRESHOLD_KG",
            &mut self.conflicts.aggressive_loss_threshold_kg,
        )?;

        // Progression overrides
        Self::apply_env_var(
            "FUELPLAN_MAX_WEEKLY_CHANGE_KG",
            &mut self.progression.max_weekly_change_kg,
        )?;
        Self::apply_env_var(
            "FUELPLAN_MIN_WEEKLY_CHANGE_KG",
            &mut self.progression.min_weekly_change_kg,
        )?;
        Self::apply_env_var(
            "FUELPLAN_SAFETY_WEEKLY_CHANGE_KG",
            &mut self.progression.safety_weekly_change_kg,
        )?;
        Self::apply_env_var(
            "FUELPLAN_DANGEROUS_DAILY_ADJUSTMENT_KCAL",
            &mut self.progression.dangerous_daily_adjustment_kcal,
        )?;
        Self::apply_env_var(
            "FUELPLAN_KCAL_PER_KG_TISSUE",
            &mut self.progression.kcal_per_kg_tissue,
        )?;

        // Macro and recommendation overrides
        Self::apply_env_var(
            "FUELPLAN_FAT_PERCENTAGE",
            &mut self.macronutrients.fat_percentage,
        )?;
        Self::apply_env_var(
            "FUELPLAN_HYDRATION_LITERS_PER_KG",
            &mut self.recommendations.hydration_liters_per_kg,
        )?;

        // Presentation
        Self::apply_env_var("FUELPLAN_NUMBER_LOCALE", &mut self.explanation.locale)?;

        Ok(self)
    }
}
