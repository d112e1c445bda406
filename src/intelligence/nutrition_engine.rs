// ABOUTME: Nutrition target engine running the full BMR to recommendations pipeline
// ABOUTME: Stateless, deterministic computation of calorie and macro targets with an audit trail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Nutrition Target Engine
//!
//! Runs the stages in fixed order:
//!
//! 1. BMR (Mifflin-St Jeor)
//! 2. TDEE (BMR x PAL)
//! 3. Goal policy
//! 4. Conflict detection, which may replace the policy
//! 5. Progression validation
//! 6. Macro allocation
//! 7. Explanation
//! 8. Recommendations
//!
//! The engine holds only its configuration. It does not validate the profile;
//! callers that accept untrusted input should run
//! [`ProfileValidator`](crate::intelligence::profile_validation::ProfileValidator) first.

use crate::config::intelligence::NutritionTargetConfig;
use crate::intelligence::conflict_resolver::analyze_conflicts;
use crate::intelligence::explanation::{build_calculation_method, ExplanationInputs};
use crate::intelligence::goal_policy::resolve_goal_policy;
use crate::intelligence::nutrition_calculator::{
    allocate_macros, calculate_bmr, calculate_target_calories, calculate_tdee,
};
use crate::intelligence::progression_validator::validate_progression;
use crate::intelligence::recommendations::compose_recommendations;
use chrono::{Local, NaiveDate};
use fuelplan_core::models::{CalorieCalculationResult, UserNutritionProfile};
use tracing::{debug, warn};

/// Computes nutrition targets from a user profile
#[derive(Debug, Clone)]
pub struct NutritionTargetEngine {
    config: NutritionTargetConfig,
}

impl Default for NutritionTargetEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NutritionTargetEngine {
    /// Create an engine with the compiled-in default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: NutritionTargetConfig::default(),
        }
    }

    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn with_config(config: NutritionTargetConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &NutritionTargetConfig {
        &self.config
    }

    /// Compute targets relative to today's local date
    #[must_use]
    pub fn compute(&self, profile: &UserNutritionProfile) -> CalorieCalculationResult {
        self.compute_on(profile, Local::now().date_naive())
    }

    /// Compute targets relative to the given date
    ///
    /// The result depends only on `profile`, `today` and the configuration.
    #[must_use]
    pub fn compute_on(
        &self,
        profile: &UserNutritionProfile,
        today: NaiveDate,
    ) -> CalorieCalculationResult {
        let config = &self.config;

        let bmr = calculate_bmr(
            profile.weight_kg,
            profile.height_cm,
            profile.age,
            profile.gender,
            &config.bmr,
        );
        let tdee = calculate_tdee(bmr, profile.pal_factor);
        debug!(bmr, tdee, pal = profile.pal_factor, "energy expenditure calculated");

        let resolved = resolve_goal_policy(profile, &config.goal_policies);
        debug!(
            goal = %profile.training_goal,
            adjustment_kcal = resolved.adjustment_kcal(),
            protein_per_kg = resolved.protein_per_kg(),
            "goal policy resolved"
        );

        let conflicts = analyze_conflicts(profile, &config.conflicts);
        let settings = conflicts.effective_settings(&resolved);
        if settings.is_override() {
            warn!(
                from = %resolved.origin(),
                to = %settings.origin(),
                "conflict replaced goal policy"
            );
        }

        let progression =
            validate_progression(profile, settings, &config.progression, today);
        debug!(
            weeks_to_goal = ?progression.estimate.weeks_to_goal,
            warnings = progression.warnings.len(),
            "progression validated"
        );

        let calorie_adjustment = settings.adjustment_kcal();
        let target_calories = calculate_target_calories(tdee, calorie_adjustment);
        let macros = allocate_macros(
            profile.weight_kg,
            settings.protein_per_kg(),
            target_calories,
            settings.carbs_percentage(),
            &config.macronutrients,
        );
        debug!(
            target_calories,
            protein_g = macros.protein_g,
            carbs_g = macros.carbs_g,
            fat_g = macros.fat_g,
            "macros allocated"
        );

        let calculation_method = build_calculation_method(
            &ExplanationInputs {
                profile,
                bmr,
                tdee,
                target_calories,
                settings,
                macros: &macros,
            },
            &config.bmr,
            &config.macronutrients,
            config.explanation.locale,
        );

        let recommendations = compose_recommendations(
            &conflicts.recommendations,
            profile,
            settings,
            &config.recommendations,
        );

        let mut warnings = conflicts.warnings.clone();
        warnings.extend(progression.warnings);

        CalorieCalculationResult {
            bmr,
            tdee,
            target_calories,
            calorie_adjustment,
            macros,
            progression: progression.estimate,
            warnings,
            recommendations,
            has_conflict: conflicts.has_conflict,
            calculation_method,
        }
    }
}
