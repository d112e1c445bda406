// ABOUTME: Nutrition target configuration for BMR, goal policies, conflicts, and progression
// ABOUTME: Holds every tunable constant of the nutrition target engine with evidence-based defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Nutrition Target Configuration
//!
//! Every number the engine uses lives here, so a deployment can tune policies
//! without touching the pipeline code.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Jäger et al. (2017) DOI: 10.1186/s12970-017-0177-8
//! - Protein in deficit: Helms et al. (2014) DOI: 10.1186/1550-2783-11-20
//! - Rate of loss: Garthe et al. (2011) DOI: 10.1123/ijsnem.21.2.97

use crate::config::intelligence::error::ConfigError;
use crate::formatters::NumberLocale;
use fuelplan_core::constants::energy::KCAL_PER_KG_BODY_TISSUE;
use fuelplan_core::models::Gender;
use serde::{Deserialize, Serialize};

/// Nutrition Target Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargetConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Goal policy table
    pub goal_policies: GoalPolicyTable,
    /// Conflict resolution policies and thresholds
    pub conflicts: ConflictConfig,
    /// Timeline feasibility thresholds
    pub progression: ProgressionConfig,
    /// Macronutrient allocation settings
    pub macronutrients: MacroAllocationConfig,
    /// Recommendation composer settings
    pub recommendations: RecommendationConfig,
    /// Explanation rendering settings
    pub explanation: ExplanationConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Numeric part of a goal policy row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalPolicyValues {
    /// Signed daily calorie delta applied to TDEE (kcal)
    pub adjustment_kcal: i32,
    /// Protein density (g per kg body weight)
    pub protein_g_per_kg: f64,
    /// Expected weekly body weight change (kg, signed)
    pub expected_weekly_change_kg: f64,
    /// Recommended carbohydrate share of calories (percent), if the goal has one
    pub carbs_percentage: Option<f64>,
}

impl GoalPolicyValues {
    /// Row without a carbohydrate recommendation
    #[must_use]
    pub const fn new(
        adjustment_kcal: i32,
        protein_g_per_kg: f64,
        expected_weekly_change_kg: f64,
    ) -> Self {
        Self {
            adjustment_kcal,
            protein_g_per_kg,
            expected_weekly_change_kg,
            carbs_percentage: None,
        }
    }
}

/// Goal to policy lookup table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPolicyTable {
    /// Strength: +250 kcal, 1.9 g/kg, +0.10 kg/week
    pub strength: GoalPolicyValues,
    /// Muscle gain: +400 kcal, 2.0 g/kg, +0.35 kg/week
    pub muscle_gain: GoalPolicyValues,
    /// Weight loss: -500 kcal, 2.2 g/kg, -0.50 kg/week
    pub weight_loss: GoalPolicyValues,
    /// Endurance: +100 kcal, 1.5 g/kg, 0 kg/week, 55% carbohydrates
    pub endurance: GoalPolicyValues,
    /// General fitness above the body-fat threshold: -300 kcal, 1.7 g/kg, -0.20 kg/week
    pub general_fitness_deficit: GoalPolicyValues,
    /// General fitness at or below the threshold, or without body fat data
    pub general_fitness_maintenance: GoalPolicyValues,
    /// Fallback for unrecognized goals: 0 kcal, 1.6 g/kg, 0 kg/week
    pub maintenance_fallback: GoalPolicyValues,
    /// Body fat percentage above which general fitness switches to a deficit (male)
    pub male_body_fat_threshold: f64,
    /// Body fat percentage above which general fitness switches to a deficit (female)
    pub female_body_fat_threshold: f64,
}

impl GoalPolicyTable {
    /// Body fat threshold for the given gender
    #[must_use]
    pub const fn body_fat_threshold(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male_body_fat_threshold,
            Gender::Female => self.female_body_fat_threshold,
        }
    }

    fn rows(&self) -> [(&'static str, &GoalPolicyValues); 7] {
        [
            ("strength", &self.strength),
            ("muscle_gain", &self.muscle_gain),
            ("weight_loss", &self.weight_loss),
            ("endurance", &self.endurance),
            ("general_fitness_deficit", &self.general_fitness_deficit),
            ("general_fitness_maintenance", &self.general_fitness_maintenance),
            ("maintenance_fallback", &self.maintenance_fallback),
        ]
    }
}

/// Conflict resolution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictConfig {
    /// Policy replacing muscle gain when the target weight is below current weight
    pub recomposition: GoalPolicyValues,
    /// Policy replacing strength when a large loss is targeted
    pub strength_preserving_cut: GoalPolicyValues,
    /// Loss (kg) beyond which a strength goal is considered in conflict
    pub aggressive_loss_threshold_kg: f64,
}

/// Timeline feasibility configuration
///
/// Reference: Garthe, I. et al. (2011). Effect of two different weight-loss rates on body
/// composition and strength and power-related performance in elite athletes.
/// DOI: 10.1123/ijsnem.21.2.97
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Weekly change (kg, absolute) above which a target date is too aggressive
    pub max_weekly_change_kg: f64,
    /// Weekly change (kg, absolute) below which weight loss is too slow to motivate
    pub min_weekly_change_kg: f64,
    /// Minimum remaining distance (kg) for the too-slow warning to apply
    pub slow_progress_min_delta_kg: f64,
    /// Daily adjustment (kcal, absolute) above which a deficit/surplus is dangerous
    pub dangerous_daily_adjustment_kcal: f64,
    /// Policy weekly change (kg, absolute) above which a safety warning is always shown
    pub safety_weekly_change_kg: f64,
    /// Energy stored per kilogram of body tissue (kcal)
    pub kcal_per_kg_tissue: f64,
}

/// Macronutrient allocation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroAllocationConfig {
    /// Share of target calories allocated to fat (percent)
    pub fat_percentage: f64,
}

/// Recommendation composer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Daily water intake per kilogram of body weight (liters)
    pub hydration_liters_per_kg: f64,
    /// Protein density (g/kg) from which protein timing advice is given
    pub protein_timing_threshold_g_per_kg: f64,
}

/// Explanation rendering configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplanationConfig {
    /// Number rendering used in the audit trail strings
    pub locale: NumberLocale,
}

impl NutritionTargetConfig {
    /// Validate nutrition target configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any value is outside its plausible range or
    /// thresholds are not ordered as required
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate BMR coefficients are positive
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.bmr.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }

        // Validate every policy row, including the conflict overrides
        let conflict_rows = [
            ("recomposition", &self.conflicts.recomposition),
            (
                "strength_preserving_cut",
                &self.conflicts.strength_preserving_cut,
            ),
        ];
        for (_, row) in self.goal_policies.rows().into_iter().chain(conflict_rows) {
            Self::validate_policy_row(row)?;
        }

        let thresholds = [
            self.goal_policies.male_body_fat_threshold,
            self.goal_policies.female_body_fat_threshold,
        ];
        if thresholds.iter().any(|t| !(3.0..=60.0).contains(t)) {
            return Err(ConfigError::ValueOutOfRange(
                "Body fat thresholds must be between 3% and 60%",
            ));
        }

        if self.conflicts.aggressive_loss_threshold_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Aggressive loss threshold must be positive",
            ));
        }

        self.validate_progression()?;

        if !(15.0..=40.0).contains(&self.macronutrients.fat_percentage) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat percentage must be between 15% and 40% of target calories",
            ));
        }

        if self.recommendations.hydration_liters_per_kg <= 0.0
            || self.recommendations.hydration_liters_per_kg > 0.1
        {
            return Err(ConfigError::ValueOutOfRange(
                "Hydration must be between 0 and 0.1 liters per kg",
            ));
        }

        Ok(())
    }

    fn validate_policy_row(row: &GoalPolicyValues) -> Result<(), ConfigError> {
        // Validate protein recommendations are reasonable (0.5-3.5 g/kg)
        if !(0.5..=3.5).contains(&row.protein_g_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein density must be between 0.5 and 3.5 g/kg",
            ));
        }
        if row.adjustment_kcal.abs() > 1500 {
            return Err(ConfigError::ValueOutOfRange(
                "Goal calorie adjustment must be within +/-1500 kcal/day",
            ));
        }
        if row.expected_weekly_change_kg.abs() > 2.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Expected weekly change must be within +/-2 kg",
            ));
        }
        if let Some(carbs) = row.carbs_percentage {
            if !(0.0..=100.0).contains(&carbs) {
                return Err(ConfigError::ValueOutOfRange(
                    "Carbohydrate percentage must be between 0 and 100",
                ));
            }
        }
        Ok(())
    }

    fn validate_progression(&self) -> Result<(), ConfigError> {
        let prog = &self.progression;

        if prog.kcal_per_kg_tissue <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Energy per kg of body tissue must be positive",
            ));
        }
        if prog.min_weekly_change_kg <= 0.0 || prog.max_weekly_change_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weekly change thresholds must be positive",
            ));
        }
        if prog.min_weekly_change_kg >= prog.max_weekly_change_kg {
            return Err(ConfigError::InvalidRange(
                "min_weekly_change must be < max_weekly_change",
            ));
        }
        if prog.safety_weekly_change_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Safety weekly change must be positive",
            ));
        }
        if prog.dangerous_daily_adjustment_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Dangerous daily adjustment must be positive",
            ));
        }
        if prog.slow_progress_min_delta_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Slow progress delta must not be negative",
            ));
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for GoalPolicyTable {
    fn default() -> Self {
        Self {
            strength: GoalPolicyValues::new(250, 1.9, 0.1),
            muscle_gain: GoalPolicyValues::new(400, 2.0, 0.35),
            weight_loss: GoalPolicyValues::new(-500, 2.2, -0.5),
            endurance: GoalPolicyValues {
                carbs_percentage: Some(55.0),
                ..GoalPolicyValues::new(100, 1.5, 0.0)
            },
            general_fitness_deficit: GoalPolicyValues::new(-300, 1.7, -0.2),
            general_fitness_maintenance: GoalPolicyValues::new(0, 1.7, 0.0),
            maintenance_fallback: GoalPolicyValues::new(0, 1.6, 0.0),
            male_body_fat_threshold: 20.0,
            female_body_fat_threshold: 25.0,
        }
    }
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            recomposition: GoalPolicyValues::new(-200, 2.2, -0.15),
            strength_preserving_cut: GoalPolicyValues::new(-300, 2.0, -0.25),
            aggressive_loss_threshold_kg: 10.0,
        }
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            max_weekly_change_kg: 1.0,
            min_weekly_change_kg: 0.1,
            slow_progress_min_delta_kg: 2.0,
            dangerous_daily_adjustment_kcal: 1000.0,
            safety_weekly_change_kg: 0.8,
            kcal_per_kg_tissue: KCAL_PER_KG_BODY_TISSUE,
        }
    }
}

impl Default for MacroAllocationConfig {
    fn default() -> Self {
        Self {
            fat_percentage: 27.0,
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            hydration_liters_per_kg: 0.035,
            protein_timing_threshold_g_per_kg: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        NutritionTargetConfig::default().validate().unwrap();
    }

    #[test]
    fn test_tissue_energy_density_matches_shared_constant() {
        let progression = ProgressionConfig::default();
        assert!((progression.kcal_per_kg_tissue - KCAL_PER_KG_BODY_TISSUE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_body_fat_threshold_by_gender() {
        let table = GoalPolicyTable::default();
        assert!((table.body_fat_threshold(Gender::Male) - 20.0).abs() < f64::EPSILON);
        assert!((table.body_fat_threshold(Gender::Female) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_misordered_weekly_thresholds_rejected() {
        let mut config = NutritionTargetConfig::default();
        config.progression.min_weekly_change_kg = 1.5;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_implausible_protein_rejected() {
        let mut config = NutritionTargetConfig::default();
        config.conflicts.recomposition.protein_g_per_kg = 4.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
