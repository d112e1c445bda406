// ABOUTME: Calculation result models produced by the nutrition target engine
// ABOUTME: Energy targets, macro targets, progression estimate, and the audit trail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gram-level macronutrient targets with their share of target calories
///
/// Percentages are derived from the rounded gram values, so grams and
/// percentages are always mutually consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Daily protein (grams)
    pub protein_g: u32,
    /// Daily carbohydrates (grams)
    pub carbs_g: u32,
    /// Daily fat (grams)
    pub fat_g: u32,
    /// Protein share of target calories (percent)
    pub protein_percent: u32,
    /// Carbohydrate share of target calories (percent)
    pub carbs_percent: u32,
    /// Fat share of target calories (percent)
    pub fat_percent: u32,
    /// Protein density used (g per kg body weight)
    pub protein_per_kg: f64,
    /// Carbohydrate share recommended by the goal policy, if any
    ///
    /// Informational only: the gram allocation gives carbohydrates the remainder
    /// after protein and fat, so `carbs_percent` may differ from this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_percentage_guideline: Option<f64>,
}

/// Projected path from current weight to target weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionEstimate {
    /// Expected weekly body weight change under the effective policy (kg)
    pub expected_weekly_change_kg: f64,
    /// Whole weeks until the target weight is reached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks_to_goal: Option<u32>,
    /// Projected date the target weight is reached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_target_date: Option<NaiveDate>,
}

/// Direction of the calorie adjustment relative to TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Eating below TDEE
    Deficit,
    /// Eating above TDEE
    Surplus,
    /// Eating at TDEE
    Maintenance,
}

impl AdjustmentKind {
    /// Classify a signed daily adjustment by its sign
    #[must_use]
    pub const fn from_adjustment(adjustment_kcal: i32) -> Self {
        if adjustment_kcal < 0 {
            Self::Deficit
        } else if adjustment_kcal > 0 {
            Self::Surplus
        } else {
            Self::Maintenance
        }
    }
}

/// Explanation of the goal-driven calorie adjustment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalAdjustmentExplanation {
    /// Deficit, surplus, or maintenance
    pub kind: AdjustmentKind,
    /// Signed daily adjustment applied to TDEE (kcal)
    pub kcal_per_day: i32,
    /// Human-readable description of the adjustment
    pub description: String,
}

/// Literal citations backing the calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationSources {
    /// Citation for the BMR formula
    pub formula: String,
    /// Citation for the goal-specific calorie policy
    pub goal_recommendation: String,
    /// Citation for the protein density
    pub protein_recommendation: String,
}

/// Human-auditable trace of how every number in the result was derived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationMethod {
    /// BMR formula identifier (`mifflin_st_jeor`)
    pub bmr_formula: String,
    /// The BMR formula with the actual inputs substituted
    pub bmr_calculation: String,
    /// Description of the PAL factor
    pub pal_description: String,
    /// The TDEE multiplication with the actual values substituted
    pub tdee_calculation: String,
    /// Goal adjustment classification
    pub goal_adjustment: GoalAdjustmentExplanation,
    /// Rationale of the effective goal policy
    pub goal_rationale: String,
    /// Protein density and resulting daily protein
    pub protein_rationale: String,
    /// Fat share and carbohydrate remainder
    pub macro_calculation: String,
    /// Citations
    pub sources: CalculationSources,
}

/// Complete output of one engine invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieCalculationResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr: u32,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: u32,
    /// Daily calorie target (kcal/day)
    pub target_calories: u32,
    /// Signed adjustment applied to TDEE (kcal/day)
    pub calorie_adjustment: i32,
    /// Macronutrient targets
    pub macros: MacroTargets,
    /// Progression toward the target weight
    pub progression: ProgressionEstimate,
    /// Warnings in pipeline stage order
    pub warnings: Vec<String>,
    /// Recommendations in pipeline stage order; may contain repeats
    pub recommendations: Vec<String>,
    /// Whether the goal conflicted with the target weight
    pub has_conflict: bool,
    /// Audit trail
    pub calculation_method: CalculationMethod,
}
