// ABOUTME: Goal policy resolution mapping a training goal to calorie, protein and rate targets
// ABOUTME: Produces immutable GoalSettings bundles with provenance and evidence-linked rationale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Goal Policy Resolver
//!
//! Every training goal maps to one row of [`GoalPolicyTable`]. General fitness is
//! the only adaptive goal: above the gender-specific body fat threshold it
//! becomes a moderate deficit, otherwise (or without body fat data) maintenance.
//!
//! A resolved [`GoalSettings`] is never edited afterwards. The conflict resolver
//! replaces it with a new bundle whose [`PolicyOrigin`] records why.

use crate::config::intelligence::{GoalPolicyTable, GoalPolicyValues};
use crate::intelligence::physiological_constants::citations;
use fuelplan_core::models::{TrainingGoal, UserNutritionProfile};
use serde::Serialize;
use std::fmt;

/// Where a policy bundle came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "goal")]
pub enum PolicyOrigin {
    /// Looked up from the goal policy table
    Goal(TrainingGoal),
    /// Muscle gain replaced because the target weight is below current weight
    BodyRecomposition,
    /// Strength replaced because a large weight loss is targeted
    StrengthPreservingCut,
}

impl fmt::Display for PolicyOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Goal(goal) => write!(f, "goal:{goal}"),
            Self::BodyRecomposition => f.write_str("body_recomposition"),
            Self::StrengthPreservingCut => f.write_str("strength_preserving_cut"),
        }
    }
}

/// Immutable policy bundle consumed by the later pipeline stages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalSettings {
    origin: PolicyOrigin,
    adjustment_kcal: i32,
    protein_per_kg: f64,
    expected_weekly_change_kg: f64,
    carbs_percentage: Option<f64>,
    rationale: String,
    additional_info: Option<String>,
}

impl GoalSettings {
    /// Build a bundle from a configuration row
    #[must_use]
    pub fn from_values(
        origin: PolicyOrigin,
        values: &GoalPolicyValues,
        rationale: impl Into<String>,
        additional_info: Option<String>,
    ) -> Self {
        Self {
            origin,
            adjustment_kcal: values.adjustment_kcal,
            protein_per_kg: values.protein_g_per_kg,
            expected_weekly_change_kg: values.expected_weekly_change_kg,
            carbs_percentage: values.carbs_percentage,
            rationale: rationale.into(),
            additional_info,
        }
    }

    /// Provenance of this bundle
    #[must_use]
    pub const fn origin(&self) -> PolicyOrigin {
        self.origin
    }

    /// Signed daily calorie delta from TDEE
    #[must_use]
    pub const fn adjustment_kcal(&self) -> i32 {
        self.adjustment_kcal
    }

    /// Protein density in g per kg body weight
    #[must_use]
    pub const fn protein_per_kg(&self) -> f64 {
        self.protein_per_kg
    }

    /// Signed expected weekly weight change in kg
    #[must_use]
    pub const fn expected_weekly_change_kg(&self) -> f64 {
        self.expected_weekly_change_kg
    }

    /// Recommended carbohydrate share of calories, informational only
    #[must_use]
    pub const fn carbs_percentage(&self) -> Option<f64> {
        self.carbs_percentage
    }

    /// Why this policy applies, with citations
    #[must_use]
    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    /// Extra guidance surfaced as a final recommendation
    #[must_use]
    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info.as_deref()
    }

    /// Whether this bundle came from the conflict resolver rather than the goal table
    #[must_use]
    pub const fn is_override(&self) -> bool {
        !matches!(self.origin, PolicyOrigin::Goal(_))
    }
}

/// Resolve the policy bundle for a profile's training goal
#[must_use]
pub fn resolve_goal_policy(
    profile: &UserNutritionProfile,
    policies: &GoalPolicyTable,
) -> GoalSettings {
    let goal = profile.training_goal;
    let origin = PolicyOrigin::Goal(goal);

    match goal {
        TrainingGoal::Strength => {
            let row = &policies.strength;
            GoalSettings::from_values(
                origin,
                row,
                format!(
                    "A small surplus of {:+} kcal/day supports recovery and neural adaptation \
                     without unnecessary fat gain; {} g/kg protein sustains strength training \
                     ({}).",
                    row.adjustment_kcal,
                    row.protein_g_per_kg,
                    citations::ATHLETIC_PERFORMANCE_GUIDELINES
                ),
                None,
            )
        }
        TrainingGoal::MuscleGain => {
            let row = &policies.muscle_gain;
            GoalSettings::from_values(
                origin,
                row,
                format!(
                    "A surplus of {:+} kcal/day provides the energy required for muscle protein \
                     synthesis while limiting fat gain to a lean bulk ({}); {} g/kg protein \
                     maximizes the hypertrophic response ({}).",
                    row.adjustment_kcal,
                    citations::OFF_SEASON_SURPLUS,
                    row.protein_g_per_kg,
                    citations::PROTEIN_AND_EXERCISE
                ),
                None,
            )
        }
        TrainingGoal::WeightLoss => {
            let row = &policies.weight_loss;
            GoalSettings::from_values(
                origin,
                row,
                format!(
                    "A deficit of {} kcal/day targets roughly {} kg per week, a rate that \
                     preserves lean mass and performance ({}); {} g/kg protein protects muscle \
                     during energy restriction ({}).",
                    row.adjustment_kcal.unsigned_abs(),
                    row.expected_weekly_change_kg.abs(),
                    citations::WEIGHT_LOSS_RATE,
                    row.protein_g_per_kg,
                    citations::PROTEIN_IN_DEFICIT
                ),
                None,
            )
        }
        TrainingGoal::Endurance => {
            let row = &policies.endurance;
            let additional_info = row.carbs_percentage.map(|carbs| {
                format!(
                    "Endurance training relies on glycogen: aim for about {carbs}% of calories \
                     from carbohydrates on heavy training days ({}).",
                    citations::CARBOHYDRATES_FOR_TRAINING
                )
            });
            GoalSettings::from_values(
                origin,
                row,
                format!(
                    "A slight surplus of {:+} kcal/day covers the energy cost of high training \
                     volume; {} g/kg protein supports repair of endurance-trained muscle ({}).",
                    row.adjustment_kcal,
                    row.protein_g_per_kg,
                    citations::ATHLETIC_PERFORMANCE_GUIDELINES
                ),
                additional_info,
            )
        }
        TrainingGoal::GeneralFitness => resolve_general_fitness(profile, policies, origin),
        TrainingGoal::Unrecognized => {
            let row = &policies.maintenance_fallback;
            GoalSettings::from_values(
                origin,
                row,
                format!(
                    "No specific goal was recognized, so calories are set to maintenance with \
                     {} g/kg protein ({}).",
                    row.protein_g_per_kg,
                    citations::PROTEIN_AND_EXERCISE
                ),
                None,
            )
        }
    }
}

/// General fitness adapts to body composition; it never guesses without body fat data
fn resolve_general_fitness(
    profile: &UserNutritionProfile,
    policies: &GoalPolicyTable,
    origin: PolicyOrigin,
) -> GoalSettings {
    let threshold = policies.body_fat_threshold(profile.gender);

    match profile.body_fat_percentage {
        Some(body_fat) if body_fat > threshold => {
            let row = &policies.general_fitness_deficit;
            GoalSettings::from_values(
                origin,
                row,
                format!(
                    "A moderate deficit of {} kcal/day gradually improves body composition \
                     while keeping training quality high ({}).",
                    row.adjustment_kcal.unsigned_abs(),
                    citations::BODY_COMPOSITION_DIETS
                ),
                Some(format!(
                    "Body fat of {body_fat}% is above the {threshold}% reference for {}, \
                     so a moderate deficit is applied.",
                    profile.gender
                )),
            )
        }
        _ => {
            let row = &policies.general_fitness_maintenance;
            GoalSettings::from_values(
                origin,
                row,
                format!(
                    "Maintenance calories support consistent training and overall health; \
                     {} g/kg protein covers the needs of regular exercise ({}).",
                    row.protein_g_per_kg,
                    citations::ATHLETIC_PERFORMANCE_GUIDELINES
                ),
                None,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuelplan_core::models::Gender;

    fn profile(goal: TrainingGoal) -> UserNutritionProfile {
        UserNutritionProfile::new(Gender::Male, 80.0, 180.0, 30, 1.55, goal)
    }

    #[test]
    fn test_fixed_goal_rows() {
        let table = GoalPolicyTable::default();

        let strength = resolve_goal_policy(&profile(TrainingGoal::Strength), &table);
        assert_eq!(strength.adjustment_kcal(), 250);
        assert!((strength.protein_per_kg() - 1.9).abs() < f64::EPSILON);

        let loss = resolve_goal_policy(&profile(TrainingGoal::WeightLoss), &table);
        assert_eq!(loss.adjustment_kcal(), -500);
        assert!(loss.rationale().contains(citations::PROTEIN_IN_DEFICIT));
        assert_eq!(loss.origin(), PolicyOrigin::Goal(TrainingGoal::WeightLoss));
        assert!(!loss.is_override());
    }

    #[test]
    fn test_endurance_carries_carb_guideline() {
        let settings =
            resolve_goal_policy(&profile(TrainingGoal::Endurance), &GoalPolicyTable::default());

        assert_eq!(settings.carbs_percentage(), Some(55.0));
        assert!(settings.additional_info().unwrap().contains("55%"));
    }

    #[test]
    fn test_general_fitness_adapts_to_body_fat() {
        let table = GoalPolicyTable::default();
        let base = profile(TrainingGoal::GeneralFitness);

        let lean = resolve_goal_policy(&base.clone().with_body_fat(18.0), &table);
        assert_eq!(lean.adjustment_kcal(), 0);

        let above = resolve_goal_policy(&base.clone().with_body_fat(24.0), &table);
        assert_eq!(above.adjustment_kcal(), -300);
        assert!((above.expected_weekly_change_kg() + 0.2).abs() < f64::EPSILON);
        assert!(above.additional_info().is_some());

        let unknown = resolve_goal_policy(&base, &table);
        assert_eq!(unknown.adjustment_kcal(), 0);
    }

    #[test]
    fn test_general_fitness_female_threshold() {
        let table = GoalPolicyTable::default();
        let female = UserNutritionProfile::new(
            Gender::Female,
            65.0,
            168.0,
            35,
            1.375,
            TrainingGoal::GeneralFitness,
        );

        let at_threshold = resolve_goal_policy(&female.clone().with_body_fat(25.0), &table);
        assert_eq!(at_threshold.adjustment_kcal(), 0);

        let above = resolve_goal_policy(&female.with_body_fat(26.5), &table);
        assert_eq!(above.adjustment_kcal(), -300);
    }

    #[test]
    fn test_unrecognized_goal_falls_back_to_maintenance() {
        let settings = resolve_goal_policy(
            &profile(TrainingGoal::Unrecognized),
            &GoalPolicyTable::default(),
        );

        assert_eq!(settings.adjustment_kcal(), 0);
        assert!((settings.protein_per_kg() - 1.6).abs() < f64::EPSILON);
        assert!(settings.expected_weekly_change_kg().abs() < f64::EPSILON);
    }
}
