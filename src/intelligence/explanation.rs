// ABOUTME: Builds the human-auditable calculation trail for a nutrition target result
// ABOUTME: Substitutes the values actually used upstream into formulas and attaches citations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Explanation Generator
//!
//! This stage derives nothing: every number it prints is passed in from the
//! stage that produced it. Numbers are rendered through [`NumberLocale`] so the
//! numeric result stays locale-independent.

use crate::config::intelligence::{BmrConfig, MacroAllocationConfig};
use crate::formatters::NumberLocale;
use crate::intelligence::goal_policy::GoalSettings;
use crate::intelligence::physiological_constants::{citations, pal};
use fuelplan_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use fuelplan_core::models::{
    AdjustmentKind, CalculationMethod, CalculationSources, Gender, GoalAdjustmentExplanation,
    MacroTargets, TrainingGoal, UserNutritionProfile,
};

/// Literal identifier of the BMR formula
pub const BMR_FORMULA_ID: &str = "mifflin_st_jeor";

/// Values produced by the numeric stages, as used
#[derive(Debug, Clone, Copy)]
pub struct ExplanationInputs<'a> {
    /// Profile the calculation ran for
    pub profile: &'a UserNutritionProfile,
    /// Rounded BMR
    pub bmr: u32,
    /// Rounded TDEE
    pub tdee: u32,
    /// Target calories after adjustment
    pub target_calories: u32,
    /// Effective policy after conflict resolution
    pub settings: &'a GoalSettings,
    /// Allocated macros
    pub macros: &'a MacroTargets,
}

/// Goal to citation table: (goal recommendation, protein recommendation)
const fn goal_sources(goal: TrainingGoal) -> (&'static str, &'static str) {
    match goal {
        TrainingGoal::WeightLoss => (citations::BODY_COMPOSITION_DIETS, citations::PROTEIN_IN_DEFICIT),
        TrainingGoal::MuscleGain => (
            citations::BODY_COMPOSITION_DIETS,
            citations::PROTEIN_AND_EXERCISE,
        ),
        TrainingGoal::Strength
        | TrainingGoal::Endurance
        | TrainingGoal::GeneralFitness
        | TrainingGoal::Unrecognized => (
            citations::ATHLETIC_PERFORMANCE_GUIDELINES,
            citations::PROTEIN_AND_EXERCISE,
        ),
    }
}

/// Build the calculation method record
#[must_use]
pub fn build_calculation_method(
    inputs: &ExplanationInputs<'_>,
    bmr_config: &BmrConfig,
    macro_config: &MacroAllocationConfig,
    locale: NumberLocale,
) -> CalculationMethod {
    let (goal_recommendation, protein_recommendation) =
        goal_sources(inputs.profile.training_goal);

    CalculationMethod {
        bmr_formula: BMR_FORMULA_ID.to_owned(),
        bmr_calculation: describe_bmr(inputs.profile, inputs.bmr, bmr_config, locale),
        pal_description: describe_pal(inputs.profile.pal_factor, locale),
        tdee_calculation: format!(
            "{} kcal x {} = {} kcal",
            locale.format_integer(i64::from(inputs.bmr)),
            locale.format_quantity(inputs.profile.pal_factor, 3),
            locale.format_integer(i64::from(inputs.tdee))
        ),
        goal_adjustment: describe_adjustment(inputs, locale),
        goal_rationale: inputs.settings.rationale().to_owned(),
        protein_rationale: describe_protein(inputs, locale),
        macro_calculation: describe_macros(inputs, macro_config, locale),
        sources: CalculationSources {
            formula: citations::MIFFLIN_ST_JEOR.to_owned(),
            goal_recommendation: goal_recommendation.to_owned(),
            protein_recommendation: protein_recommendation.to_owned(),
        },
    }
}

fn signed_term(value: f64, locale: NumberLocale) -> String {
    let sign = if value < 0.0 { '-' } else { '+' };
    format!("{sign} {}", locale.format_quantity(value.abs(), 2))
}

fn describe_bmr(
    profile: &UserNutritionProfile,
    bmr: u32,
    config: &BmrConfig,
    locale: NumberLocale,
) -> String {
    let gender_constant = match profile.gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    format!(
        "{} x {} kg {} x {} cm {} x {} years {} = {} kcal",
        locale.format_quantity(config.msj_weight_coef, 2),
        locale.format_quantity(profile.weight_kg, 2),
        signed_term(config.msj_height_coef, locale),
        locale.format_quantity(profile.height_cm, 2),
        signed_term(config.msj_age_coef, locale),
        profile.age,
        signed_term(gender_constant, locale),
        locale.format_integer(i64::from(bmr))
    )
}

fn describe_pal(pal_factor: f64, locale: NumberLocale) -> String {
    pal::describe(pal_factor).map_or_else(
        || format!("PAL factor: {}", locale.format_quantity(pal_factor, 3)),
        |description| {
            format!(
                "{description} (PAL {})",
                locale.format_quantity(pal_factor, 3)
            )
        },
    )
}

fn describe_adjustment(
    inputs: &ExplanationInputs<'_>,
    locale: NumberLocale,
) -> GoalAdjustmentExplanation {
    let adjustment = inputs.settings.adjustment_kcal();
    let kind = AdjustmentKind::from_adjustment(adjustment);
    let amount = locale.format_integer(i64::from(adjustment.unsigned_abs()));
    let tdee = locale.format_integer(i64::from(inputs.tdee));
    let target = locale.format_integer(i64::from(inputs.target_calories));

    // The target is floored at zero, so the plain arithmetic only holds above it
    let floored =
        i64::from(inputs.tdee) + i64::from(adjustment) != i64::from(inputs.target_calories);

    let description = match kind {
        AdjustmentKind::Deficit if floored => format!(
            "Deficit of {amount} kcal/day below TDEE: {tdee} - {amount} falls below zero, \
             so the target is floored at {target} kcal"
        ),
        AdjustmentKind::Deficit => {
            format!("Deficit of {amount} kcal/day below TDEE: {tdee} - {amount} = {target} kcal")
        }
        AdjustmentKind::Surplus => {
            format!("Surplus of {amount} kcal/day above TDEE: {tdee} + {amount} = {target} kcal")
        }
        AdjustmentKind::Maintenance => {
            format!("Maintenance: target equals TDEE of {target} kcal")
        }
    };

    GoalAdjustmentExplanation {
        kind,
        kcal_per_day: adjustment,
        description,
    }
}

fn describe_protein(inputs: &ExplanationInputs<'_>, locale: NumberLocale) -> String {
    let macros = inputs.macros;
    let protein_kcal = f64::from(macros.protein_g) * KCAL_PER_GRAM_PROTEIN;

    format!(
        "{} g/kg x {} kg = {} g protein per day ({} kcal, {}% of target calories)",
        locale.format_quantity(macros.protein_per_kg, 2),
        locale.format_quantity(inputs.profile.weight_kg, 2),
        locale.format_integer(i64::from(macros.protein_g)),
        locale.format_quantity(protein_kcal, 0),
        macros.protein_percent
    )
}

fn describe_macros(
    inputs: &ExplanationInputs<'_>,
    config: &MacroAllocationConfig,
    locale: NumberLocale,
) -> String {
    let macros = inputs.macros;
    let target = locale.format_integer(i64::from(inputs.target_calories));
    let protein_kcal = f64::from(macros.protein_g) * KCAL_PER_GRAM_PROTEIN;
    let fat_kcal = f64::from(macros.fat_g) * KCAL_PER_GRAM_FAT;

    let mut text = format!(
        "Fat: {}% of {target} kcal / {} = {} g. Carbohydrates: ({target} - {} - {}) kcal / {} = \
         {} g ({}%)",
        locale.format_quantity(config.fat_percentage, 1),
        locale.format_quantity(KCAL_PER_GRAM_FAT, 0),
        locale.format_integer(i64::from(macros.fat_g)),
        locale.format_quantity(protein_kcal, 0),
        locale.format_quantity(fat_kcal, 0),
        locale.format_quantity(KCAL_PER_GRAM_CARBS, 0),
        locale.format_integer(i64::from(macros.carbs_g)),
        macros.carbs_percent
    );

    if let Some(guideline) = macros.carbs_percentage_guideline {
        text.push_str(&format!(
            ". Goal guideline: {}% of calories from carbohydrates",
            locale.format_quantity(guideline, 1)
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::intelligence::GoalPolicyTable;
    use crate::intelligence::goal_policy::resolve_goal_policy;
    use crate::intelligence::nutrition_calculator::{allocate_macros, calculate_target_calories};

    fn explain(profile: &UserNutritionProfile, locale: NumberLocale) -> CalculationMethod {
        let settings = resolve_goal_policy(profile, &GoalPolicyTable::default());
        let target_calories = calculate_target_calories(2845, settings.adjustment_kcal());
        let macros = allocate_macros(
            profile.weight_kg,
            settings.protein_per_kg(),
            target_calories,
            settings.carbs_percentage(),
            &MacroAllocationConfig::default(),
        );
        let inputs = ExplanationInputs {
            profile,
            bmr: 1649,
            tdee: 2845,
            target_calories,
            settings: &settings,
            macros: &macros,
        };
        build_calculation_method(
            &inputs,
            &BmrConfig::default(),
            &MacroAllocationConfig::default(),
            locale,
        )
    }

    fn male(goal: TrainingGoal) -> UserNutritionProfile {
        UserNutritionProfile::new(Gender::Male, 70.0, 175.0, 30, 1.725, goal)
    }

    #[test]
    fn test_bmr_substitution_uses_inputs() {
        let method = explain(&male(TrainingGoal::Strength), NumberLocale::En);

        assert_eq!(method.bmr_formula, "mifflin_st_jeor");
        assert_eq!(
            method.bmr_calculation,
            "10 x 70 kg + 6.25 x 175 cm - 5 x 30 years + 5 = 1,649 kcal"
        );
        assert_eq!(method.tdee_calculation, "1,649 kcal x 1.725 = 2,845 kcal");
        assert!(method.pal_description.starts_with("Very active"));
    }

    #[test]
    fn test_german_locale_rendering() {
        let method = explain(&male(TrainingGoal::Strength), NumberLocale::De);

        assert!(method.bmr_calculation.contains("6,25 x 175 cm"));
        assert!(method.bmr_calculation.ends_with("1.649 kcal"));
    }

    #[test]
    fn test_unlisted_pal_falls_back() {
        let mut profile = male(TrainingGoal::Strength);
        profile.pal_factor = 1.6;

        let method = explain(&profile, NumberLocale::En);
        assert_eq!(method.pal_description, "PAL factor: 1.6");
    }

    #[test]
    fn test_adjustment_classification() {
        let loss = explain(&male(TrainingGoal::WeightLoss), NumberLocale::En);
        assert_eq!(loss.goal_adjustment.kind, AdjustmentKind::Deficit);
        assert_eq!(loss.goal_adjustment.kcal_per_day, -500);

        let fitness = explain(&male(TrainingGoal::GeneralFitness), NumberLocale::En);
        assert_eq!(fitness.goal_adjustment.kind, AdjustmentKind::Maintenance);
    }

    #[test]
    fn test_floored_target_is_not_shown_as_plain_arithmetic() {
        let profile = UserNutritionProfile::new(
            Gender::Female,
            20.0,
            100.0,
            100,
            1.2,
            TrainingGoal::WeightLoss,
        );
        let settings = resolve_goal_policy(&profile, &GoalPolicyTable::default());
        let macros = allocate_macros(
            profile.weight_kg,
            settings.protein_per_kg(),
            0,
            settings.carbs_percentage(),
            &MacroAllocationConfig::default(),
        );
        let inputs = ExplanationInputs {
            profile: &profile,
            bmr: 164,
            tdee: 197,
            target_calories: 0,
            settings: &settings,
            macros: &macros,
        };
        let method = build_calculation_method(
            &inputs,
            &BmrConfig::default(),
            &MacroAllocationConfig::default(),
            NumberLocale::En,
        );

        let description = &method.goal_adjustment.description;
        assert!(description.contains("floored at 0 kcal"), "{description}");
        assert!(!description.contains("= 0 kcal"));
        assert_eq!(method.goal_adjustment.kcal_per_day, -500);
    }

    #[test]
    fn test_unfloored_deficit_shows_arithmetic() {
        let loss = explain(&male(TrainingGoal::WeightLoss), NumberLocale::En);
        assert_eq!(
            loss.goal_adjustment.description,
            "Deficit of 500 kcal/day below TDEE: 2,845 - 500 = 2,345 kcal"
        );
    }

    #[test]
    fn test_source_table() {
        let loss = explain(&male(TrainingGoal::WeightLoss), NumberLocale::En);
        assert_eq!(loss.sources.formula, citations::MIFFLIN_ST_JEOR);
        assert_eq!(loss.sources.goal_recommendation, citations::BODY_COMPOSITION_DIETS);
        assert_eq!(loss.sources.protein_recommendation, citations::PROTEIN_IN_DEFICIT);

        let gain = explain(&male(TrainingGoal::MuscleGain), NumberLocale::En);
        assert_eq!(gain.sources.goal_recommendation, citations::BODY_COMPOSITION_DIETS);
        assert_eq!(gain.sources.protein_recommendation, citations::PROTEIN_AND_EXERCISE);

        let endurance = explain(&male(TrainingGoal::Endurance), NumberLocale::En);
        assert_eq!(
            endurance.sources.goal_recommendation,
            citations::ATHLETIC_PERFORMANCE_GUIDELINES
        );
        assert!(endurance.macro_calculation.contains("Goal guideline: 55%"));
    }
}
