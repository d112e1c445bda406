// ABOUTME: Energy and macronutrient calculations using peer-reviewed formulas
// ABOUTME: Mifflin-St Jeor BMR, PAL-based TDEE, calorie target, and gram-level macro allocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Nutrition Calculator Module
//!
//! Pure numeric stages of the pipeline. None of these functions validate their
//! inputs: they are total for any finite number and rely on the caller having
//! rejected implausible profiles beforehand.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Jäger, R., et al. (2017). International Society of Sports Nutrition Position Stand:
//!   protein and exercise. *JISSN*, 14, 20.
//!   <https://doi.org/10.1186/s12970-017-0177-8>

use crate::config::intelligence::{BmrConfig, MacroAllocationConfig};
use fuelplan_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use fuelplan_core::models::{Gender, MacroTargets};

/// Round to the nearest whole number, clamping negatives (and NaN) to zero
#[must_use]
pub(crate) fn round_non_negative(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Unrounded Mifflin-St Jeor estimate
#[must_use]
pub fn mifflin_st_jeor_raw(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// The result is rounded to the nearest kcal.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> u32 {
    round_non_negative(mifflin_st_jeor_raw(
        weight_kg, height_cm, age, gender, config,
    ))
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = round(BMR x PAL)
///
/// The PAL factor is expected in 1.2-2.5; a zero or negative factor is a caller error.
#[must_use]
pub fn calculate_tdee(bmr: u32, pal_factor: f64) -> u32 {
    round_non_negative(f64::from(bmr) * pal_factor)
}

/// Apply the goal adjustment to TDEE, never going below zero
#[must_use]
pub fn calculate_target_calories(tdee: u32, adjustment_kcal: i32) -> u32 {
    let target = i64::from(tdee) + i64::from(adjustment_kcal);
    u32::try_from(target.max(0)).unwrap_or(u32::MAX)
}

/// Share of `target_calories` supplied by `grams` of a macronutrient, in whole percent
fn energy_share_percent(grams: u32, kcal_per_gram: f64, target_calories: u32) -> u32 {
    if target_calories == 0 {
        return 0;
    }
    round_non_negative(f64::from(grams) * kcal_per_gram / f64::from(target_calories) * 100.0)
}

/// Allocate target calories to protein, fat and carbohydrates
///
/// 1. Protein is authoritative: `round(weight_kg x protein_per_kg)`
/// 2. Fat takes a fixed share of calories: `round(target x fat% / 9)`
/// 3. Carbohydrates absorb the remainder: `round((target - 4P - 9F) / 4)`, floored at zero
///
/// Percentages are recomputed from the rounded grams. `carbs_guideline` is carried
/// through for display only and does not influence the allocation.
#[must_use]
pub fn allocate_macros(
    weight_kg: f64,
    protein_per_kg: f64,
    target_calories: u32,
    carbs_guideline: Option<f64>,
    config: &MacroAllocationConfig,
) -> MacroTargets {
    let target = f64::from(target_calories);

    let protein_g = round_non_negative(weight_kg * protein_per_kg);
    let fat_g = round_non_negative(target * config.fat_percentage / 100.0 / KCAL_PER_GRAM_FAT);

    let remaining_kcal = f64::from(fat_g).mul_add(
        -KCAL_PER_GRAM_FAT,
        f64::from(protein_g).mul_add(-KCAL_PER_GRAM_PROTEIN, target),
    );
    let carbs_g = round_non_negative(remaining_kcal / KCAL_PER_GRAM_CARBS);

    MacroTargets {
        protein_g,
        carbs_g,
        fat_g,
        protein_percent: energy_share_percent(protein_g, KCAL_PER_GRAM_PROTEIN, target_calories),
        carbs_percent: energy_share_percent(carbs_g, KCAL_PER_GRAM_CARBS, target_calories),
        fat_percent: energy_share_percent(fat_g, KCAL_PER_GRAM_FAT, target_calories),
        protein_per_kg,
        carbs_percentage_guideline: carbs_guideline,
    }
}
