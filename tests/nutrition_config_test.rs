// ABOUTME: Tests for nutrition engine configuration loading and environment overrides
// ABOUTME: Validates defaults, FUELPLAN_* overrides, rejection of invalid values, and engine wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{athlete, test_today};
use fuelplan::config::{ConfigError, NutritionTargetConfig};
use fuelplan::formatters::NumberLocale;
use fuelplan::intelligence::NutritionTargetEngine;
use fuelplan::models::TrainingGoal;
use serial_test::serial;
use std::env;

const OVERRIDE_VARS: [&str; 4] = [
    "FUELPLAN_WEIGHT_LOSS_ADJUSTMENT_KCAL",
    "FUELPLAN_FAT_PERCENTAGE",
    "FUELPLAN_NUMBER_LOCALE",
    "FUELPLAN_MIN_WEEKLY_CHANGE_KG",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();

    let config = NutritionTargetConfig::load().unwrap();
    assert_eq!(config, NutritionTargetConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_flow_into_results() {
    clear_overrides();
    env::set_var("FUELPLAN_WEIGHT_LOSS_ADJUSTMENT_KCAL", "-400");
    env::set_var("FUELPLAN_NUMBER_LOCALE", "de");

    let config = NutritionTargetConfig::load().unwrap();
    clear_overrides();

    assert_eq!(config.goal_policies.weight_loss.adjustment_kcal, -400);
    assert_eq!(config.explanation.locale, NumberLocale::De);

    let profile = athlete(TrainingGoal::WeightLoss);
    let result = NutritionTargetEngine::with_config(config).compute_on(&profile, test_today());
    assert_eq!(result.calorie_adjustment, -400);
    assert!(result.calculation_method.tdee_calculation.contains("1,55"));
}

#[test]
#[serial]
fn test_compute_ignores_environment_overrides() {
    clear_overrides();
    env::set_var("FUELPLAN_WEIGHT_LOSS_ADJUSTMENT_KCAL", "-900");

    let result = fuelplan::compute(&athlete(TrainingGoal::WeightLoss));
    let engine = NutritionTargetEngine::new();
    clear_overrides();

    assert_eq!(result.calorie_adjustment, -500);
    assert_eq!(engine.config(), &NutritionTargetConfig::default());
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    clear_overrides();
    env::set_var("FUELPLAN_FAT_PERCENTAGE", "a lot");

    let result = NutritionTargetConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_overrides();
    env::set_var("FUELPLAN_FAT_PERCENTAGE", "60");

    let result = NutritionTargetConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_misordered_override_fails_validation() {
    clear_overrides();
    env::set_var("FUELPLAN_MIN_WEEKLY_CHANGE_KG", "1.5");

    let result = NutritionTargetConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_custom_fat_share_changes_allocation() {
    let mut config = NutritionTargetConfig::default();
    config.macronutrients.fat_percentage = 30.0;
    config.validate().unwrap();

    let result =
        NutritionTargetEngine::with_config(config).compute_on(&athlete(TrainingGoal::Strength), test_today());
    assert!((29..=31).contains(&result.macros.fat_percent));
}
