// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, reference profiles, and a fixed evaluation date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]

//! Shared test utilities for `fuelplan`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use chrono::NaiveDate;
use fuelplan::config::NutritionTargetConfig;
use fuelplan::intelligence::NutritionTargetEngine;
use fuelplan::models::{CalorieCalculationResult, Gender, TrainingGoal, UserNutritionProfile};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed "today" so date-dependent results are reproducible
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Engine with default configuration, independent of the environment
pub fn test_engine() -> NutritionTargetEngine {
    init_test_logging();
    NutritionTargetEngine::with_config(NutritionTargetConfig::default())
}

/// Run the default engine on the fixed date
pub fn compute(profile: &UserNutritionProfile) -> CalorieCalculationResult {
    test_engine().compute_on(profile, test_today())
}

/// Reference male: 70 kg, 175 cm, 30 years
pub fn reference_male(pal_factor: f64, goal: TrainingGoal) -> UserNutritionProfile {
    UserNutritionProfile::new(Gender::Male, 70.0, 175.0, 30, pal_factor, goal)
}

/// Reference female: 60 kg, 165 cm, 25 years
pub fn reference_female(pal_factor: f64, goal: TrainingGoal) -> UserNutritionProfile {
    UserNutritionProfile::new(Gender::Female, 60.0, 165.0, 25, pal_factor, goal)
}

/// Moderately active 80 kg male with the given goal
pub fn athlete(goal: TrainingGoal) -> UserNutritionProfile {
    UserNutritionProfile::new(Gender::Male, 80.0, 180.0, 30, 1.55, goal)
}

/// Every goal the engine knows, in declaration order
pub const ALL_GOALS: [TrainingGoal; 6] = [
    TrainingGoal::Strength,
    TrainingGoal::MuscleGain,
    TrainingGoal::WeightLoss,
    TrainingGoal::Endurance,
    TrainingGoal::GeneralFitness,
    TrainingGoal::Unrecognized,
];

/// Energy supplied by the allocated macros
pub fn macro_energy(result: &CalorieCalculationResult) -> u32 {
    result.macros.protein_g * 4 + result.macros.carbs_g * 4 + result.macros.fat_g * 9
}
