// ABOUTME: Nutrition intelligence module wiring the target computation pipeline stages
// ABOUTME: Re-exports the engine, stage functions, and profile validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! # Intelligence Module
//!
//! Deterministic nutrition target computation. Each pipeline stage lives in its
//! own module as a pure function; [`NutritionTargetEngine`] runs them in order.

/// Conflict detection between training goal and target weight
pub mod conflict_resolver;
/// Calculation audit trail
pub mod explanation;
/// Goal to policy resolution
pub mod goal_policy;
/// BMR, TDEE and macro allocation
pub mod nutrition_calculator;
/// Pipeline orchestration
pub mod nutrition_engine;
/// PAL descriptions and citations
pub mod physiological_constants;
/// Caller-side profile range checks
pub mod profile_validation;
/// Timeline estimation and target date feasibility
pub mod progression_validator;
/// Recommendation list composition
pub mod recommendations;

pub use conflict_resolver::{analyze_conflicts, ConflictAnalysis};
pub use explanation::{build_calculation_method, ExplanationInputs, BMR_FORMULA_ID};
pub use goal_policy::{resolve_goal_policy, GoalSettings, PolicyOrigin};
pub use nutrition_calculator::{
    allocate_macros, calculate_bmr, calculate_target_calories, calculate_tdee,
};
pub use nutrition_engine::NutritionTargetEngine;
pub use profile_validation::ProfileValidator;
pub use progression_validator::{validate_progression, ProgressionAssessment};
pub use recommendations::compose_recommendations;
