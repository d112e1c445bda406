// ABOUTME: Core data models for the fuelplan nutrition target engine
// ABOUTME: Re-exports the input profile and the calculation result records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! # Data Models
//!
//! - `UserNutritionProfile`: the immutable input value object
//! - `CalorieCalculationResult`: the engine's only externally visible artifact
//!
//! Both are plain serializable values with no identity or timestamps, so a
//! persistence layer can map their fields onto storage columns one to one.

mod profile;
mod targets;

pub use profile::{Gender, TrainingGoal, UserNutritionProfile};
pub use targets::{
    AdjustmentKind, CalculationMethod, CalculationSources, CalorieCalculationResult,
    GoalAdjustmentExplanation, MacroTargets, ProgressionEstimate,
};
