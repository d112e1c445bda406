// ABOUTME: Main library entry point for the fuelplan nutrition target engine
// ABOUTME: Computes calorie and macronutrient targets with conflict checks and an audit trail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Fuelplan
//!
//! A deterministic, side-effect-free engine that turns a physiological profile
//! and training goal into daily energy and macronutrient targets.
//!
//! ## Features
//!
//! - **Mifflin-St Jeor BMR** and PAL-based TDEE
//! - **Goal policies** with evidence-linked rationale, including adaptive general fitness
//! - **Conflict detection** between training goal and target weight
//! - **Timeline validation** of target dates against safe rates of change
//! - **Auditable explanation** of every number, with citations
//!
//! ## Architecture
//!
//! - **`fuelplan_core`**: errors, domain models, energy constants
//! - **Intelligence**: one pure function per pipeline stage plus the engine
//! - **Config**: tunable policy tables with environment overrides
//! - **Formatters**: locale-aware number rendering and text/JSON output
//!
//! ## Example Usage
//!
//! ```rust
//! use fuelplan::models::{Gender, TrainingGoal, UserNutritionProfile};
//!
//! let profile = UserNutritionProfile::new(
//!     Gender::Male,
//!     80.0,
//!     180.0,
//!     30,
//!     1.55,
//!     TrainingGoal::WeightLoss,
//! )
//! .with_target_weight(75.0);
//!
//! let result = fuelplan::compute(&profile);
//! assert_eq!(result.calorie_adjustment, -500);
//! assert_eq!(result.progression.weeks_to_goal, Some(10));
//! ```

/// Configuration management for the engine's policy tables
pub mod config;

/// Locale-aware number rendering and output formats
pub mod formatters;

/// Nutrition target computation pipeline
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use fuelplan_core::{constants, errors, models};

use fuelplan_core::models::{CalorieCalculationResult, UserNutritionProfile};
use intelligence::NutritionTargetEngine;

/// Compute nutrition targets for a profile using the default configuration and today's date
///
/// Never fails: the profile is assumed to be within the plausible ranges checked by
/// [`ProfileValidator`](intelligence::ProfileValidator).
#[must_use]
pub fn compute(profile: &UserNutritionProfile) -> CalorieCalculationResult {
    NutritionTargetEngine::new().compute(profile)
}
