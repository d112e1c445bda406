// ABOUTME: Configuration management module for the nutrition target engine
// ABOUTME: Re-exports the layered nutrition configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors
//! Configuration module for fuelplan
//!
//! - **Intelligence**: goal policies, conflict overrides, progression thresholds,
//!   macro allocation, and explanation rendering for the nutrition engine

/// Nutrition engine configuration and loading
pub mod intelligence;

pub use intelligence::{ConfigError, NutritionTargetConfig};
