// ABOUTME: User nutrition profile model consumed by the nutrition target engine
// ABOUTME: Gender, TrainingGoal, and the UserNutritionProfile value object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the BMR equation and body-fat thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal BMR constant)
    Male,
    /// Female (-161 kcal BMR constant)
    Female,
}

impl Gender {
    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}', expected 'male' or 'female'"
            ))
            .with_field("gender")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training goal that selects the calorie and protein policy
///
/// Unknown goal identifiers deserialize to [`TrainingGoal::Unrecognized`], which the
/// engine treats as plain maintenance rather than failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    /// Maximal strength development
    Strength,
    /// Hypertrophy (caloric surplus)
    MuscleGain,
    /// Fat loss (caloric deficit)
    WeightLoss,
    /// Endurance performance (carbohydrate emphasis)
    Endurance,
    /// General fitness, adaptive to body composition
    GeneralFitness,
    /// Any goal identifier the engine does not know
    #[serde(other)]
    Unrecognized,
}

impl TrainingGoal {
    /// Parse a goal identifier, mapping anything unknown to `Unrecognized`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "strength" => Self::Strength,
            "muscle_gain" => Self::MuscleGain,
            "weight_loss" => Self::WeightLoss,
            "endurance" => Self::Endurance,
            "general_fitness" => Self::GeneralFitness,
            _ => Self::Unrecognized,
        }
    }

    /// Stable snake_case identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::MuscleGain => "muscle_gain",
            Self::WeightLoss => "weight_loss",
            Self::Endurance => "endurance",
            Self::GeneralFitness => "general_fitness",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physiological profile and goal of a single user
///
/// An immutable value object: no identity, no timestamps. Range checks are the
/// caller's responsibility; the engine assumes plausible values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNutritionProfile {
    /// Biological sex
    pub gender: Gender,
    /// Current body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age: u32,
    /// Physical activity level multiplier (1.2-2.5)
    pub pal_factor: f64,
    /// Training goal
    pub training_goal: TrainingGoal,
    /// Desired body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// Date by which the target weight should be reached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    /// Body fat percentage (3-60)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
}

impl UserNutritionProfile {
    /// Create a profile with the required fields and no optional targets
    #[must_use]
    pub const fn new(
        gender: Gender,
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        pal_factor: f64,
        training_goal: TrainingGoal,
    ) -> Self {
        Self {
            gender,
            weight_kg,
            height_cm,
            age,
            pal_factor,
            training_goal,
            target_weight_kg: None,
            target_date: None,
            body_fat_percentage: None,
        }
    }

    /// Set the target weight
    #[must_use]
    pub fn with_target_weight(mut self, target_weight_kg: f64) -> Self {
        self.target_weight_kg = Some(target_weight_kg);
        self
    }

    /// Set the target date
    #[must_use]
    pub fn with_target_date(mut self, target_date: NaiveDate) -> Self {
        self.target_date = Some(target_date);
        self
    }

    /// Set the body fat percentage
    #[must_use]
    pub fn with_body_fat(mut self, body_fat_percentage: f64) -> Self {
        self.body_fat_percentage = Some(body_fat_percentage);
        self
    }

    /// Signed distance to the target weight (`target - current`), if a target is set
    #[must_use]
    pub fn weight_delta_kg(&self) -> Option<f64> {
        self.target_weight_kg.map(|target| target - self.weight_kg)
    }
}
