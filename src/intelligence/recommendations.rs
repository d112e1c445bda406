// ABOUTME: Composes the ordered recommendation list from conflict output and the final policy
// ABOUTME: Adds protein timing, hydration, carb timing, deficit and muscle gain tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Recommendation Composer
//!
//! Order is fixed and the list is not deduplicated: conflict recommendations,
//! then generated tips, then the policy's own additional information.

use crate::config::intelligence::RecommendationConfig;
use crate::intelligence::goal_policy::GoalSettings;
use fuelplan_core::models::{TrainingGoal, UserNutritionProfile};

/// Concatenate conflict recommendations with goal and profile specific tips
#[must_use]
pub fn compose_recommendations(
    conflict_recommendations: &[String],
    profile: &UserNutritionProfile,
    settings: &GoalSettings,
    config: &RecommendationConfig,
) -> Vec<String> {
    let mut recommendations = conflict_recommendations.to_vec();

    if settings.protein_per_kg() >= config.protein_timing_threshold_g_per_kg {
        recommendations.push(
            "Spread protein over 4-5 meals of 20-40 g each to maximize muscle protein synthesis."
                .to_owned(),
        );
    }

    let water_liters = profile.weight_kg * config.hydration_liters_per_kg;
    recommendations.push(format!(
        "Drink about {water_liters:.1} liters of water per day, plus extra to replace sweat \
         losses during training."
    ));

    if profile.training_goal == TrainingGoal::Endurance {
        recommendations.push(
            "Time carbohydrates around training: top up glycogen before long sessions and \
             refuel within an hour afterwards."
                .to_owned(),
        );
    }

    if settings.adjustment_kcal() < 0 {
        recommendations.push(
            "Weigh yourself weekly at the same time of day and track the trend, not single \
             readings."
                .to_owned(),
        );
        recommendations.push(
            "Expect weight loss to be non-linear: water retention can hide fat loss for a week \
             or two."
                .to_owned(),
        );
    }

    if profile.training_goal == TrainingGoal::MuscleGain {
        recommendations.push(
            "Apply progressive overload: add weight or repetitions over time to give muscles a \
             reason to grow."
                .to_owned(),
        );
        recommendations.push(
            "Natural muscle gain is slow: 0.25-0.5 kg per week is a realistic rate for most \
             trained lifters."
                .to_owned(),
        );
    }

    if let Some(info) = settings.additional_info() {
        recommendations.push(info.to_owned());
    }

    recommendations
}
