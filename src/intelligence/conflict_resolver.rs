// ABOUTME: Detects physiologically inconsistent goal and target weight combinations
// ABOUTME: Applies a fixed-order rule table that may replace the goal policy wholesale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Conflict Detector / Resolver
//!
//! Rules are evaluated in table order against `delta = target_weight - weight`.
//! Every matching rule contributes its messages; when more than one rule supplies
//! a replacement policy, the last one wins.

use crate::config::intelligence::ConflictConfig;
use crate::intelligence::goal_policy::{GoalSettings, PolicyOrigin};
use crate::intelligence::physiological_constants::citations;
use fuelplan_core::models::{TrainingGoal, UserNutritionProfile};
use tracing::warn;

/// Outcome of conflict detection for one profile
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConflictAnalysis {
    /// Whether any rule matched
    pub has_conflict: bool,
    /// Warnings in rule order
    pub warnings: Vec<String>,
    /// Recommendations in rule order
    pub recommendations: Vec<String>,
    /// Replacement policy, if a rule supplied one
    pub adjusted_settings: Option<GoalSettings>,
}

impl ConflictAnalysis {
    /// Policy the downstream stages should use
    #[must_use]
    pub fn effective_settings<'a>(&'a self, resolved: &'a GoalSettings) -> &'a GoalSettings {
        self.adjusted_settings.as_ref().unwrap_or(resolved)
    }
}

/// Messages and optional override contributed by one matching rule
struct RuleOutcome {
    warnings: Vec<String>,
    recommendations: Vec<String>,
    replacement: Option<GoalSettings>,
}

/// One row of the conflict table
struct ConflictRule {
    name: &'static str,
    matches: fn(TrainingGoal, f64, &ConflictConfig) -> bool,
    resolve: fn(f64, &ConflictConfig) -> RuleOutcome,
}

const CONFLICT_RULES: &[ConflictRule] = &[
    ConflictRule {
        name: "recomposition",
        matches: |goal, delta, _| goal == TrainingGoal::MuscleGain && delta < 0.0,
        resolve: recomposition_outcome,
    },
    ConflictRule {
        name: "inverted_weight_loss",
        matches: |goal, delta, _| goal == TrainingGoal::WeightLoss && delta > 0.0,
        resolve: inverted_weight_loss_outcome,
    },
    ConflictRule {
        name: "aggressive_loss_with_strength",
        matches: |goal, delta, config| {
            goal == TrainingGoal::Strength && delta < -config.aggressive_loss_threshold_kg
        },
        resolve: strength_preserving_cut_outcome,
    },
];

fn recomposition_outcome(delta: f64, config: &ConflictConfig) -> RuleOutcome {
    let row = &config.recomposition;
    let rationale = format!(
        "Muscle gain with a lower target weight calls for body recomposition: a small deficit \
         of {} kcal/day with {} g/kg protein lets trained individuals lose fat while building \
         or retaining muscle ({}).",
        row.adjustment_kcal.unsigned_abs(),
        row.protein_g_per_kg,
        citations::BODY_RECOMPOSITION
    );

    RuleOutcome {
        warnings: Vec::new(),
        recommendations: vec![
            format!(
                "Your target weight is {:.1} kg below your current weight while your goal is \
                 muscle gain. The plan uses body recomposition instead: a small deficit with \
                 high protein and continued heavy resistance training.",
                delta.abs()
            ),
            "Alternatively, build muscle first with a lean surplus and then run a dedicated \
             cutting phase to reach your target weight."
                .to_owned(),
        ],
        replacement: Some(GoalSettings::from_values(
            PolicyOrigin::BodyRecomposition,
            row,
            rationale,
            None,
        )),
    }
}

fn inverted_weight_loss_outcome(delta: f64, _config: &ConflictConfig) -> RuleOutcome {
    RuleOutcome {
        warnings: vec![format!(
            "Your target weight is {delta:.1} kg above your current weight, but your goal is \
             weight loss."
        )],
        recommendations: vec![
            "Adjust either your target weight or your training goal so that both point in the \
             same direction."
                .to_owned(),
        ],
        replacement: None,
    }
}

fn strength_preserving_cut_outcome(delta: f64, config: &ConflictConfig) -> RuleOutcome {
    let row = &config.strength_preserving_cut;
    let rationale = format!(
        "A large weight loss with a strength goal calls for a strength-preserving cut: a \
         moderate deficit of {} kcal/day with {} g/kg protein limits losses in lean mass and \
         performance ({}).",
        row.adjustment_kcal.unsigned_abs(),
        row.protein_g_per_kg,
        citations::WEIGHT_LOSS_RATE
    );

    RuleOutcome {
        warnings: vec![format!(
            "Losing {:.1} kg while prioritizing strength is difficult: expect some strength \
             loss, so the plan uses a moderate deficit to protect performance.",
            delta.abs()
        )],
        recommendations: Vec::new(),
        replacement: Some(GoalSettings::from_values(
            PolicyOrigin::StrengthPreservingCut,
            row,
            rationale,
            None,
        )),
    }
}

/// Check the goal against the target weight and resolve any conflict
///
/// Without a target weight there is nothing to compare and no conflict is reported.
#[must_use]
pub fn analyze_conflicts(profile: &UserNutritionProfile, config: &ConflictConfig) -> ConflictAnalysis {
    let Some(delta) = profile.weight_delta_kg() else {
        return ConflictAnalysis::default();
    };

    let goal = profile.training_goal;
    let mut analysis = ConflictAnalysis::default();

    for rule in CONFLICT_RULES
        .iter()
        .filter(|rule| (rule.matches)(goal, delta, config))
    {
        let outcome = (rule.resolve)(delta, config);
        warn!(
            rule = rule.name,
            goal = %goal,
            delta_kg = delta,
            overrides_policy = outcome.replacement.is_some(),
            "goal conflicts with target weight"
        );

        analysis.has_conflict = true;
        analysis.warnings.extend(outcome.warnings);
        analysis.recommendations.extend(outcome.recommendations);
        if outcome.replacement.is_some() {
            analysis.adjusted_settings = outcome.replacement;
        }
    }

    analysis
}
