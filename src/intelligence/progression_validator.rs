// ABOUTME: Projects time to reach a target weight and checks target date feasibility
// ABOUTME: Emits warnings for past dates, aggressive or slow rates, and unsafe weekly change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Progression Validator
//!
//! Uses the effective policy (after conflict resolution) to estimate how long the
//! target weight will take, then compares the rate a target date would demand
//! against evidence-based limits.
//!
//! # Scientific References
//!
//! - Garthe, I., et al. (2011). Effect of two different weight-loss rates on body
//!   composition and strength and power-related performance in elite athletes.
//!   <https://doi.org/10.1123/ijsnem.21.2.97>

use crate::config::intelligence::ProgressionConfig;
use crate::intelligence::goal_policy::GoalSettings;
use chrono::{Days, NaiveDate};
use fuelplan_core::constants::energy::DAYS_PER_WEEK;
use fuelplan_core::models::{ProgressionEstimate, TrainingGoal, UserNutritionProfile};
use tracing::{debug, warn};

/// Timeline estimate plus the warnings raised while validating it
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionAssessment {
    /// Expected rate, weeks to goal and estimated date
    pub estimate: ProgressionEstimate,
    /// Feasibility warnings in evaluation order
    pub warnings: Vec<String>,
}

/// Estimate the timeline to the target weight and validate any target date
///
/// Without a target weight only the expected weekly change is reported.
#[must_use]
pub fn validate_progression(
    profile: &UserNutritionProfile,
    settings: &GoalSettings,
    config: &ProgressionConfig,
    today: NaiveDate,
) -> ProgressionAssessment {
    let expected = settings.expected_weekly_change_kg();
    let mut assessment = ProgressionAssessment {
        estimate: ProgressionEstimate {
            expected_weekly_change_kg: expected,
            weeks_to_goal: None,
            estimated_target_date: None,
        },
        warnings: Vec::new(),
    };

    let Some(delta) = profile.weight_delta_kg() else {
        return assessment;
    };

    estimate_timeline(&mut assessment, delta, expected, today);

    if let Some(target_date) = profile.target_date {
        check_target_date(
            &mut assessment.warnings,
            profile.training_goal,
            delta,
            target_date,
            today,
            config,
        );
    }

    if expected.abs() > config.safety_weekly_change_kg {
        assessment.warnings.push(format!(
            "The planned rate of {:.2} kg per week exceeds {} kg per week; monitor energy, \
             performance and health markers closely.",
            expected.abs(),
            config.safety_weekly_change_kg
        ));
    }

    if !assessment.warnings.is_empty() {
        warn!(
            count = assessment.warnings.len(),
            "progression validation raised warnings"
        );
    }

    assessment
}

fn estimate_timeline(
    assessment: &mut ProgressionAssessment,
    delta: f64,
    expected: f64,
    today: NaiveDate,
) {
    if expected.abs() < f64::EPSILON {
        // A maintenance plan only reaches a target it already sits on
        if delta.abs() < f64::EPSILON {
            assessment.estimate.weeks_to_goal = Some(0);
            assessment.estimate.estimated_target_date = Some(today);
        } else {
            assessment.warnings.push(format!(
                "Your target weight cannot be reached while the plan maintains weight \
                 ({delta:+.1} kg to go); choose a goal that changes body weight to set a timeline."
            ));
        }
        return;
    }

    let weeks = (delta / expected).abs();
    let days = (weeks * DAYS_PER_WEEK).ceil() as u64;

    assessment.estimate.weeks_to_goal = Some(weeks.ceil() as u32);
    assessment.estimate.estimated_target_date = today.checked_add_days(Days::new(days));
    debug!(weeks, days, "estimated time to target weight");
}

fn check_target_date(
    warnings: &mut Vec<String>,
    goal: TrainingGoal,
    delta: f64,
    target_date: NaiveDate,
    today: NaiveDate,
    config: &ProgressionConfig,
) {
    if target_date < today {
        warnings.push(format!(
            "The target date {target_date} lies in the past; choose a date after {today}."
        ));
        return;
    }

    // No time is left, so only a target already reached is feasible
    if target_date == today {
        if delta.abs() >= f64::EPSILON {
            warnings.push(format!(
                "The target date {target_date} is today, which leaves no time to change \
                 {delta:+.1} kg; choose a later date."
            ));
        }
        return;
    }

    let weeks_available = (target_date - today).num_days() as f64 / DAYS_PER_WEEK;
    let required = delta / weeks_available;

    if required.abs() > config.max_weekly_change_kg {
        warnings.push(format!(
            "Reaching your target by {target_date} requires {:.1} kg per week, more than the \
             recommended maximum of {} kg per week.",
            required.abs(),
            config.max_weekly_change_kg
        ));
        warnings.push(
            "Changing weight this fast increases the risk of muscle loss, nutrient deficiencies \
             and reduced performance."
                .to_owned(),
        );

        let daily_kcal = required.abs() * config.kcal_per_kg_tissue / DAYS_PER_WEEK;
        if daily_kcal > config.dangerous_daily_adjustment_kcal {
            let direction = if required < 0.0 { "deficit" } else { "surplus" };
            warnings.push(format!(
                "This timeline implies a dangerous {direction} of about {daily_kcal:.0} kcal per \
                 day; extend the target date."
            ));
        }
    }

    if goal == TrainingGoal::WeightLoss
        && required.abs() < config.min_weekly_change_kg
        && delta.abs() > config.slow_progress_min_delta_kg
    {
        warnings.push(format!(
            "Your target date only requires {:.2} kg per week; progress this slow can be hard \
             to notice and may hurt motivation. Consider an earlier date.",
            required.abs()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::intelligence::GoalPolicyTable;
    use crate::intelligence::goal_policy::resolve_goal_policy;
    use fuelplan_core::models::Gender;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn assess(profile: &UserNutritionProfile) -> ProgressionAssessment {
        let settings = resolve_goal_policy(profile, &GoalPolicyTable::default());
        validate_progression(profile, &settings, &ProgressionConfig::default(), today())
    }

    fn profile(weight: f64, goal: TrainingGoal) -> UserNutritionProfile {
        UserNutritionProfile::new(Gender::Male, weight, 180.0, 30, 1.55, goal)
    }

    #[test]
    fn test_without_target_only_rate_is_reported() {
        let result = assess(&profile(80.0, TrainingGoal::WeightLoss));

        assert!((result.estimate.expected_weekly_change_kg + 0.5).abs() < f64::EPSILON);
        assert!(result.estimate.weeks_to_goal.is_none());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_weeks_to_goal_and_date() {
        let result = assess(&profile(80.0, TrainingGoal::WeightLoss).with_target_weight(75.0));

        assert_eq!(result.estimate.weeks_to_goal, Some(10));
        assert_eq!(
            result.estimate.estimated_target_date,
            NaiveDate::from_ymd_opt(2025, 3, 12)
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_zero_rate_reports_instead_of_dividing() {
        let result = assess(&profile(70.0, TrainingGoal::Endurance).with_target_weight(68.0));

        assert!(result.estimate.weeks_to_goal.is_none());
        assert!(result.estimate.estimated_target_date.is_none());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("maintains weight"));
    }

    #[test]
    fn test_zero_rate_already_at_target() {
        let result = assess(&profile(70.0, TrainingGoal::Endurance).with_target_weight(70.0));

        assert_eq!(result.estimate.weeks_to_goal, Some(0));
        assert_eq!(result.estimate.estimated_target_date, Some(today()));
    }

    #[test]
    fn test_past_target_date_stops_date_checks() {
        let p = profile(90.0, TrainingGoal::WeightLoss)
            .with_target_weight(80.0)
            .with_target_date(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        let result = assess(&p);

        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("lies in the past"));
    }

    #[test]
    fn test_target_date_today_leaves_no_time() {
        let p = profile(80.0, TrainingGoal::WeightLoss)
            .with_target_weight(75.0)
            .with_target_date(today());
        let result = assess(&p);

        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("is today"));
        assert!(result.warnings[0].contains("-5.0 kg"));
        assert!(!result.warnings[0].contains("lies in the past"));
        assert_eq!(result.estimate.weeks_to_goal, Some(10));
    }

    #[test]
    fn test_target_date_today_already_at_target() {
        let p = profile(80.0, TrainingGoal::WeightLoss)
            .with_target_weight(80.0)
            .with_target_date(today());
        let result = assess(&p);

        assert!(result.warnings.is_empty());
        assert_eq!(result.estimate.weeks_to_goal, Some(0));
    }

    #[test]
    fn test_safety_warning_follows_configured_limit() {
        let config = ProgressionConfig {
            safety_weekly_change_kg: 0.3,
            ..ProgressionConfig::default()
        };
        let p = profile(80.0, TrainingGoal::WeightLoss).with_target_weight(75.0);
        let settings = resolve_goal_policy(&p, &GoalPolicyTable::default());
        let result = validate_progression(&p, &settings, &config, today());

        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("0.50 kg per week exceeds 0.3 kg"));
    }

    #[test]
    fn test_safety_warning_needs_target_weight() {
        let config = ProgressionConfig {
            safety_weekly_change_kg: 0.3,
            ..ProgressionConfig::default()
        };
        let p = profile(80.0, TrainingGoal::WeightLoss);
        let settings = resolve_goal_policy(&p, &GoalPolicyTable::default());
        let result = validate_progression(&p, &settings, &config, today());

        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_aggressive_gain_names_surplus() {
        // 10 kg in 5 weeks
        let p = profile(70.0, TrainingGoal::MuscleGain)
            .with_target_weight(80.0)
            .with_target_date(NaiveDate::from_ymd_opt(2025, 2, 5).unwrap());
        let result = assess(&p);

        assert_eq!(result.warnings.len(), 3);
        assert!(result.warnings[0].contains("2.0 kg per week"));
        assert!(result.warnings[2].contains("dangerous surplus of about 2200 kcal"));
    }

    #[test]
    fn test_aggressive_rate_names_weekly_change_and_deficit() {
        let p = profile(90.0, TrainingGoal::WeightLoss)
            .with_target_weight(80.0)
            .with_target_date(NaiveDate::from_ymd_opt(2025, 2, 5).unwrap());
        let result = assess(&p);

        assert_eq!(result.warnings.len(), 3);
        assert!(result.warnings[0].contains("2.0 kg per week"));
        assert!(result.warnings[2].contains("deficit of about 2200 kcal"));
    }

    #[test]
    fn test_slow_weight_loss_warning() {
        let p = profile(90.0, TrainingGoal::WeightLoss)
            .with_target_weight(87.0)
            .with_target_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let result = assess(&p);

        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("motivation"));
    }
}
