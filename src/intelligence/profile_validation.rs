// ABOUTME: Caller-side range validation for nutrition profiles before running the engine
// ABOUTME: Separates arithmetic-breaking inputs from merely implausible ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Profile validation
//!
//! The engine assumes plausible inputs and never checks them. This validator is
//! what an input boundary (CLI, HTTP handler, form) runs first:
//!
//! - non-finite, zero or negative values that would break the arithmetic are
//!   reported as [`ErrorCode::DomainAssumptionViolation`]
//! - finite values outside the physiological range are reported as
//!   [`ErrorCode::ValueOutOfRange`]
//!
//! [`ErrorCode::DomainAssumptionViolation`]: fuelplan_core::errors::ErrorCode::DomainAssumptionViolation
//! [`ErrorCode::ValueOutOfRange`]: fuelplan_core::errors::ErrorCode::ValueOutOfRange

use chrono::NaiveDate;
use fuelplan_core::constants::profile_ranges::{
    MAX_AGE_YEARS, MAX_BODY_FAT_PERCENT, MAX_HEIGHT_CM, MAX_PAL_FACTOR, MAX_WEIGHT_KG,
    MIN_BODY_FAT_PERCENT, MIN_PAL_FACTOR,
};
use fuelplan_core::errors::{AppError, AppResult};
use fuelplan_core::models::UserNutritionProfile;

/// Validates a profile against the ranges the engine assumes
#[derive(Debug, Clone, Copy)]
pub struct ProfileValidator {
    today: NaiveDate,
}

impl ProfileValidator {
    /// Validator judging target dates relative to `today`
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Check every field, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns `DomainAssumptionViolation` for values that would break the
    /// calculation and `ValueOutOfRange` for implausible values
    pub fn validate(&self, profile: &UserNutritionProfile) -> AppResult<()> {
        check_positive_max("weight_kg", profile.weight_kg, MAX_WEIGHT_KG, "kg")?;
        check_positive_max("height_cm", profile.height_cm, MAX_HEIGHT_CM, "cm")?;

        if profile.age > MAX_AGE_YEARS {
            return Err(AppError::value_out_of_range(
                "age",
                format!("Age must be at most {MAX_AGE_YEARS} years, got {}", profile.age),
            ));
        }

        let pal = profile.pal_factor;
        if !pal.is_finite() || pal <= 0.0 {
            return Err(AppError::domain_assumption(
                "pal_factor",
                format!("PAL factor must be a positive number, got {pal}"),
            ));
        }
        if !(MIN_PAL_FACTOR..=MAX_PAL_FACTOR).contains(&pal) {
            return Err(AppError::value_out_of_range(
                "pal_factor",
                format!("PAL factor must be between {MIN_PAL_FACTOR} and {MAX_PAL_FACTOR}, got {pal}"),
            ));
        }

        if let Some(body_fat) = profile.body_fat_percentage {
            if !body_fat.is_finite() {
                return Err(AppError::domain_assumption(
                    "body_fat_percentage",
                    "Body fat percentage must be a finite number",
                ));
            }
            if !(MIN_BODY_FAT_PERCENT..=MAX_BODY_FAT_PERCENT).contains(&body_fat) {
                return Err(AppError::value_out_of_range(
                    "body_fat_percentage",
                    format!(
                        "Body fat must be between {MIN_BODY_FAT_PERCENT}% and \
                         {MAX_BODY_FAT_PERCENT}%, got {body_fat}%"
                    ),
                ));
            }
        }

        if let Some(target_weight) = profile.target_weight_kg {
            check_positive_max("target_weight_kg", target_weight, MAX_WEIGHT_KG, "kg")?;
        }

        if let Some(target_date) = profile.target_date {
            if target_date < self.today {
                return Err(AppError::value_out_of_range(
                    "target_date",
                    format!("Target date {target_date} is in the past"),
                ));
            }
        }

        Ok(())
    }
}

fn check_positive_max(field: &str, value: f64, max: f64, unit: &str) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::domain_assumption(
            field,
            format!("{field} must be a positive number, got {value}"),
        ));
    }
    if value > max {
        return Err(AppError::value_out_of_range(
            field,
            format!("{field} must be at most {max} {unit}, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuelplan_core::errors::ErrorCode;
    use fuelplan_core::models::{Gender, TrainingGoal};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn valid() -> UserNutritionProfile {
        UserNutritionProfile::new(Gender::Female, 62.0, 168.0, 34, 1.55, TrainingGoal::Endurance)
    }

    #[test]
    fn test_valid_profile_passes() {
        let profile = valid()
            .with_body_fat(22.0)
            .with_target_weight(60.0)
            .with_target_date(today());
        ProfileValidator::new(today()).validate(&profile).unwrap();
    }

    #[test]
    fn test_zero_pal_is_domain_violation() {
        let mut profile = valid();
        profile.pal_factor = 0.0;

        let err = ProfileValidator::new(today()).validate(&profile).unwrap_err();
        assert_eq!(err.code, ErrorCode::DomainAssumptionViolation);
        assert_eq!(err.field.as_deref(), Some("pal_factor"));
    }

    #[test]
    fn test_nan_weight_is_domain_violation() {
        let mut profile = valid();
        profile.weight_kg = f64::NAN;

        let err = ProfileValidator::new(today()).validate(&profile).unwrap_err();
        assert_eq!(err.code, ErrorCode::DomainAssumptionViolation);
    }

    #[test]
    fn test_out_of_range_values() {
        let validator = ProfileValidator::new(today());

        let mut heavy = valid();
        heavy.weight_kg = 320.0;
        assert_eq!(
            validator.validate(&heavy).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );

        let mut active = valid();
        active.pal_factor = 2.8;
        assert_eq!(
            validator.validate(&active).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );

        let lean = valid().with_body_fat(2.0);
        assert_eq!(
            validator.validate(&lean).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );

        let mut old = valid();
        old.age = 121;
        assert_eq!(
            validator.validate(&old).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }

    #[test]
    fn test_past_target_date_rejected() {
        let profile = valid().with_target_date(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());

        let err = ProfileValidator::new(today()).validate(&profile).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.field.as_deref(), Some("target_date"));
    }
}
