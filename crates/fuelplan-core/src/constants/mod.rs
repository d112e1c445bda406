// ABOUTME: Fixed nutrition constants shared across the engine and its callers
// ABOUTME: Atwater energy factors and tissue energy density
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

/// Energy content of macronutrients (Atwater general factors)
///
/// Reference: Atwater, W.O. & Bryant, A.P. (1900). The availability and fuel value of food materials.
pub mod energy {
    /// Protein energy density (kcal per gram)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Carbohydrate energy density (kcal per gram)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Fat energy density (kcal per gram)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Approximate energy stored in one kilogram of body fat tissue (kcal)
    ///
    /// Reference: Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight.
    pub const KCAL_PER_KG_BODY_TISSUE: f64 = 7700.0;

    /// Days per week, used when converting weekly rates into daily energy budgets
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Input ranges the engine implicitly assumes
///
/// Callers validate against these before invoking the engine.
pub mod profile_ranges {
    /// Maximum plausible body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;

    /// Maximum plausible height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;

    /// Maximum plausible age (years)
    pub const MAX_AGE_YEARS: u32 = 120;

    /// Lowest physical activity level multiplier (sedentary)
    pub const MIN_PAL_FACTOR: f64 = 1.2;

    /// Highest physical activity level multiplier (extreme)
    pub const MAX_PAL_FACTOR: f64 = 2.5;

    /// Lowest plausible body fat percentage (essential fat)
    pub const MIN_BODY_FAT_PERCENT: f64 = 3.0;

    /// Highest plausible body fat percentage
    pub const MAX_BODY_FAT_PERCENT: f64 = 60.0;
}
