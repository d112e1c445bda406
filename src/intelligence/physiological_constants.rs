// ABOUTME: Fixed reference tables for the nutrition engine: PAL descriptions and citations
// ABOUTME: Rule tables keyed by activity level and training goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Physiological reference tables
//!
//! These tables are not tunable: they describe published values and the
//! literature behind them. Tunable policy numbers live in
//! [`NutritionTargetConfig`](crate::config::NutritionTargetConfig).

/// Physical activity level (PAL) reference values
///
/// References:
/// - FAO/WHO/UNU (2004). Human energy requirements. Food and Nutrition Technical Report Series 1
/// - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
pub mod pal {
    /// Tolerance when matching a user-supplied PAL factor to a table row
    pub const MATCH_TOLERANCE: f64 = 0.001;

    /// Known PAL factors and their descriptions, ascending
    pub const KNOWN_LEVELS: &[(f64, &str)] = &[
        (1.2, "Sedentary: desk work, little or no exercise"),
        (1.375, "Lightly active: light exercise 1-3 days per week"),
        (1.55, "Moderately active: moderate exercise 3-5 days per week"),
        (1.725, "Very active: hard exercise 6-7 days per week"),
        (1.9, "Extra active: physical job plus daily hard training"),
        (2.2, "Competitive athlete: two training sessions per day"),
        (2.5, "Extreme: elite endurance training volume"),
    ];

    /// Look up the description of a known PAL factor
    #[must_use]
    pub fn describe(pal_factor: f64) -> Option<&'static str> {
        KNOWN_LEVELS
            .iter()
            .find(|(value, _)| (value - pal_factor).abs() < MATCH_TOLERANCE)
            .map(|(_, description)| *description)
    }
}

/// Literature cited in the calculation audit trail
pub mod citations {
    /// Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure
    pub const MIFFLIN_ST_JEOR: &str = "https://doi.org/10.1093/ajcn/51.2.241";

    /// Aragon, A.A., et al. (2017). ISSN position stand: diets and body composition
    pub const BODY_COMPOSITION_DIETS: &str = "https://doi.org/10.1186/s12970-017-0174-y";

    /// Thomas, D.T., Erdman, K.A., & Burke, L.M. (2016). ACSM/AND/DC joint position
    /// statement: nutrition and athletic performance
    pub const ATHLETIC_PERFORMANCE_GUIDELINES: &str =
        "https://doi.org/10.1249/MSS.0000000000000852";

    /// Jäger, R., et al. (2017). ISSN position stand: protein and exercise
    pub const PROTEIN_AND_EXERCISE: &str = "https://doi.org/10.1186/s12970-017-0177-8";

    /// Helms, E.R., et al. (2014). A systematic review of dietary protein during caloric
    /// restriction in resistance trained lean athletes
    pub const PROTEIN_IN_DEFICIT: &str = "https://doi.org/10.1186/1550-2783-11-20";

    /// Garthe, I., et al. (2011). Effect of two different weight-loss rates on body
    /// composition and strength and power-related performance in elite athletes
    pub const WEIGHT_LOSS_RATE: &str = "https://doi.org/10.1123/ijsnem.21.2.97";

    /// Iraki, J., et al. (2019). Nutrition recommendations for bodybuilders in the off-season
    pub const OFF_SEASON_SURPLUS: &str = "https://doi.org/10.3390/sports7070154";

    /// Burke, L.M., et al. (2011). Carbohydrates for training and competition
    pub const CARBOHYDRATES_FOR_TRAINING: &str = "https://doi.org/10.1080/02640414.2011.585473";

    /// Barakat, C., et al. (2020). Body recomposition: can trained individuals build muscle
    /// and lose fat at the same time?
    pub const BODY_RECOMPOSITION: &str = "https://doi.org/10.1519/SSC.0000000000000584";
}
