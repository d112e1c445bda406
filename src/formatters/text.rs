// ABOUTME: Plain-text report renderer for nutrition target results
// ABOUTME: Prints targets, macros, progression, messages, and the explanation panel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

use super::NumberLocale;
use fuelplan_core::models::CalorieCalculationResult;
use std::fmt::Write;

/// Render a result as a human-readable report
#[must_use]
pub fn render_text(result: &CalorieCalculationResult, locale: NumberLocale) -> String {
    let int = |value: u32| locale.format_integer(i64::from(value));
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Daily energy targets");
    let _ = writeln!(out, "  BMR:             {} kcal", int(result.bmr));
    let _ = writeln!(out, "  TDEE:            {} kcal", int(result.tdee));
    let _ = writeln!(
        out,
        "  Adjustment:      {}{} kcal",
        if result.calorie_adjustment > 0 { "+" } else { "" },
        locale.format_integer(i64::from(result.calorie_adjustment))
    );
    let _ = writeln!(out, "  Target:          {} kcal", int(result.target_calories));

    let macros = &result.macros;
    let _ = writeln!(out, "\nMacronutrients");
    let _ = writeln!(
        out,
        "  Protein:         {} g ({}%, {} g/kg)",
        int(macros.protein_g),
        macros.protein_percent,
        locale.format_quantity(macros.protein_per_kg, 2)
    );
    let _ = writeln!(
        out,
        "  Carbohydrates:   {} g ({}%)",
        int(macros.carbs_g),
        macros.carbs_percent
    );
    let _ = writeln!(
        out,
        "  Fat:             {} g ({}%)",
        int(macros.fat_g),
        macros.fat_percent
    );
    if let Some(guideline) = macros.carbs_percentage_guideline {
        let _ = writeln!(
            out,
            "  Carb guideline:  {}% of calories",
            locale.format_quantity(guideline, 1)
        );
    }

    let progression = &result.progression;
    let _ = writeln!(out, "\nProgression");
    let _ = writeln!(
        out,
        "  Expected change: {} kg/week",
        locale.format_quantity(progression.expected_weekly_change_kg, 2)
    );
    if let Some(weeks) = progression.weeks_to_goal {
        let _ = writeln!(out, "  Weeks to goal:   {weeks}");
    }
    if let Some(date) = progression.estimated_target_date {
        let _ = writeln!(out, "  Estimated date:  {date}");
    }

    if result.has_conflict {
        let _ = writeln!(out, "\nGoal conflict detected");
    }
    write_list(&mut out, "Warnings", &result.warnings);
    write_list(&mut out, "Recommendations", &result.recommendations);

    let method = &result.calculation_method;
    let _ = writeln!(out, "\nHow these numbers were calculated");
    let _ = writeln!(out, "  BMR ({}): {}", method.bmr_formula, method.bmr_calculation);
    let _ = writeln!(out, "  Activity: {}", method.pal_description);
    let _ = writeln!(out, "  TDEE: {}", method.tdee_calculation);
    let _ = writeln!(out, "  Goal: {}", method.goal_adjustment.description);
    let _ = writeln!(out, "  Why: {}", method.goal_rationale);
    let _ = writeln!(out, "  Protein: {}", method.protein_rationale);
    let _ = writeln!(out, "  Macros: {}", method.macro_calculation);
    let _ = writeln!(out, "  Sources:");
    let _ = writeln!(out, "    - {}", method.sources.formula);
    let _ = writeln!(out, "    - {}", method.sources.goal_recommendation);
    let _ = writeln!(out, "    - {}", method.sources.protein_recommendation);

    out
}

fn write_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}
