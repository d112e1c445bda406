// ABOUTME: Criterion benchmarks for the nutrition target engine
// ABOUTME: Measures single stages and the full pipeline across profile batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Criterion benchmarks for the nutrition target engine.
//!
//! Measures the numeric stages in isolation and the full pipeline, including
//! conflict resolution and explanation rendering.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fuelplan::config::intelligence::{BmrConfig, MacroAllocationConfig};
use fuelplan::config::NutritionTargetConfig;
use fuelplan::formatters::text::render_text;
use fuelplan::formatters::NumberLocale;
use fuelplan::intelligence::{allocate_macros, calculate_bmr, calculate_tdee, NutritionTargetEngine};
use fuelplan::models::{Gender, TrainingGoal, UserNutritionProfile};

const GOALS: [TrainingGoal; 5] = [
    TrainingGoal::Strength,
    TrainingGoal::MuscleGain,
    TrainingGoal::WeightLoss,
    TrainingGoal::Endurance,
    TrainingGoal::GeneralFitness,
];

fn bench_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Generate a varied batch of profiles, a third with target weight and date
fn generate_profiles(count: usize) -> Vec<UserNutritionProfile> {
    (0..count)
        .map(|index| {
            let gender = if index % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            };
            let weight = 55.0 + ((index * 7) % 50) as f64;
            let height = 155.0 + ((index * 11) % 40) as f64;
            let age = 18 + ((index * 13) % 50) as u32;
            let pal = 1.2 + ((index * 3) % 13) as f64 / 10.0;
            let goal = GOALS[index % GOALS.len()];

            let profile = UserNutritionProfile::new(gender, weight, height, age, pal, goal)
                .with_body_fat(12.0 + ((index * 5) % 20) as f64);

            if index % 3 == 0 {
                let target_date = bench_today()
                    .checked_add_days(Days::new(30 + (index % 200) as u64))
                    .unwrap_or_default();
                profile
                    .with_target_weight(weight - 5.0 + (index % 10) as f64)
                    .with_target_date(target_date)
            } else {
                profile
            }
        })
        .collect()
}

fn bench_energy_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy_stages");
    let bmr_config = BmrConfig::default();
    let macro_config = MacroAllocationConfig::default();

    group.bench_function("bmr_tdee", |b| {
        b.iter(|| {
            let bmr = calculate_bmr(
                black_box(80.0),
                black_box(180.0),
                black_box(30),
                Gender::Male,
                &bmr_config,
            );
            calculate_tdee(bmr, black_box(1.55))
        });
    });

    group.bench_function("allocate_macros", |b| {
        b.iter(|| allocate_macros(black_box(80.0), 2.2, black_box(2300), None, &macro_config));
    });

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let engine = NutritionTargetEngine::with_config(NutritionTargetConfig::default());

    for count in [1_usize, 100, 1000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("compute", count), &profiles, |b, profiles| {
            b.iter(|| {
                profiles
                    .iter()
                    .map(|profile| engine.compute_on(black_box(profile), bench_today()))
                    .map(|result| result.target_calories)
                    .sum::<u32>()
            });
        });
    }

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let engine = NutritionTargetEngine::with_config(NutritionTargetConfig::default());
    let profile = UserNutritionProfile::new(Gender::Male, 70.0, 175.0, 28, 1.55, TrainingGoal::MuscleGain)
        .with_target_weight(65.0);
    let result = engine.compute_on(&profile, bench_today());

    let mut group = c.benchmark_group("rendering");
    group.bench_function("text_report", |b| {
        b.iter(|| render_text(black_box(&result), NumberLocale::En));
    });
    group.bench_function("json", |b| {
        b.iter(|| serde_json::to_string(black_box(&result)));
    });
    group.finish();
}

criterion_group!(benches, bench_energy_stages, bench_full_pipeline, bench_rendering);
criterion_main!(benches);
