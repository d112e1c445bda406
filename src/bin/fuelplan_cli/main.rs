// ABOUTME: Fuelplan CLI - compute nutrition targets from the command line
// ABOUTME: Handles profile input, validation, output format selection, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors
//!
//! Usage:
//! ```bash
//! # Targets for a weight loss goal with a target weight and date
//! fuelplan-cli compute --gender male --weight 80 --height 180 --age 30 --pal 1.55 \
//!     --goal weight_loss --target-weight 75 --target-date 2026-09-01
//!
//! # Same calculation from a JSON profile, as JSON
//! fuelplan-cli compute-file profile.json --format json
//!
//! # Known activity levels
//! fuelplan-cli pal-levels
//! ```

mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use fuelplan::formatters::{NumberLocale, OutputFormat};
use fuelplan::logging::LoggingConfig;
use fuelplan::models::{Gender, TrainingGoal, UserNutritionProfile};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fuelplan-cli",
    about = "Nutrition target calculator",
    long_about = "Computes daily calorie and macronutrient targets from a body profile and training goal, with goal conflict checks and a full explanation of every number."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute targets from command line flags
    Compute {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compute targets from a JSON profile file
    ComputeFile {
        /// Path to a JSON-encoded profile
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the known physical activity levels
    PalLevels,
}

/// Profile fields
#[derive(Args)]
struct ProfileArgs {
    /// Biological sex (male or female)
    #[arg(long)]
    gender: Gender,

    /// Body weight in kg
    #[arg(long)]
    weight: f64,

    /// Height in cm
    #[arg(long)]
    height: f64,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Physical activity level (1.2-2.5)
    #[arg(long)]
    pal: f64,

    /// Training goal (strength, muscle_gain, weight_loss, endurance, general_fitness)
    #[arg(long)]
    goal: String,

    /// Target body weight in kg
    #[arg(long)]
    target_weight: Option<f64>,

    /// Date to reach the target weight (YYYY-MM-DD)
    #[arg(long)]
    target_date: Option<NaiveDate>,

    /// Body fat percentage
    #[arg(long)]
    body_fat: Option<f64>,
}

/// Output and validation options shared by the compute commands
#[derive(Args)]
struct OutputArgs {
    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: String,

    /// Number locale for the explanation (en, de, plain)
    #[arg(long)]
    locale: Option<NumberLocale>,

    /// Skip profile range validation
    #[arg(long)]
    skip_validation: bool,
}

impl OutputArgs {
    fn options(&self) -> commands::compute::ComputeOptions {
        commands::compute::ComputeOptions {
            format: OutputFormat::from_str_param(&self.format),
            locale: self.locale,
            skip_validation: self.skip_validation,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Stay quiet unless asked: results go to stdout, logs to stderr
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    } else if env::var("RUST_LOG").is_err() {
        logging = logging.with_level("warn");
    }
    logging.init()?;
    debug!("fuelplan-cli starting");

    match cli.command {
        Command::Compute { profile, output } => {
            let options = output.options();
            let outcome = commands::compute::from_args(&profile.into_profile(), &options);
            commands::compute::report(outcome, &options)
        }
        Command::ComputeFile { path, output } => {
            let options = output.options();
            let outcome = commands::compute::from_file(&path, &options);
            commands::compute::report(outcome, &options)
        }
        Command::PalLevels => {
            commands::pal::list();
            Ok(ExitCode::SUCCESS)
        }
    }
}

impl ProfileArgs {
    fn into_profile(self) -> UserNutritionProfile {
        let mut profile = UserNutritionProfile::new(
            self.gender,
            self.weight,
            self.height,
            self.age,
            self.pal,
            TrainingGoal::from_str_lossy(&self.goal),
        );
        profile.target_weight_kg = self.target_weight;
        profile.target_date = self.target_date;
        profile.body_fat_percentage = self.body_fat;
        profile
    }
}
