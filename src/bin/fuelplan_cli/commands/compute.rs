// ABOUTME: Target computation commands for fuelplan-cli
// ABOUTME: Validates the profile, runs the engine, and prints text or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

use anyhow::Result;
use chrono::Local;
use fuelplan::config::NutritionTargetConfig;
use fuelplan::errors::{AppError, AppResult, ErrorResponse};
use fuelplan::formatters::text::render_text;
use fuelplan::formatters::{format_json_pretty, NumberLocale, OutputFormat};
use fuelplan::intelligence::{NutritionTargetEngine, ProfileValidator};
use fuelplan::models::UserNutritionProfile;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info, warn};

/// Options shared by the compute commands
pub struct ComputeOptions {
    /// Text or JSON
    pub format: OutputFormat,
    /// Overrides the configured explanation locale
    pub locale: Option<NumberLocale>,
    /// Skip range validation
    pub skip_validation: bool,
}

/// Compute targets for a profile built from flags
pub fn from_args(profile: &UserNutritionProfile, options: &ComputeOptions) -> AppResult<()> {
    run(profile, options)
}

/// Compute targets for a profile read from a JSON file
pub fn from_file(path: &Path, options: &ComputeOptions) -> AppResult<()> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Cannot read profile file {}", path.display())).with_source(e)
    })?;
    let profile: UserNutritionProfile = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), "profile loaded");

    run(&profile, options)
}

/// Turn a command outcome into an exit code
///
/// With JSON output the error is printed to stdout as an `ErrorResponse` so scripts
/// can parse it; otherwise it is returned for the usual stderr report.
pub fn report(outcome: AppResult<()>, options: &ComputeOptions) -> Result<ExitCode> {
    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) if options.format == OutputFormat::Json => {
            warn!(code = ?error.code, "computation failed");
            println!("{}", format_json_pretty(&ErrorResponse::from(error))?);
            Ok(ExitCode::FAILURE)
        }
        Err(error) => Err(error.into()),
    }
}

fn run(profile: &UserNutritionProfile, options: &ComputeOptions) -> AppResult<()> {
    let today = Local::now().date_naive();

    if options.skip_validation {
        info!("profile validation skipped");
    } else {
        ProfileValidator::new(today).validate(profile)?;
    }

    let mut config = NutritionTargetConfig::load()?;
    if let Some(locale) = options.locale {
        config.explanation.locale = locale;
    }
    let locale = config.explanation.locale;

    let result = NutritionTargetEngine::with_config(config).compute_on(profile, today);

    match options.format {
        OutputFormat::Json => println!("{}", format_json_pretty(&result)?),
        OutputFormat::Text => print!("{}", render_text(&result, locale)),
    }

    Ok(())
}
