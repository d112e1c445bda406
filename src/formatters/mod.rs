// ABOUTME: Presentation-layer formatting for engine output and explanation numbers
// ABOUTME: Locale-aware number rendering plus JSON and text output selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

//! Output Format Abstraction Layer
//!
//! The engine's numeric contract is locale-independent: every field of
//! [`CalorieCalculationResult`](fuelplan_core::models::CalorieCalculationResult) is a
//! plain number. Only the human-readable audit trail and the text renderer turn
//! numbers into strings, and they do so exclusively through this module.
//!
//! ## Usage
//!
//! ```rust
//! use fuelplan::formatters::NumberLocale;
//!
//! assert_eq!(NumberLocale::En.format_integer(1649), "1,649");
//! assert_eq!(NumberLocale::De.format_integer(1649), "1.649");
//! assert_eq!(NumberLocale::De.format_quantity(6.25, 2), "6,25");
//! ```

/// Plain-text rendering of a calculation result
pub mod text;

use fuelplan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number rendering conventions for human-readable strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberLocale {
    /// Comma grouping, dot decimals (`1,649.5`)
    #[default]
    En,
    /// Dot grouping, comma decimals (`1.649,5`)
    De,
    /// No grouping, dot decimals (`1649.5`)
    Plain,
}

impl NumberLocale {
    const fn group_separator(self) -> Option<char> {
        match self {
            Self::En => Some(','),
            Self::De => Some('.'),
            Self::Plain => None,
        }
    }

    const fn decimal_separator(self) -> char {
        match self {
            Self::De => ',',
            Self::En | Self::Plain => '.',
        }
    }

    /// Render an integer with thousands grouping
    #[must_use]
    pub fn format_integer(self, value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let grouped = self.group_digits(&digits);
        if value < 0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    /// Render a value with exactly `decimals` fractional digits
    #[must_use]
    pub fn format_fixed(self, value: f64, decimals: usize) -> String {
        let rendered = format!("{:.*}", decimals, value.abs());
        let negative = value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0');
        let (int_part, frac_part) = rendered
            .split_once('.')
            .map_or((rendered.as_str(), None), |(i, f)| (i, Some(f)));

        let mut out = String::with_capacity(rendered.len() + 4);
        if negative {
            out.push('-');
        }
        out.push_str(&self.group_digits(int_part));
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator());
            out.push_str(frac);
        }
        out
    }

    /// Render a value with at most `max_decimals` fractional digits, trimming trailing zeros
    #[must_use]
    pub fn format_quantity(self, value: f64, max_decimals: usize) -> String {
        let fixed = self.format_fixed(value, max_decimals);
        if max_decimals == 0 {
            return fixed;
        }
        let sep = self.decimal_separator();
        let trimmed = fixed.trim_end_matches('0');
        trimmed.strip_suffix(sep).unwrap_or(trimmed).to_owned()
    }

    fn group_digits(self, digits: &str) -> String {
        let Some(separator) = self.group_separator() else {
            return digits.to_owned();
        };
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (len - idx) % 3 == 0 {
                out.push(separator);
            }
            out.push(ch);
        }
        out
    }

    /// Get the locale identifier as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Plain => "plain",
        }
    }
}

impl FromStr for NumberLocale {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en_us" => Ok(Self::En),
            "de" | "de-de" | "de_de" => Ok(Self::De),
            "plain" | "none" => Ok(Self::Plain),
            other => Err(AppError::invalid_input(format!(
                "Unknown number locale '{other}', expected en, de or plain"
            ))),
        }
    }
}

impl fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    Text,
    /// Pretty-printed JSON of the full result
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize data to pretty-printed JSON
///
/// # Errors
///
/// Returns `SerializationError` if serialization fails
pub fn format_json_pretty<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
