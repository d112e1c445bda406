// ABOUTME: Lists the physical activity level reference table
// ABOUTME: Prints each known PAL factor with its description
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

use fuelplan::intelligence::physiological_constants::pal::KNOWN_LEVELS;

/// Print the known PAL factors
pub fn list() {
    println!("Known physical activity levels");
    println!("{}", "=".repeat(60));
    for (factor, description) in KNOWN_LEVELS {
        println!("  {factor:<6} {description}");
    }
    println!("\nOther factors between 1.2 and 2.5 are accepted and shown as \"PAL factor: X\".");
}
