// ABOUTME: Re-exports command modules for fuelplan-cli
// ABOUTME: Provides target computation and reference table commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

pub mod compute;
pub mod pal;
