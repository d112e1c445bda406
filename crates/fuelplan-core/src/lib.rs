// ABOUTME: Core types and constants for the fuelplan nutrition target engine
// ABOUTME: Foundation crate with error handling, domain models, and energy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuelplan Contributors

#![deny(unsafe_code)]

//! # Fuelplan Core
//!
//! Foundation crate providing shared types and constants for the fuelplan
//! nutrition target engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Energy densities and other fixed nutrition constants
//! - **models**: Input profile and calculation result records

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants organized by domain
pub mod constants;

/// Core data models (profile, goals, calculation results)
pub mod models;
