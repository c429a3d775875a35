// ABOUTME: Main library entry point for the wellness onboarding macro planner
// ABOUTME: Computes daily calorie and macronutrient targets from onboarding demographics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Planner
//!
//! Turns the demographics collected during wellness onboarding into a daily
//! nutrition target: basal metabolic rate, total daily energy expenditure,
//! a goal-adjusted calorie target, and the protein, carbohydrate and fat
//! split in grams and percent.
//!
//! ## Architecture
//!
//! - **Config**: Engine lookup tables and strategy selection with environment overrides
//! - **Intelligence**: The macro engine pipeline
//! - **Validation**: Caller-side range checks on demographics
//! - **Profiles**: Storage of the computed plan on a user profile
//! - **Services**: Onboarding operations tying the pieces together
//!
//! ## Example Usage
//!
//! ```rust
//! use macro_planner::intelligence::MacroEngine;
//! use macro_planner::models::{ActivityLevel, BiologicalSex, Demographics, Goal};
//!
//! let demographics = Demographics::new(
//!     30,
//!     BiologicalSex::Male,
//!     5,
//!     10,
//!     180.0,
//!     ActivityLevel::Sedentary,
//!     Goal::Maintenance,
//! );
//! let plan = MacroEngine::default().compute_macro_goals(&demographics);
//!
//! assert_eq!(plan.bmr_calories, 1783);
//! assert_eq!(plan.tdee_calories, 2140);
//! assert_eq!(plan.protein_percent, 25);
//! ```

/// Configuration management for the macro engine
pub mod config;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Macro engine and strategy selectors
pub mod intelligence;

/// Structured logging setup and domain event helpers
pub mod logging;

/// User profile records and storage
pub mod profiles;

/// Onboarding service layer
pub mod services;

/// Caller-side demographics validation
pub mod validation;

/// Core data models re-exported from the core crate
pub mod models {
    pub use macro_planner_core::models::*;
}

/// Application constants re-exported from the core crate
pub mod constants {
    pub use macro_planner_core::constants::*;
}
