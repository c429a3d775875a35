// ABOUTME: Configuration module for the macro planner
// ABOUTME: Engine lookup tables, environment overrides, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! Configuration is code-first: every table has a `Default` that matches the
//! onboarding calculator, and environment variables may override individual
//! values at load time.

/// Configuration error types
pub mod error;
/// Macro engine lookup tables and strategy selection
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, GoalRatiosConfig,
    MacroDistributionConfig, MacroEngineConfig, MacroRatio,
};
