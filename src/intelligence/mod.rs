// ABOUTME: Intelligence module: the macro engine plus strategy types from the core crate
// ABOUTME: Preserves `crate::intelligence::algorithms` paths while delegating to macro-planner-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Nutrition target calculation for onboarding.

// Strategy selectors live in the core crate so stored profiles can name them
pub use macro_planner_core::intelligence::{algorithms, CalorieStrategy, SplitStrategy};

/// BMR, TDEE, calorie target, and macro split pipeline
pub mod macro_engine;

pub use macro_engine::{
    calculate_bmr, calculate_calorie_target, calculate_macro_goals, calculate_macro_split,
    calculate_tdee, round_half_up, MacroEngine,
};
