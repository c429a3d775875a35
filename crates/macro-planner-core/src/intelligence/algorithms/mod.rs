// ABOUTME: Strategy selector types for the macro engine
// ABOUTME: Contains CalorieStrategy and SplitStrategy enum dispatch selectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Calorie target and macro split strategies
pub mod macro_strategy;

pub use macro_strategy::{CalorieStrategy, SplitStrategy};
