// ABOUTME: Intelligence module re-exports for strategy selector types
// ABOUTME: Contains CalorieStrategy and SplitStrategy used by config and profile models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Calorie adjustment and macro distribution strategies
pub mod algorithms;

pub use algorithms::{CalorieStrategy, SplitStrategy};
