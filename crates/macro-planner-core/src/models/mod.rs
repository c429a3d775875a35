// ABOUTME: Core data models for the macro planner
// ABOUTME: Demographics input snapshot and MacroPlan output record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Demographics input and its enums
pub mod demographics;
/// Macro plan output
pub mod macro_plan;

pub use demographics::{ActivityLevel, BiologicalSex, Demographics, Goal};
pub use macro_plan::{MacroPlan, MacroSplit};
