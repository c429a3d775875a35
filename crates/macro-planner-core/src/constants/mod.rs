// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, energy densities, and caller-side validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single list.

/// Unit conversion constants used by the BMR formula
pub mod units {
    /// Kilograms per pound
    pub const KG_PER_POUND: f64 = 0.453_592;
    /// Inches per foot
    pub const INCHES_PER_FOOT: u32 = 12;
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;
}

/// Atwater energy densities (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: i32 = 4;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_GRAM_CARB: i32 = 4;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: i32 = 9;
}

/// Bounds enforced by caller-side demographics validation
pub mod limits {
    /// Youngest age accepted at onboarding
    pub const MIN_AGE_YEARS: u32 = 13;
    /// Oldest age accepted at onboarding
    pub const MAX_AGE_YEARS: u32 = 120;
    /// Shortest total height accepted (3 ft)
    pub const MIN_TOTAL_HEIGHT_INCHES: u32 = 36;
    /// Tallest total height accepted (8 ft)
    pub const MAX_TOTAL_HEIGHT_INCHES: u32 = 96;
    /// The inches component must stay below one foot
    pub const MAX_HEIGHT_INCHES_COMPONENT: u32 = 11;
    /// Lightest body weight accepted (lb)
    pub const MIN_WEIGHT_POUNDS: f64 = 50.0;
    /// Heaviest body weight accepted (lb)
    pub const MAX_WEIGHT_POUNDS: f64 = 1000.0;
}

/// Service names for structured logging
pub mod service_names {
    /// Macro planner service name
    pub const MACRO_PLANNER: &str = "macro-planner";
}
