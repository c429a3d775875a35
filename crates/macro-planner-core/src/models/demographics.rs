// ABOUTME: Demographics input record submitted at the end of the onboarding demographics step
// ABOUTME: BiologicalSex, ActivityLevel, and Goal enums with lenient and strict parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{CM_PER_INCH, INCHES_PER_FOOT, KG_PER_POUND};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Normalize a form value for enum matching: lowercase, `_`/space to `-`
fn normalize(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

/// Text of a submitted selection; `null`, numbers, and other non-strings carry none
fn selection_text(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

/// Biological sex for the Mifflin-St Jeor constant
///
/// Only `Male` receives the +5 constant; every other value uses -161.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case", from = "Value")]
pub enum BiologicalSex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
    /// Any other or missing value (-161 kcal constant)
    #[default]
    Other,
}

impl BiologicalSex {
    /// Parse from a form value, folding anything unrecognized into `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match normalize(s).as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Other,
        }
    }

    /// Stable identifier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl From<Value> for BiologicalSex {
    fn from(value: Value) -> Self {
        Self::from_str_lossy(selection_text(&value))
    }
}

impl FromStr for BiologicalSex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown biological sex: '{other}'. Valid options: male, female, other"
            ))),
        }
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Self-reported activity level selected during onboarding
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case", from = "Value")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Physical job or training twice a day
    ExtremelyActive,
    /// Missing or unrecognized selection
    #[default]
    Unspecified,
}

impl ActivityLevel {
    /// Every selectable level, in ascending order of expenditure
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Parse from a form value; anything unrecognized becomes `Unspecified`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Unspecified)
    }

    /// Stable identifier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly-active",
            Self::ModeratelyActive => "moderately-active",
            Self::VeryActive => "very-active",
            Self::ExtremelyActive => "extremely-active",
            Self::Unspecified => "unspecified",
        }
    }

    /// Whether a recognized level was selected
    #[must_use]
    pub const fn is_specified(self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

impl From<Value> for ActivityLevel {
    fn from(value: Value) -> Self {
        Self::from_str_lossy(selection_text(&value))
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly-active" | "light" => Ok(Self::LightlyActive),
            "moderately-active" | "moderate" => Ok(Self::ModeratelyActive),
            "very-active" => Ok(Self::VeryActive),
            "extremely-active" | "extra-active" => Ok(Self::ExtremelyActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: '{other}'. Valid options: sedentary, lightly-active, moderately-active, very-active, extremely-active"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wellness goal selected during onboarding
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case", from = "Value")]
pub enum Goal {
    /// Lose body fat (calorie deficit)
    WeightLoss,
    /// Build muscle (moderate surplus)
    MuscleGain,
    /// Gain overall weight (larger surplus)
    WeightGain,
    /// Hold current weight
    Maintenance,
    /// Missing or unrecognized selection; treated like maintenance
    #[default]
    Unspecified,
}

impl Goal {
    /// Every selectable goal
    pub const ALL: [Self; 4] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::WeightGain,
        Self::Maintenance,
    ];

    /// Parse from a form value; anything unrecognized becomes `Unspecified`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Unspecified)
    }

    /// Stable identifier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::MuscleGain => "muscle-gain",
            Self::WeightGain => "weight-gain",
            Self::Maintenance => "maintenance",
            Self::Unspecified => "unspecified",
        }
    }

    /// Whether a recognized goal was selected
    #[must_use]
    pub const fn is_specified(self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

impl From<Value> for Goal {
    fn from(value: Value) -> Self {
        Self::from_str_lossy(selection_text(&value))
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "weight-loss" | "lose-weight" => Ok(Self::WeightLoss),
            "muscle-gain" | "build-muscle" => Ok(Self::MuscleGain),
            "weight-gain" | "gain-weight" => Ok(Self::WeightGain),
            "maintenance" | "maintain" => Ok(Self::Maintenance),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal: '{other}'. Valid options: weight-loss, muscle-gain, weight-gain, maintenance"
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Demographics snapshot supplied by the onboarding form store
///
/// Range checks are the caller's job (see `validate_demographics` in the
/// main crate); the engine consumes whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    /// Age in whole years
    pub age_years: u32,
    /// Biological sex (drives the BMR constant)
    #[serde(default)]
    pub biological_sex: BiologicalSex,
    /// Height, feet component
    pub height_feet: u32,
    /// Height, inches component
    pub height_inches: u32,
    /// Body weight in pounds
    pub weight_pounds: f64,
    /// Activity level (drives the TDEE multiplier)
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Goal (drives calorie adjustment and macro ratios)
    #[serde(default)]
    pub goal: Goal,
}

impl Demographics {
    /// Create a demographics snapshot
    #[must_use]
    pub const fn new(
        age_years: u32,
        biological_sex: BiologicalSex,
        height_feet: u32,
        height_inches: u32,
        weight_pounds: f64,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Self {
        Self {
            age_years,
            biological_sex,
            height_feet,
            height_inches,
            weight_pounds,
            activity_level,
            goal,
        }
    }

    /// Total height in inches
    #[must_use]
    pub const fn total_height_inches(&self) -> u32 {
        self.height_feet * INCHES_PER_FOOT + self.height_inches
    }

    /// Height in centimeters
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        f64::from(self.total_height_inches()) * CM_PER_INCH
    }

    /// Weight in kilograms
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight_pounds * KG_PER_POUND
    }
}
