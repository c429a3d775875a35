// ABOUTME: Strategy selectors for calorie target adjustment and macro distribution
// ABOUTME: Enum dispatch between percentage/offset targets and ratio/body-weight splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the goal adjusts TDEE into a daily calorie target
///
/// The two strategies produce materially different targets for the same
/// input (a 2500 kcal TDEE on weight loss gives 2125 vs 2000 kcal), so the
/// choice is fixed per engine instance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CalorieStrategy {
    /// Scale TDEE: 15% deficit for weight loss, 12% surplus for gain goals
    #[default]
    PercentOfTdee,
    /// Shift TDEE: -500 weight loss, +300 weight gain, +200 muscle gain
    FixedOffset,
}

impl CalorieStrategy {
    /// Stable identifier used in config, logs, and stored profiles
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PercentOfTdee => "percent-of-tdee",
            Self::FixedOffset => "fixed-offset",
        }
    }

    /// Get strategy description with formula
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PercentOfTdee => {
                "Percent of TDEE: weight-loss x0.85, muscle/weight-gain x1.12, maintenance x1.0"
            }
            Self::FixedOffset => {
                "Fixed offset: weight-loss -500, weight-gain +300, muscle-gain +200, maintenance +0"
            }
        }
    }
}

impl fmt::Display for CalorieStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalorieStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "percent-of-tdee" | "percent" | "percentage" => Ok(Self::PercentOfTdee),
            "fixed-offset" | "offset" => Ok(Self::FixedOffset),
            other => Err(AppError::invalid_input(format!(
                "Unknown calorie strategy: '{other}'. Valid options: percent-of-tdee, fixed-offset"
            ))),
        }
    }
}

/// How the calorie target is distributed into protein, carbs, and fat
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SplitStrategy {
    /// Fixed per-goal calorie ratios; reported percentages are the ratios
    #[default]
    RatioBased,
    /// Protein from body weight, fat as a calorie fraction, carbs fill the rest
    BodyWeight,
}

impl SplitStrategy {
    /// Stable identifier used in config, logs, and stored profiles
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RatioBased => "ratio-based",
            Self::BodyWeight => "body-weight",
        }
    }

    /// Get strategy description with formula
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::RatioBased => "Ratio-based: per-goal protein/carb/fat calorie fractions",
            Self::BodyWeight => {
                "Body-weight: 1 g protein per lb, 22.5% of calories from fat, carbs take the remainder"
            }
        }
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SplitStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "ratio-based" | "ratio" => Ok(Self::RatioBased),
            "body-weight" | "bodyweight" | "per-body-weight" => Ok(Self::BodyWeight),
            other => Err(AppError::invalid_input(format!(
                "Unknown split strategy: '{other}'. Valid options: ratio-based, body-weight"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_percent_and_ratio() {
        assert_eq!(CalorieStrategy::default(), CalorieStrategy::PercentOfTdee);
        assert_eq!(SplitStrategy::default(), SplitStrategy::RatioBased);
    }

    #[test]
    fn test_parse_accepts_aliases_and_snake_case() {
        assert_eq!(
            "FIXED_OFFSET".parse::<CalorieStrategy>().unwrap(),
            CalorieStrategy::FixedOffset
        );
        assert_eq!(
            "percentage".parse::<CalorieStrategy>().unwrap(),
            CalorieStrategy::PercentOfTdee
        );
        assert_eq!(
            "body_weight".parse::<SplitStrategy>().unwrap(),
            SplitStrategy::BodyWeight
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "keto".parse::<SplitStrategy>().unwrap_err();
        assert!(err.message.contains("ratio-based, body-weight"));
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&CalorieStrategy::FixedOffset).unwrap();
        assert_eq!(json, "\"fixed-offset\"");
        let parsed: SplitStrategy = serde_json::from_str("\"body-weight\"").unwrap();
        assert_eq!(parsed, SplitStrategy::BodyWeight);
    }
}
