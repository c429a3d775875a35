// ABOUTME: MacroPlan output record computed once per demographics snapshot
// ABOUTME: Calorie targets, macro grams, and macro percentages as whole numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use serde::{Deserialize, Serialize};

/// Distribution of a calorie target into macro grams and percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    /// Daily protein (grams)
    pub protein_grams: i32,
    /// Daily carbohydrates (grams)
    pub carb_grams: i32,
    /// Daily fat (grams)
    pub fat_grams: i32,
    /// Protein share of calories (percent)
    pub protein_percent: i32,
    /// Carbohydrate share of calories (percent)
    pub carb_percent: i32,
    /// Fat share of calories (percent)
    pub fat_percent: i32,
}

impl MacroSplit {
    /// Calories implied by the gram amounts (4/4/9 kcal per gram)
    #[must_use]
    pub const fn calories_from_macros(&self) -> i32 {
        self.protein_grams * KCAL_PER_GRAM_PROTEIN
            + self.carb_grams * KCAL_PER_GRAM_CARB
            + self.fat_grams * KCAL_PER_GRAM_FAT
    }

    /// Sum of the reported percentages (not guaranteed to be exactly 100)
    #[must_use]
    pub const fn percent_total(&self) -> i32 {
        self.protein_percent + self.carb_percent + self.fat_percent
    }
}

/// Daily nutrition target attached to a user profile
///
/// Never mutated after computation; a new demographics snapshot produces a
/// new plan that replaces the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroPlan {
    /// Basal metabolic rate (kcal/day)
    pub bmr_calories: i32,
    /// Total daily energy expenditure (kcal/day)
    pub tdee_calories: i32,
    /// Goal-adjusted daily target (kcal/day)
    pub target_calories: i32,
    /// Daily protein (grams)
    pub protein_grams: i32,
    /// Daily carbohydrates (grams)
    pub carb_grams: i32,
    /// Daily fat (grams)
    pub fat_grams: i32,
    /// Protein share of calories (percent)
    pub protein_percent: i32,
    /// Carbohydrate share of calories (percent)
    pub carb_percent: i32,
    /// Fat share of calories (percent)
    pub fat_percent: i32,
}

impl MacroPlan {
    /// Assemble a plan from the pipeline stages
    #[must_use]
    pub const fn from_parts(
        bmr_calories: i32,
        tdee_calories: i32,
        target_calories: i32,
        split: MacroSplit,
    ) -> Self {
        Self {
            bmr_calories,
            tdee_calories,
            target_calories,
            protein_grams: split.protein_grams,
            carb_grams: split.carb_grams,
            fat_grams: split.fat_grams,
            protein_percent: split.protein_percent,
            carb_percent: split.carb_percent,
            fat_percent: split.fat_percent,
        }
    }

    /// The macro portion of the plan
    #[must_use]
    pub const fn split(&self) -> MacroSplit {
        MacroSplit {
            protein_grams: self.protein_grams,
            carb_grams: self.carb_grams,
            fat_grams: self.fat_grams,
            protein_percent: self.protein_percent,
            carb_percent: self.carb_percent,
            fat_percent: self.fat_percent,
        }
    }

    /// Calories implied by the gram amounts
    #[must_use]
    pub const fn calories_from_macros(&self) -> i32 {
        self.split().calories_from_macros()
    }

    /// Difference between macro-implied calories and the target (rounding slack)
    #[must_use]
    pub const fn calorie_drift(&self) -> i32 {
        self.calories_from_macros() - self.target_calories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_split() -> MacroSplit {
        MacroSplit {
            protein_grams: 150,
            carb_grams: 238,
            fat_grams: 50,
            protein_percent: 30,
            carb_percent: 48,
            fat_percent: 23,
        }
    }

    #[test]
    fn test_calories_from_macros() {
        assert_eq!(sample_split().calories_from_macros(), 2002);
        assert_eq!(sample_split().percent_total(), 101);
    }

    #[test]
    fn test_plan_drift_and_split_roundtrip() {
        let plan = MacroPlan::from_parts(1783, 2140, 2000, sample_split());

        assert_eq!(plan.split(), sample_split());
        assert_eq!(plan.calorie_drift(), 2);
    }

    #[test]
    fn test_serializes_camel_case_fields() {
        let plan = MacroPlan::from_parts(1783, 2140, 2000, sample_split());
        let json = serde_json::to_value(plan).unwrap();

        assert_eq!(json["bmrCalories"], 1783);
        assert_eq!(json["targetCalories"], 2000);
        assert_eq!(json["carbPercent"], 48);
    }
}
