// ABOUTME: Macro engine: Mifflin-St Jeor BMR, TDEE, goal-adjusted calorie target, and macro split
// ABOUTME: Stateless pure pipeline that turns a Demographics snapshot into a MacroPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Engine
//!
//! Computes a daily nutrition target from onboarding demographics:
//! BMR, then TDEE, then a goal-adjusted calorie target, then the protein,
//! carbohydrate and fat split.
//!
//! Every stage is total. Unknown activity levels and goals fall back
//! silently (1.2 multiplier, no calorie adjustment, maintenance ratios) and
//! out-of-domain numbers flow straight through the arithmetic. Range checks
//! belong to the caller, see [`crate::validation::validate_demographics`].
//!
//! All intermediate values are `f64`; each stage rounds half-up to a whole
//! number exactly once, on its final value.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, MacroDistributionConfig,
    MacroEngineConfig,
};
use macro_planner_core::constants::energy::{
    KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use macro_planner_core::intelligence::{CalorieStrategy, SplitStrategy};
use macro_planner_core::models::{
    ActivityLevel, BiologicalSex, Demographics, Goal, MacroPlan, MacroSplit,
};

/// Round to the nearest integer, ties toward positive infinity
///
/// `f64::round` rounds ties away from zero, which differs for negative
/// halves (-2.5 becomes -3 instead of -2).
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula:
/// - Men: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5
/// - Everyone else: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161
///
/// Pounds and feet/inches are converted first; the sum is rounded once.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(demographics: &Demographics, config: &BmrConfig) -> i32 {
    let weight_kg = demographics.weight_kg();
    let height_cm = demographics.height_cm();

    let base = config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(demographics.age_years);

    let sex_constant = match demographics.biological_sex {
        BiologicalSex::Male => config.msj_male_constant,
        BiologicalSex::Female | BiologicalSex::Other => config.msj_female_constant,
    };

    round_half_up(base + sex_constant)
}

/// Calculate Total Daily Energy Expenditure: TDEE = BMR x activity factor
///
/// `ActivityLevel::Unspecified` uses the configured fallback (1.2).
#[must_use]
pub fn calculate_tdee(bmr: i32, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> i32 {
    round_half_up(f64::from(bmr) * config.factor_for(activity_level))
}

/// Adjust TDEE for the goal under the given strategy
///
/// Maintenance and unrecognized goals leave TDEE unchanged under both
/// strategies.
#[must_use]
pub fn calculate_calorie_target(
    tdee: i32,
    goal: Goal,
    strategy: CalorieStrategy,
    config: &CalorieAdjustmentConfig,
) -> i32 {
    match strategy {
        CalorieStrategy::PercentOfTdee => match goal {
            Goal::Maintenance | Goal::Unspecified => tdee,
            Goal::WeightLoss | Goal::MuscleGain | Goal::WeightGain => {
                round_half_up(f64::from(tdee) * config.factor_for(goal))
            }
        },
        CalorieStrategy::FixedOffset => tdee + config.offset_for(goal),
    }
}

/// Distribute a calorie target into macro grams and percentages
///
/// Non-positive targets are not guarded; they produce zero or negative
/// grams. A zero target under the body-weight strategy reports zero
/// percentages instead of dividing by zero.
#[must_use]
pub fn calculate_macro_split(
    target_calories: i32,
    weight_pounds: f64,
    goal: Goal,
    strategy: SplitStrategy,
    config: &MacroDistributionConfig,
) -> MacroSplit {
    match strategy {
        SplitStrategy::RatioBased => ratio_split(target_calories, goal, config),
        SplitStrategy::BodyWeight => body_weight_split(target_calories, weight_pounds, config),
    }
}

/// Fixed per-goal calorie fractions; percentages are the fractions themselves
fn ratio_split(target_calories: i32, goal: Goal, config: &MacroDistributionConfig) -> MacroSplit {
    let ratio = config.ratios.ratio_for(goal);
    let target = f64::from(target_calories);

    MacroSplit {
        protein_grams: round_half_up(target * ratio.protein / f64::from(KCAL_PER_GRAM_PROTEIN)),
        carb_grams: round_half_up(target * ratio.carbs / f64::from(KCAL_PER_GRAM_CARB)),
        fat_grams: round_half_up(target * ratio.fat / f64::from(KCAL_PER_GRAM_FAT)),
        protein_percent: round_half_up(ratio.protein * 100.0),
        carb_percent: round_half_up(ratio.carbs * 100.0),
        fat_percent: round_half_up(ratio.fat * 100.0),
    }
}

/// Protein from body weight, fat as a calorie share, carbs fill the remainder
///
/// Percentages are recomputed from the rounded grams, so they need not sum
/// to exactly 100.
fn body_weight_split(
    target_calories: i32,
    weight_pounds: f64,
    config: &MacroDistributionConfig,
) -> MacroSplit {
    let target = f64::from(target_calories);

    let protein_grams = round_half_up(weight_pounds * config.protein_g_per_lb);
    let fat_calories = target * config.fat_calorie_fraction;
    let fat_grams = round_half_up(fat_calories / f64::from(KCAL_PER_GRAM_FAT));
    let carb_calories =
        target - f64::from(protein_grams * KCAL_PER_GRAM_PROTEIN) - fat_calories;
    let carb_grams = round_half_up(carb_calories / f64::from(KCAL_PER_GRAM_CARB));

    let percent_of_target = |calories: i32| {
        if target_calories == 0 {
            0
        } else {
            round_half_up(f64::from(calories) / target * 100.0)
        }
    };

    MacroSplit {
        protein_grams,
        carb_grams,
        fat_grams,
        protein_percent: percent_of_target(protein_grams * KCAL_PER_GRAM_PROTEIN),
        carb_percent: percent_of_target(carb_grams * KCAL_PER_GRAM_CARB),
        fat_percent: percent_of_target(fat_grams * KCAL_PER_GRAM_FAT),
    }
}

/// Run the full pipeline with the strategies selected in `config`
#[must_use]
pub fn calculate_macro_goals(demographics: &Demographics, config: &MacroEngineConfig) -> MacroPlan {
    let bmr = calculate_bmr(demographics, &config.bmr);
    let tdee = calculate_tdee(bmr, demographics.activity_level, &config.activity_factors);
    let target = calculate_calorie_target(
        tdee,
        demographics.goal,
        config.calorie_adjustment.strategy,
        &config.calorie_adjustment,
    );
    let split = calculate_macro_split(
        target,
        demographics.weight_pounds,
        demographics.goal,
        config.macro_distribution.strategy,
        &config.macro_distribution,
    );

    MacroPlan::from_parts(bmr, tdee, target, split)
}

/// Macro engine bound to one configuration
///
/// The strategy pair is fixed per instance; build a second engine to
/// compare strategies side by side.
#[derive(Debug, Clone, Default)]
pub struct MacroEngine {
    config: MacroEngineConfig,
}

impl MacroEngine {
    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn new(config: MacroEngineConfig) -> Self {
        Self { config }
    }

    /// Create a default-table engine with the given strategies
    #[must_use]
    pub fn with_strategies(calorie: CalorieStrategy, split: SplitStrategy) -> Self {
        Self::new(MacroEngineConfig::default().with_strategies(calorie, split))
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &MacroEngineConfig {
        &self.config
    }

    /// Calorie strategy used by [`Self::compute_macro_goals`]
    #[must_use]
    pub const fn calorie_strategy(&self) -> CalorieStrategy {
        self.config.calorie_adjustment.strategy
    }

    /// Split strategy used by [`Self::compute_macro_goals`]
    #[must_use]
    pub const fn split_strategy(&self) -> SplitStrategy {
        self.config.macro_distribution.strategy
    }

    /// BMR in kcal/day
    #[must_use]
    pub fn compute_bmr(&self, demographics: &Demographics) -> i32 {
        calculate_bmr(demographics, &self.config.bmr)
    }

    /// TDEE in kcal/day
    #[must_use]
    pub fn compute_tdee(&self, bmr: i32, activity_level: ActivityLevel) -> i32 {
        calculate_tdee(bmr, activity_level, &self.config.activity_factors)
    }

    /// Goal-adjusted calorie target with an explicit strategy
    #[must_use]
    pub fn compute_calorie_target(&self, tdee: i32, goal: Goal, strategy: CalorieStrategy) -> i32 {
        calculate_calorie_target(tdee, goal, strategy, &self.config.calorie_adjustment)
    }

    /// Macro split with an explicit strategy
    #[must_use]
    pub fn compute_macro_split(
        &self,
        target_calories: i32,
        weight_pounds: f64,
        goal: Goal,
        strategy: SplitStrategy,
    ) -> MacroSplit {
        calculate_macro_split(
            target_calories,
            weight_pounds,
            goal,
            strategy,
            &self.config.macro_distribution,
        )
    }

    /// Full plan: BMR, TDEE, calorie target, then macro split
    #[must_use]
    pub fn compute_macro_goals(&self, demographics: &Demographics) -> MacroPlan {
        calculate_macro_goals(demographics, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.499), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_bmr_other_sex_uses_female_constant() {
        let config = BmrConfig::default();
        let mut demographics = Demographics::new(
            25,
            BiologicalSex::Female,
            5,
            5,
            130.0,
            ActivityLevel::Sedentary,
            Goal::Maintenance,
        );
        let female = calculate_bmr(&demographics, &config);
        demographics.biological_sex = BiologicalSex::Other;

        assert_eq!(female, 1336);
        assert_eq!(calculate_bmr(&demographics, &config), female);
    }

    #[test]
    fn test_offset_strategy_ignores_rounding() {
        let config = CalorieAdjustmentConfig::default();

        assert_eq!(
            calculate_calorie_target(2000, Goal::MuscleGain, CalorieStrategy::FixedOffset, &config),
            2200
        );
        assert_eq!(
            calculate_calorie_target(2000, Goal::Unspecified, CalorieStrategy::FixedOffset, &config),
            2000
        );
    }

    #[test]
    fn test_zero_target_body_weight_split_has_zero_percentages() {
        let split = calculate_macro_split(
            0,
            150.0,
            Goal::Maintenance,
            SplitStrategy::BodyWeight,
            &MacroDistributionConfig::default(),
        );

        assert_eq!(split.protein_grams, 150);
        assert_eq!(split.fat_grams, 0);
        assert_eq!(split.carb_grams, -150);
        assert_eq!(split.percent_total(), 0);
    }

    #[test]
    fn test_negative_target_is_not_guarded() {
        let split = calculate_macro_split(
            -400,
            100.0,
            Goal::Maintenance,
            SplitStrategy::RatioBased,
            &MacroDistributionConfig::default(),
        );

        assert_eq!(split.protein_grams, -25);
        assert_eq!(split.carb_grams, -40);
        assert_eq!(split.protein_percent, 25);
    }
}
