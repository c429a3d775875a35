// ABOUTME: Macro engine configuration: BMR coefficients, activity factors, and strategy tables
// ABOUTME: Loads defaults, applies environment overrides, validates, and exposes a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Engine Configuration
//!
//! Every constant the engine uses lives here as an immutable table with a
//! `Default` impl. The defaults reproduce the onboarding calculator exactly;
//! environment variables can override individual values for a deployment.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology

use super::error::ConfigError;
use macro_planner_core::errors::AppResult;
use macro_planner_core::intelligence::{CalorieStrategy, SplitStrategy};
use macro_planner_core::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Environment variable names for configuration overrides
pub mod env_vars {
    /// Calorie adjustment strategy (`percent-of-tdee` or `fixed-offset`)
    pub const CALORIE_STRATEGY: &str = "MACRO_CALORIE_STRATEGY";
    /// Macro split strategy (`ratio-based` or `body-weight`)
    pub const SPLIT_STRATEGY: &str = "MACRO_SPLIT_STRATEGY";
    /// Protein grams per pound for the body-weight split
    pub const PROTEIN_G_PER_LB: &str = "MACRO_PROTEIN_G_PER_LB";
    /// Fat share of calories for the body-weight split
    pub const FAT_CALORIE_FRACTION: &str = "MACRO_FAT_CALORIE_FRACTION";
    /// TDEE multiplier for weight loss under the percentage strategy
    pub const WEIGHT_LOSS_FACTOR: &str = "MACRO_WEIGHT_LOSS_FACTOR";
    /// TDEE multiplier for gain goals under the percentage strategy
    pub const SURPLUS_FACTOR: &str = "MACRO_SURPLUS_FACTOR";
    /// Calorie offset for weight loss under the offset strategy
    pub const WEIGHT_LOSS_OFFSET: &str = "MACRO_WEIGHT_LOSS_OFFSET";
    /// Calorie offset for weight gain under the offset strategy
    pub const WEIGHT_GAIN_OFFSET: &str = "MACRO_WEIGHT_GAIN_OFFSET";
    /// Calorie offset for muscle gain under the offset strategy
    pub const MUSCLE_GAIN_OFFSET: &str = "MACRO_MUSCLE_GAIN_OFFSET";
    /// Multiplier used when no recognized activity level was selected
    pub const UNKNOWN_ACTIVITY_FACTOR: &str = "MACRO_UNKNOWN_ACTIVITY_FACTOR";

    /// Every override, for tests that need a clean environment
    pub const ALL: [&str; 10] = [
        CALORIE_STRATEGY,
        SPLIT_STRATEGY,
        PROTEIN_G_PER_LB,
        FAT_CALORIE_FRACTION,
        WEIGHT_LOSS_FACTOR,
        SURPLUS_FACTOR,
        WEIGHT_LOSS_OFFSET,
        WEIGHT_GAIN_OFFSET,
        MUSCLE_GAIN_OFFSET,
        UNKNOWN_ACTIVITY_FACTOR,
    ];
}

/// Global configuration singleton
static MACRO_ENGINE_CONFIG: OnceLock<MacroEngineConfig> = OnceLock::new();

/// Complete macro engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroEngineConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-driven calorie target adjustment
    pub calorie_adjustment: CalorieAdjustmentConfig,
    /// Distribution of the target into macros
    pub macro_distribution: MacroDistributionConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0 per kg)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25 per cm)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0 per year)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Constant for every non-male value (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Lightly active: 1.375
    pub lightly_active: f64,
    /// Moderately active: 1.55
    pub moderately_active: f64,
    /// Very active: 1.725
    pub very_active: f64,
    /// Extremely active: 1.9
    pub extremely_active: f64,
    /// Missing or unrecognized level: 1.2
    pub unspecified: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
            ActivityLevel::Unspecified => self.unspecified,
        }
    }
}

/// Goal-driven calorie target configuration for both strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieAdjustmentConfig {
    /// Strategy used by `compute_macro_goals`
    pub strategy: CalorieStrategy,
    /// Percentage strategy: weight-loss multiplier (0.85, a 15% deficit)
    pub weight_loss_factor: f64,
    /// Percentage strategy: muscle-gain and weight-gain multiplier (1.12)
    pub surplus_factor: f64,
    /// Offset strategy: weight-loss offset (-500 kcal)
    pub weight_loss_offset: i32,
    /// Offset strategy: weight-gain offset (+300 kcal)
    pub weight_gain_offset: i32,
    /// Offset strategy: muscle-gain offset (+200 kcal)
    pub muscle_gain_offset: i32,
}

impl CalorieAdjustmentConfig {
    /// TDEE multiplier for a goal under the percentage strategy
    #[must_use]
    pub const fn factor_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::WeightLoss => self.weight_loss_factor,
            Goal::MuscleGain | Goal::WeightGain => self.surplus_factor,
            Goal::Maintenance | Goal::Unspecified => 1.0,
        }
    }

    /// Calorie offset for a goal under the offset strategy
    #[must_use]
    pub const fn offset_for(&self, goal: Goal) -> i32 {
        match goal {
            Goal::WeightLoss => self.weight_loss_offset,
            Goal::WeightGain => self.weight_gain_offset,
            Goal::MuscleGain => self.muscle_gain_offset,
            Goal::Maintenance | Goal::Unspecified => 0,
        }
    }
}

/// Protein/carb/fat calorie fractions for the ratio-based split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    /// Protein fraction of calories (0.0-1.0)
    pub protein: f64,
    /// Carbohydrate fraction of calories (0.0-1.0)
    pub carbs: f64,
    /// Fat fraction of calories (0.0-1.0)
    pub fat: f64,
}

impl MacroRatio {
    /// Create a ratio from calorie fractions
    #[must_use]
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Sum of the three fractions
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Per-goal ratio table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRatiosConfig {
    /// Weight loss: 30/35/35
    pub weight_loss: MacroRatio,
    /// Muscle gain: 25/45/30
    pub muscle_gain: MacroRatio,
    /// Weight gain: 20/50/30
    pub weight_gain: MacroRatio,
    /// Maintenance and unrecognized goals: 25/40/35
    pub maintenance: MacroRatio,
}

impl GoalRatiosConfig {
    /// Ratio for a goal; unrecognized goals use the maintenance ratio
    #[must_use]
    pub const fn ratio_for(&self, goal: Goal) -> MacroRatio {
        match goal {
            Goal::WeightLoss => self.weight_loss,
            Goal::MuscleGain => self.muscle_gain,
            Goal::WeightGain => self.weight_gain,
            Goal::Maintenance | Goal::Unspecified => self.maintenance,
        }
    }
}

/// Macro distribution configuration for both split strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroDistributionConfig {
    /// Strategy used by `compute_macro_goals`
    pub strategy: SplitStrategy,
    /// Ratio strategy table
    pub ratios: GoalRatiosConfig,
    /// Body-weight strategy: protein grams per pound of body weight (1.0)
    pub protein_g_per_lb: f64,
    /// Body-weight strategy: fat share of calories (0.225)
    pub fat_calorie_fraction: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extremely_active: 1.9,
            unspecified: 1.2,
        }
    }
}

impl Default for CalorieAdjustmentConfig {
    fn default() -> Self {
        Self {
            strategy: CalorieStrategy::default(),
            weight_loss_factor: 0.85,
            surplus_factor: 1.12,
            weight_loss_offset: -500,
            weight_gain_offset: 300,
            muscle_gain_offset: 200,
        }
    }
}

impl Default for GoalRatiosConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroRatio::new(0.30, 0.35, 0.35),
            muscle_gain: MacroRatio::new(0.25, 0.45, 0.30),
            weight_gain: MacroRatio::new(0.20, 0.50, 0.30),
            maintenance: MacroRatio::new(0.25, 0.40, 0.35),
        }
    }
}

impl Default for MacroDistributionConfig {
    fn default() -> Self {
        Self {
            strategy: SplitStrategy::default(),
            ratios: GoalRatiosConfig::default(),
            protein_g_per_lb: 1.0,
            fat_calorie_fraction: 0.225,
        }
    }
}

impl MacroEngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        MACRO_ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load macro engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Same configuration with both strategies replaced
    #[must_use]
    pub fn with_strategies(mut self, calorie: CalorieStrategy, split: SplitStrategy) -> Self {
        self.calorie_adjustment.strategy = calorie;
        self.macro_distribution.strategy = split;
        self
    }

    /// Active strategies with their formulas, followed by the full tables
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the tables cannot be converted to JSON
    pub fn describe(&self) -> AppResult<Value> {
        let calorie = self.calorie_adjustment.strategy;
        let split = self.macro_distribution.strategy;
        Ok(json!({
            "calorieStrategy": { "name": calorie.name(), "description": calorie.description() },
            "splitStrategy": { "name": split.name(), "description": split.description() },
            "config": serde_json::to_value(self)?,
        }))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_bmr()?;
        self.validate_activity_factors()?;
        self.validate_calorie_adjustment()?;
        self.validate_macro_distribution()
    }

    fn validate_bmr(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.bmr.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }
        Ok(())
    }

    fn validate_activity_factors(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.extremely_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extremely_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        if !(1.0..=2.5).contains(&factors.unspecified) {
            return Err(ConfigError::ValueOutOfRange(
                "Unknown activity factor must be between 1.0 and 2.5",
            ));
        }
        Ok(())
    }

    fn validate_calorie_adjustment(&self) -> Result<(), ConfigError> {
        let adjustment = &self.calorie_adjustment;
        if adjustment.weight_loss_factor <= 0.0 || adjustment.weight_loss_factor > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weight loss factor must be in (0.0, 1.0]",
            ));
        }
        if !(1.0..=2.0).contains(&adjustment.surplus_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "Surplus factor must be between 1.0 and 2.0",
            ));
        }
        if adjustment.weight_loss_offset > 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weight loss offset must not be positive",
            ));
        }
        if adjustment.weight_gain_offset < 0 || adjustment.muscle_gain_offset < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Gain offsets must not be negative",
            ));
        }
        Ok(())
    }

    fn validate_macro_distribution(&self) -> Result<(), ConfigError> {
        let distribution = &self.macro_distribution;
        let ratios = [
            ("weight_loss", distribution.ratios.weight_loss),
            ("muscle_gain", distribution.ratios.muscle_gain),
            ("weight_gain", distribution.ratios.weight_gain),
            ("maintenance", distribution.ratios.maintenance),
        ];

        for (name, ratio) in ratios {
            let fractions = [ratio.protein, ratio.carbs, ratio.fat];
            if fractions.iter().any(|f| !(0.0..=1.0).contains(f)) {
                return Err(ConfigError::ValueOutOfRange(
                    "Macro ratios must be fractions between 0.0 and 1.0",
                ));
            }
            let total = ratio.total();
            if (total - 1.0).abs() > 0.001 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro ratios must sum to 1.0, got {total:.3}"
                )));
            }
        }

        if distribution.protein_g_per_lb <= 0.0 || distribution.protein_g_per_lb > 3.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein must be in (0.0, 3.0] g per lb",
            ));
        }
        if distribution.fat_calorie_fraction <= 0.0 || distribution.fat_calorie_fraction >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fat calorie fraction must be in (0.0, 1.0)",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_vars::CALORIE_STRATEGY,
            &mut self.calorie_adjustment.strategy,
        )?;
        Self::apply_env_var(
            env_vars::SPLIT_STRATEGY,
            &mut self.macro_distribution.strategy,
        )?;

        Self::apply_env_var(
            env_vars::WEIGHT_LOSS_FACTOR,
            &mut self.calorie_adjustment.weight_loss_factor,
        )?;
        Self::apply_env_var(
            env_vars::SURPLUS_FACTOR,
            &mut self.calorie_adjustment.surplus_factor,
        )?;
        Self::apply_env_var(
            env_vars::WEIGHT_LOSS_OFFSET,
            &mut self.calorie_adjustment.weight_loss_offset,
        )?;
        Self::apply_env_var(
            env_vars::WEIGHT_GAIN_OFFSET,
            &mut self.calorie_adjustment.weight_gain_offset,
        )?;
        Self::apply_env_var(
            env_vars::MUSCLE_GAIN_OFFSET,
            &mut self.calorie_adjustment.muscle_gain_offset,
        )?;

        Self::apply_env_var(
            env_vars::PROTEIN_G_PER_LB,
            &mut self.macro_distribution.protein_g_per_lb,
        )?;
        Self::apply_env_var(
            env_vars::FAT_CALORIE_FRACTION,
            &mut self.macro_distribution.fat_calorie_fraction,
        )?;

        Self::apply_env_var(
            env_vars::UNKNOWN_ACTIVITY_FACTOR,
            &mut self.activity_factors.unspecified,
        )?;

        Ok(self)
    }
}
