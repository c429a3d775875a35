// ABOUTME: Tests for macro engine configuration loading, env overrides, and validation
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{clear_macro_env, male_demographics};
use macro_planner::config::nutrition::env_vars;
use macro_planner::config::{ConfigError, MacroEngineConfig, MacroRatio};
use macro_planner::errors::{AppError, ErrorCode};
use macro_planner::intelligence::{CalorieStrategy, MacroEngine, SplitStrategy};
use macro_planner::models::{ActivityLevel, Goal};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_macro_env();

    let config = MacroEngineConfig::load().unwrap();
    assert_eq!(config, MacroEngineConfig::default());
    assert_eq!(config.calorie_adjustment.strategy, CalorieStrategy::PercentOfTdee);
    assert_eq!(config.macro_distribution.strategy, SplitStrategy::RatioBased);
}

#[test]
#[serial]
fn test_strategy_overrides_from_env() {
    clear_macro_env();
    env::set_var(env_vars::CALORIE_STRATEGY, "fixed-offset");
    env::set_var(env_vars::SPLIT_STRATEGY, "body_weight");

    let config = MacroEngineConfig::load().unwrap();
    clear_macro_env();

    assert_eq!(config.calorie_adjustment.strategy, CalorieStrategy::FixedOffset);
    assert_eq!(config.macro_distribution.strategy, SplitStrategy::BodyWeight);

    let plan = MacroEngine::new(config)
        .compute_macro_goals(&male_demographics(ActivityLevel::Sedentary, Goal::WeightLoss));
    assert_eq!(plan.target_calories, 1640);
    assert_eq!(plan.protein_grams, 180);
}

#[test]
#[serial]
fn test_numeric_overrides_from_env() {
    clear_macro_env();
    env::set_var(env_vars::WEIGHT_LOSS_FACTOR, "0.8");
    env::set_var(env_vars::WEIGHT_LOSS_OFFSET, "-400");
    env::set_var(env_vars::PROTEIN_G_PER_LB, "0.8");
    env::set_var(env_vars::UNKNOWN_ACTIVITY_FACTOR, "1.375");

    let config = MacroEngineConfig::load().unwrap();
    clear_macro_env();

    assert!((config.calorie_adjustment.weight_loss_factor - 0.8).abs() < f64::EPSILON);
    assert_eq!(config.calorie_adjustment.weight_loss_offset, -400);
    assert!((config.macro_distribution.protein_g_per_lb - 0.8).abs() < f64::EPSILON);

    let engine = MacroEngine::new(config);
    assert_eq!(
        engine.compute_calorie_target(2000, Goal::WeightLoss, CalorieStrategy::PercentOfTdee),
        1600
    );
    assert_eq!(
        engine.compute_calorie_target(2000, Goal::WeightLoss, CalorieStrategy::FixedOffset),
        1600
    );
    assert_eq!(engine.compute_tdee(2000, ActivityLevel::Unspecified), 2750);
    assert_eq!(
        engine
            .compute_macro_split(2000, 150.0, Goal::Maintenance, SplitStrategy::BodyWeight)
            .protein_grams,
        120
    );
}

#[test]
#[serial]
fn test_unparseable_override_is_parse_error() {
    clear_macro_env();
    env::set_var(env_vars::SURPLUS_FACTOR, "a lot");

    let result = MacroEngineConfig::load();
    clear_macro_env();

    match result {
        Err(ConfigError::Parse(msg)) => assert!(msg.contains(env_vars::SURPLUS_FACTOR)),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_unknown_strategy_override_is_parse_error() {
    clear_macro_env();
    env::set_var(env_vars::SPLIT_STRATEGY, "keto");

    let result = MacroEngineConfig::load();
    clear_macro_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_macro_env();
    env::set_var(env_vars::FAT_CALORIE_FRACTION, "1.5");

    let result = MacroEngineConfig::load();
    clear_macro_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_positive_gain_offset_rules() {
    clear_macro_env();
    env::set_var(env_vars::MUSCLE_GAIN_OFFSET, "-50");

    let result = MacroEngineConfig::load();
    clear_macro_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_ratio_must_sum_to_one() {
    let mut config = MacroEngineConfig::default();
    config.macro_distribution.ratios.weight_loss = MacroRatio::new(0.40, 0.35, 0.35);

    match config.validate() {
        Err(ConfigError::InvalidWeights(msg)) => assert!(msg.contains("weight_loss")),
        other => panic!("expected invalid weights, got {other:?}"),
    }
}

#[test]
fn test_ratio_fraction_bounds() {
    let mut config = MacroEngineConfig::default();
    config.macro_distribution.ratios.maintenance = MacroRatio::new(1.2, -0.1, -0.1);

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_activity_factor_bounds() {
    let mut config = MacroEngineConfig::default();
    config.activity_factors.extremely_active = 2.6;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = MacroEngineConfig::default();
    config.activity_factors.unspecified = 0.9;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_custom_tables_change_results() {
    let mut config = MacroEngineConfig::default();
    config.macro_distribution.ratios.maintenance = MacroRatio::new(0.30, 0.40, 0.30);
    config.validate().unwrap();

    let split = MacroEngine::new(config).compute_macro_split(
        2000,
        150.0,
        Goal::Maintenance,
        SplitStrategy::RatioBased,
    );
    assert_eq!(split.protein_grams, 150);
    assert_eq!(split.fat_grams, 67);
    assert_eq!(split.fat_percent, 30);
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::ValueOutOfRange("Surplus factor must be between 1.0 and 2.0").into();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("Surplus factor"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_config_serializes_strategy_names() {
    let config = MacroEngineConfig::default()
        .with_strategies(CalorieStrategy::FixedOffset, SplitStrategy::BodyWeight);
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["calorie_adjustment"]["strategy"], "fixed-offset");
    assert_eq!(json["macro_distribution"]["strategy"], "body-weight");
    assert_eq!(json["activity_factors"]["very_active"], 1.725);

    let parsed: MacroEngineConfig = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.calorie_adjustment.strategy, CalorieStrategy::FixedOffset);
}

#[test]
fn test_describe_lists_active_strategies() {
    let config = MacroEngineConfig::default()
        .with_strategies(CalorieStrategy::FixedOffset, SplitStrategy::BodyWeight);

    let summary = config.describe().unwrap();

    assert_eq!(summary["calorieStrategy"]["name"], "fixed-offset");
    assert!(summary["calorieStrategy"]["description"]
        .as_str()
        .unwrap()
        .contains("-500"));
    assert_eq!(summary["splitStrategy"]["name"], "body-weight");
    assert!(summary["splitStrategy"]["description"]
        .as_str()
        .unwrap()
        .contains("per lb"));
    assert_eq!(summary["config"]["bmr"], serde_json::to_value(&config.bmr).unwrap());
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_env_value_is_env_var_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_macro_env();
    env::set_var(env_vars::SPLIT_STRATEGY, OsStr::from_bytes(&[0x66, 0xff, 0x6f]));

    let result = MacroEngineConfig::load();
    clear_macro_env();

    assert!(matches!(result, Err(ConfigError::EnvVar(_))));
    let error: AppError = result.unwrap_err().into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
