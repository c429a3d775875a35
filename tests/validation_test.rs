// ABOUTME: Tests for caller-side demographics validation and strict enum parsing
// ABOUTME: Covers range boundaries, missing selections, and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{female_demographics, male_demographics};
use macro_planner::errors::ErrorCode;
use macro_planner::intelligence::{CalorieStrategy, SplitStrategy};
use macro_planner::models::{ActivityLevel, BiologicalSex, Demographics, Goal};
use macro_planner::validation::{validate_age, validate_demographics, validate_height};

#[test]
fn test_reference_profiles_are_valid() {
    validate_demographics(&male_demographics(ActivityLevel::Sedentary, Goal::Maintenance)).unwrap();
    validate_demographics(&female_demographics(ActivityLevel::VeryActive, Goal::WeightLoss))
        .unwrap();
}

#[test]
fn test_age_boundaries() {
    assert!(validate_age(13).is_ok());
    assert!(validate_age(120).is_ok());

    for age in [0, 12, 121] {
        let err = validate_age(age).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.http_status(), 400);
    }
}

#[test]
fn test_inches_component_must_be_below_twelve() {
    let err = validate_height(5, 12).unwrap_err();

    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.context.details["field"], "heightInches");
}

#[test]
fn test_total_height_bounds() {
    assert!(validate_height(3, 0).is_ok());
    assert!(validate_height(7, 11).is_ok());
    assert!(validate_height(2, 11).is_err());
    assert!(validate_height(9, 0).is_err());
}

#[test]
fn test_weight_bounds_in_full_validation() {
    let mut demographics = male_demographics(ActivityLevel::Sedentary, Goal::Maintenance);

    for weight in [0.0, -10.0, 49.0, 1000.5, f64::NAN] {
        demographics.weight_pounds = weight;
        let err = validate_demographics(&demographics).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "weight {weight}");
        assert_eq!(err.context.details["field"], "weightPounds");
    }
}

#[test]
fn test_unspecified_activity_is_missing_field() {
    let demographics = male_demographics(ActivityLevel::from_str_lossy("couch"), Goal::Maintenance);
    let err = validate_demographics(&demographics).unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.context.details["field"], "activityLevel");
}

#[test]
fn test_unspecified_goal_is_missing_field() {
    let demographics = male_demographics(ActivityLevel::Sedentary, Goal::Unspecified);
    let err = validate_demographics(&demographics).unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.context.details["field"], "goal");
}

#[test]
fn test_numeric_errors_reported_before_selections() {
    let demographics = Demographics::new(
        10,
        BiologicalSex::Other,
        5,
        5,
        120.0,
        ActivityLevel::Unspecified,
        Goal::Unspecified,
    );

    let err = validate_demographics(&demographics).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_other_sex_is_accepted() {
    let mut demographics = female_demographics(ActivityLevel::Sedentary, Goal::Maintenance);
    demographics.biological_sex = BiologicalSex::Other;

    assert!(validate_demographics(&demographics).is_ok());
}

#[test]
fn test_strict_parsing_accepts_form_variants() {
    assert_eq!("Very_Active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
    assert_eq!("extra active".parse::<ActivityLevel>().unwrap(), ActivityLevel::ExtremelyActive);
    assert_eq!("Weight-Loss".parse::<Goal>().unwrap(), Goal::WeightLoss);
    assert_eq!("F".parse::<BiologicalSex>().unwrap(), BiologicalSex::Female);
    assert_eq!("offset".parse::<CalorieStrategy>().unwrap(), CalorieStrategy::FixedOffset);
    assert_eq!("ratio".parse::<SplitStrategy>().unwrap(), SplitStrategy::RatioBased);
}

#[test]
fn test_strict_parsing_rejects_unknown_with_options() {
    let err = "couch-potato".parse::<ActivityLevel>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("moderately-active"));

    let err = "shred".parse::<Goal>().unwrap_err();
    assert!(err.message.contains("weight-loss"));

    assert!("half".parse::<CalorieStrategy>().is_err());
}
