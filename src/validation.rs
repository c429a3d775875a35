// ABOUTME: Caller-side validation of onboarding demographics before the macro engine runs
// ABOUTME: Range checks on age, height, and weight plus required enum selections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demographics validation
//!
//! The macro engine accepts any input and lets out-of-domain numbers flow
//! through its arithmetic. Callers that persist plans run these checks first.

use crate::errors::{AppError, AppResult};
use macro_planner_core::constants::limits::{
    MAX_AGE_YEARS, MAX_HEIGHT_INCHES_COMPONENT, MAX_TOTAL_HEIGHT_INCHES, MAX_WEIGHT_POUNDS,
    MIN_AGE_YEARS, MIN_TOTAL_HEIGHT_INCHES, MIN_WEIGHT_POUNDS,
};
use macro_planner_core::constants::units::INCHES_PER_FOOT;
use macro_planner_core::models::Demographics;

/// Validate age in years
///
/// # Errors
/// * Returns `AppError::ValueOutOfRange` outside 13-120
///
/// # Examples
/// ```
/// # use macro_planner::validation::validate_age;
/// assert!(validate_age(30).is_ok());
/// assert!(validate_age(12).is_err());
/// ```
pub fn validate_age(age_years: u32) -> AppResult<()> {
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age_years) {
        return Err(AppError::value_out_of_range(format!(
            "Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years, got {age_years}"
        ))
        .with_details(serde_json::json!({ "field": "ageYears" })));
    }
    Ok(())
}

/// Validate the feet/inches height pair
///
/// The inches component must be 0-11 and the total 36-96 inches.
///
/// # Errors
/// * Returns `AppError::ValueOutOfRange` if either check fails
///
/// # Examples
/// ```
/// # use macro_planner::validation::validate_height;
/// assert!(validate_height(5, 10).is_ok());
/// assert!(validate_height(5, 12).is_err());
/// assert!(validate_height(2, 11).is_err());
/// ```
pub fn validate_height(height_feet: u32, height_inches: u32) -> AppResult<()> {
    if height_inches > MAX_HEIGHT_INCHES_COMPONENT {
        return Err(AppError::value_out_of_range(format!(
            "Height inches must be between 0 and {MAX_HEIGHT_INCHES_COMPONENT}, got {height_inches}"
        ))
        .with_details(serde_json::json!({ "field": "heightInches" })));
    }

    let total = height_feet
        .saturating_mul(INCHES_PER_FOOT)
        .saturating_add(height_inches);
    if !(MIN_TOTAL_HEIGHT_INCHES..=MAX_TOTAL_HEIGHT_INCHES).contains(&total) {
        return Err(AppError::value_out_of_range(format!(
            "Height must be between {MIN_TOTAL_HEIGHT_INCHES} and {MAX_TOTAL_HEIGHT_INCHES} inches, got {total}"
        ))
        .with_details(serde_json::json!({ "field": "heightFeet" })));
    }
    Ok(())
}

/// Validate body weight in pounds
///
/// # Errors
/// * Returns `AppError::ValueOutOfRange` if not finite or outside 50-1000 lb
///
/// # Examples
/// ```
/// # use macro_planner::validation::validate_weight;
/// assert!(validate_weight(180.0).is_ok());
/// assert!(validate_weight(f64::NAN).is_err());
/// ```
pub fn validate_weight(weight_pounds: f64) -> AppResult<()> {
    if !weight_pounds.is_finite() || !(MIN_WEIGHT_POUNDS..=MAX_WEIGHT_POUNDS).contains(&weight_pounds)
    {
        return Err(AppError::value_out_of_range(format!(
            "Weight must be between {MIN_WEIGHT_POUNDS} and {MAX_WEIGHT_POUNDS} lb, got {weight_pounds}"
        ))
        .with_details(serde_json::json!({ "field": "weightPounds" })));
    }
    Ok(())
}

/// Validate a complete demographics snapshot
///
/// Numeric checks run first, then the required selections. Biological sex
/// is not required; unrecognized values use the non-male BMR constant.
///
/// # Errors
/// * `AppError::ValueOutOfRange` for age, height, or weight outside bounds
/// * `AppError::MissingRequiredField` if activity level or goal is unspecified
pub fn validate_demographics(demographics: &Demographics) -> AppResult<()> {
    validate_age(demographics.age_years)?;
    validate_height(demographics.height_feet, demographics.height_inches)?;
    validate_weight(demographics.weight_pounds)?;

    if !demographics.activity_level.is_specified() {
        return Err(AppError::missing_field("activityLevel"));
    }
    if !demographics.goal.is_specified() {
        return Err(AppError::missing_field("goal"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use macro_planner_core::errors::ErrorCode;

    #[test]
    fn test_height_boundaries() {
        assert!(validate_height(3, 0).is_ok());
        assert!(validate_height(8, 0).is_ok());
        assert!(validate_height(8, 1).is_err());
        assert!(validate_height(u32::MAX, 0).is_err());
    }

    #[test]
    fn test_weight_boundaries() {
        assert!(validate_weight(50.0).is_ok());
        assert!(validate_weight(1000.0).is_ok());
        assert!(validate_weight(49.9).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn test_age_error_carries_field() {
        let err = validate_age(121).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.context.details["field"], "ageYears");
    }
}
