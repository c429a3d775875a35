// ABOUTME: Core types and constants for the wellness onboarding macro planner
// ABOUTME: Foundation crate with error handling, unit constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Planner Core
//!
//! Foundation crate providing shared types and constants for the macro
//! planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions, energy densities, and validation limits
//! - **models**: `Demographics` input and `MacroPlan` output records
//! - **intelligence**: Strategy selectors for calorie adjustment and macro distribution

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Demographics, MacroPlan, enums)
pub mod models;

/// Strategy types (`CalorieStrategy`, `SplitStrategy`)
pub mod intelligence;
