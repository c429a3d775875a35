// ABOUTME: Error module re-exports from the macro-planner-core crate
// ABOUTME: Keeps `crate::errors` paths stable for validation, storage, and the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error types are defined in `macro-planner-core` so that models and
//! strategy parsing can return them without depending on this crate.

pub use macro_planner_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
