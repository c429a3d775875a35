// ABOUTME: Domain service layer wiring validation, the macro engine, and profile storage
// ABOUTME: Provides transport-agnostic onboarding operations reusable by any caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services own the caller responsibilities around the engine: validate the
//! demographics, persist the resulting plan, and replace it on recompute.

/// Onboarding: demographics submission and plan lifecycle
pub mod onboarding;

pub use onboarding::OnboardingService;
