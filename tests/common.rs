// ABOUTME: Shared test utilities and fixtures for macro planner integration tests
// ABOUTME: Provides quiet logging setup, demographics fixtures, and service construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `macro_planner`

use macro_planner::config::nutrition::env_vars;
use macro_planner::intelligence::MacroEngine;
use macro_planner::models::{ActivityLevel, BiologicalSex, Demographics, Goal};
use macro_planner::profiles::InMemoryProfileStore;
use macro_planner::services::OnboardingService;
use std::env;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Remove every `MACRO_*` override so config tests start from defaults
pub fn clear_macro_env() {
    for var in env_vars::ALL {
        env::remove_var(var);
    }
}

/// 30-year-old male, 5'10", 180 lb (BMR 1783)
pub fn male_demographics(activity_level: ActivityLevel, goal: Goal) -> Demographics {
    Demographics::new(
        30,
        BiologicalSex::Male,
        5,
        10,
        180.0,
        activity_level,
        goal,
    )
}

/// 25-year-old female, 5'5", 130 lb (BMR 1336)
pub fn female_demographics(activity_level: ActivityLevel, goal: Goal) -> Demographics {
    Demographics::new(
        25,
        BiologicalSex::Female,
        5,
        5,
        130.0,
        activity_level,
        goal,
    )
}

/// Onboarding service over a fresh in-memory store
pub fn create_test_service(
    engine: MacroEngine,
) -> (OnboardingService<InMemoryProfileStore>, Arc<InMemoryProfileStore>) {
    init_test_logging();
    let store = Arc::new(InMemoryProfileStore::new());
    (OnboardingService::new(engine, Arc::clone(&store)), store)
}
