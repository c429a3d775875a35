// ABOUTME: Onboarding service: validates demographics, computes the macro plan, and stores it
// ABOUTME: Also serves the stored plan and recomputes it from the saved demographics snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::intelligence::MacroEngine;
use crate::logging::AppLogger;
use crate::profiles::{MacroProfile, ProfileStore};
use crate::validation::validate_demographics;
use chrono::Utc;
use macro_planner_core::models::{Demographics, MacroPlan};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Onboarding operations over a profile store
pub struct OnboardingService<S: ProfileStore> {
    engine: MacroEngine,
    store: Arc<S>,
}

impl<S: ProfileStore> OnboardingService<S> {
    /// Create a service with an explicit engine
    #[must_use]
    pub const fn new(engine: MacroEngine, store: Arc<S>) -> Self {
        Self { engine, store }
    }

    /// Engine used for computations
    #[must_use]
    pub const fn engine(&self) -> &MacroEngine {
        &self.engine
    }

    /// Validate, compute, and store a plan for the submitted demographics
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range or missing demographics,
    /// or a storage error if the plan cannot be saved
    pub async fn submit_demographics(
        &self,
        user_id: Uuid,
        demographics: Demographics,
    ) -> AppResult<MacroPlan> {
        if let Err(e) = validate_demographics(&demographics) {
            AppLogger::log_validation_failure(user_id, &e.message);
            return Err(e.with_user_id(user_id));
        }

        self.compute_and_store(user_id, demographics).await
    }

    /// Stored plan for a user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user has no profile or no plan yet
    pub async fn current_plan(&self, user_id: Uuid) -> AppResult<MacroPlan> {
        let profile = self.store.get_profile(user_id).await?;

        profile
            .and_then(|p| p.macro_profile)
            .map(|m| m.plan)
            .ok_or_else(|| {
                AppError::not_found("Macro plan")
                    .with_user_id(user_id)
                    .with_resource_id(user_id.to_string())
            })
    }

    /// Recompute the plan from the stored demographics with this service's engine
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if there is no stored demographics snapshot,
    /// or a storage error if the new plan cannot be saved
    pub async fn recompute(&self, user_id: Uuid) -> AppResult<MacroPlan> {
        let demographics = self
            .store
            .get_profile(user_id)
            .await?
            .and_then(|p| p.macro_profile)
            .map(|m| m.demographics)
            .ok_or_else(|| {
                AppError::not_found("Demographics snapshot")
                    .with_user_id(user_id)
                    .with_resource_id(user_id.to_string())
            })?;

        debug!(user.id = %user_id, "Recomputing macro plan from stored demographics");
        self.compute_and_store(user_id, demographics).await
    }

    async fn compute_and_store(
        &self,
        user_id: Uuid,
        demographics: Demographics,
    ) -> AppResult<MacroPlan> {
        let plan = self.engine.compute_macro_goals(&demographics);
        let calorie_strategy = self.engine.calorie_strategy();
        let split_strategy = self.engine.split_strategy();

        AppLogger::log_plan_computed(user_id, calorie_strategy, split_strategy, &plan);

        let macro_profile = MacroProfile {
            plan,
            demographics,
            calorie_strategy,
            split_strategy,
            computed_at: Utc::now(),
        };
        self.store
            .save_macro_profile(user_id, macro_profile)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        Ok(plan)
    }
}
