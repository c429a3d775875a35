// ABOUTME: User profile records carrying the stored macro plan and the storage trait
// ABOUTME: ProfileStore abstracts persistence so the onboarding service stays backend-agnostic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Storage
//!
//! A profile is keyed by a caller-assigned user id. The macro fields are a
//! single attached record that is replaced wholesale on every recompute.

/// In-memory `ProfileStore` backed by `DashMap`
pub mod memory;

pub use memory::InMemoryProfileStore;

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use macro_planner_core::intelligence::{CalorieStrategy, SplitStrategy};
use macro_planner_core::models::{Demographics, MacroPlan};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro fields attached to a user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroProfile {
    /// Computed plan
    pub plan: MacroPlan,
    /// Demographics snapshot the plan was computed from
    pub demographics: Demographics,
    /// Calorie strategy in effect at computation time
    pub calorie_strategy: CalorieStrategy,
    /// Split strategy in effect at computation time
    pub split_strategy: SplitStrategy,
    /// When the plan was computed
    pub computed_at: DateTime<Utc>,
}

/// User profile record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Caller-assigned identifier
    pub user_id: Uuid,
    /// Attached macro plan, absent until onboarding completes
    pub macro_profile: Option<MacroProfile>,
    /// First write
    pub created_at: DateTime<Utc>,
    /// Last write
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create an empty profile
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            macro_profile: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stored plan, if any
    #[must_use]
    pub fn plan(&self) -> Option<&MacroPlan> {
        self.macro_profile.as_ref().map(|profile| &profile.plan)
    }
}

/// Profile persistence
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a profile by user id
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Attach a macro profile, creating the user profile if needed
    ///
    /// Any previously stored macro profile is replaced.
    async fn save_macro_profile(
        &self,
        user_id: Uuid,
        macro_profile: MacroProfile,
    ) -> AppResult<UserProfile>;

    /// Remove the macro profile; returns whether one was present
    async fn clear_macro_profile(&self, user_id: Uuid) -> AppResult<bool>;

    /// All known user ids
    async fn list_user_ids(&self) -> AppResult<Vec<Uuid>>;
}
