// ABOUTME: In-memory profile store for tests, the CLI, and single-process deployments
// ABOUTME: Uses DashMap sharded locking so concurrent onboarding requests do not contend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{MacroProfile, ProfileStore, UserProfile};
use crate::errors::AppResult;
use crate::logging::AppLogger;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// `ProfileStore` held entirely in memory
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<DashMap<Uuid, UserProfile>>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the store holds no profiles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self
            .profiles
            .get(&user_id)
            .map(|entry| entry.value().clone()))
    }

    async fn save_macro_profile(
        &self,
        user_id: Uuid,
        macro_profile: MacroProfile,
    ) -> AppResult<UserProfile> {
        // Entry API keeps create-or-replace atomic per user
        let mut entry = self
            .profiles
            .entry(user_id)
            .or_insert_with(|| UserProfile::new(user_id));
        let profile = entry.value_mut();
        profile.macro_profile = Some(macro_profile);
        profile.updated_at = Utc::now();

        AppLogger::log_profile_operation("save_macro_profile", user_id, true);
        Ok(profile.clone())
    }

    async fn clear_macro_profile(&self, user_id: Uuid) -> AppResult<bool> {
        let cleared = self.profiles.get_mut(&user_id).is_some_and(|mut entry| {
            let profile = entry.value_mut();
            let had_plan = profile.macro_profile.take().is_some();
            if had_plan {
                profile.updated_at = Utc::now();
            }
            had_plan
        });

        AppLogger::log_profile_operation("clear_macro_profile", user_id, cleared);
        Ok(cleared)
    }

    async fn list_user_ids(&self) -> AppResult<Vec<Uuid>> {
        Ok(self.profiles.iter().map(|entry| *entry.key()).collect())
    }
}
