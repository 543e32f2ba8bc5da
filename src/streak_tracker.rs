// ABOUTME: Transactional wrapper around the pure streak machine
// ABOUTME: StreakStore trait, in-memory store, and per-user serialized read-modify-write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Fitness Engine

//! # Streak Tracker
//!
//! The only stateful path in the engine. [`StreakTracker`] wraps a
//! [`StreakStore`] and serializes every load-decide-store sequence behind
//! a per-user async mutex, so two workout completions racing for the same
//! user cannot both increment the streak on one calendar day. Streaks are
//! independent per user; there is no cross-user locking.
//!
//! Each call emits at most one persistence write: the lazy creation on
//! first read, the passive-decay reset, or the workout transition.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::config::StreakConfig;
use crate::errors::AppResult;
use crate::models::StreakRecord;
use crate::streak_engine::{complete_workout, observe, StreakReport};

/// Persistence seam for streak records
///
/// Implementations back this with whatever the embedding service uses
/// for storage; [`InMemoryStreakStore`] ships for tests and embedded use.
#[async_trait]
pub trait StreakStore: Send + Sync {
    /// Load the streak record for a user, if one exists
    async fn load_streak(&self, user_id: Uuid) -> AppResult<Option<StreakRecord>>;

    /// Persist a streak record, replacing any previous version
    async fn save_streak(&self, record: &StreakRecord) -> AppResult<()>;
}

/// Concurrent in-memory streak store
///
/// Clones share the underlying map, so a handle kept by the caller
/// observes writes made through the tracker.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStreakStore {
    records: Arc<DashMap<Uuid, StreakRecord>>,
}

impl InMemoryStreakStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StreakStore for InMemoryStreakStore {
    async fn load_streak(&self, user_id: Uuid) -> AppResult<Option<StreakRecord>> {
        Ok(self.records.get(&user_id).map(|entry| entry.value().clone()))
    }

    async fn save_streak(&self, record: &StreakRecord) -> AppResult<()> {
        self.records.insert(record.user_id, record.clone());
        Ok(())
    }
}

/// Serialized access to per-user streak state
pub struct StreakTracker<S> {
    store: S,
    config: StreakConfig,
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl<S: StreakStore> StreakTracker<S> {
    /// Create a tracker with the shipped streak windows
    pub fn new(store: S) -> Self {
        Self::with_config(store, StreakConfig::default())
    }

    /// Create a tracker with explicit streak windows
    pub fn with_config(store: S, config: StreakConfig) -> Self {
        Self {
            store,
            config,
            locks: DashMap::new(),
        }
    }

    /// Report a user's streak as of now
    ///
    /// Lazily creates the record on first access and persists the
    /// passive-decay reset when the grace window has elapsed.
    ///
    /// # Errors
    /// Propagates storage failures from the underlying [`StreakStore`].
    pub async fn get_streak(&self, user_id: Uuid) -> AppResult<StreakReport> {
        self.get_streak_at(user_id, Utc::now()).await
    }

    /// Report a user's streak as of an explicit instant
    ///
    /// # Errors
    /// Propagates storage failures from the underlying [`StreakStore`].
    pub async fn get_streak_at(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<StreakReport> {
        let lock = self.user_lock(user_id);
        let _guard = lock.lock().await;

        let (record, created) = match self.store.load_streak(user_id).await? {
            Some(record) => (record, false),
            None => (StreakRecord::new(user_id), true),
        };
        if created {
            self.store.save_streak(&record).await?;
        }

        let (decayed, report) = observe(&record, &self.config, now);
        if let Some(reset) = decayed {
            debug!(user_id = %user_id, "grace window elapsed, resetting streak");
            self.store.save_streak(&reset).await?;
        }
        Ok(report)
    }

    /// Apply a workout completion and report the resulting streak
    ///
    /// The load-decide-store sequence runs under the user's lock, so
    /// concurrent completions on one calendar day count once.
    ///
    /// # Errors
    /// Propagates storage failures from the underlying [`StreakStore`].
    pub async fn record_workout(&self, user_id: Uuid) -> AppResult<StreakReport> {
        self.record_workout_at(user_id, Utc::now()).await
    }

    /// Apply a workout completion at an explicit instant
    ///
    /// # Errors
    /// Propagates storage failures from the underlying [`StreakStore`].
    pub async fn record_workout_at(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<StreakReport> {
        let lock = self.user_lock(user_id);
        let _guard = lock.lock().await;

        let record = self
            .store
            .load_streak(user_id)
            .await?
            .unwrap_or_else(|| StreakRecord::new(user_id));

        let updated = complete_workout(&record, &self.config, now);
        self.store.save_streak(&updated).await?;
        debug!(
            user_id = %user_id,
            current_streak = updated.current_streak,
            "recorded workout completion"
        );

        let (_, report) = observe(&updated, &self.config, now);
        Ok(report)
    }

    fn user_lock(&self, user_id: Uuid) -> Arc<Mutex<()>> {
        let entry = self.locks.entry(user_id).or_default();
        Arc::clone(entry.value())
    }
}
