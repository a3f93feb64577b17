// ABOUTME: In-memory store backend for tests and local tooling
// ABOUTME: DashMap-backed progression records with a compare-and-swap write
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! In-memory implementation of the store traits
//!
//! Progression writes use a compare-and-swap against the map entry, which
//! gives the same optimistic-concurrency semantics as the SQLite backend's
//! conditional `UPDATE`. Entries for different users live in independent
//! shards, so adjustments to different users never block each other.

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use super::{ActivityLog, ProgressionStore};
use crate::models::ProgressionState;

/// In-process store holding progression records and activity timestamps
#[derive(Default)]
pub struct MemoryStore {
    progression: DashMap<Uuid, ProgressionState>,
    activities: DashMap<Uuid, Vec<DateTime<Utc>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressionStore for MemoryStore {
    async fn get_progression(&self, user_id: Uuid) -> Result<Option<ProgressionState>> {
        Ok(self.progression.get(&user_id).map(|entry| *entry.value()))
    }

    async fn insert_progression(&self, user_id: Uuid, state: ProgressionState) -> Result<()> {
        match self.progression.entry(user_id) {
            Entry::Vacant(entry) => {
                entry.insert(state);
                Ok(())
            }
            Entry::Occupied(_) => bail!("progression record already exists for user {user_id}"),
        }
    }

    async fn set_progression(
        &self,
        user_id: Uuid,
        new: ProgressionState,
        expected_prior: ProgressionState,
    ) -> Result<bool> {
        // Entry holds the shard lock, making compare-and-swap atomic
        match self.progression.entry(user_id) {
            Entry::Occupied(mut entry) if *entry.get() == expected_prior => {
                entry.insert(new);
                Ok(true)
            }
            Entry::Occupied(_) | Entry::Vacant(_) => Ok(false),
        }
    }
}

#[async_trait]
impl ActivityLog for MemoryStore {
    async fn has_activity(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool> {
        Ok(self.activities.get(&user_id).is_some_and(|timestamps| {
            timestamps.iter().any(|at| *at >= start && *at < end)
        }))
    }

    async fn record_activity(&self, user_id: Uuid, started_at: DateTime<Utc>) -> Result<()> {
        self.activities.entry(user_id).or_default().push(started_at);
        Ok(())
    }
}
