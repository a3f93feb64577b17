// ABOUTME: Persistence plugin layer for the progression engine
// ABOUTME: Collaborator traits with SQLite and in-memory backends
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! # Store Layer
//!
//! The progression engine never talks to a database directly; it goes through
//! these traits so the platform can swap backends. [`sqlite::SqliteStore`] is
//! the production backend, [`memory::MemoryStore`] backs tests and local
//! tooling. Both implement both traits.
//!
//! Errors from a backend propagate unchanged (`anyhow::Error`) so callers can
//! tell "no data" apart from "store unavailable".

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::ProgressionState;

/// In-memory backend
pub mod memory;

/// SQLite backend
pub mod sqlite;

/// Persisted per-user progression records
#[async_trait]
pub trait ProgressionStore: Send + Sync {
    /// Fetch a user's progression state, or `None` if no record exists
    async fn get_progression(&self, user_id: Uuid) -> Result<Option<ProgressionState>>;

    /// Create a user's progression record; fails if one already exists
    ///
    /// Called from account creation, outside the progression core proper.
    async fn insert_progression(&self, user_id: Uuid, state: ProgressionState) -> Result<()>;

    /// Optimistic-concurrency write of a user's progression state
    ///
    /// The write only lands if the stored state still equals
    /// `expected_prior`; returns `false` when the precondition failed and the
    /// caller must re-read before retrying. Writes for distinct users never
    /// contend with one another.
    async fn set_progression(
        &self,
        user_id: Uuid,
        new: ProgressionState,
        expected_prior: ProgressionState,
    ) -> Result<bool>;
}

/// Read access to a user's historical activity timestamps
#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// Whether the user logged at least one activity in `[start, end)`
    async fn has_activity(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool>;

    /// Append an activity timestamp for a user
    ///
    /// Used by the workout-logging flow that surrounds this crate; the streak
    /// calculator itself is strictly read-only.
    async fn record_activity(&self, user_id: Uuid, started_at: DateTime<Utc>) -> Result<()>;
}
