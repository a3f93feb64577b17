// ABOUTME: SQLite store backend for the progression engine
// ABOUTME: Conditional UPDATE gives the optimistic-concurrency write semantics
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! SQLite implementation of the store traits
//!
//! The optimistic write is a single conditional `UPDATE` keyed on the prior
//! `level` and `xp`: zero affected rows means another writer got there first
//! (or the record disappeared) and the caller must re-read.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::{ActivityLog, ProgressionStore};
use crate::models::ProgressionState;

/// SQLite-backed store
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the given SQLite database URL (e.g. `sqlite::memory:`)
    pub async fn new(database_url: &str) -> Result<Self> {
        // Every `:memory:` connection is its own database, so the pool must
        // not hand out more than one
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Create the progression schema if it does not exist
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_progression (
                user_id BLOB PRIMARY KEY,
                level INTEGER NOT NULL,
                xp INTEGER NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS activity_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id BLOB NOT NULL,
                started_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_activity_log_user_time
             ON activity_log (user_id, started_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Access the underlying pool, for the embedding application's own queries
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ProgressionStore for SqliteStore {
    async fn get_progression(&self, user_id: Uuid) -> Result<Option<ProgressionState>> {
        let row = sqlx::query("SELECT level, xp FROM user_progression WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let level: i32 = row.try_get("level")?;
                let xp: i64 = row.try_get("xp")?;
                Ok(Some(ProgressionState { level, xp }))
            }
            None => Ok(None),
        }
    }

    async fn insert_progression(&self, user_id: Uuid, state: ProgressionState) -> Result<()> {
        sqlx::query(
            "INSERT INTO user_progression (user_id, level, xp, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(state.level)
        .bind(state.xp)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn set_progression(
        &self,
        user_id: Uuid,
        new: ProgressionState,
        expected_prior: ProgressionState,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE user_progression
             SET level = ?, xp = ?, updated_at = ?
             WHERE user_id = ? AND level = ? AND xp = ?",
        )
        .bind(new.level)
        .bind(new.xp)
        .bind(Utc::now())
        .bind(user_id)
        .bind(expected_prior.level)
        .bind(expected_prior.xp)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ActivityLog for SqliteStore {
    async fn has_activity(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool> {
        let row = sqlx::query(
            "SELECT EXISTS(
                SELECT 1 FROM activity_log
                WHERE user_id = ? AND started_at >= ? AND started_at < ?
             ) AS present",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        let present: i32 = row.try_get("present")?;
        Ok(present != 0)
    }

    async fn record_activity(&self, user_id: Uuid, started_at: DateTime<Utc>) -> Result<()> {
        sqlx::query("INSERT INTO activity_log (user_id, started_at) VALUES (?, ?)")
            .bind(user_id)
            .bind(started_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
