// ABOUTME: Shared test utilities for the progression engine integration tests
// ABOUTME: Store constructors, user seeding, and a recording notification dispatcher
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

//! Shared test setup for `repset_progression` integration tests

use std::sync::{Arc, Once};

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use repset_progression::models::ProgressionState;
use repset_progression::notifications::NotificationDispatcher;
use repset_progression::store::memory::MemoryStore;
use repset_progression::store::sqlite::SqliteStore;
use repset_progression::store::ProgressionStore;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory store
pub fn create_memory_store() -> Arc<MemoryStore> {
    init_test_logging();
    Arc::new(MemoryStore::new())
}

/// Fresh migrated SQLite store backed by a temporary file
///
/// A file-backed database keeps every pool connection on the same data,
/// unlike `sqlite::memory:` where each connection is its own database.
pub async fn create_sqlite_store() -> Result<(SqliteStore, tempfile::NamedTempFile)> {
    init_test_logging();
    let file = tempfile::NamedTempFile::new()?;
    let url = format!("sqlite://{}", file.path().display());
    let store = SqliteStore::new(&url).await?;
    store.migrate().await?;
    Ok((store, file))
}

/// Seed a progression record for a new random user
pub async fn seed_user(store: &dyn ProgressionStore, state: ProgressionState) -> Result<Uuid> {
    let user_id = Uuid::new_v4();
    store.insert_progression(user_id, state).await?;
    Ok(user_id)
}

/// Notification dispatcher that records every delivery, or fails them all
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(Uuid, String)>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher whose every delivery fails
    pub fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Messages delivered to the given user, in order
    pub async fn messages_for(&self, user_id: Uuid) -> Vec<String> {
        self.messages
            .lock()
            .await
            .iter()
            .filter(|(id, _)| *id == user_id)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingNotifier {
    async fn notify(&self, user_id: Uuid, message: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("notifier offline");
        }
        self.messages
            .lock()
            .await
            .push((user_id, message.to_owned()));
        Ok(())
    }
}
