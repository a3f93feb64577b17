// ABOUTME: Notification dispatch for progression changes
// ABOUTME: Per-user broadcast channels behind the NotificationDispatcher trait
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! # Notifications
//!
//! Dispatch of human-readable progression messages. Delivery is best-effort:
//! the coordinator logs and ignores dispatch failures, so nothing here may
//! influence whether a progression change lands.
//!
//! [`NotificationHub`] is the in-process implementation; the SSE/websocket
//! edge that drains its receivers lives in the surrounding web application.
//! Receivers see a small JSON envelope (`{"type": "progression", "message":
//! ...}`) ready to forward to a client.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::json;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::constants::notification_config::BROADCAST_CHANNEL_CAPACITY;

/// Sink for per-user progression messages
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Deliver a message to the given user
    ///
    /// # Errors
    /// Returns an error if the user has no active channel or delivery fails;
    /// callers treat this as non-fatal.
    async fn notify(&self, user_id: Uuid, message: &str) -> Result<()>;
}

/// Tracks active per-user notification channels
#[derive(Default)]
pub struct NotificationHub {
    connections: RwLock<HashMap<Uuid, broadcast::Sender<String>>>,
}

impl NotificationHub {
    /// Create a hub with no active channels
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (or join) the notification channel for a user
    pub async fn subscribe(&self, user_id: Uuid) -> broadcast::Receiver<String> {
        let mut connections = self.connections.write().await;
        if let Some(sender) = connections.get(&user_id) {
            return sender.subscribe();
        }

        let (tx, rx) = broadcast::channel(BROADCAST_CHANNEL_CAPACITY);
        connections.insert(user_id, tx);
        tracing::debug!(%user_id, "notification channel opened");
        rx
    }

    /// Drop a user's channel once their last client disconnects
    pub async fn unsubscribe(&self, user_id: Uuid) {
        self.connections.write().await.remove(&user_id);
        tracing::debug!(%user_id, "notification channel closed");
    }

    /// Number of users with an open channel, for monitoring
    pub async fn active_channels(&self) -> usize {
        self.connections.read().await.len()
    }
}

#[async_trait]
impl NotificationDispatcher for NotificationHub {
    async fn notify(&self, user_id: Uuid, message: &str) -> Result<()> {
        let connections = self.connections.read().await;
        let Some(sender) = connections.get(&user_id) else {
            return Err(anyhow!("no active notification channel for user {user_id}"));
        };

        let envelope = json!({
            "type": "progression",
            "message": message,
        })
        .to_string();

        sender
            .send(envelope)
            .map_err(|_| anyhow!("all receivers gone for user {user_id}"))?;
        Ok(())
    }
}
