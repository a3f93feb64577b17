// ABOUTME: Progression coordinator - the single writer of persisted progression state
// ABOUTME: Optimistic read-modify-write with bounded retries and best-effort notification
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! # Progression Coordinator
//!
//! Every change to a user's persisted `{level, xp}` goes through here: the
//! workout-completion reward path and the administrative correction path
//! both funnel into [`ProgressionCoordinator::adjust_progression`].
//!
//! Concurrency discipline: each attempt re-reads the stored state, reapplies
//! the leveling calculator to the fresh value, and writes conditionally on
//! the state it read. A lost race re-reads and recomputes rather than
//! replaying a stale result; adjustments to different users never contend.
//!
//! Notification dispatch happens only after the write lands and is
//! best-effort: a dispatch failure is logged and the persisted result is
//! still returned.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::ProgressionConfig;
use crate::errors::{ProgressionError, ProgressionResult};
use crate::leveling::apply_delta;
use crate::models::ProgressionUpdate;
use crate::notifications::NotificationDispatcher;
use crate::rewards::{compute_reward, ActivityType, WorkoutMetrics};
use crate::store::ProgressionStore;

/// Orchestrates persisted progression changes
pub struct ProgressionCoordinator {
    store: Arc<dyn ProgressionStore>,
    notifier: Arc<dyn NotificationDispatcher>,
    config: ProgressionConfig,
}

impl ProgressionCoordinator {
    /// Create a coordinator with default configuration
    #[must_use]
    pub fn new(store: Arc<dyn ProgressionStore>, notifier: Arc<dyn NotificationDispatcher>) -> Self {
        Self::with_config(store, notifier, ProgressionConfig::default())
    }

    /// Create a coordinator with explicit configuration
    #[must_use]
    pub fn with_config(
        store: Arc<dyn ProgressionStore>,
        notifier: Arc<dyn NotificationDispatcher>,
        config: ProgressionConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// Apply a signed XP delta to a user's persisted progression
    ///
    /// `reason` is the free-text justification supplied by administrative
    /// corrections; the workout reward path passes `None`.
    ///
    /// # Errors
    /// - [`ProgressionError::NotFound`] if the user has no progression record
    /// - [`ProgressionError::Conflict`] once the bounded retry budget is spent
    /// - [`ProgressionError::Store`] for backend failures, unchanged
    pub async fn adjust_progression(
        &self,
        user_id: Uuid,
        delta: i64,
        reason: Option<&str>,
    ) -> ProgressionResult<ProgressionUpdate> {
        for attempt in 1..=self.config.max_write_attempts {
            let prior = self
                .store
                .get_progression(user_id)
                .await?
                .ok_or(ProgressionError::NotFound { user_id })?;

            let next = apply_delta(prior.level, prior.xp, delta);

            if self.store.set_progression(user_id, next, prior).await? {
                let update = ProgressionUpdate {
                    user_id,
                    new_level: next.level,
                    new_xp: next.xp,
                    delta,
                    reason: reason.map(str::to_owned),
                };
                tracing::info!(
                    %user_id,
                    delta,
                    new_level = next.level,
                    new_xp = next.xp,
                    "progression adjusted"
                );
                self.dispatch_notification(&update).await;
                return Ok(update);
            }

            tracing::debug!(%user_id, attempt, "progression write conflicted, re-reading");
        }

        Err(ProgressionError::Conflict {
            user_id,
            attempts: self.config.max_write_attempts,
        })
    }

    /// Award XP for a completed workout
    ///
    /// Runs the reward calculator over the logged metrics and applies the
    /// (always non-negative) result with no reason attached.
    pub async fn award_for_workout(
        &self,
        user_id: Uuid,
        activity_type: ActivityType,
        metrics: &WorkoutMetrics,
    ) -> ProgressionResult<ProgressionUpdate> {
        let reward = compute_reward(activity_type, metrics);
        self.adjust_progression(user_id, reward, None).await
    }

    /// Best-effort notification of a persisted change; never fails the caller
    async fn dispatch_notification(&self, update: &ProgressionUpdate) {
        let message = notification_message(update);
        if let Err(err) = self.notifier.notify(update.user_id, &message).await {
            tracing::warn!(
                user_id = %update.user_id,
                error = %err,
                "progression notification dropped"
            );
        }
    }
}

/// Human-readable description of a progression change
fn notification_message(update: &ProgressionUpdate) -> String {
    match (&update.reason, update.delta) {
        (Some(reason), delta) => format!(
            "Your progression was adjusted by {delta} XP ({reason}). You are now level {} with {} XP.",
            update.new_level, update.new_xp
        ),
        (None, delta) if delta >= 0 => format!(
            "You earned {delta} XP! You are now level {} with {} XP.",
            update.new_level, update.new_xp
        ),
        (None, delta) => format!(
            "Your XP changed by {delta}. You are now level {} with {} XP.",
            update.new_level, update.new_xp
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_messages_mention_amount_and_level() {
        let update = ProgressionUpdate {
            user_id: Uuid::nil(),
            new_level: 2,
            new_xp: 150,
            delta: 250,
            reason: None,
        };
        let message = notification_message(&update);
        assert!(message.contains("250 XP"));
        assert!(message.contains("level 2"));
    }

    #[test]
    fn correction_messages_carry_the_reason() {
        let update = ProgressionUpdate {
            user_id: Uuid::nil(),
            new_level: 1,
            new_xp: 0,
            delta: -50,
            reason: Some("duplicate workout removed".to_owned()),
        };
        let message = notification_message(&update);
        assert!(message.contains("duplicate workout removed"));
        assert!(message.contains("-50 XP"));
    }
}
