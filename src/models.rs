// ABOUTME: Core data models for the Repset progression engine
// ABOUTME: Defines ProgressionState and the ProgressionUpdate result shape
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! # Data Models
//!
//! Shared types for progression state and adjustment results. The state is
//! owned by the user record in the backing store and mutated only through the
//! [`crate::coordinator::ProgressionCoordinator`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::leveling::xp_threshold;

/// A user's persisted progression state
///
/// Created once per user at account creation (level 1, xp 0) and updated for
/// the user's lifetime by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionState {
    /// Progression tier, always >= 1 with no declared upper bound
    pub level: i32,
    /// Experience accumulated toward the next level, always >= 0
    pub xp: i64,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self { level: 1, xp: 0 }
    }
}

impl ProgressionState {
    /// Create a state at an explicit level and xp
    #[must_use]
    pub const fn new(level: i32, xp: i64) -> Self {
        Self { level, xp }
    }

    /// Whether this state satisfies the progression invariant
    ///
    /// Every state reachable through [`crate::leveling::apply_delta`] keeps
    /// xp non-negative and strictly below the current level's threshold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.level >= 1 && self.xp >= 0 && self.xp < xp_threshold(self.level)
    }
}

/// The outcome of a successful progression adjustment
///
/// Only ever constructed after the new state has been persisted; a failed
/// write never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionUpdate {
    /// The user whose progression changed
    pub user_id: Uuid,
    /// Level after the adjustment
    pub new_level: i32,
    /// XP after the adjustment
    pub new_xp: i64,
    /// The signed XP delta that was applied
    pub delta: i64,
    /// Free-text reason for administrative corrections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ProgressionUpdate {
    /// The state this update left the user in
    #[must_use]
    pub const fn state(&self) -> ProgressionState {
        ProgressionState {
            level: self.new_level,
            xp: self.new_xp,
        }
    }
}
