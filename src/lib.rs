// ABOUTME: Main library entry point for the Repset progression engine
// ABOUTME: Exposes leveling, rewards, streaks, and the persistence coordinator
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

#![deny(unsafe_code)]

//! # Repset Progression Engine
//!
//! The progression core of the Repset fitness platform. The surrounding web
//! application (routing, auth, uploads, social graph, UI) lives elsewhere and
//! talks to this crate in-process; everything it needs to provide is modeled
//! as a collaborator trait in [`store`] and [`notifications`].
//!
//! ## Architecture
//!
//! - **[`leveling`]**: pure XP-to-level state machine (threshold curve,
//!   multi-level carries, level-1 floor)
//! - **[`rewards`]**: pure XP award calculation from logged workout metrics
//! - **[`streaks`]**: read-only weekly consistency streak over the activity log
//! - **[`coordinator`]**: the only writer of persisted progression state;
//!   optimistic read-modify-write with bounded retries
//! - **[`store`]**: persistence plugin layer (SQLite and in-memory backends)
//! - **[`notifications`]**: best-effort dispatch of progression change messages
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use repset_progression::coordinator::ProgressionCoordinator;
//! use repset_progression::notifications::NotificationHub;
//! use repset_progression::rewards::{ActivityType, WorkoutMetrics};
//! use repset_progression::store::memory::MemoryStore;
//!
//! # async fn demo(user_id: uuid::Uuid) -> anyhow::Result<()> {
//! let store = Arc::new(MemoryStore::new());
//! let hub = Arc::new(NotificationHub::new());
//! let coordinator = ProgressionCoordinator::new(store, hub);
//!
//! let metrics = WorkoutMetrics {
//!     duration_minutes: Some(45),
//!     ..WorkoutMetrics::default()
//! };
//! let update = coordinator
//!     .award_for_workout(user_id, ActivityType::Cardio, &metrics)
//!     .await?;
//! println!("user is now level {}", update.new_level);
//! # Ok(())
//! # }
//! ```

/// Environment-based runtime configuration
pub mod config;

/// System-wide constants and tuning values
pub mod constants;

/// Progression coordinator - the single writer of persisted progression state
pub mod coordinator;

/// Unified error types for progression operations
pub mod errors;

/// Pure XP-to-level calculation
pub mod leveling;

/// Structured logging setup
pub mod logging;

/// Core data models shared across the engine
pub mod models;

/// Notification dispatch for progression changes
pub mod notifications;

/// XP reward calculation for logged workouts
pub mod rewards;

/// Persistence plugin layer and collaborator traits
pub mod store;

/// Weekly consistency streak calculation
pub mod streaks;

pub use coordinator::ProgressionCoordinator;
pub use errors::{ProgressionError, ProgressionResult};
pub use models::{ProgressionState, ProgressionUpdate};
pub use streaks::{StreakSummary, WeekSlot, WeekStatus};
