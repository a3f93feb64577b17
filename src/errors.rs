// ABOUTME: Unified error types for progression operations
// ABOUTME: Defines the NotFound/Conflict/Store taxonomy and HTTP status mapping
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! # Error Handling
//!
//! The progression engine distinguishes three failure classes:
//!
//! - [`ProgressionError::NotFound`]: the user has no progression record;
//!   surfaced to the caller, never retried here
//! - [`ProgressionError::Conflict`]: optimistic-concurrency retries were
//!   exhausted; transient, safe for the caller to retry with a freshly
//!   computed delta
//! - [`ProgressionError::Store`]: a collaborator (progression store or
//!   activity log) failed; propagated unchanged so callers can tell "no data"
//!   apart from "store unavailable"
//!
//! Notification failures are deliberately absent: dispatch is best-effort and
//! never surfaces past the coordinator's warn log.

use thiserror::Error;
use uuid::Uuid;

/// Unified error type for progression operations
#[derive(Debug, Error)]
pub enum ProgressionError {
    /// The user's progression record does not exist
    #[error("no progression record for user {user_id}")]
    NotFound {
        /// The user that was looked up
        user_id: Uuid,
    },

    /// Concurrent updates exhausted the bounded retry budget
    #[error("progression update for user {user_id} conflicted after {attempts} attempts")]
    Conflict {
        /// The user whose record was contended
        user_id: Uuid,
        /// How many read-modify-write attempts were made
        attempts: u32,
    },

    /// A backing-store or activity-log operation failed
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ProgressionError {
    /// HTTP status code for this error, for the route layer to shape responses
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::Store(_) => 500,
        }
    }

    /// Whether the caller may safely retry the same logical adjustment
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// Result type alias for progression operations
pub type ProgressionResult<T> = Result<T, ProgressionError>;
