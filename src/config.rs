// ABOUTME: Environment-based runtime configuration for the progression engine
// ABOUTME: Reads REPSET_* variables with warn-and-default fallback on bad values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! # Configuration
//!
//! Environment-only configuration, matching the rest of the platform: no
//! config files, just `REPSET_*` variables with sane defaults. An unparsable
//! value logs a warning and falls back rather than failing startup.

use std::env;

use crate::constants::streak_geometry::STREAK_HORIZON_WEEKS;
use crate::constants::write_policy::MAX_WRITE_ATTEMPTS;

/// Runtime tunables for the progression engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionConfig {
    /// Optimistic-concurrency attempts before an adjustment fails with Conflict
    pub max_write_attempts: u32,
    /// How many weeks back the streak scan will look
    pub streak_horizon_weeks: u32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            max_write_attempts: MAX_WRITE_ATTEMPTS,
            streak_horizon_weeks: STREAK_HORIZON_WEEKS,
        }
    }
}

impl ProgressionConfig {
    /// Load configuration from the environment
    ///
    /// Reads `REPSET_MAX_WRITE_ATTEMPTS` and `REPSET_STREAK_HORIZON_WEEKS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_write_attempts: env_u32("REPSET_MAX_WRITE_ATTEMPTS", MAX_WRITE_ATTEMPTS),
            streak_horizon_weeks: env_u32("REPSET_STREAK_HORIZON_WEEKS", STREAK_HORIZON_WEEKS),
        }
    }
}

/// Read a positive integer from the environment, defaulting on absence or garbage
fn env_u32(name: &str, default: u32) -> u32 {
    match env::var(name) {
        Ok(raw) => match raw.parse::<u32>() {
            Ok(value) if value >= 1 => value,
            _ => {
                tracing::warn!(variable = name, value = %raw, "ignoring invalid configuration value");
                default
            }
        },
        Err(_) => default,
    }
}
