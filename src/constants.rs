// ABOUTME: System-wide constants and tuning values for the progression engine
// ABOUTME: Centralizes the leveling curve, reward factors, and streak geometry
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! # Constants Module
//!
//! Tuning values for the progression engine. Changing any of these changes
//! user-visible progression, so they are deliberately in one place.

/// Leveling curve parameters
pub mod leveling_curve {
    /// XP required to clear level 1; the curve scales from here
    pub const BASE_THRESHOLD_XP: f64 = 100.0;

    /// Exponent of the threshold curve: `threshold(level) = floor(BASE * level^EXPONENT)`
    pub const THRESHOLD_EXPONENT: f64 = 1.5;
}

/// Workout reward factors
pub mod reward_factors {
    /// XP granted per minute of any logged activity
    pub const XP_PER_MINUTE: i64 = 2;

    /// Multiplier applied to strength volume (sets x reps x weight)
    pub const STRENGTH_VOLUME_FACTOR: f64 = 0.1;

    /// XP granted per kilometer of cardio distance
    pub const CARDIO_DISTANCE_FACTOR: f64 = 10.0;
}

/// Streak scan and display geometry
pub mod streak_geometry {
    /// How many weeks back the streak scan will ever look
    pub const STREAK_HORIZON_WEEKS: u32 = 52;

    /// Fixed page size of the streak display window
    pub const STREAK_WINDOW_LEN: u32 = 5;
}

/// Notification delivery tuning
pub mod notification_config {
    /// Buffered messages per user broadcast channel before receivers lag
    pub const BROADCAST_CHANNEL_CAPACITY: usize = 64;
}

/// Coordinator write discipline
pub mod write_policy {
    /// Optimistic-concurrency attempts before an adjustment fails with Conflict
    pub const MAX_WRITE_ATTEMPTS: u32 = 3;
}
