// ABOUTME: Pure XP-to-level calculation for the progression engine
// ABOUTME: Threshold curve plus the apply_delta state machine with level-1 clamping
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! # Leveling Calculator
//!
//! The single source of truth for how earned (or revoked) experience moves a
//! user between levels. Both the workout-reward path and the administrative
//! correction path go through [`apply_delta`]; there is no second copy of the
//! carry logic anywhere in the platform.
//!
//! Everything here is pure: no I/O, no clock, no persisted state.

use crate::constants::leveling_curve::{BASE_THRESHOLD_XP, THRESHOLD_EXPONENT};
use crate::models::ProgressionState;

/// XP required to advance from `level` to `level + 1`
///
/// `threshold(level) = floor(100 * level^1.5)`, strictly increasing for
/// `level >= 1`. `xp_threshold(1)` is 100.
#[must_use]
pub fn xp_threshold(level: i32) -> i64 {
    (BASE_THRESHOLD_XP * f64::from(level.max(1)).powf(THRESHOLD_EXPONENT)).floor() as i64
}

/// Apply a signed XP delta to a progression state
///
/// Total over its documented domain (`level >= 1`, `xp >= 0`, any `delta`):
/// always terminates, never errors.
///
/// - A positive delta that crosses one or more thresholds carries the
///   remainder forward, levelling up once per crossing.
/// - A negative delta that underruns borrows from lower levels, levelling
///   down once per crossing.
/// - A user can never fall below level 1 or hold negative XP; any remaining
///   deficit at level 1 clamps to zero.
#[must_use]
pub fn apply_delta(level: i32, xp: i64, delta: i64) -> ProgressionState {
    let mut level = level.max(1);
    let mut xp = xp + delta;

    while xp >= xp_threshold(level) {
        xp -= xp_threshold(level);
        level += 1;
    }

    while xp < 0 && level > 1 {
        level -= 1;
        xp += xp_threshold(level);
    }

    if xp < 0 {
        xp = 0;
    }

    ProgressionState { level, xp }
}
