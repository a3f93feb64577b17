// ABOUTME: XP reward calculation for logged workouts
// ABOUTME: Converts activity type and workout metrics into a non-negative XP award
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! # Reward Calculator
//!
//! Pure conversion of a logged workout into the XP it earns. Missing metric
//! fields are treated as zero, except that a strength set with no recorded
//! set or rep count still counts as one of each so a logged lift never earns
//! a zero-volume award.
//!
//! Upstream input coercion (rejecting negative or non-numeric form values)
//! is the request layer's job, not this calculator's.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::reward_factors::{
    CARDIO_DISTANCE_FACTOR, STRENGTH_VOLUME_FACTOR, XP_PER_MINUTE,
};

/// Broad classification of a logged activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// Resistance training; rewarded on duration plus lifted volume
    Strength,
    /// Endurance work; rewarded on duration plus distance
    Cardio,
    /// Anything else (yoga, mobility, sports); rewarded on duration only
    Other,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strength => write!(f, "strength"),
            Self::Cardio => write!(f, "cardio"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for ActivityType {
    type Err = std::convert::Infallible;

    /// Unrecognized activity names fold into [`ActivityType::Other`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "strength" | "weights" | "lifting" => Self::Strength,
            "cardio" | "run" | "running" | "cycling" | "swimming" => Self::Cardio,
            _ => Self::Other,
        })
    }
}

/// Metrics captured with a logged workout; absent fields were not recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutMetrics {
    /// Total duration in minutes
    pub duration_minutes: Option<i64>,
    /// Strength: number of sets performed
    pub sets: Option<i64>,
    /// Strength: repetitions per set
    pub reps: Option<i64>,
    /// Strength: working weight in kilograms
    pub weight_kg: Option<f64>,
    /// Cardio: distance covered in kilometers
    pub distance_km: Option<f64>,
}

/// Compute the XP award for a logged workout
///
/// `base = duration_minutes * 2`, plus a strength volume bonus
/// (`floor(sets * reps * weight * 0.1)`) or a cardio distance bonus
/// (`floor(distance_km * 10)`). Always returns a non-negative integer.
#[must_use]
pub fn compute_reward(activity_type: ActivityType, metrics: &WorkoutMetrics) -> i64 {
    let base = metrics.duration_minutes.unwrap_or(0) * XP_PER_MINUTE;

    let bonus = match activity_type {
        ActivityType::Strength => {
            let volume = metrics.sets.unwrap_or(1) as f64
                * metrics.reps.unwrap_or(1) as f64
                * metrics.weight_kg.unwrap_or(0.0)
                * STRENGTH_VOLUME_FACTOR;
            volume.floor() as i64
        }
        ActivityType::Cardio => {
            (metrics.distance_km.unwrap_or(0.0) * CARDIO_DISTANCE_FACTOR).floor() as i64
        }
        ActivityType::Other => 0,
    };

    (base + bonus).max(0)
}
