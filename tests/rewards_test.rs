// ABOUTME: Integration tests for the workout reward calculator
// ABOUTME: Covers base duration XP, strength volume, cardio distance, and defaulting
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use repset_progression::rewards::{compute_reward, ActivityType, WorkoutMetrics};

#[test]
fn strength_reward_adds_floored_volume_to_base() {
    let metrics = WorkoutMetrics {
        duration_minutes: Some(10),
        sets: Some(3),
        reps: Some(10),
        weight_kg: Some(5.0),
        distance_km: None,
    };
    // base 20, volume 3 * 10 * 5 * 0.1 = 15
    assert_eq!(compute_reward(ActivityType::Strength, &metrics), 35);
}

#[test]
fn cardio_reward_counts_distance_without_duration() {
    let metrics = WorkoutMetrics {
        distance_km: Some(5.0),
        ..WorkoutMetrics::default()
    };
    assert_eq!(compute_reward(ActivityType::Cardio, &metrics), 50);
}

#[test]
fn other_activities_earn_duration_only() {
    let metrics = WorkoutMetrics {
        duration_minutes: Some(30),
        sets: Some(3),
        reps: Some(10),
        weight_kg: Some(80.0),
        distance_km: Some(10.0),
    };
    assert_eq!(compute_reward(ActivityType::Other, &metrics), 60);
}

#[test]
fn strength_defaults_missing_sets_and_reps_to_one() {
    // A logged set with only a weight still earns its volume
    let metrics = WorkoutMetrics {
        weight_kg: Some(100.0),
        ..WorkoutMetrics::default()
    };
    assert_eq!(compute_reward(ActivityType::Strength, &metrics), 10);
}

#[test]
fn strength_without_weight_earns_base_only() {
    let metrics = WorkoutMetrics {
        duration_minutes: Some(15),
        sets: Some(5),
        reps: Some(5),
        ..WorkoutMetrics::default()
    };
    assert_eq!(compute_reward(ActivityType::Strength, &metrics), 30);
}

#[test]
fn cardio_ignores_strength_fields() {
    let metrics = WorkoutMetrics {
        duration_minutes: Some(10),
        sets: Some(3),
        reps: Some(10),
        weight_kg: Some(80.0),
        distance_km: None,
    };
    assert_eq!(compute_reward(ActivityType::Cardio, &metrics), 20);
}

#[test]
fn fractional_volume_floors() {
    let metrics = WorkoutMetrics {
        sets: Some(1),
        reps: Some(3),
        weight_kg: Some(2.5),
        ..WorkoutMetrics::default()
    };
    // volume 3 * 2.5 * 0.1 = 0.75 floors to 0
    assert_eq!(compute_reward(ActivityType::Strength, &metrics), 0);
}

#[test]
fn empty_metrics_earn_nothing_everywhere() {
    let metrics = WorkoutMetrics::default();
    for activity_type in [ActivityType::Strength, ActivityType::Cardio, ActivityType::Other] {
        assert_eq!(compute_reward(activity_type, &metrics), 0);
    }
}

#[test]
fn activity_names_parse_loosely() {
    assert_eq!("Strength".parse::<ActivityType>().unwrap(), ActivityType::Strength);
    assert_eq!("running".parse::<ActivityType>().unwrap(), ActivityType::Cardio);
    assert_eq!("yoga".parse::<ActivityType>().unwrap(), ActivityType::Other);
}
