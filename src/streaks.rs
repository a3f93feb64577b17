// ABOUTME: Weekly consistency streak calculation over the activity log
// ABOUTME: Backward week scan with first-gap short circuit plus the 5-slot display window
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! # Streak Calculator
//!
//! Derives a user's weekly-activity streak from historical logs. Weeks are
//! ISO weeks (Monday 00:00 through Sunday 23:59, UTC). The scan walks
//! backward from the week before the one containing `now` and stops at the
//! first week with no activity: a streak is unbroken consecutive weeks
//! immediately preceding the current week, so a gap further back is
//! irrelevant and must not be reached.
//!
//! Read-only; never writes state. A single captured `now` is used for every
//! boundary so a week rollover mid-scan cannot shift the result.

use std::cmp::Ordering;

use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::streak_geometry::{STREAK_HORIZON_WEEKS, STREAK_WINDOW_LEN};
use crate::store::ActivityLog;

/// Display classification of one week slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStatus {
    /// A past week of the streak with logged activity
    Completed,
    /// The in-progress week containing `now`
    Active,
    /// A future week slot on the current display page
    Pending,
}

/// One slot of the streak display window; computed fresh per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSlot {
    /// One-based position within the streak, oldest first
    pub week_number: u32,
    /// How the slot renders
    pub status: WeekStatus,
}

/// Result of a streak computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive fully-elapsed weeks with activity immediately before now
    pub past_streak: u32,
    /// The week containing `now`, always counted as in progress
    pub current_week_number: u32,
    /// Exactly five slots covering the display page that holds the current week
    pub window: Vec<WeekSlot>,
}

/// Compute a user's weekly streak as of `now`, scanning at most 52 weeks back
pub async fn compute_streak(
    log: &dyn ActivityLog,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<StreakSummary> {
    compute_streak_bounded(log, user_id, now, STREAK_HORIZON_WEEKS).await
}

/// Compute a user's weekly streak with an explicit scan horizon
///
/// The scan is strictly ordered from the most recent elapsed week backward;
/// an activity-log failure propagates unchanged.
pub async fn compute_streak_bounded(
    log: &dyn ActivityLog,
    user_id: Uuid,
    now: DateTime<Utc>,
    horizon_weeks: u32,
) -> Result<StreakSummary> {
    let current_week_start = now.date_naive().week(Weekday::Mon).first_day();

    let mut past_streak = 0u32;
    for weeks_back in 1..=horizon_weeks {
        let week_start = current_week_start - Duration::weeks(i64::from(weeks_back));
        let start = week_opening(week_start);
        let end = week_opening(week_start + Duration::weeks(1));

        if log.has_activity(user_id, start, end).await? {
            past_streak += 1;
        } else {
            break;
        }
    }

    let current_week_number = past_streak + 1;
    Ok(StreakSummary {
        past_streak,
        current_week_number,
        window: build_window(current_week_number),
    })
}

/// UTC instant at which the given day opens
fn week_opening(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Fixed-size display window for the page containing the current week
fn build_window(current_week_number: u32) -> Vec<WeekSlot> {
    let page = current_week_number.div_ceil(STREAK_WINDOW_LEN);
    let window_start = (page - 1) * STREAK_WINDOW_LEN + 1;

    (window_start..window_start + STREAK_WINDOW_LEN)
        .map(|week_number| WeekSlot {
            week_number,
            status: match week_number.cmp(&current_week_number) {
                Ordering::Less => WeekStatus::Completed,
                Ordering::Equal => WeekStatus::Active,
                Ordering::Greater => WeekStatus::Pending,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_pages_follow_current_week() {
        let window = build_window(6);
        assert_eq!(window[0].week_number, 6);
        assert_eq!(window[0].status, WeekStatus::Active);
        assert!(window[1..]
            .iter()
            .all(|slot| slot.status == WeekStatus::Pending));
    }

    #[test]
    fn last_slot_of_a_page_is_active_when_current() {
        let window = build_window(5);
        assert_eq!(window[4].week_number, 5);
        assert_eq!(window[4].status, WeekStatus::Active);
        assert!(window[..4]
            .iter()
            .all(|slot| slot.status == WeekStatus::Completed));
    }
}
