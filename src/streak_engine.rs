// ABOUTME: Pure workout streak state machine with grace periods and milestone messaging
// ABOUTME: Deterministic (record, now) transitions; persistence stays in the streak tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Fitness Engine

//! # Streak State Machine
//!
//! The time-windowed consistency machine: a workout keeps a streak fully
//! active for 24 hours, at risk until 48, and broken after that. All
//! transitions are pure functions of a [`StreakRecord`] and an explicit
//! `now`, which keeps the race-prone persistence in
//! [`crate::streak_tracker`] and leaves the logic independently testable.
//!
//! Increments are keyed to calendar days, not 24-hour spans: two
//! completions on the same day never inflate the streak, and a late-night
//! workout followed by an early-morning one still counts as two days.

use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::StreakConfig;
use crate::models::StreakRecord;

/// Consistency state of a streak at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakStatus {
    /// Active with at least the on-fire threshold of consecutive days
    OnFire,
    /// Last workout within the active window
    Active,
    /// Inside the grace period; the streak breaks soon
    AtRisk,
    /// Grace period elapsed, or no workout ever recorded
    Broken,
}

impl Display for StreakStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::OnFire => "on_fire",
            Self::Active => "active",
            Self::AtRisk => "at_risk",
            Self::Broken => "broken",
        };
        write!(f, "{name}")
    }
}

/// Derived streak report; never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakReport {
    /// Consecutive-day count after any passive decay
    pub current_streak: u32,
    /// Best streak ever achieved
    pub longest_streak: u32,
    /// Timestamp of the most recent workout
    pub last_workout_date: Option<DateTime<Utc>>,
    /// Whether the streak has not yet broken
    pub is_streak_active: bool,
    /// Consistency state
    pub streak_status: StreakStatus,
    /// Hours left before the streak breaks; `None` without any workout
    pub hours_until_break: Option<f64>,
    /// Milestone or coaching message for this state
    pub message: String,
}

/// Evaluate a streak record at an instant
///
/// Returns the report plus `Some(updated)` when the passive-decay reset
/// must be persisted: the grace window has elapsed and the counter was
/// still positive. Re-observing an already-reset record yields `None`
/// again, so the persistence side effect is idempotent.
#[must_use]
pub fn observe(
    record: &StreakRecord,
    config: &StreakConfig,
    now: DateTime<Utc>,
) -> (Option<StreakRecord>, StreakReport) {
    let Some(last) = record.last_workout_date else {
        let report = StreakReport {
            current_streak: record.current_streak,
            longest_streak: record.longest_streak,
            last_workout_date: None,
            is_streak_active: false,
            streak_status: StreakStatus::Broken,
            hours_until_break: None,
            message: milestone_message(StreakStatus::Broken, record.current_streak),
        };
        return (None, report);
    };

    let hours_since = hours_between(last, now);
    let status = if hours_since <= config.active_window_hours {
        if record.current_streak >= config.on_fire_threshold {
            StreakStatus::OnFire
        } else {
            StreakStatus::Active
        }
    } else if hours_since <= config.grace_window_hours {
        StreakStatus::AtRisk
    } else {
        StreakStatus::Broken
    };

    let updated = if status == StreakStatus::Broken && record.current_streak > 0 {
        let mut reset = record.clone();
        reset.current_streak = 0;
        Some(reset)
    } else {
        None
    };

    let current_streak = updated
        .as_ref()
        .map_or(record.current_streak, |r| r.current_streak);

    let report = StreakReport {
        current_streak,
        longest_streak: record.longest_streak,
        last_workout_date: Some(last),
        is_streak_active: status != StreakStatus::Broken,
        streak_status: status,
        hours_until_break: Some((config.grace_window_hours - hours_since).max(0.0)),
        message: milestone_message(status, current_streak),
    };

    (updated, report)
}

/// Apply a workout completion to a streak record
///
/// Same-calendar-day completions only refresh the timestamp; a completion
/// on a new day within the grace window extends the streak; anything
/// later starts over at one. `longest_streak` never decreases.
#[must_use]
pub fn complete_workout(
    record: &StreakRecord,
    config: &StreakConfig,
    now: DateTime<Utc>,
) -> StreakRecord {
    let current_streak = match record.last_workout_date {
        None => 1,
        Some(last) if last.date_naive() == now.date_naive() => record.current_streak,
        Some(last) if hours_between(last, now) <= config.grace_window_hours => {
            record.current_streak + 1
        }
        Some(_) => 1,
    };

    let mut updated = record.clone();
    updated.current_streak = current_streak;
    updated.longest_streak = record.longest_streak.max(current_streak);
    updated.last_workout_date = Some(now);
    updated
}

/// Milestone or coaching message for a streak state
///
/// Dedicated strings fire at 1, 3, 7, 14, 30, 50, and 100 consecutive
/// days; every other positive count gets the generic message with its
/// literal day count; a broken streak gets the restart prompt.
#[must_use]
pub fn milestone_message(status: StreakStatus, current_streak: u32) -> String {
    if status == StreakStatus::Broken {
        return "No active streak - complete a workout to start a new streak.".to_owned();
    }
    match current_streak {
        0 => "No active streak - complete a workout to start a new streak.".to_owned(),
        1 => "First workout logged - a streak begins with a single session.".to_owned(),
        3 => "3 days in a row - momentum is building!".to_owned(),
        7 => "A full week of workouts - you're on fire!".to_owned(),
        14 => "14 days strong - two whole weeks of consistency.".to_owned(),
        30 => "30 days straight - you're unstoppable!".to_owned(),
        50 => "50 days - this is a lifestyle now.".to_owned(),
        100 => "100 days. Legendary consistency.".to_owned(),
        days => format!("{days} days and counting - keep showing up."),
    }
}

fn hours_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_seconds() as f64 / 3600.0
}
