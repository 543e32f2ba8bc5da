// ABOUTME: Named threshold constants for progress, trend, and streak tracking
// ABOUTME: Single source of truth for the tolerance bands, time windows, and milestones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Fitness Engine

//! Tracking thresholds used throughout the engine
//!
//! Numeric outputs of the calculators are sensitive to these exact values;
//! the classification tests pin them. Change a constant here and the
//! corresponding config default changes with it.

/// Goal progress classification thresholds
pub mod progress {
    /// Symmetric margin around the expected weight within which a goal is
    /// still classified `on_track` rather than ahead/behind. Same unit as
    /// the stored weights.
    pub const WEIGHT_TOLERANCE: f64 = 0.5;

    /// Completion percentage lost per unit of deviation from the target
    /// weight on a recomposition goal once outside the tolerance band
    pub const RECOMP_DEVIATION_PENALTY: f64 = 20.0;

    /// Maximum number of most-recent measurements fed into trend analysis
    pub const TREND_SAMPLE_CAP: usize = 30;
}

/// Trend classification thresholds
pub mod trend {
    /// Hysteresis band for week-over-week average weight change. Changes
    /// inside the open interval (-0.3, +0.3) are noise, not a trend.
    pub const TREND_HYSTERESIS: f64 = 0.3;

    /// Number of samples in each comparison window
    pub const WINDOW_LEN: usize = 7;

    /// Minimum measurement count before a trend call is made at all
    pub const MIN_SAMPLES: usize = 14;
}

/// Workout streak windows and milestones
pub mod streak {
    /// Hours since the last workout within which a streak is fully active
    pub const ACTIVE_WINDOW_HOURS: f64 = 24.0;

    /// Hours since the last workout after which a streak is broken.
    /// Between the active window and this bound the streak is at risk.
    pub const GRACE_WINDOW_HOURS: f64 = 48.0;

    /// Consecutive-day count at which an active streak becomes on-fire
    pub const ON_FIRE_THRESHOLD: u32 = 7;

    /// Streak lengths that trigger a dedicated milestone message
    pub const MILESTONE_DAYS: [u32; 7] = [1, 3, 7, 14, 30, 50, 100];
}

/// Recommendation rule thresholds
pub mod recommendation {
    /// Remaining-day count below which the urgency clause is emitted
    pub const URGENCY_DAYS_THRESHOLD: i64 = 7;
}
