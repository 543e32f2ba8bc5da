// ABOUTME: Week-over-week weight trend classification with a fixed hysteresis band
// ABOUTME: Compares two adjacent sample windows and maps the change onto the goal direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Fitness Engine

//! # Trend Analyzer
//!
//! Classifies the direction of recent weight change by comparing the
//! average of the newest seven samples against the average of the seven
//! before them. The hysteresis band keeps day-to-day noise from flapping
//! the classification; whether a change counts as improving depends on
//! the goal direction (losing is improving for fat loss, gaining is
//! improving for muscle building and recomposition).

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::config::TrendConfig;
use crate::models::{GoalType, Measurement};

/// Direction of recent weight change relative to the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Moving toward the goal
    Improving,
    /// No meaningful change either way
    Stable,
    /// Moving away from the goal
    Declining,
}

impl Display for TrendDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        };
        write!(f, "{name}")
    }
}

/// Average weight change between the two most recent sample windows
///
/// `measurements` must be ordered newest-first. Returns `None` when the
/// series is too short for a reliable comparison (fewer than
/// `config.min_samples` entries, or an empty previous window).
#[must_use]
pub fn weekly_average_change(measurements: &[Measurement], config: &TrendConfig) -> Option<f64> {
    if measurements.len() < config.min_samples {
        return None;
    }

    let recent = &measurements[..config.window_len.min(measurements.len())];
    let previous_end = (config.window_len * 2).min(measurements.len());
    let previous = &measurements[config.window_len.min(measurements.len())..previous_end];
    if previous.is_empty() {
        return None;
    }

    Some(window_average(recent) - window_average(previous))
}

/// Classify the weight trend for a goal
///
/// Returns [`TrendDirection::Stable`] whenever the series is too short to
/// compare windows. A change of at least the hysteresis magnitude in the
/// goal's favored direction is improving; the mirror is declining.
#[must_use]
pub fn classify_trend(
    measurements: &[Measurement],
    goal_type: GoalType,
    config: &TrendConfig,
) -> TrendDirection {
    let Some(change) = weekly_average_change(measurements, config) else {
        return TrendDirection::Stable;
    };

    // For fat loss a drop is favorable; for the gaining goal types the
    // sign flips.
    let favored_change = match goal_type {
        GoalType::FatLoss => -change,
        GoalType::MuscleBuilding | GoalType::Recomp => change,
    };

    if favored_change >= config.hysteresis {
        TrendDirection::Improving
    } else if favored_change <= -config.hysteresis {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

fn window_average(window: &[Measurement]) -> f64 {
    let sum: f64 = window.iter().map(|m| m.weight).sum();
    sum / window.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    /// Newest-first series: `recent_weight` for the first 7 samples,
    /// `previous_weight` for the 7 after them.
    fn two_week_series(recent_weight: f64, previous_weight: f64) -> Vec<Measurement> {
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        (0..14)
            .map(|i| {
                let weight = if i < 7 { recent_weight } else { previous_weight };
                Measurement::new(user_id, now - Duration::days(i), weight)
            })
            .collect()
    }

    #[test]
    fn short_series_is_always_stable() {
        let full = two_week_series(78.0, 80.0);
        assert_eq!(
            classify_trend(&full[..10], GoalType::FatLoss, &TrendConfig::default()),
            TrendDirection::Stable
        );
    }

    #[test]
    fn losing_weight_improves_a_fat_loss_goal() {
        let series = two_week_series(79.5, 80.0);
        assert_eq!(
            classify_trend(&series, GoalType::FatLoss, &TrendConfig::default()),
            TrendDirection::Improving
        );
    }

    #[test]
    fn gaining_weight_declines_a_fat_loss_goal() {
        let series = two_week_series(80.5, 80.0);
        assert_eq!(
            classify_trend(&series, GoalType::FatLoss, &TrendConfig::default()),
            TrendDirection::Declining
        );
    }

    #[test]
    fn small_changes_stay_inside_the_hysteresis_band() {
        let series = two_week_series(80.125, 80.0);
        assert_eq!(
            classify_trend(&series, GoalType::FatLoss, &TrendConfig::default()),
            TrendDirection::Stable
        );
    }

    #[test]
    fn the_sign_flips_for_muscle_building() {
        let gaining = two_week_series(80.5, 80.0);
        assert_eq!(
            classify_trend(&gaining, GoalType::MuscleBuilding, &TrendConfig::default()),
            TrendDirection::Improving
        );
        let losing = two_week_series(79.5, 80.0);
        assert_eq!(
            classify_trend(&losing, GoalType::MuscleBuilding, &TrendConfig::default()),
            TrendDirection::Declining
        );
    }

    #[test]
    fn recomp_treats_gain_like_muscle_building() {
        let gaining = two_week_series(80.5, 80.0);
        assert_eq!(
            classify_trend(&gaining, GoalType::Recomp, &TrendConfig::default()),
            TrendDirection::Improving
        );
    }

    #[test]
    fn weekly_change_reports_the_window_delta() {
        let series = two_week_series(79.0, 80.0);
        let change = weekly_average_change(&series, &TrendConfig::default()).unwrap();
        assert!((change - (-1.0)).abs() < 1e-9);
    }
}
