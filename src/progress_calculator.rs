// ABOUTME: Goal progress calculation engine for weight objectives
// ABOUTME: Computes completion percentage, expected-vs-actual weight, schedule status, and coaching output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Fitness Engine

//! # Goal Progress Calculator
//!
//! Turns a goal plus a newest-first series of body-weight measurements
//! into a [`GoalProgress`] report: completion percentage, linear
//! expected-weight interpolation, tolerance-banded schedule status, the
//! recent weight trend, and ordered coaching recommendations.
//!
//! The calculator is pure and stateless; it performs no I/O and is safe
//! to call concurrently. The caller owns measurement ordering - the
//! series must arrive sorted newest-first.

use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::{EngineConfig, ProgressConfig, TrendConfig};
use crate::errors::AppResult;
use crate::models::{Goal, GoalType, Measurement};
use crate::recommendation_engine::generate_recommendations;
use crate::trend_analyzer::{classify_trend, TrendDirection};

/// Schedule classification relative to the expected weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    /// Further along than the linear schedule, beyond the tolerance band
    Ahead,
    /// Within the tolerance band of the expected weight
    OnTrack,
    /// Trailing the linear schedule, beyond the tolerance band
    Behind,
}

impl Display for ProgressStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Ahead => "ahead",
            Self::OnTrack => "on_track",
            Self::Behind => "behind",
        };
        write!(f, "{name}")
    }
}

/// Derived progress report for a goal; never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goal this report describes
    pub goal_id: Uuid,
    /// Completion percentage, always within 0..=100
    pub percent_complete: f64,
    /// Most recent measured weight, or the starting weight when the
    /// series is empty
    pub current_weight: f64,
    /// Goal target weight
    pub target_weight: f64,
    /// Goal starting weight
    pub starting_weight: f64,
    /// Whole days since the goal started
    pub days_elapsed: i64,
    /// Whole days until the target date. Negative once the goal is
    /// overdue; presentation-side clamping is the caller's choice.
    pub days_remaining: i64,
    /// Weight the linear schedule predicts for today
    pub expected_weight: f64,
    /// Schedule classification
    pub status: ProgressStatus,
    /// Recent weight trend
    pub trend: TrendDirection,
    /// Ordered coaching guidance; the status clause is always present
    pub recommendations: Vec<String>,
}

/// Progress calculation engine
///
/// Holds the tolerance and trend thresholds; construct once and reuse
/// across calls.
#[derive(Debug, Clone)]
pub struct GoalProgressCalculator {
    progress: ProgressConfig,
    trend: TrendConfig,
}

impl Default for GoalProgressCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalProgressCalculator {
    /// Create a calculator with the shipped thresholds
    #[must_use]
    pub fn new() -> Self {
        Self {
            progress: ProgressConfig::default(),
            trend: TrendConfig::default(),
        }
    }

    /// Create a calculator from an engine configuration
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            progress: config.progress.clone(),
            trend: config.trend.clone(),
        }
    }

    /// Compute progress for a goal as of now
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::InvalidInput`] when the goal
    /// violates its invariants (non-positive weights, inverted dates).
    pub fn calculate(&self, goal: &Goal, measurements: &[Measurement]) -> AppResult<GoalProgress> {
        self.calculate_at(goal, measurements, Utc::now())
    }

    /// Compute progress for a goal as of an explicit instant
    ///
    /// `measurements` must be sorted newest-first; at most the most
    /// recent thirty feed trend analysis and the single newest supplies
    /// the current weight.
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::InvalidInput`] when the goal
    /// violates its invariants.
    pub fn calculate_at(
        &self,
        goal: &Goal,
        measurements: &[Measurement],
        now: DateTime<Utc>,
    ) -> AppResult<GoalProgress> {
        goal.validate()?;

        let current_weight = measurements.first().map_or(goal.starting_weight, |m| m.weight);
        let percent_complete = self.percent_complete(goal, current_weight, measurements.is_empty());

        let days_elapsed = (now - goal.start_date).num_days();
        let days_remaining = days_ceil(goal.target_date - now);
        let total_days = days_ceil(goal.target_date - goal.start_date);

        // Linear interpolation between the starting and target weights.
        // A same-day goal has no schedule to interpolate along; the
        // expected weight collapses to the target.
        let expected_progress = if total_days == 0 {
            1.0
        } else {
            days_elapsed as f64 / total_days as f64
        };
        let expected_weight = (goal.target_weight - goal.starting_weight)
            .mul_add(expected_progress, goal.starting_weight);

        let status = self.classify_status(goal.goal_type, current_weight, expected_weight);

        let trend_window = &measurements[..measurements.len().min(self.progress.trend_sample_cap)];
        let trend = classify_trend(trend_window, goal.goal_type, &self.trend);

        let recommendations =
            generate_recommendations(goal.goal_type, status, trend, days_remaining);

        debug!(
            goal_id = %goal.id,
            goal_type = %goal.goal_type,
            percent_complete,
            %status,
            %trend,
            "computed goal progress"
        );

        Ok(GoalProgress {
            goal_id: goal.id,
            percent_complete,
            current_weight,
            target_weight: goal.target_weight,
            starting_weight: goal.starting_weight,
            days_elapsed,
            days_remaining,
            expected_weight,
            status,
            trend,
            recommendations,
        })
    }

    /// Compute progress for a batch of goals in parallel
    ///
    /// Results preserve input order. A goal that fails validation yields
    /// an error in its slot without affecting the other entries.
    #[must_use]
    pub fn calculate_many(
        &self,
        batch: &[(Goal, Vec<Measurement>)],
    ) -> Vec<AppResult<GoalProgress>> {
        let now = Utc::now();
        batch
            .par_iter()
            .map(|(goal, measurements)| self.calculate_at(goal, measurements, now))
            .collect()
    }

    fn percent_complete(&self, goal: &Goal, current_weight: f64, no_measurements: bool) -> f64 {
        if no_measurements {
            return 0.0;
        }

        let total_distance = (goal.target_weight - goal.starting_weight).abs();
        if total_distance == 0.0 {
            // Recomposition: success is holding weight inside the
            // tolerance band, not distance traveled.
            let deviation = (current_weight - goal.target_weight).abs();
            if deviation <= self.progress.weight_tolerance {
                100.0
            } else {
                deviation
                    .mul_add(-self.progress.recomp_deviation_penalty, 100.0)
                    .max(0.0)
            }
        } else {
            let current_distance = (current_weight - goal.starting_weight).abs();
            (current_distance / total_distance * 100.0).min(100.0)
        }
    }

    fn classify_status(
        &self,
        goal_type: GoalType,
        current_weight: f64,
        expected_weight: f64,
    ) -> ProgressStatus {
        let tolerance = self.progress.weight_tolerance;
        match goal_type {
            GoalType::FatLoss => {
                if current_weight < expected_weight - tolerance {
                    ProgressStatus::Ahead
                } else if current_weight > expected_weight + tolerance {
                    ProgressStatus::Behind
                } else {
                    ProgressStatus::OnTrack
                }
            }
            // Gaining goal types mirror the comparison: heavier than
            // expected is ahead.
            GoalType::MuscleBuilding | GoalType::Recomp => {
                if current_weight > expected_weight + tolerance {
                    ProgressStatus::Ahead
                } else if current_weight < expected_weight - tolerance {
                    ProgressStatus::Behind
                } else {
                    ProgressStatus::OnTrack
                }
            }
        }
    }
}

/// Whole-day count of a duration, rounded up
fn days_ceil(duration: Duration) -> i64 {
    let whole = duration.num_days();
    if duration > Duration::days(whole) {
        whole + 1
    } else {
        whole
    }
}
