// ABOUTME: Rule-based coaching recommendations derived from goal progress state
// ABOUTME: Maps (status, trend, days remaining, goal type) to ordered guidance strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Fitness Engine

//! # Recommendation Generator
//!
//! A small, order-significant rule table. The output always leads with a
//! status clause; trend, urgency, and goal-type clauses are appended when
//! their conditions hold. Callers must not rely on a fixed count, only on
//! the ordering and on the status clause being present.

use crate::models::GoalType;
use crate::progress_calculator::ProgressStatus;
use crate::tracking_constants::recommendation::URGENCY_DAYS_THRESHOLD;
use crate::trend_analyzer::TrendDirection;

/// Generate ordered coaching guidance for a goal's current state
///
/// Clause order: status, trend (only when improving or declining),
/// urgency (fewer than seven days remaining, rendered clamped at zero),
/// and a goal-type clause for goals that have fallen behind.
#[must_use]
pub fn generate_recommendations(
    goal_type: GoalType,
    status: ProgressStatus,
    trend: TrendDirection,
    days_remaining: i64,
) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(4);

    recommendations.push(
        match status {
            ProgressStatus::Ahead => {
                "You're ahead of schedule! Excellent progress - keep doing what works."
            }
            ProgressStatus::OnTrack => {
                "You're right on track. Maintain your current routine and consistency."
            }
            ProgressStatus::Behind => {
                "Progress is behind schedule - consider adjusting your plan this week."
            }
        }
        .to_owned(),
    );

    match trend {
        TrendDirection::Improving => recommendations
            .push("Your recent weight trend is moving in the right direction.".to_owned()),
        TrendDirection::Declining => recommendations.push(
            "Your recent weight trend is moving away from the goal - review the past two weeks."
                .to_owned(),
        ),
        TrendDirection::Stable => {}
    }

    if days_remaining < URGENCY_DAYS_THRESHOLD {
        let days_left = days_remaining.max(0);
        recommendations.push(format!(
            "Only {days_left} days remaining - make every day count."
        ));
    }

    if status == ProgressStatus::Behind {
        match goal_type {
            GoalType::FatLoss => recommendations.push(
                "Tighten up your nutrition tracking and add an extra cardio session this week."
                    .to_owned(),
            ),
            GoalType::MuscleBuilding => recommendations.push(
                "Increase your calorie intake slightly and push progressive overload in your lifts."
                    .to_owned(),
            ),
            GoalType::Recomp => {}
        }
    }

    recommendations
}
