// ABOUTME: Core data models for goals, body-weight measurements, and workout streaks
// ABOUTME: Defines Goal, GoalType, Measurement, and StreakRecord with their invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Fitness Engine

//! # Data Models
//!
//! Persisted records consumed and produced by the engine. The engine never
//! owns their storage: goals and measurements arrive from the caller's
//! data layer, streak records round-trip through a [`StreakStore`]
//! implementation.
//!
//! ## Core Models
//!
//! - [`Goal`]: a user's active weight objective
//! - [`Measurement`]: a single dated body-weight sample
//! - [`StreakRecord`]: per-user workout-consistency counter
//!
//! [`StreakStore`]: crate::streak_tracker::StreakStore

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// The kind of weight objective a goal represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Lose body weight toward a lower target
    FatLoss,
    /// Gain body weight toward a higher target
    MuscleBuilding,
    /// Body recomposition: hold weight steady while changing composition.
    /// Target weight equals starting weight.
    Recomp,
}

impl Display for GoalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::FatLoss => "fat_loss",
            Self::MuscleBuilding => "muscle_building",
            Self::Recomp => "recomp",
        };
        write!(f, "{name}")
    }
}

impl FromStr for GoalType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fat_loss" => Ok(Self::FatLoss),
            "muscle_building" => Ok(Self::MuscleBuilding),
            "recomp" => Ok(Self::Recomp),
            other => Err(AppError::invalid_input(format!(
                "unknown goal type: {other}"
            ))),
        }
    }
}

/// Lifecycle state of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Currently being pursued; at most one per user
    Active,
    /// Temporarily suspended by the user
    Paused,
    /// Target reached
    Completed,
    /// Abandoned or superseded
    Archived,
}

/// A user's weight objective
///
/// `start_date` and `starting_weight` are immutable once the goal is
/// created; status transitions happen through explicit updates in the
/// caller's data layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique goal identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Kind of objective
    pub goal_type: GoalType,
    /// Lifecycle state
    pub status: GoalStatus,
    /// When the goal was started
    pub start_date: DateTime<Utc>,
    /// Deadline; never earlier than `start_date`
    pub target_date: DateTime<Utc>,
    /// Body weight when the goal was created (positive)
    pub starting_weight: f64,
    /// Body weight being aimed for (positive; equals `starting_weight`
    /// for recomposition goals)
    pub target_weight: f64,
}

impl Goal {
    /// Create a new active goal, validating its invariants
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] for non-positive weights or a
    /// target date earlier than the start date.
    pub fn new(
        user_id: Uuid,
        goal_type: GoalType,
        start_date: DateTime<Utc>,
        target_date: DateTime<Utc>,
        starting_weight: f64,
        target_weight: f64,
    ) -> AppResult<Self> {
        let goal = Self {
            id: Uuid::new_v4(),
            user_id,
            goal_type,
            status: GoalStatus::Active,
            start_date,
            target_date,
            starting_weight,
            target_weight,
        };
        goal.validate()?;
        Ok(goal)
    }

    /// Check the invariants the calculators depend on
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] describing the first violated
    /// invariant.
    pub fn validate(&self) -> AppResult<()> {
        if self.starting_weight <= 0.0 || !self.starting_weight.is_finite() {
            return Err(AppError::invalid_input(format!(
                "starting weight must be a positive number, got {}",
                self.starting_weight
            )));
        }
        if self.target_weight <= 0.0 || !self.target_weight.is_finite() {
            return Err(AppError::invalid_input(format!(
                "target weight must be a positive number, got {}",
                self.target_weight
            )));
        }
        if self.target_date < self.start_date {
            return Err(AppError::invalid_input(format!(
                "target date {} precedes start date {}",
                self.target_date, self.start_date
            )));
        }
        Ok(())
    }
}

/// A single dated body-weight sample
///
/// Append-only from the engine's perspective; the engine only reads
/// series the caller has already ordered newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    /// Unique measurement identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Goal this sample was logged against, if any
    pub goal_id: Option<Uuid>,
    /// When the sample was taken
    pub date: DateTime<Utc>,
    /// Body weight (positive decimal)
    pub weight: f64,
    /// Free-form user note
    pub notes: Option<String>,
}

impl Measurement {
    /// Create a measurement sample
    #[must_use]
    pub fn new(user_id: Uuid, date: DateTime<Utc>, weight: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            goal_id: None,
            date,
            weight,
            notes: None,
        }
    }
}

/// Per-user workout-consistency counter
///
/// `longest_streak` never decreases over the record's lifetime and is
/// always at least `current_streak`. Created lazily on first read or
/// write; mutated only by the workout-completed transition and the
/// passive-decay check performed on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    /// Unique record identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Consecutive-day count of the streak in progress
    pub current_streak: u32,
    /// Best streak ever achieved
    pub longest_streak: u32,
    /// Timestamp of the most recent completed workout
    pub last_workout_date: Option<DateTime<Utc>>,
}

impl StreakRecord {
    /// Fresh record for a user with no workout history
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            current_streak: 0,
            longest_streak: 0,
            last_workout_date: None,
        }
    }
}
