// ABOUTME: Library entry point for the progression fitness engine
// ABOUTME: Re-exports the progress calculator, trend analyzer, and streak machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Fitness Engine

#![deny(unsafe_code)]

//! # Progression Engine
//!
//! The progress and consistency tracking core of a fitness application:
//! a pure calculation layer that turns weight objectives and body-weight
//! history into coaching-grade progress reports, and a small
//! time-windowed state machine for workout streaks.
//!
//! ## Components
//!
//! - **Goal Progress Calculator**: completion percentage, linear
//!   expected-weight schedule, and tolerance-banded ahead/on-track/behind
//!   classification for fat-loss, muscle-building, and recomposition
//!   goals
//! - **Trend Analyzer**: week-over-week weight direction with a fixed
//!   hysteresis band against noise-driven flapping
//! - **Recommendation Generator**: ordered, rule-based coaching strings
//! - **Streak State Machine**: grace-period streak tracking with
//!   milestone messaging, split into pure transitions plus a serialized
//!   persistence wrapper
//!
//! The engine is a library, not a service: callers provide a [`Goal`]
//! and a newest-first [`Measurement`] series and receive value objects
//! back synchronously. Only the streak write path touches storage, and
//! it does so through the [`streak_tracker::StreakStore`] seam.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use progression_engine::{Goal, GoalProgressCalculator, GoalType, Measurement};
//! use uuid::Uuid;
//!
//! # fn main() -> progression_engine::AppResult<()> {
//! let user_id = Uuid::new_v4();
//! let start = Utc::now() - Duration::days(45);
//! let goal = Goal::new(
//!     user_id,
//!     GoalType::FatLoss,
//!     start,
//!     start + Duration::days(90),
//!     80.0,
//!     75.0,
//! )?;
//! let measurements = vec![Measurement::new(user_id, Utc::now(), 77.5)];
//!
//! let progress = GoalProgressCalculator::new().calculate(&goal, &measurements)?;
//! println!("{:.0}% complete, {}", progress.percent_complete, progress.status);
//! # Ok(())
//! # }
//! ```

/// Tunable engine configuration with JSON round-trip support
pub mod config;
/// Unified error types and the `AppResult` alias
pub mod errors;
/// Persisted data models: goals, measurements, streak records
pub mod models;
/// Goal progress calculation engine
pub mod progress_calculator;
/// Rule-based coaching recommendation generator
pub mod recommendation_engine;
/// Pure workout streak state machine
pub mod streak_engine;
/// Transactional per-user streak persistence wrapper
pub mod streak_tracker;
/// Named threshold constants shared across the engine
pub mod tracking_constants;
/// Week-over-week weight trend classification
pub mod trend_analyzer;

pub use config::{EngineConfig, ProgressConfig, StreakConfig, TrendConfig};
pub use errors::{AppError, AppResult};
pub use models::{Goal, GoalStatus, GoalType, Measurement, StreakRecord};
pub use progress_calculator::{GoalProgress, GoalProgressCalculator, ProgressStatus};
pub use recommendation_engine::generate_recommendations;
pub use streak_engine::{StreakReport, StreakStatus};
pub use streak_tracker::{InMemoryStreakStore, StreakStore, StreakTracker};
pub use trend_analyzer::TrendDirection;
