// ABOUTME: Tunable configuration for the progress, trend, and streak engines
// ABOUTME: Serde-backed config sections with defaults sourced from tracking_constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Fitness Engine

//! # Engine Configuration
//!
//! Each engine takes its thresholds from a config section so an embedding
//! service can persist per-deployment tunables as a JSON document. The
//! defaults reproduce the shipped classification behavior exactly; the
//! tests that pin numeric outputs assume them.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::tracking_constants::{progress, streak, trend};

/// Thresholds for the goal progress calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Tolerance band around the expected weight for status classification,
    /// and around the target weight for recomposition completion
    pub weight_tolerance: f64,
    /// Completion percentage lost per unit of recomp deviation beyond the
    /// tolerance band
    pub recomp_deviation_penalty: f64,
    /// Most-recent measurement count forwarded to trend analysis
    pub trend_sample_cap: usize,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            weight_tolerance: progress::WEIGHT_TOLERANCE,
            recomp_deviation_penalty: progress::RECOMP_DEVIATION_PENALTY,
            trend_sample_cap: progress::TREND_SAMPLE_CAP,
        }
    }
}

/// Thresholds for week-over-week trend classification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Hysteresis band; average changes inside (-h, +h) are stable
    pub hysteresis: f64,
    /// Samples per comparison window
    pub window_len: usize,
    /// Minimum total samples before any trend is called
    pub min_samples: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            hysteresis: trend::TREND_HYSTERESIS,
            window_len: trend::WINDOW_LEN,
            min_samples: trend::MIN_SAMPLES,
        }
    }
}

/// Windows and thresholds for the workout streak machine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakConfig {
    /// Hours after a workout during which the streak is fully active
    pub active_window_hours: f64,
    /// Hours after a workout at which the streak breaks; the span between
    /// the active window and this bound is the at-risk grace period
    pub grace_window_hours: f64,
    /// Consecutive-day count at which an active streak reports on-fire
    pub on_fire_threshold: u32,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            active_window_hours: streak::ACTIVE_WINDOW_HOURS,
            grace_window_hours: streak::GRACE_WINDOW_HOURS,
            on_fire_threshold: streak::ON_FIRE_THRESHOLD,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Goal progress calculator section
    pub progress: ProgressConfig,
    /// Trend analyzer section
    pub trend: TrendConfig,
    /// Streak machine section
    pub streak: StreakConfig,
}

impl EngineConfig {
    /// Parse a configuration document, filling omitted fields with defaults
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] when the document is not valid
    /// JSON for this schema.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::invalid_input(format!("malformed engine config: {e}")))
    }

    /// Serialize this configuration as a JSON document
    ///
    /// # Errors
    /// Returns [`AppError::Storage`] if serialization fails.
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self)
            .map_err(|e| AppError::storage(format!("config serialization failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_thresholds() {
        let config = EngineConfig::default();
        assert!((config.progress.weight_tolerance - 0.5).abs() < f64::EPSILON);
        assert!((config.progress.recomp_deviation_penalty - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.progress.trend_sample_cap, 30);
        assert!((config.trend.hysteresis - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.trend.window_len, 7);
        assert_eq!(config.trend.min_samples, 14);
        assert!((config.streak.active_window_hours - 24.0).abs() < f64::EPSILON);
        assert!((config.streak.grace_window_hours - 48.0).abs() < f64::EPSILON);
        assert_eq!(config.streak.on_fire_threshold, 7);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = EngineConfig::default();
        let json = config.to_json().unwrap();
        let restored = EngineConfig::from_json(&json).unwrap();
        assert!((restored.trend.hysteresis - config.trend.hysteresis).abs() < f64::EPSILON);
        assert_eq!(restored.streak.on_fire_threshold, config.streak.on_fire_threshold);
    }

    #[test]
    fn partial_documents_fall_back_to_defaults() {
        let config = EngineConfig::from_json(r#"{"trend": {"hysteresis": 0.4}}"#).unwrap();
        assert!((config.trend.hysteresis - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.trend.window_len, 7);
        assert!((config.progress.weight_tolerance - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(EngineConfig::from_json("{not json").is_err());
    }
}
