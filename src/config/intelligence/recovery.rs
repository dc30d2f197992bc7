// ABOUTME: Recovery estimator configuration for readiness scoring and rest-pattern advice
// ABOUTME: Readiness ladder, day thresholds, and rest-gap / volume limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Recovery Configuration
//!
//! Readiness is a fixed ladder rather than a continuous score: each status
//! maps to one readiness value, and the day thresholds decide which rung
//! applies.

use serde::{Deserialize, Serialize};

/// Recovery estimator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Readiness value assigned to each status
    pub readiness: ReadinessScores,
    /// Day and frequency thresholds for classification
    pub thresholds: RecoveryThresholds,
    /// Rest-pattern and volume limits for recovery recommendations
    pub rest_pattern: RestPatternConfig,
}

/// Readiness value (0-100) for each recovery status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessScores {
    /// No sessions in the window
    pub rested: u8,
    /// Enough days since the last session
    pub fully_recovered: u8,
    /// Slightly fewer days since the last session
    pub recovered: u8,
    /// Trained yesterday with a light week
    pub slightly_fatigued: u8,
    /// Trained yesterday with a busy week
    pub moderate_fatigue: u8,
    /// Trained today
    pub high_fatigue: u8,
}

/// Thresholds used to classify recovery status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryThresholds {
    /// Days used to count "sessions this week"
    pub window_days: i64,
    /// Days since last session at or above which the user is fully recovered
    pub fully_recovered_days: i64,
    /// Days since last session at or above which the user is recovered
    pub recovered_days: i64,
    /// Weekly session count at or above which a one-day gap means moderate fatigue
    pub high_frequency_sessions: usize,
}

/// Limits for the rest-pattern recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestPatternConfig {
    /// Days covered by the recovery recommendation window
    pub window_days: i64,
    /// Average rest days below which more rest is advised
    pub short_rest_days: f64,
    /// Average rest days above which more frequent training is advised
    pub long_rest_days: f64,
    /// Average session volume above which deload advice is added
    pub high_average_volume: f64,
}

impl Default for ReadinessScores {
    fn default() -> Self {
        Self {
            rested: 100,
            fully_recovered: 100,
            recovered: 85,
            slightly_fatigued: 75,
            moderate_fatigue: 60,
            high_fatigue: 45,
        }
    }
}

impl Default for RecoveryThresholds {
    fn default() -> Self {
        Self {
            window_days: 7,
            fully_recovered_days: 3,
            recovered_days: 2,
            high_frequency_sessions: 4,
        }
    }
}

impl Default for RestPatternConfig {
    fn default() -> Self {
        Self {
            window_days: 14,
            short_rest_days: 1.0,
            long_rest_days: 3.0,
            high_average_volume: 50_000.0,
        }
    }
}
