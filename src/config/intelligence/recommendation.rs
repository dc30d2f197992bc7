// ABOUTME: Recommendation engine configuration for workout suggestions
// ABOUTME: Configures result cap, session time limits, priority weights, and scheduling gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Recommendation Engine Configuration
//!
//! Provides configuration for the workout recommendation system: how many
//! recommendations are returned, how candidate durations are clamped, how
//! priorities rank, and which rest gaps trigger recovery-driven candidates.

use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Limits on recommendation output
    pub limits: RecommendationLimits,
    /// Session duration rules (minutes)
    pub session_time: SessionTimeConfig,
    /// Ranking weight for each priority
    pub weights: PriorityWeights,
    /// Rest-gap thresholds and scheduling rules
    pub schedule: ScheduleConfig,
    /// Days-since-last rungs of the one-line daily suggestion
    pub quick_suggestion: QuickSuggestionConfig,
}

/// Limits on recommendation generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Maximum recommendations returned after ranking
    pub max_recommendations: usize,
}

/// Session duration rules, all in minutes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTimeConfig {
    /// Available time assumed when the user does not specify one
    pub default_available_time: u32,
    /// Upper bound for the muscle balance session
    pub balance_time_cap: u32,
    /// Upper bound for the active recovery session
    pub active_recovery_time_cap: u32,
    /// Available time at or below which a quick HIIT session is offered
    pub quick_session_threshold: u32,
    /// Lower bound for strength sessions
    pub strength_min_time: u32,
}

/// Ranking weight per priority (higher ranks first)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// Weight of high priority candidates
    pub high: u8,
    /// Weight of medium priority candidates
    pub medium: u8,
    /// Weight of low priority candidates
    pub low: u8,
}

/// Rest-gap thresholds and scheduling rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// History window (days) the suggestions are based on
    pub suggestion_window_days: i64,
    /// Days since last session at or above which a high-intensity session is suggested
    pub high_intensity_rest_days: i64,
    /// Days since last session at or below which active recovery is suggested
    pub active_recovery_max_days: i64,
    /// Minimum rest days before the next suggested training date
    pub rest_days_before_next_session: i64,
    /// Days since last session assumed when there is no history
    pub empty_history_days_since_last: i64,
}

/// Rungs of the daily suggestion ladder, in days since the last session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickSuggestionConfig {
    /// At or above this, suggest a challenging full-body session
    pub well_rested_days: i64,
    /// At or above this (and below `well_rested_days`), suggest a complementary muscle focus
    pub complementary_focus_days: i64,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            max_recommendations: 3,
        }
    }
}

impl Default for SessionTimeConfig {
    fn default() -> Self {
        Self {
            default_available_time: 60,
            balance_time_cap: 45,
            active_recovery_time_cap: 30,
            quick_session_threshold: 30,
            strength_min_time: 45,
        }
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            high: 3,
            medium: 2,
            low: 1,
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            suggestion_window_days: 14,
            high_intensity_rest_days: 3,
            active_recovery_max_days: 1,
            rest_days_before_next_session: 2,
            empty_history_days_since_last: 7,
        }
    }
}

impl Default for QuickSuggestionConfig {
    fn default() -> Self {
        Self {
            well_rested_days: 3,
            complementary_focus_days: 2,
        }
    }
}
