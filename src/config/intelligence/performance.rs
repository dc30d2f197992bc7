// ABOUTME: Performance analyzer configuration for trend, plateau, and best-period analysis
// ABOUTME: Configures minimum history, change thresholds, and window sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Performance Analyzer Configuration
//!
//! Provides configuration for load trend classification, plateau detection
//! and best training window search.

use serde::{Deserialize, Serialize};

/// Performance Analyzer Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceAnalyzerConfig {
    /// Trend classification configuration
    pub trend_analysis: TrendAnalysisConfig,
    /// Plateau detection configuration
    pub plateau: PlateauConfig,
    /// Best training window configuration
    pub best_period: BestPeriodConfig,
}

/// Configuration for trend classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysisConfig {
    /// Minimum number of sessions required for any trend judgement
    pub min_sessions: usize,
    /// Only sessions newer than this many days are analysed
    pub lookback_days: i64,
    /// Percentage change of mean load classified as improvement (or decline when negated)
    pub improvement_threshold_percent: f64,
}

/// Configuration for plateau detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateauConfig {
    /// Number of most recent sessions inspected
    pub window_sessions: usize,
    /// Relative spread `(max - mean) / mean` below which progress has stalled
    pub variation_threshold: f64,
}

/// Configuration for the best training window search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestPeriodConfig {
    /// Window length in days, measured from the window's first session
    pub window_days: i64,
    /// Minimum loaded sessions a window needs to be considered
    pub min_sessions_in_window: usize,
    /// Minimum sessions in history before a window is searched for
    pub min_history: usize,
}

impl Default for TrendAnalysisConfig {
    fn default() -> Self {
        Self {
            min_sessions: 5,
            lookback_days: 90,
            improvement_threshold_percent: 5.0,
        }
    }
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            window_sessions: 6,
            variation_threshold: 0.05,
        }
    }
}

impl Default for BestPeriodConfig {
    fn default() -> Self {
        Self {
            window_days: 14,
            min_sessions_in_window: 2,
            min_history: 3,
        }
    }
}
