// ABOUTME: Intelligence configuration for training analytics and workout recommendations
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Intelligence Configuration Module
//!
//! Every heuristic constant used by the analytics engine (volume multiplier,
//! plateau threshold, window sizes, priority weights, ...) is a named field
//! here, so it can be tested and overridden instead of living as a literal.
//!
//! # Module Structure
//!
//! - `volume` - Per-session volume proxy
//! - `performance` - Trend, plateau and best-period analysis
//! - `recovery` - Readiness ladder and rest-pattern advice
//! - `recommendation` - Candidate timing, ranking and capping

pub mod error;
pub mod performance;
pub mod recommendation;
pub mod recovery;
pub mod volume;

pub use error::ConfigError;
pub use performance::{
    BestPeriodConfig, PerformanceAnalyzerConfig, PlateauConfig, TrendAnalysisConfig,
};
pub use recommendation::{
    PriorityWeights, QuickSuggestionConfig, RecommendationEngineConfig, RecommendationLimits,
    ScheduleConfig, SessionTimeConfig,
};
pub use recovery::{ReadinessScores, RecoveryConfig, RecoveryThresholds, RestPatternConfig};
pub use volume::{VolumeEstimationConfig, DEFAULT_VOLUME_MULTIPLIER};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Longest day window any analysis may be configured with (about a century)
pub const MAX_WINDOW_DAYS: i64 = 36_500;

/// Whether a day window is positive and no longer than [`MAX_WINDOW_DAYS`]
#[must_use]
pub const fn window_in_range(days: i64) -> bool {
    0 < days && days <= MAX_WINDOW_DAYS
}

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for per-session volume estimation
    pub volume: VolumeEstimationConfig,
    /// Configuration for trend, plateau and best-period analysis
    pub performance_analyzer: PerformanceAnalyzerConfig,
    /// Configuration for recovery readiness and rest-pattern advice
    pub recovery: RecoveryConfig,
    /// Configuration for the workout recommendation engine
    pub recommendation_engine: RecommendationEngineConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.volume.volume_multiplier.is_finite() && self.volume.volume_multiplier > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "volume_multiplier must be a positive number",
            ));
        }

        self.validate_performance()?;
        self.validate_recovery()?;
        self.validate_recommendation()
    }

    fn validate_performance(&self) -> Result<(), ConfigError> {
        let perf = &self.performance_analyzer;

        if perf.trend_analysis.min_sessions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend min_sessions must be at least 1",
            ));
        }
        if !window_in_range(perf.trend_analysis.lookback_days) {
            return Err(ConfigError::ValueOutOfRange(
                "trend lookback_days must be between 1 and 36500",
            ));
        }
        if perf.trend_analysis.improvement_threshold_percent < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "improvement_threshold_percent must not be negative",
            ));
        }
        if perf.plateau.window_sessions < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "plateau window_sessions must be at least 2",
            ));
        }
        if !(perf.plateau.variation_threshold > 0.0 && perf.plateau.variation_threshold < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "plateau variation_threshold must be between 0 and 1",
            ));
        }
        if !window_in_range(perf.best_period.window_days) {
            return Err(ConfigError::ValueOutOfRange(
                "best period window_days must be between 1 and 36500",
            ));
        }
        if perf.best_period.min_sessions_in_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "best period min_sessions_in_window must be at least 1",
            ));
        }

        Ok(())
    }

    fn validate_recovery(&self) -> Result<(), ConfigError> {
        let recovery = &self.recovery;
        let scores = &recovery.readiness;

        if scores.rested > 100 || scores.fully_recovered > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "readiness scores must be within 0-100",
            ));
        }
        if !(scores.fully_recovered >= scores.recovered
            && scores.recovered >= scores.slightly_fatigued
            && scores.slightly_fatigued >= scores.moderate_fatigue
            && scores.moderate_fatigue >= scores.high_fatigue)
        {
            return Err(ConfigError::InvalidRange(
                "readiness scores must not increase with fatigue",
            ));
        }
        if recovery.thresholds.recovered_days >= recovery.thresholds.fully_recovered_days {
            return Err(ConfigError::InvalidRange(
                "recovered_days must be < fully_recovered_days",
            ));
        }
        if recovery.thresholds.recovered_days < 2 {
            return Err(ConfigError::InvalidRange(
                "recovered_days must leave room for the one-day and same-day rungs",
            ));
        }
        if !(window_in_range(recovery.thresholds.window_days)
            && window_in_range(recovery.rest_pattern.window_days))
        {
            return Err(ConfigError::ValueOutOfRange(
                "recovery window_days must be between 1 and 36500",
            ));
        }
        if recovery.rest_pattern.short_rest_days >= recovery.rest_pattern.long_rest_days {
            return Err(ConfigError::InvalidRange(
                "short_rest_days must be < long_rest_days",
            ));
        }

        Ok(())
    }

    fn validate_recommendation(&self) -> Result<(), ConfigError> {
        let rec = &self.recommendation_engine;

        if rec.limits.max_recommendations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_recommendations must be at least 1",
            ));
        }
        if !(rec.weights.high > rec.weights.medium && rec.weights.medium > rec.weights.low) {
            return Err(ConfigError::InvalidWeights(
                "priority weights must satisfy high > medium > low",
            ));
        }
        if rec.weights.low == 0 {
            return Err(ConfigError::InvalidWeights(
                "low priority weight must be positive",
            ));
        }
        if rec.session_time.default_available_time == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_available_time must be positive",
            ));
        }
        if rec.schedule.active_recovery_max_days >= rec.schedule.high_intensity_rest_days {
            return Err(ConfigError::InvalidRange(
                "active_recovery_max_days must be < high_intensity_rest_days",
            ));
        }
        if !(window_in_range(rec.schedule.suggestion_window_days)
            && window_in_range(rec.schedule.rest_days_before_next_session))
        {
            return Err(ConfigError::ValueOutOfRange(
                "suggestion_window_days and rest_days_before_next_session must be between 1 and 36500",
            ));
        }
        if !(0 < rec.quick_suggestion.complementary_focus_days
            && rec.quick_suggestion.complementary_focus_days
                < rec.quick_suggestion.well_rested_days)
        {
            return Err(ConfigError::InvalidRange(
                "quick suggestion rungs must satisfy 0 < complementary_focus_days < well_rested_days",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Volume overrides
        Self::apply_env_var(
            "GYMTRACK_VOLUME_MULTIPLIER",
            &mut self.volume.volume_multiplier,
        )?;

        // Performance analyzer overrides
        let perf = &mut self.performance_analyzer;
        Self::apply_env_var(
            "GYMTRACK_TREND_MIN_SESSIONS",
            &mut perf.trend_analysis.min_sessions,
        )?;
        Self::apply_env_var(
            "GYMTRACK_TREND_LOOKBACK_DAYS",
            &mut perf.trend_analysis.lookback_days,
        )?;
        Self::apply_env_var(
            "GYMTRACK_TREND_THRESHOLD_PERCENT",
            &mut perf.trend_analysis.improvement_threshold_percent,
        )?;
        Self::apply_env_var(
            "GYMTRACK_PLATEAU_WINDOW",
            &mut perf.plateau.window_sessions,
        )?;
        Self::apply_env_var(
            "GYMTRACK_PLATEAU_THRESHOLD",
            &mut perf.plateau.variation_threshold,
        )?;
        Self::apply_env_var(
            "GYMTRACK_BEST_PERIOD_DAYS",
            &mut perf.best_period.window_days,
        )?;

        // Recovery overrides
        let recovery = &mut self.recovery;
        Self::apply_env_var(
            "GYMTRACK_RECOVERY_WINDOW_DAYS",
            &mut recovery.thresholds.window_days,
        )?;
        Self::apply_env_var(
            "GYMTRACK_RECOVERY_HIGH_FREQUENCY",
            &mut recovery.thresholds.high_frequency_sessions,
        )?;
        Self::apply_env_var(
            "GYMTRACK_RECOVERY_HIGH_VOLUME",
            &mut recovery.rest_pattern.high_average_volume,
        )?;

        // Recommendation engine overrides
        let rec = &mut self.recommendation_engine;
        Self::apply_env_var(
            "GYMTRACK_MAX_RECOMMENDATIONS",
            &mut rec.limits.max_recommendations,
        )?;
        Self::apply_env_var(
            "GYMTRACK_DEFAULT_AVAILABLE_TIME",
            &mut rec.session_time.default_available_time,
        )?;
        Self::apply_env_var(
            "GYMTRACK_QUICK_SESSION_THRESHOLD",
            &mut rec.session_time.quick_session_threshold,
        )?;

        Ok(self)
    }
}
