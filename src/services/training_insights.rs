// ABOUTME: Training insight entry points composed over the analytics components
// ABOUTME: Each call is a pure computation from a session snapshot to a serializable report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Training insights service
//!
//! Callers select the session window for each entry point (see
//! [`sessions_within`](crate::intelligence::sessions_within)); the service
//! never reads the clock or any store. `today` is always passed in so the
//! same inputs give the same report.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::config::intelligence::IntelligenceConfig;
use crate::constants::messages::INSUFFICIENT_DATA;
use crate::intelligence::{
    balance_recommendations, sessions_within, AggregationEngine, BestPeriod,
    QuickSuggestion, RecommendationEngine, RecoveryAdvice, RecoveryAssessment, RecoveryEstimator,
    TagMode, TrendAnalyzer, TrendVerdict, VolumeEstimator, WorkoutPreferences,
    WorkoutSuggestions,
};
use crate::models::Session;

/// Weekly volume report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeAnalytics {
    /// Week start -> summed volume, in first-seen order
    pub weekly_volume: IndexMap<NaiveDate, f64>,
    /// Week start -> session count, in first-seen order
    pub weekly_sessions: IndexMap<NaiveDate, usize>,
    /// Sum of the weekly volumes
    pub total_volume: f64,
    /// Sessions in the window
    pub total_sessions: usize,
}

/// Muscle group distribution report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleBalance {
    /// Tag -> session count
    pub muscle_group_count: BTreeMap<String, usize>,
    /// Tag -> summed volume
    pub muscle_group_volume: BTreeMap<String, f64>,
    /// Balance advice
    pub recommendations: Vec<String>,
}

/// Performance trend report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PerformanceTrends {
    /// Too little history overall
    InsufficientData {
        /// Explanation
        message: &'static str,
    },
    /// Judgments over the lookback window
    Report(PerformanceReport),
}

/// Trend, plateau and best period over the lookback window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// Trend verdict
    pub trend: TrendVerdict,
    /// Percent change between the two halves, when finite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement_percent: Option<f64>,
    /// Whether recent loads have stalled
    pub plateau_detected: bool,
    /// Best two-week window
    pub best_period: BestPeriod,
}

/// Heaviest load on record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBests {
    /// Heaviest load lifted
    pub heaviest_lift: Option<f64>,
    /// Date it was first lifted
    pub heaviest_date: Option<NaiveDate>,
}

/// Entry points for training insights
#[derive(Debug, Clone)]
pub struct TrainingInsightsService {
    lookback_days: i64,
    volume: VolumeEstimator,
    aggregation: AggregationEngine,
    trends: TrendAnalyzer,
    recovery: RecoveryEstimator,
    recommendations: RecommendationEngine,
}

impl Default for TrainingInsightsService {
    fn default() -> Self {
        Self::new(IntelligenceConfig::global())
    }
}

impl TrainingInsightsService {
    /// Build every component from one configuration
    #[must_use]
    pub fn new(config: &IntelligenceConfig) -> Self {
        let volume = VolumeEstimator::new(&config.volume);
        let aggregation = AggregationEngine::new(volume);
        Self {
            lookback_days: config.performance_analyzer.trend_analysis.lookback_days,
            volume,
            aggregation,
            trends: TrendAnalyzer::new(&config.performance_analyzer),
            recovery: RecoveryEstimator::new(&config.recovery),
            recommendations: RecommendationEngine::new(&config.recommendation_engine, aggregation),
        }
    }

    /// One-line suggestion from the last week of sessions
    #[must_use]
    pub fn quick_suggestion(&self, recent: &[Session], today: NaiveDate) -> QuickSuggestion {
        let result = self.recommendations.quick_suggestion(recent, today);
        debug!(sessions = recent.len(), suggestion = %result.suggestion, "Quick suggestion");
        result
    }

    /// Readiness from the last week of sessions
    #[must_use]
    pub fn recovery_status(&self, recent: &[Session], today: NaiveDate) -> RecoveryAssessment {
        let result = self.recovery.assess(recent, today);
        debug!(
            sessions = recent.len(),
            status = %result.status,
            readiness = result.readiness,
            "Recovery status"
        );
        result
    }

    /// Ranked recommendations from the last two weeks of sessions
    #[must_use]
    pub fn workout_suggestions(
        &self,
        recent: &[Session],
        preferences: &WorkoutPreferences,
        today: NaiveDate,
    ) -> WorkoutSuggestions {
        let result = self.recommendations.suggest(recent, preferences, today);
        debug!(
            sessions = recent.len(),
            available_time = preferences.available_time,
            recommendations = result.recommendations.len(),
            "Workout suggestions"
        );
        result
    }

    /// Weekly volume over the given window
    #[must_use]
    pub fn volume_analytics(&self, sessions: &[Session]) -> VolumeAnalytics {
        let weekly = self.aggregation.weekly_volume(sessions);
        debug!(
            sessions = sessions.len(),
            weeks = weekly.len(),
            "Volume analytics"
        );
        VolumeAnalytics {
            weekly_volume: weekly.volume_map(),
            weekly_sessions: weekly.session_map(),
            total_volume: weekly.total_volume(),
            total_sessions: sessions.len(),
        }
    }

    /// Muscle group distribution over the given window
    ///
    /// Sessions with notes but no recognizable group count as `"other"`.
    #[must_use]
    pub fn muscle_balance(&self, sessions: &[Session]) -> MuscleBalance {
        let stats = self
            .aggregation
            .muscle_group_frequency(sessions, TagMode::TagOrOther);
        debug!(
            sessions = sessions.len(),
            groups = stats.len(),
            "Muscle balance"
        );
        MuscleBalance {
            muscle_group_count: stats.counts(),
            muscle_group_volume: stats.volumes(),
            recommendations: balance_recommendations(&stats),
        }
    }

    /// Trend, plateau and best period over the lookback window of the full history
    #[must_use]
    pub fn performance_trends(&self, all_sessions: &[Session], today: NaiveDate) -> PerformanceTrends {
        if !self.trends.has_enough_sessions(all_sessions) {
            debug!(sessions = all_sessions.len(), "Performance trends: insufficient history");
            return PerformanceTrends::InsufficientData {
                message: INSUFFICIENT_DATA,
            };
        }

        let window = sessions_within(all_sessions, today, self.lookback_days);
        let analysis = self.trends.analyze(&window);
        debug!(
            sessions = all_sessions.len(),
            in_window = window.len(),
            trend = %analysis.trend.verdict,
            plateau = analysis.plateau.is_detected(),
            "Performance trends"
        );

        PerformanceTrends::Report(PerformanceReport {
            trend: analysis.trend.verdict,
            improvement_percent: analysis.trend.improvement_percent,
            plateau_detected: analysis.plateau.is_detected(),
            best_period: analysis.best_period,
        })
    }

    /// Rest-pattern advice from the last two weeks of sessions
    #[must_use]
    pub fn recovery_recommendations(&self, recent: &[Session]) -> RecoveryAdvice {
        let result = self.recovery.rest_pattern(recent, &self.volume);
        debug!(sessions = recent.len(), "Recovery recommendations");
        result
    }

    /// Heaviest load across the full history
    #[must_use]
    pub fn personal_bests(&self, all_sessions: &[Session]) -> PersonalBests {
        let best = AggregationEngine::personal_best(all_sessions);
        debug!(
            sessions = all_sessions.len(),
            found = best.is_some(),
            "Personal bests"
        );
        PersonalBests {
            heaviest_lift: best.map(|b| b.load),
            heaviest_date: best.map(|b| b.date),
        }
    }
}
