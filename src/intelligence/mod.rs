// ABOUTME: Training analytics components from per-session tagging up to ranked recommendations
// ABOUTME: Re-exports the public types of every component under one path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! # Intelligence Module
//!
//! Components in dependency order, leaves first:
//!
//! 1. [`MuscleGroupTagger`] - muscle group label from session notes
//! 2. [`VolumeEstimator`] - volume scalar for one session
//! 3. [`AggregationEngine`] - weekly and muscle group buckets
//! 4. [`TrendAnalyzer`] - trend, plateau and best two-week window
//! 5. [`RecoveryEstimator`] - readiness to train
//! 6. [`RecommendationEngine`] - ranked, capped workout recommendations
//!
//! All components are pure over an immutable session slice.

/// Weekly and muscle group aggregation
pub mod aggregation;
/// Muscle group tag extraction
pub mod muscle_tagger;
/// Ranked workout recommendations
pub mod recommendation_engine;
/// Readiness and rest-pattern advice
pub mod recovery_estimator;
/// Trend, plateau and best-period detection
pub mod trend_analyzer;
/// Per-session volume proxy
pub mod volume_estimator;

pub use aggregation::{
    balance_recommendations, days_since_last_session, most_recent_date, sessions_within,
    sorted_ascending, week_start, AggregationEngine, MuscleGroupStat, MuscleGroupStats,
    PersonalBest, WeeklyBucket, WeeklyVolume,
};
pub use muscle_tagger::{
    MuscleGroupTagger, TagMode, CANONICAL_MUSCLE_GROUPS, MUSCLE_GROUP_VOCABULARY,
    OTHER_MUSCLE_GROUP,
};
pub use recommendation_engine::{
    undertrained_group, AnalysisSummary, DurationRule, FitnessGoal, GoalTemplate,
    Intensity, QuickSuggestion, Recommendation, RecommendationEngine, RecommendationPriority,
    RecommendationType, WorkoutPreferences, WorkoutSuggestions,
};
pub use recovery_estimator::{
    average_rest_days, RecoveryAdvice, RecoveryAssessment, RecoveryEstimator, RecoveryStatus,
    RestPatternReport,
};
pub use trend_analyzer::{
    BestPeriod, PerformanceAnalysis, PerformanceWindow, PlateauStatus, TrendAnalyzer,
    TrendResult, TrendVerdict,
};
pub use volume_estimator::VolumeEstimator;
