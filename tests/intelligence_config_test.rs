// ABOUTME: Tests for intelligence configuration defaults, validation and environment overrides
// ABOUTME: Environment tests run serially since they mutate process-wide variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::env;

use gymtrack_insights::{
    config::intelligence::{window_in_range, ConfigError, IntelligenceConfig, MAX_WINDOW_DAYS},
    errors::{AppError, ErrorCode},
};
use serial_test::serial;

const OVERRIDE_VARS: [&str; 5] = [
    "GYMTRACK_VOLUME_MULTIPLIER",
    "GYMTRACK_MAX_RECOMMENDATIONS",
    "GYMTRACK_PLATEAU_THRESHOLD",
    "GYMTRACK_TREND_LOOKBACK_DAYS",
    "GYMTRACK_BEST_PERIOD_DAYS",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_is_valid() {
    let config = IntelligenceConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_heuristic_constants() {
    let config = IntelligenceConfig::default();

    assert_eq!(config.volume.volume_multiplier, 15.0);

    let perf = &config.performance_analyzer;
    assert_eq!(perf.trend_analysis.min_sessions, 5);
    assert_eq!(perf.trend_analysis.lookback_days, 90);
    assert_eq!(perf.trend_analysis.improvement_threshold_percent, 5.0);
    assert_eq!(perf.plateau.window_sessions, 6);
    assert_eq!(perf.plateau.variation_threshold, 0.05);
    assert_eq!(perf.best_period.window_days, 14);

    let recovery = &config.recovery;
    assert_eq!(recovery.thresholds.window_days, 7);
    assert_eq!(recovery.thresholds.high_frequency_sessions, 4);
    assert_eq!(recovery.rest_pattern.high_average_volume, 50_000.0);

    let rec = &config.recommendation_engine;
    assert_eq!(rec.limits.max_recommendations, 3);
    assert_eq!(
        (rec.weights.high, rec.weights.medium, rec.weights.low),
        (3, 2, 1)
    );
    assert_eq!(rec.schedule.suggestion_window_days, 14);
    assert_eq!(rec.schedule.rest_days_before_next_session, 2);
    assert_eq!(
        (
            rec.quick_suggestion.well_rested_days,
            rec.quick_suggestion.complementary_focus_days
        ),
        (3, 2)
    );
}

#[test]
fn test_rejects_non_positive_volume_multiplier() {
    let mut config = IntelligenceConfig::default();
    config.volume.volume_multiplier = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    config.volume.volume_multiplier = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_plateau_threshold_outside_unit_interval() {
    let mut config = IntelligenceConfig::default();
    config.performance_analyzer.plateau.variation_threshold = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_rejects_unordered_priority_weights() {
    let mut config = IntelligenceConfig::default();
    config.recommendation_engine.weights.medium = 3;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));

    let mut config = IntelligenceConfig::default();
    config.recommendation_engine.weights.low = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_rejects_inverted_recovery_thresholds() {
    let mut config = IntelligenceConfig::default();
    config.recovery.thresholds.recovered_days = 3;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = IntelligenceConfig::default();
    config.recovery.readiness.recovered = 90;
    config.recovery.readiness.fully_recovered = 80;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_rejects_overlapping_schedule_gaps() {
    let mut config = IntelligenceConfig::default();
    config.recommendation_engine.schedule.active_recovery_max_days = 3;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_rejects_oversized_day_windows() {
    assert!(window_in_range(1));
    assert!(window_in_range(MAX_WINDOW_DAYS));
    assert!(!window_in_range(0));
    assert!(!window_in_range(MAX_WINDOW_DAYS + 1));

    let mut config = IntelligenceConfig::default();
    config.performance_analyzer.trend_analysis.lookback_days = 100_000_000;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = IntelligenceConfig::default();
    config.performance_analyzer.best_period.window_days = i64::MAX;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = IntelligenceConfig::default();
    config.recommendation_engine.schedule.rest_days_before_next_session = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_rejects_unordered_quick_suggestion_rungs() {
    let mut config = IntelligenceConfig::default();
    config.recommendation_engine.quick_suggestion.complementary_focus_days = 3;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_config_error_maps_to_app_error() {
    let error = AppError::from(ConfigError::Parse("Invalid GYMTRACK_PLATEAU_WINDOW".to_owned()));
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("GYMTRACK_PLATEAU_WINDOW"));
    assert!(error.source.is_some());
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();
    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(config.volume.volume_multiplier, 15.0);
    assert_eq!(config.recommendation_engine.limits.max_recommendations, 3);
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_overrides();
    env::set_var("GYMTRACK_VOLUME_MULTIPLIER", "20");
    env::set_var("GYMTRACK_MAX_RECOMMENDATIONS", "5");

    let config = IntelligenceConfig::load();
    clear_overrides();

    let config = config.unwrap();
    assert_eq!(config.volume.volume_multiplier, 20.0);
    assert_eq!(config.recommendation_engine.limits.max_recommendations, 5);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("GYMTRACK_VOLUME_MULTIPLIER", "heavy");

    let result = IntelligenceConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("GYMTRACK_VOLUME_MULTIPLIER"));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_override_is_validated() {
    clear_overrides();
    env::set_var("GYMTRACK_PLATEAU_THRESHOLD", "2.0");

    let result = IntelligenceConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_oversized_window_override_is_rejected() {
    clear_overrides();
    env::set_var("GYMTRACK_BEST_PERIOD_DAYS", "100000000");
    let best_period = IntelligenceConfig::load();
    clear_overrides();
    env::set_var("GYMTRACK_TREND_LOOKBACK_DAYS", "200000000000");
    let lookback = IntelligenceConfig::load();
    clear_overrides();

    assert!(matches!(best_period, Err(ConfigError::ValueOutOfRange(_))));
    assert!(matches!(lookback, Err(ConfigError::ValueOutOfRange(_))));
}
