// ABOUTME: Tests for performance trend, plateau and best two-week window detection
// ABOUTME: Covers insufficient-data markers, half splits, zero means and tie-breaking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::cast_possible_wrap)]

mod common;

use common::{bare, days_ago, loaded};
use gymtrack_insights::{
    config::intelligence::{IntelligenceConfig, PerformanceAnalyzerConfig},
    intelligence::{BestPeriod, PlateauStatus, TrendAnalyzer, TrendVerdict},
    models::Session,
};
use serde_json::json;

fn analyzer() -> TrendAnalyzer {
    common::init_test_logging();
    TrendAnalyzer::new(&IntelligenceConfig::default().performance_analyzer)
}

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

// ============================================================================
// Trend
// ============================================================================

#[test]
fn test_trend_requires_five_sessions() {
    let sessions: Vec<Session> = (0..4).map(|d| loaded(d, 100.0)).collect();
    let trend = analyzer().trend(&sessions);
    assert_eq!(trend.verdict, TrendVerdict::InsufficientData);
    assert!(trend.improvement_percent.is_none());
}

#[test]
fn test_trend_improving_with_smaller_first_half() {
    // Five sessions: older half holds two, newer half holds three
    let sessions = vec![
        loaded(0, 110.0),
        loaded(1, 110.0),
        loaded(8, 100.0),
        loaded(2, 110.0),
        loaded(9, 100.0),
    ];
    let trend = analyzer().trend(&sessions);
    assert_eq!(trend.verdict, TrendVerdict::Improving);
    assert!(approx(trend.improvement_percent.unwrap(), 10.0));
}

#[test]
fn test_trend_declining() {
    let sessions = vec![
        loaded(9, 100.0),
        loaded(8, 100.0),
        loaded(2, 90.0),
        loaded(1, 90.0),
        loaded(0, 90.0),
        loaded(7, 100.0),
    ];
    let trend = analyzer().trend(&sessions);
    assert_eq!(trend.verdict, TrendVerdict::Declining);
    assert!(approx(trend.improvement_percent.unwrap(), -10.0));
}

#[test]
fn test_trend_within_threshold_is_stable() {
    let sessions = vec![
        loaded(9, 100.0),
        loaded(8, 100.0),
        loaded(2, 105.0),
        loaded(1, 105.0),
        loaded(0, 105.0),
    ];
    let trend = analyzer().trend(&sessions);
    assert_eq!(trend.verdict, TrendVerdict::Stable);
    assert!(approx(trend.improvement_percent.unwrap(), 5.0));
}

#[test]
fn test_trend_ignores_unloaded_sessions_in_means() {
    let sessions = vec![
        loaded(10, 100.0),
        bare(9),
        bare(8),
        loaded(2, 120.0),
        bare(1),
        loaded(0, 120.0),
    ];
    let trend = analyzer().trend(&sessions);
    assert_eq!(trend.verdict, TrendVerdict::Improving);
    assert!(approx(trend.improvement_percent.unwrap(), 20.0));
}

#[test]
fn test_trend_with_zero_first_half_mean_is_stable() {
    let sessions = vec![bare(9), bare(8), loaded(2, 100.0), loaded(1, 100.0), loaded(0, 100.0)];
    let trend = analyzer().trend(&sessions);
    assert_eq!(trend.verdict, TrendVerdict::Stable);
    assert!(trend.improvement_percent.is_none());
}

#[test]
fn test_trend_threshold_is_configurable() {
    let mut config = PerformanceAnalyzerConfig::default();
    config.trend_analysis.improvement_threshold_percent = 15.0;
    let sessions = vec![
        loaded(9, 100.0),
        loaded(8, 100.0),
        loaded(2, 110.0),
        loaded(1, 110.0),
        loaded(0, 110.0),
    ];
    let trend = TrendAnalyzer::new(&config).trend(&sessions);
    assert_eq!(trend.verdict, TrendVerdict::Stable);
}

// ============================================================================
// Plateau
// ============================================================================

#[test]
fn test_plateau_detected_for_flat_recent_loads() {
    let loads = [100.0, 101.0, 99.0, 100.0, 102.0, 98.0];
    let sessions: Vec<Session> = loads
        .iter()
        .enumerate()
        .map(|(i, load)| loaded(i as i64, *load))
        .collect();
    let plateau = analyzer().plateau(&sessions);
    assert_eq!(plateau, PlateauStatus::Detected);
    assert!(plateau.is_detected());
}

#[test]
fn test_plateau_only_considers_six_most_recent() {
    let mut sessions: Vec<Session> = (0..6).map(|d| loaded(d, 100.0)).collect();
    sessions.push(loaded(30, 200.0));
    assert_eq!(analyzer().plateau(&sessions), PlateauStatus::Detected);
}

#[test]
fn test_no_plateau_when_loads_vary() {
    let loads = [100.0, 120.0, 90.0, 100.0, 130.0, 80.0];
    let sessions: Vec<Session> = loads
        .iter()
        .enumerate()
        .map(|(i, load)| loaded(i as i64, *load))
        .collect();
    assert_eq!(analyzer().plateau(&sessions), PlateauStatus::NotDetected);
}

#[test]
fn test_no_plateau_when_a_recent_session_is_unloaded() {
    let mut sessions: Vec<Session> = (1..8).map(|d| loaded(d, 100.0)).collect();
    sessions.push(bare(0));
    assert_eq!(analyzer().plateau(&sessions), PlateauStatus::NotDetected);
}

#[test]
fn test_plateau_insufficient_history() {
    let sessions: Vec<Session> = (0..4).map(|d| loaded(d, 100.0)).collect();
    assert_eq!(analyzer().plateau(&sessions), PlateauStatus::InsufficientData);
}

// ============================================================================
// Best period
// ============================================================================

#[test]
fn test_best_period_finds_highest_mean_window() {
    let sessions = vec![
        loaded(40, 100.0),
        loaded(38, 100.0),
        loaded(36, 100.0),
        loaded(20, 150.0),
        loaded(18, 160.0),
        loaded(2, 90.0),
        loaded(0, 95.0),
    ];
    let best = analyzer().best_period(&sessions);
    let window = best.window().unwrap();
    assert_eq!(window.start_date, days_ago(20));
    assert_eq!(window.end_date, days_ago(6));
    assert!(approx(window.average_load, 155.0));

    let json = serde_json::to_value(best).unwrap();
    assert_eq!(json["startDate"], json!(days_ago(20).to_string()));
    assert_eq!(json["endDate"], json!(days_ago(6).to_string()));
    assert_eq!(json["averageLoad"], json!(155.0));
}

#[test]
fn test_best_period_never_starts_at_last_two_sessions() {
    // The strongest pair closes the history, so it can only count inside an earlier window
    let sessions = vec![
        loaded(41, 100.0),
        loaded(40, 100.0),
        loaded(11, 50.0),
        loaded(10, 50.0),
        loaded(1, 200.0),
        loaded(0, 200.0),
    ];
    let window = *analyzer().best_period(&sessions).window().unwrap();
    assert_eq!(window.start_date, days_ago(10));
    assert_eq!(window.end_date, days_ago(-4));
    assert!(approx(window.average_load, 150.0));
}

#[test]
fn test_best_period_with_unbounded_window_does_not_overflow() {
    let mut config = PerformanceAnalyzerConfig::default();
    config.best_period.window_days = i64::MAX;
    let sessions: Vec<Session> = (0..5).map(|d| loaded(d, 100.0 + d as f64)).collect();

    let window = *TrendAnalyzer::new(&config).best_period(&sessions).window().unwrap();
    assert_eq!(window.start_date, days_ago(4));
    assert!(approx(window.average_load, 102.0));
}

#[test]
fn test_best_period_earliest_window_wins_ties() {
    let sessions = vec![
        loaded(70, 50.0),
        loaded(30, 100.0),
        loaded(28, 100.0),
        loaded(10, 100.0),
        loaded(8, 100.0),
    ];
    let best = analyzer().best_period(&sessions);
    assert_eq!(best.window().unwrap().start_date, days_ago(30));
}

#[test]
fn test_best_period_without_qualifying_window() {
    let sessions: Vec<Session> = (0..5).map(|i| loaded(i * 20, 100.0)).collect();
    let best = analyzer().best_period(&sessions);
    assert_eq!(best, BestPeriod::NoQualifyingWindow);
    assert_eq!(
        serde_json::to_value(best).unwrap(),
        json!({"startDate": null, "endDate": null, "averageLoad": 0.0})
    );
}

#[test]
fn test_best_period_insufficient_history() {
    let sessions = vec![loaded(1, 100.0), loaded(0, 100.0)];
    let best = analyzer().best_period(&sessions);
    assert_eq!(best, BestPeriod::InsufficientData);
    assert_eq!(
        serde_json::to_value(best).unwrap(),
        json!({"message": "insufficient data"})
    );
}

#[test]
fn test_analyze_is_idempotent() {
    let sessions: Vec<Session> = (0..12)
        .map(|d| loaded(d * 3, 80.0 + (d % 4) as f64 * 5.0))
        .collect();
    let analyzer = analyzer();
    assert_eq!(analyzer.analyze(&sessions), analyzer.analyze(&sessions));
}
