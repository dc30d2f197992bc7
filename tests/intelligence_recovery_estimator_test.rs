// ABOUTME: Tests for readiness estimation and rest-pattern advice
// ABOUTME: Covers the readiness ladder, weekly frequency tie-break, and volume-driven deload advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{bare, loaded, today};
use gymtrack_insights::{
    config::intelligence::{IntelligenceConfig, RecoveryConfig},
    intelligence::{
        average_rest_days, RecoveryAdvice, RecoveryEstimator, RecoveryStatus, VolumeEstimator,
    },
    models::Session,
};
use serde_json::json;

fn estimator() -> RecoveryEstimator {
    common::init_test_logging();
    RecoveryEstimator::new(&IntelligenceConfig::default().recovery)
}

fn report(advice: RecoveryAdvice) -> (f64, Vec<String>, f64) {
    match advice {
        RecoveryAdvice::Report(report) => (
            report.average_rest_days,
            report.recommendations,
            report.training_frequency,
        ),
        RecoveryAdvice::NoData { message } => panic!("expected a report, got {message}"),
    }
}

// ============================================================================
// Readiness
// ============================================================================

#[test]
fn test_no_sessions_means_rested() {
    let assessment = estimator().assess(&[], today());
    assert_eq!(assessment.status, RecoveryStatus::Rested);
    assert_eq!(assessment.readiness, 100);
    assert_eq!(
        assessment.recommendation,
        "You're well-rested and ready for an intense workout!"
    );
    assert!(assessment.days_since_last_workout.is_none());
    assert!(assessment.sessions_this_week.is_none());
}

#[test]
fn test_four_days_since_last_is_fully_recovered() {
    let assessment = estimator().assess(&[bare(4)], today());
    assert_eq!(assessment.status, RecoveryStatus::FullyRecovered);
    assert_eq!(assessment.readiness, 100);
    assert_eq!(assessment.days_since_last_workout, Some(4));
    assert_eq!(assessment.sessions_this_week, Some(1));
}

#[test]
fn test_two_days_since_last_is_recovered() {
    let assessment = estimator().assess(&[bare(2), bare(5)], today());
    assert_eq!(assessment.status, RecoveryStatus::Recovered);
    assert_eq!(assessment.readiness, 85);
}

#[test]
fn test_yesterday_after_busy_week_is_moderate_fatigue() {
    let sessions = vec![bare(1), bare(2), bare(4), bare(6)];
    let assessment = estimator().assess(&sessions, today());
    assert_eq!(assessment.status, RecoveryStatus::ModerateFatigue);
    assert_eq!(assessment.readiness, 60);
    assert_eq!(
        assessment.recommendation,
        "Consider a light session or active recovery."
    );
}

#[test]
fn test_yesterday_after_light_week_is_slightly_fatigued() {
    let sessions = vec![bare(1), bare(3), bare(5)];
    let assessment = estimator().assess(&sessions, today());
    assert_eq!(assessment.status, RecoveryStatus::SlightlyFatigued);
    assert_eq!(assessment.readiness, 75);
}

#[test]
fn test_trained_today_is_high_fatigue() {
    let assessment = estimator().assess(&[bare(0)], today());
    assert_eq!(assessment.status, RecoveryStatus::HighFatigue);
    assert_eq!(assessment.readiness, 45);
    assert_eq!(assessment.days_since_last_workout, Some(0));
}

#[test]
fn test_future_session_counts_as_today() {
    let assessment = estimator().assess(&[bare(-2)], today());
    assert_eq!(assessment.status, RecoveryStatus::HighFatigue);
    assert_eq!(assessment.days_since_last_workout, Some(0));
}

#[test]
fn test_sessions_this_week_ignores_older_sessions() {
    let sessions = vec![bare(1), bare(7), bare(8), bare(12), bare(20)];
    let assessment = estimator().assess(&sessions, today());
    assert_eq!(assessment.sessions_this_week, Some(2));
    assert_eq!(assessment.status, RecoveryStatus::SlightlyFatigued);
}

#[test]
fn test_readiness_always_on_the_ladder() {
    let estimator = estimator();
    for days in 0..10 {
        for count in 0..8 {
            let status = estimator.classify(days, count);
            let readiness = estimator.readiness(status);
            assert!([100, 85, 75, 60, 45].contains(&readiness));
            assert!(readiness <= 100);
        }
    }
}

#[test]
fn test_high_frequency_threshold_is_configurable() {
    let mut config = RecoveryConfig::default();
    config.thresholds.high_frequency_sessions = 2;
    let estimator = RecoveryEstimator::new(&config);
    let assessment = estimator.assess(&[bare(1), bare(3)], today());
    assert_eq!(assessment.status, RecoveryStatus::ModerateFatigue);
}

#[test]
fn test_assessment_serializes_snake_case_status() {
    let assessment = estimator().assess(&[bare(4)], today());
    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["status"], json!("fully_recovered"));
    assert_eq!(json["readiness"], json!(100));
    assert_eq!(json["daysSinceLastWorkout"], json!(4));
    assert_eq!(json["sessionsThisWeek"], json!(1));
}

// ============================================================================
// Rest pattern
// ============================================================================

#[test]
fn test_rest_pattern_without_sessions() {
    let advice = estimator().rest_pattern(&[], &VolumeEstimator::default());
    assert_eq!(
        serde_json::to_value(&advice).unwrap(),
        json!({"message": "No recent training data"})
    );
}

#[test]
fn test_short_rest_gaps() {
    let sessions = vec![bare(1), bare(0), bare(0)];
    let (average, recommendations, frequency) =
        report(estimator().rest_pattern(&sessions, &VolumeEstimator::default()));
    assert_eq!(average, 0.5);
    assert_eq!(
        recommendations,
        vec![
            "Consider adding more rest days between sessions",
            "Your training frequency is very high - ensure adequate sleep and nutrition",
        ]
    );
    assert_eq!(frequency, 1.5);
}

#[test]
fn test_long_rest_gaps() {
    let sessions = vec![bare(12), bare(8), bare(4), bare(0)];
    let (average, recommendations, frequency) =
        report(estimator().rest_pattern(&sessions, &VolumeEstimator::default()));
    assert_eq!(average, 4.0);
    assert_eq!(
        recommendations,
        vec![
            "You could increase training frequency for better progress",
            "Try to maintain consistency with 3-4 sessions per week",
        ]
    );
    assert_eq!(frequency, 2.0);
}

#[test]
fn test_balanced_rest_gaps() {
    let sessions = vec![bare(0), bare(4), bare(2), bare(6)];
    let (average, recommendations, _) =
        report(estimator().rest_pattern(&sessions, &VolumeEstimator::default()));
    assert_eq!(average, 2.0);
    assert_eq!(
        recommendations,
        vec!["Good training frequency! Maintain current schedule"]
    );
}

#[test]
fn test_high_volume_appends_deload_advice() {
    let sessions = vec![loaded(4, 4000.0), loaded(2, 4000.0), loaded(0, 4000.0)];
    let (_, recommendations, _) =
        report(estimator().rest_pattern(&sessions, &VolumeEstimator::default()));
    assert_eq!(
        recommendations,
        vec![
            "Good training frequency! Maintain current schedule",
            "High training volume detected - ensure adequate recovery",
            "Consider deload week every 4-6 weeks",
        ]
    );
}

#[test]
fn test_average_rest_days_of_single_session_is_zero() {
    assert_eq!(average_rest_days(&[bare(3)]), 0.0);
    let empty: Vec<Session> = Vec::new();
    assert_eq!(average_rest_days(&empty), 0.0);
}
