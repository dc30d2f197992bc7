// ABOUTME: Readiness-to-train estimation from session recency and weekly frequency
// ABOUTME: Also derives rest-pattern advice from the gaps between recent sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Recovery estimation
//!
//! Readiness follows a fixed ladder keyed on days since the last session,
//! with weekly frequency breaking the tie when the last session was
//! yesterday.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregation::{days_since_last_session, sorted_ascending};
use super::volume_estimator::VolumeEstimator;
use crate::config::intelligence::RecoveryConfig;
use crate::constants::messages::NO_RECENT_TRAINING;
use crate::models::Session;

/// Recovery classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStatus {
    /// No recent sessions at all
    Rested,
    /// Several rest days since the last session
    FullyRecovered,
    /// Two rest days since the last session
    Recovered,
    /// Trained yesterday after a light week
    SlightlyFatigued,
    /// Trained yesterday after a busy week
    ModerateFatigue,
    /// Trained today
    HighFatigue,
}

impl RecoveryStatus {
    /// Human-readable advice for the status
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Rested => "You're well-rested and ready for an intense workout!",
            Self::FullyRecovered => {
                "You're fully recovered! Perfect time for a challenging workout."
            }
            Self::Recovered => "Good recovery status. You can train at high intensity.",
            Self::SlightlyFatigued => "You can train, but consider reducing intensity slightly.",
            Self::ModerateFatigue => "Consider a light session or active recovery.",
            Self::HighFatigue => {
                "High training frequency detected. Consider rest or very light activity."
            }
        }
    }

    /// Wire label of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rested => "rested",
            Self::FullyRecovered => "fully_recovered",
            Self::Recovered => "recovered",
            Self::SlightlyFatigued => "slightly_fatigued",
            Self::ModerateFatigue => "moderate_fatigue",
            Self::HighFatigue => "high_fatigue",
        }
    }
}

impl fmt::Display for RecoveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readiness verdict for the recent window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryAssessment {
    /// Classified status
    pub status: RecoveryStatus,
    /// Readiness score in `[0, 100]`
    pub readiness: u8,
    /// Advice matching the status
    pub recommendation: String,
    /// Days since the most recent session, absent with no history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_last_workout: Option<i64>,
    /// Sessions within the recovery window, absent with no history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions_this_week: Option<usize>,
}

/// Rest-pattern advice for the recent window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecoveryAdvice {
    /// The window held no sessions
    NoData {
        /// Explanation
        message: &'static str,
    },
    /// Advice derived from rest gaps and volume
    Report(RestPatternReport),
}

/// Rest gaps, advice and frequency for a window of sessions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestPatternReport {
    /// Mean gap in days between consecutive sessions
    pub average_rest_days: f64,
    /// Ordered advice messages
    pub recommendations: Vec<String>,
    /// Sessions per week across the window
    pub training_frequency: f64,
}

/// Estimates readiness to train
#[derive(Debug, Clone, Default)]
pub struct RecoveryEstimator {
    config: RecoveryConfig,
}

impl RecoveryEstimator {
    /// Create an estimator from configuration
    #[must_use]
    pub fn new(config: &RecoveryConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Assess readiness from the sessions of the trailing recovery window
    #[must_use]
    pub fn assess(&self, sessions: &[Session], today: NaiveDate) -> RecoveryAssessment {
        let Some(days_since_last) = days_since_last_session(sessions, today) else {
            return self.assessment(RecoveryStatus::Rested, None, None);
        };

        let window = self.config.thresholds.window_days;
        let sessions_this_week = sessions
            .iter()
            .filter(|s| s.days_before(today) <= window)
            .count();
        let status = self.classify(days_since_last, sessions_this_week);

        self.assessment(status, Some(days_since_last), Some(sessions_this_week))
    }

    /// Map recency and weekly frequency onto a status
    #[must_use]
    pub const fn classify(&self, days_since_last: i64, sessions_this_week: usize) -> RecoveryStatus {
        let thresholds = &self.config.thresholds;
        if days_since_last >= thresholds.fully_recovered_days {
            RecoveryStatus::FullyRecovered
        } else if days_since_last >= thresholds.recovered_days {
            RecoveryStatus::Recovered
        } else if days_since_last == 1 {
            if sessions_this_week >= thresholds.high_frequency_sessions {
                RecoveryStatus::ModerateFatigue
            } else {
                RecoveryStatus::SlightlyFatigued
            }
        } else {
            RecoveryStatus::HighFatigue
        }
    }

    /// Readiness score for a status
    #[must_use]
    pub const fn readiness(&self, status: RecoveryStatus) -> u8 {
        let scores = &self.config.readiness;
        let score = match status {
            RecoveryStatus::Rested => scores.rested,
            RecoveryStatus::FullyRecovered => scores.fully_recovered,
            RecoveryStatus::Recovered => scores.recovered,
            RecoveryStatus::SlightlyFatigued => scores.slightly_fatigued,
            RecoveryStatus::ModerateFatigue => scores.moderate_fatigue,
            RecoveryStatus::HighFatigue => scores.high_fatigue,
        };
        if score > 100 {
            100
        } else {
            score
        }
    }

    /// Advice on rest spacing and volume for the trailing suggestion window
    #[must_use]
    pub fn rest_pattern(&self, sessions: &[Session], volume: &VolumeEstimator) -> RecoveryAdvice {
        if sessions.is_empty() {
            return RecoveryAdvice::NoData {
                message: NO_RECENT_TRAINING,
            };
        }

        let cfg = &self.config.rest_pattern;
        let average_rest_days = average_rest_days(sessions);

        let mut recommendations = Vec::new();
        if average_rest_days < cfg.short_rest_days {
            recommendations.push("Consider adding more rest days between sessions".to_owned());
            recommendations.push(
                "Your training frequency is very high - ensure adequate sleep and nutrition"
                    .to_owned(),
            );
        } else if average_rest_days > cfg.long_rest_days {
            recommendations
                .push("You could increase training frequency for better progress".to_owned());
            recommendations
                .push("Try to maintain consistency with 3-4 sessions per week".to_owned());
        } else {
            recommendations.push("Good training frequency! Maintain current schedule".to_owned());
        }

        if volume.average(sessions) > cfg.high_average_volume {
            recommendations
                .push("High training volume detected - ensure adequate recovery".to_owned());
            recommendations.push("Consider deload week every 4-6 weeks".to_owned());
        }

        let training_frequency = sessions.len() as f64 / cfg.window_days as f64 * 7.0;

        RecoveryAdvice::Report(RestPatternReport {
            average_rest_days,
            recommendations,
            training_frequency,
        })
    }

    fn assessment(
        &self,
        status: RecoveryStatus,
        days_since_last_workout: Option<i64>,
        sessions_this_week: Option<usize>,
    ) -> RecoveryAssessment {
        RecoveryAssessment {
            status,
            readiness: self.readiness(status),
            recommendation: status.recommendation().to_owned(),
            days_since_last_workout,
            sessions_this_week,
        }
    }
}

/// Mean gap in days between consecutive sessions, `0.0` for fewer than two
#[must_use]
pub fn average_rest_days(sessions: &[Session]) -> f64 {
    let sorted = sorted_ascending(sessions);
    let gaps: Vec<i64> = sorted
        .windows(2)
        .map(|pair| (pair[1].date - pair[0].date).num_days())
        .collect();
    if gaps.is_empty() {
        return 0.0;
    }
    gaps.iter().sum::<i64>() as f64 / gaps.len() as f64
}
