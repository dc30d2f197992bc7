// ABOUTME: Performance trend, plateau and best training window detection over loaded sessions
// ABOUTME: Sparse histories degrade to explicit insufficient-data markers instead of false answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Trend analysis
//!
//! Three independent judgments over a session history:
//!
//! - **Trend**: compares the mean load of the older half against the newer half
//! - **Plateau**: checks whether the most recent loaded sessions barely vary
//! - **Best period**: finds the two-week window with the highest mean load

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use super::aggregation::sorted_ascending;
use crate::config::intelligence::PerformanceAnalyzerConfig;
use crate::constants::messages::INSUFFICIENT_DATA;
use crate::models::Session;

/// Most recent loaded sessions that never start a best-period window
const TRAILING_NON_STARTS: usize = 2;

/// Direction of performance over the analysed history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendVerdict {
    /// Not enough sessions to judge
    InsufficientData,
    /// Newer half lifts meaningfully more
    Improving,
    /// No meaningful change
    Stable,
    /// Newer half lifts meaningfully less
    Declining,
}

impl TrendVerdict {
    /// Wire label of the verdict
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InsufficientData => "insufficient_data",
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

impl fmt::Display for TrendVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend verdict with the underlying change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendResult {
    /// Classified direction
    pub verdict: TrendVerdict,
    /// Percent change from the first half mean, when it is finite
    pub improvement_percent: Option<f64>,
}

impl TrendResult {
    const fn without_ratio(verdict: TrendVerdict) -> Self {
        Self {
            verdict,
            improvement_percent: None,
        }
    }
}

/// Outcome of plateau detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateauStatus {
    /// Not enough sessions to judge
    InsufficientData,
    /// Recent loads sit within the variation threshold
    Detected,
    /// Recent loads vary, or too few of them are loaded
    NotDetected,
}

impl PlateauStatus {
    /// Whether a plateau was declared
    #[must_use]
    pub const fn is_detected(self) -> bool {
        matches!(self, Self::Detected)
    }
}

/// Window with the highest mean load
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceWindow {
    /// First day of the window (a session date)
    pub start_date: NaiveDate,
    /// Last day of the window, inclusive
    pub end_date: NaiveDate,
    /// Mean load of the sessions in the window
    pub average_load: f64,
}

/// Outcome of the best-period search
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BestPeriod {
    /// Too few sessions to search
    InsufficientData,
    /// No window held enough loaded sessions
    NoQualifyingWindow,
    /// The best window found
    Window(PerformanceWindow),
}

impl BestPeriod {
    /// The window, if one qualified
    #[must_use]
    pub const fn window(&self) -> Option<&PerformanceWindow> {
        match self {
            Self::Window(window) => Some(window),
            Self::InsufficientData | Self::NoQualifyingWindow => None,
        }
    }
}

impl Serialize for BestPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::InsufficientData => {
                let mut state = serializer.serialize_struct("BestPeriod", 1)?;
                state.serialize_field("message", INSUFFICIENT_DATA)?;
                state.end()
            }
            Self::NoQualifyingWindow => {
                let mut state = serializer.serialize_struct("BestPeriod", 3)?;
                state.serialize_field("startDate", &None::<NaiveDate>)?;
                state.serialize_field("endDate", &None::<NaiveDate>)?;
                state.serialize_field("averageLoad", &0.0_f64)?;
                state.end()
            }
            Self::Window(window) => {
                let mut state = serializer.serialize_struct("BestPeriod", 3)?;
                state.serialize_field("startDate", &window.start_date)?;
                state.serialize_field("endDate", &window.end_date)?;
                state.serialize_field("averageLoad", &window.average_load)?;
                state.end()
            }
        }
    }
}

/// All three judgments for one history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceAnalysis {
    /// Trend verdict and change
    pub trend: TrendResult,
    /// Plateau outcome
    pub plateau: PlateauStatus,
    /// Best two-week window
    pub best_period: BestPeriod,
}

/// Detects trends, plateaus and peak periods in a session history
#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer {
    config: PerformanceAnalyzerConfig,
}

impl TrendAnalyzer {
    /// Create an analyzer from configuration
    #[must_use]
    pub fn new(config: &PerformanceAnalyzerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Run every judgment over the same history
    #[must_use]
    pub fn analyze(&self, sessions: &[Session]) -> PerformanceAnalysis {
        PerformanceAnalysis {
            trend: self.trend(sessions),
            plateau: self.plateau(sessions),
            best_period: self.best_period(sessions),
        }
    }

    /// Whether the history is long enough to analyse at all
    #[must_use]
    pub const fn has_enough_sessions(&self, sessions: &[Session]) -> bool {
        sessions.len() >= self.config.trend_analysis.min_sessions
    }

    /// Compare the mean load of the older and newer halves of the history
    ///
    /// The older half gets the smaller share on odd counts. A half with no
    /// loaded sessions has a mean of zero; a zero older-half mean yields
    /// `Stable` with no percentage.
    #[must_use]
    pub fn trend(&self, sessions: &[Session]) -> TrendResult {
        if !self.has_enough_sessions(sessions) {
            return TrendResult::without_ratio(TrendVerdict::InsufficientData);
        }

        let sorted = sorted_ascending(sessions);
        let (older, newer) = sorted.split_at(sorted.len() / 2);
        let older_mean = mean_load(older.iter().copied());
        let newer_mean = mean_load(newer.iter().copied());

        let improvement = (newer_mean - older_mean) / older_mean * 100.0;
        if !improvement.is_finite() {
            return TrendResult::without_ratio(TrendVerdict::Stable);
        }

        let threshold = self.config.trend_analysis.improvement_threshold_percent;
        let verdict = if improvement > threshold {
            TrendVerdict::Improving
        } else if improvement < -threshold {
            TrendVerdict::Declining
        } else {
            TrendVerdict::Stable
        };

        TrendResult {
            verdict,
            improvement_percent: Some(improvement),
        }
    }

    /// Check whether the most recent loaded sessions have stalled
    ///
    /// Takes the most recent sessions first and only then drops those without
    /// a load, so an unloaded recent session prevents a plateau verdict.
    #[must_use]
    pub fn plateau(&self, sessions: &[Session]) -> PlateauStatus {
        if !self.has_enough_sessions(sessions) {
            return PlateauStatus::InsufficientData;
        }

        let window = self.config.plateau.window_sessions;
        let mut recent: Vec<&Session> = sessions.iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        let loads: Vec<f64> = recent
            .into_iter()
            .take(window)
            .filter_map(Session::load)
            .collect();

        if loads.is_empty() || loads.len() < window {
            return PlateauStatus::NotDetected;
        }

        let max = loads.iter().copied().fold(f64::MIN, f64::max);
        let mean = loads.iter().sum::<f64>() / loads.len() as f64;

        if (max - mean) / mean < self.config.plateau.variation_threshold {
            PlateauStatus::Detected
        } else {
            PlateauStatus::NotDetected
        }
    }

    /// Find the window of `window_days` with the highest mean load
    ///
    /// Every loaded session except the last two starts a candidate window. A
    /// later window must beat the running best strictly, so the earliest of
    /// equal windows wins. Windows running past the last representable date
    /// end there.
    #[must_use]
    pub fn best_period(&self, sessions: &[Session]) -> BestPeriod {
        let cfg = &self.config.best_period;
        if !self.has_enough_sessions(sessions) || sessions.len() < cfg.min_history {
            return BestPeriod::InsufficientData;
        }

        let loaded: Vec<(NaiveDate, f64)> = sorted_ascending(sessions)
            .into_iter()
            .filter_map(|s| s.load().map(|load| (s.date, load)))
            .collect();
        let span = Duration::try_days(cfg.window_days);
        let starts = &loaded[..loaded.len().saturating_sub(TRAILING_NON_STARTS)];

        let best = starts.iter().fold(None, |best: Option<PerformanceWindow>, (start, _)| {
            let end = span
                .and_then(|span| start.checked_add_signed(span))
                .unwrap_or(NaiveDate::MAX);
            let in_window: Vec<f64> = loaded
                .iter()
                .filter(|(date, _)| date >= start && *date <= end)
                .map(|(_, load)| *load)
                .collect();
            if in_window.len() < cfg.min_sessions_in_window {
                return best;
            }
            let average_load = in_window.iter().sum::<f64>() / in_window.len() as f64;
            let running = best.map_or(0.0, |w| w.average_load);
            if average_load > running {
                Some(PerformanceWindow {
                    start_date: *start,
                    end_date: end,
                    average_load,
                })
            } else {
                best
            }
        });

        best.map_or(BestPeriod::NoQualifyingWindow, BestPeriod::Window)
    }
}

/// Mean load of the loaded sessions, `0.0` when none are loaded
fn mean_load<'a>(sessions: impl Iterator<Item = &'a Session>) -> f64 {
    let (sum, count) = sessions
        .filter_map(Session::load)
        .fold((0.0, 0_u32), |(sum, count), load| (sum + load, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}
