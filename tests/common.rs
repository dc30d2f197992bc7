// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging, a fixed reference date, and session builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `gymtrack_insights`
//!
//! Sessions are described relative to [`today`], so every test is a pure
//! function of its fixture.

use std::env;
use std::sync::Once;

use chrono::{Duration, NaiveDate};
use gymtrack_insights::{
    config::intelligence::IntelligenceConfig, models::Session,
    services::TrainingInsightsService,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference date for all fixtures (a Friday)
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

/// Calendar date `days_ago` days before [`today`]
pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

/// Parse a `YYYY-MM-DD` literal
pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

/// Session without load or notes
pub fn bare(days: i64) -> Session {
    Session::new(days_ago(days))
}

/// Session with a load
pub fn loaded(days: i64, weight: f64) -> Session {
    Session::new(days_ago(days)).with_weight(weight)
}

/// Session with notes
pub fn noted(days: i64, notes: &str) -> Session {
    Session::new(days_ago(days)).with_notes(notes)
}

/// Session with load and notes
pub fn full(days: i64, weight: f64, notes: &str) -> Session {
    Session::new(days_ago(days)).with_weight(weight).with_notes(notes)
}

/// Service built from default configuration
pub fn test_service() -> TrainingInsightsService {
    init_test_logging();
    TrainingInsightsService::new(&IntelligenceConfig::default())
}
