// ABOUTME: Main library entry point for the GymTrack training analytics engine
// ABOUTME: Turns session history into statistics, trend judgments, readiness and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

#![deny(unsafe_code)]

//! # GymTrack Insights
//!
//! Training analytics and recommendation engine for a personal gym tracker.
//! Given a snapshot of logged sessions it produces:
//!
//! - **Aggregates**: weekly volume and muscle group distribution
//! - **Judgments**: performance trend, plateau and best two-week window
//! - **Readiness**: a recovery status with a 0-100 readiness score
//! - **Recommendations**: a ranked, capped list of workout suggestions
//!
//! Storage, authentication and HTTP transport are outside this crate; they
//! hand it already-validated [`models::Session`] records.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use gymtrack_insights::config::intelligence::IntelligenceConfig;
//! use gymtrack_insights::models::Session;
//! use gymtrack_insights::services::TrainingInsightsService;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//! let service = TrainingInsightsService::new(&IntelligenceConfig::default());
//! let sessions = vec![Session::new(today).with_weight(100.0).with_notes("[legs]")];
//!
//! let status = service.recovery_status(&sessions, today);
//! assert_eq!(status.readiness, 45);
//! ```

/// Configuration for analytics heuristics
pub mod config;

/// Analytics components
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Entry points composed over the analytics components
pub mod services;

// Re-export core crate modules so callers need a single dependency
pub use gymtrack_core::{constants, errors, models};
