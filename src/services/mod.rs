// ABOUTME: Service layer exposing training insight entry points to outer surfaces
// ABOUTME: Transport-agnostic so the CLI and any HTTP layer share the same rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Service layer
//!
//! Entry points here compose the intelligence components into the reports a
//! transport layer serializes. They are synchronous and hold no state beyond
//! their configuration, so one instance can be shared across requests.

/// Session history parsing at the input boundary
pub mod session_input;
/// Training insight entry points
pub mod training_insights;

pub use session_input::{load_sessions, parse_sessions};
pub use training_insights::{
    MuscleBalance, PerformanceReport, PerformanceTrends, PersonalBests, TrainingInsightsService,
    VolumeAnalytics,
};
