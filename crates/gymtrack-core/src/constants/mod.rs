// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identity and default analysis windows for GymTrack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Constants module
//!
//! Values that are part of the service contract rather than tunable heuristics.
//! Tunable thresholds live in the intelligence configuration instead.

/// Service names used in structured logging
pub mod service_names {
    /// Analytics engine service name
    pub const GYMTRACK_INSIGHTS: &str = "gymtrack-insights";
    /// Command-line tool name
    pub const GYMTRACK_CLI: &str = "gymtrack-cli";
}

/// Default lookback windows (days) used when the caller builds session windows
pub mod windows {
    /// Window for quick suggestions and recovery status
    pub const RECENT_DAYS: i64 = 7;
    /// Window for workout suggestions and recovery recommendations
    pub const SUGGESTION_DAYS: i64 = 14;
    /// Default window for volume and muscle balance analytics
    pub const ANALYTICS_DAYS: i64 = 30;
}

/// Fixed user-facing messages
pub mod messages {
    /// Marker returned when there is not enough history to analyse
    pub const INSUFFICIENT_DATA: &str = "insufficient data";
    /// Returned by recovery recommendations for an empty window
    pub const NO_RECENT_TRAINING: &str = "No recent training data";
}
