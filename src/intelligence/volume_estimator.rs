// ABOUTME: Per-session training volume proxy derived from the recorded load
// ABOUTME: Volume is load times a configurable multiplier, zero when no load was logged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

use crate::config::intelligence::{VolumeEstimationConfig, DEFAULT_VOLUME_MULTIPLIER};
use crate::models::Session;

/// Converts a session into an estimated training volume
///
/// The multiplier stands in for a fixed "3 sets x 5 reps" scheme. It is a
/// heuristic for comparing sessions with each other, not a physiological
/// load calculation.
#[derive(Debug, Clone, Copy)]
pub struct VolumeEstimator {
    multiplier: f64,
}

impl Default for VolumeEstimator {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_VOLUME_MULTIPLIER,
        }
    }
}

impl VolumeEstimator {
    /// Create an estimator from configuration
    #[must_use]
    pub const fn new(config: &VolumeEstimationConfig) -> Self {
        Self {
            multiplier: config.volume_multiplier,
        }
    }

    /// Volume of one session, never negative
    #[must_use]
    pub fn estimate(&self, session: &Session) -> f64 {
        session
            .load()
            .map_or(0.0, |load| (load * self.multiplier).max(0.0))
    }

    /// Summed volume of a collection of sessions
    #[must_use]
    pub fn total(&self, sessions: &[Session]) -> f64 {
        sessions.iter().map(|s| self.estimate(s)).sum()
    }

    /// Mean volume per session, `0.0` for an empty collection
    #[must_use]
    pub fn average(&self, sessions: &[Session]) -> f64 {
        if sessions.is_empty() {
            return 0.0;
        }
        let count = sessions.len() as f64;
        self.total(sessions) / count
    }
}
