// ABOUTME: Volume estimation configuration for per-session workload proxies
// ABOUTME: Holds the load multiplier standing in for a fixed sets-and-reps scheme
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Volume Estimation Configuration

use serde::{Deserialize, Serialize};

/// Default multiplier: 3 working sets of 5 repetitions
pub const DEFAULT_VOLUME_MULTIPLIER: f64 = 15.0;

/// Configuration for converting a session load into a volume scalar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeEstimationConfig {
    /// Multiplier applied to the recorded load
    ///
    /// Heuristic, not a physiological law: sessions only record a single
    /// load, so volume is approximated as `load * sets * reps` for a fixed
    /// scheme.
    pub volume_multiplier: f64,
}

impl Default for VolumeEstimationConfig {
    fn default() -> Self {
        Self {
            volume_multiplier: DEFAULT_VOLUME_MULTIPLIER,
        }
    }
}
