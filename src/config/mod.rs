// ABOUTME: Configuration module for analytics heuristics and their environment overrides
// ABOUTME: Exposes the intelligence configuration singleton used by every component
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Configuration module
//!
//! - **Intelligence**: volume proxy, trend/plateau thresholds, recovery ladder,
//!   recommendation ranking and timing

/// Intelligence module configuration
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};
