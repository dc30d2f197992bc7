// ABOUTME: Core types and constants for GymTrack training analytics
// ABOUTME: Foundation crate with error handling, session records, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

#![deny(unsafe_code)]

//! # GymTrack Core
//!
//! Foundation crate shared by the analytics engine and its command-line surface.
//! It holds the types that cross the boundary between the engine and the
//! (external) persistence and transport layers, and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Read-only domain records (`Session`, `UserProfile`)
//! - **constants**: Service identity and default lookback windows

/// Unified error handling system with standard error codes
pub mod errors;

/// Read-only domain records supplied by the persistence layer
pub mod models;

/// Application constants organized by domain
pub mod constants;
