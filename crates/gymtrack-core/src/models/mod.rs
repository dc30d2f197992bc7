// ABOUTME: Domain records consumed by the analytics engine
// ABOUTME: Re-exports Session and UserProfile supplied by the persistence layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! # Data Models
//!
//! Records here are produced by the (external) persistence layer and are
//! treated as immutable snapshots. The engine never mutates them; every
//! analysis is recomputed from these records on demand.

mod profile;
mod session;

pub use profile::UserProfile;
pub use session::Session;
