// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors
// ABOUTME: Re-exports helper modules for gymtrack-cli
// ABOUTME: Provides access to JSON output formatting

pub mod output;
