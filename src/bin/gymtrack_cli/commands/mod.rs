// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors
// ABOUTME: Re-exports command modules for gymtrack-cli
// ABOUTME: Provides access to the training insight commands

pub mod insights;
