// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors
// ABOUTME: Output formatting helpers for gymtrack-cli
// ABOUTME: Prints reports as pretty JSON on stdout

use gymtrack_insights::errors::AppResult;
use serde_json::Value;

/// Print a report as pretty JSON followed by a newline
pub fn print_json(report: &Value) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(report)?;
    println!("{rendered}");
    Ok(())
}
