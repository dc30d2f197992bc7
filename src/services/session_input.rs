// ABOUTME: Boundary parsing of session history from JSON documents and files
// ABOUTME: Rejects malformed dates with INVALID_FORMAT before any analytics run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::Session;

/// Session as it appears in an input document, before date validation
#[derive(Debug, Deserialize)]
struct RawSession {
    date: String,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    notes: Option<String>,
}

/// Parse a JSON array of `{date, weight?, notes?}` records
///
/// # Errors
///
/// Returns `SERIALIZATION_ERROR` when the document is not a JSON array of
/// session records, and `INVALID_FORMAT` when a date is not `YYYY-MM-DD`.
pub fn parse_sessions(document: &str) -> AppResult<Vec<Session>> {
    let raw: Vec<RawSession> = serde_json::from_str(document)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let date = Session::parse_date(&record.date).map_err(|e| {
                e.with_resource_id(index.to_string())
                    .with_details(json!({ "field": "date", "value": record.date }))
            })?;
            Ok(Session {
                date,
                weight: record.weight,
                notes: record.notes,
            })
        })
        .collect()
}

/// Read and parse a session history file
///
/// # Errors
///
/// Returns `INVALID_INPUT` when the file cannot be read, otherwise the
/// errors of [`parse_sessions`].
pub fn load_sessions(path: &Path) -> AppResult<Vec<Session>> {
    let document = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read session file {}", path.display()))
            .with_source(e)
    })?;
    let sessions = parse_sessions(&document)?;
    debug!(path = %path.display(), sessions = sessions.len(), "Loaded session history");
    Ok(sessions)
}
