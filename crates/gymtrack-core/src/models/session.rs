// ABOUTME: Logged workout session record with date, optional load, and free-text notes
// ABOUTME: Provides load sanitisation and date helpers used by every analytics component
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// One logged workout occurrence
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use gymtrack_core::models::Session;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let session = Session::new(date).with_weight(100.0).with_notes("Heavy [legs]");
/// assert_eq!(session.load(), Some(100.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Calendar date the session took place
    pub date: NaiveDate,
    /// Load used that day, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Free-text notes, possibly containing a `[muscle]` tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Session {
    /// Create a session with no load and no notes
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weight: None,
            notes: None,
        }
    }

    /// Set the recorded load
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the session notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Recorded load, if it is a usable positive value
    ///
    /// Zero, negative and non-finite loads are treated as "no load recorded".
    #[must_use]
    pub fn load(&self) -> Option<f64> {
        self.weight.filter(|w| w.is_finite() && *w > 0.0)
    }

    /// Notes as a string slice
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Whole days elapsed between this session and `today`
    ///
    /// Negative when the session is dated after `today`.
    #[must_use]
    pub fn days_before(&self, today: NaiveDate) -> i64 {
        (today - self.date).num_days()
    }

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`)
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` when the string is not a valid calendar date.
    pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
            AppError::invalid_format(format!("Invalid date '{raw}': expected YYYY-MM-DD"))
                .with_source(e)
        })
    }
}
