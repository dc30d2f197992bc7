// ABOUTME: Collection-level aggregation of sessions into weekly and muscle group buckets
// ABOUTME: Also provides session windows, recency and personal best helpers used by other components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Session aggregation
//!
//! Every aggregate is built by a single fold over the input slice and
//! returned as an owned value; nothing accumulates across calls.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use indexmap::IndexMap;

use super::muscle_tagger::{MuscleGroupTagger, TagMode};
use super::volume_estimator::VolumeEstimator;
use crate::models::Session;

/// Volume and session count for one training week
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyBucket {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Summed session volume
    pub volume: f64,
    /// Number of sessions
    pub sessions: usize,
}

impl WeeklyBucket {
    const fn empty(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            volume: 0.0,
            sessions: 0,
        }
    }
}

/// Weekly buckets keyed by week start, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyVolume {
    buckets: IndexMap<NaiveDate, WeeklyBucket>,
}

impl WeeklyVolume {
    /// Buckets in the order their week was first seen
    pub fn buckets(&self) -> impl ExactSizeIterator<Item = &WeeklyBucket> {
        self.buckets.values()
    }

    /// Number of distinct weeks
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no session was bucketed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Bucket for the week starting on `week_start`
    #[must_use]
    pub fn get(&self, week_start: NaiveDate) -> Option<&WeeklyBucket> {
        self.buckets.get(&week_start)
    }

    /// Buckets sorted by week
    #[must_use]
    pub fn chronological(&self) -> Vec<WeeklyBucket> {
        let mut sorted: Vec<WeeklyBucket> = self.buckets.values().cloned().collect();
        sorted.sort_by_key(|b| b.week_start);
        sorted
    }

    /// Sum of all bucket volumes
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.buckets.values().map(|b| b.volume).sum()
    }

    /// Sum of all bucket session counts
    #[must_use]
    pub fn total_sessions(&self) -> usize {
        self.buckets.values().map(|b| b.sessions).sum()
    }

    /// Week start -> volume
    #[must_use]
    pub fn volume_map(&self) -> IndexMap<NaiveDate, f64> {
        self.buckets
            .iter()
            .map(|(week, b)| (*week, b.volume))
            .collect()
    }

    /// Week start -> session count
    #[must_use]
    pub fn session_map(&self) -> IndexMap<NaiveDate, usize> {
        self.buckets
            .iter()
            .map(|(week, b)| (*week, b.sessions))
            .collect()
    }
}

/// Session count and cumulative volume for one muscle group
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MuscleGroupStat {
    /// Sessions tagged with the group
    pub count: usize,
    /// Summed volume of those sessions
    pub volume: f64,
}

/// Per-tag statistics, keyed in lexical order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MuscleGroupStats {
    groups: BTreeMap<String, MuscleGroupStat>,
}

impl MuscleGroupStats {
    /// Statistics for a tag, if any session carried it
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&MuscleGroupStat> {
        self.groups.get(tag)
    }

    /// Session count for a tag, `0` when unseen
    #[must_use]
    pub fn count(&self, tag: &str) -> usize {
        self.groups.get(tag).map_or(0, |s| s.count)
    }

    /// Tags seen, in lexical order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Tag -> session count
    #[must_use]
    pub fn counts(&self) -> BTreeMap<String, usize> {
        self.groups
            .iter()
            .map(|(tag, stat)| (tag.clone(), stat.count))
            .collect()
    }

    /// Tag -> cumulative volume
    #[must_use]
    pub fn volumes(&self) -> BTreeMap<String, f64> {
        self.groups
            .iter()
            .map(|(tag, stat)| (tag.clone(), stat.volume))
            .collect()
    }

    /// Whether no session was tagged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct tags
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Most and least trained groups by session count
    ///
    /// Ties go to the lexically first tag.
    #[must_use]
    pub fn extremes(&self) -> Option<(&str, usize, &str, usize)> {
        let mut iter = self.groups.iter();
        let (first_tag, first) = iter.next()?;
        let init = (first_tag.as_str(), first.count, first_tag.as_str(), first.count);
        Some(iter.fold(init, |(most, max, least, min), (tag, stat)| {
            let (most, max) = if stat.count > max {
                (tag.as_str(), stat.count)
            } else {
                (most, max)
            };
            let (least, min) = if stat.count < min {
                (tag.as_str(), stat.count)
            } else {
                (least, min)
            };
            (most, max, least, min)
        }))
    }
}

/// Heaviest recorded load
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalBest {
    /// Load lifted
    pub load: f64,
    /// Date of the session
    pub date: NaiveDate,
}

/// Monday of the ISO week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Sessions dated strictly after `today - days`, in input order
///
/// A window reaching past the earliest representable date keeps the whole
/// history.
#[must_use]
pub fn sessions_within(sessions: &[Session], today: NaiveDate, days: i64) -> Vec<Session> {
    let cutoff = Duration::try_days(days).and_then(|span| today.checked_sub_signed(span));
    sessions
        .iter()
        .filter(|s| cutoff.is_none_or(|cutoff| s.date > cutoff))
        .cloned()
        .collect()
}

/// Date of the most recent session
#[must_use]
pub fn most_recent_date(sessions: &[Session]) -> Option<NaiveDate> {
    sessions.iter().map(|s| s.date).max()
}

/// Whole days since the most recent session, clamped at zero for future dates
#[must_use]
pub fn days_since_last_session(sessions: &[Session], today: NaiveDate) -> Option<i64> {
    most_recent_date(sessions).map(|last| (today - last).num_days().max(0))
}

/// Sorts sessions by date, preserving input order for equal dates
#[must_use]
pub fn sorted_ascending(sessions: &[Session]) -> Vec<&Session> {
    let mut sorted: Vec<&Session> = sessions.iter().collect();
    sorted.sort_by_key(|s| s.date);
    sorted
}

/// Groups sessions by week and by muscle group
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregationEngine {
    volume: VolumeEstimator,
}

impl AggregationEngine {
    /// Create an engine using the given volume estimator
    #[must_use]
    pub const fn new(volume: VolumeEstimator) -> Self {
        Self { volume }
    }

    /// Volume estimator used for bucket totals
    #[must_use]
    pub const fn volume_estimator(&self) -> &VolumeEstimator {
        &self.volume
    }

    /// Volume and session count per Monday-started week, in first-seen order
    #[must_use]
    pub fn weekly_volume(&self, sessions: &[Session]) -> WeeklyVolume {
        let buckets = sessions
            .iter()
            .fold(IndexMap::new(), |mut buckets, session| {
                let week = week_start(session.date);
                let bucket = buckets
                    .entry(week)
                    .or_insert_with(|| WeeklyBucket::empty(week));
                bucket.volume += self.volume.estimate(session);
                bucket.sessions += 1;
                buckets
            });
        WeeklyVolume { buckets }
    }

    /// Session count and volume per muscle group tag
    ///
    /// Sessions the tagger leaves untagged under `mode` are skipped.
    #[must_use]
    pub fn muscle_group_frequency(&self, sessions: &[Session], mode: TagMode) -> MuscleGroupStats {
        let groups = sessions
            .iter()
            .filter_map(|s| MuscleGroupTagger::tag_session(s, mode).map(|tag| (tag, s)))
            .fold(BTreeMap::new(), |mut groups, (tag, session)| {
                let stat: &mut MuscleGroupStat = groups.entry(tag).or_default();
                stat.count += 1;
                stat.volume += self.volume.estimate(session);
                groups
            });
        MuscleGroupStats { groups }
    }

    /// Heaviest load and when it was first lifted
    #[must_use]
    pub fn personal_best(sessions: &[Session]) -> Option<PersonalBest> {
        sorted_ascending(sessions)
            .into_iter()
            .filter_map(|s| s.load().map(|load| PersonalBest { load, date: s.date }))
            .fold(None, |best: Option<PersonalBest>, candidate| match best {
                Some(current) if candidate.load <= current.load => Some(current),
                _ => Some(candidate),
            })
    }
}

/// Advice on how evenly training is spread across muscle groups
#[must_use]
pub fn balance_recommendations(stats: &MuscleGroupStats) -> Vec<String> {
    let Some((most, max, least, min)) = stats.extremes() else {
        return vec!["Start tracking muscle groups in your notes for better analysis".to_owned()];
    };
    if max > min * 2 {
        vec![format!(
            "Consider more {least} training to balance with {most}"
        )]
    } else {
        vec!["Good muscle group balance!".to_owned()]
    }
}
