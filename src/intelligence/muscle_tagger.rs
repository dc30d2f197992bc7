// ABOUTME: Muscle group tag extraction from free-text session notes
// ABOUTME: Bracketed tags win over keyword scanning; the fallback is chosen by an explicit mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Muscle group tagging
//!
//! Notes such as `"Chest and triceps day [chest]"` carry the targeted muscle
//! group either as an explicit bracketed tag or as a keyword somewhere in the
//! text. The bracketed form always wins.

use crate::models::Session;

/// Keyword vocabulary, scanned in this order
pub const MUSCLE_GROUP_VOCABULARY: [&str; 9] = [
    "chest",
    "back",
    "legs",
    "shoulders",
    "arms",
    "biceps",
    "triceps",
    "abs",
    "glutes",
];

/// Groups considered when looking for an under-trained area
pub const CANONICAL_MUSCLE_GROUPS: [&str; 5] = ["chest", "back", "legs", "shoulders", "arms"];

/// Catch-all tag used by distribution reports
pub const OTHER_MUSCLE_GROUP: &str = "other";

/// What the tagger returns when nothing matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMode {
    /// Unmatched notes produce no tag (balance analysis)
    TagOrNull,
    /// Unmatched notes are tagged `"other"` (muscle distribution)
    TagOrOther,
}

/// Extracts normalized muscle group tags from session notes
pub struct MuscleGroupTagger;

impl MuscleGroupTagger {
    /// Tag a notes string
    ///
    /// Sessions without any notes are never tagged, whatever the mode; only
    /// notes that are present but unmatched fall back to `"other"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gymtrack_insights::intelligence::{MuscleGroupTagger, TagMode};
    ///
    /// let tag = MuscleGroupTagger::tag(Some("Chest and triceps day [chest]"), TagMode::TagOrNull);
    /// assert_eq!(tag.as_deref(), Some("chest"));
    /// ```
    #[must_use]
    pub fn tag(notes: Option<&str>, mode: TagMode) -> Option<String> {
        let notes = notes?;
        let matched = Self::bracketed(notes).or_else(|| Self::keyword(notes));
        match mode {
            TagMode::TagOrNull => matched,
            TagMode::TagOrOther => {
                Some(matched.unwrap_or_else(|| OTHER_MUSCLE_GROUP.to_owned()))
            }
        }
    }

    /// Tag a session by its notes
    #[must_use]
    pub fn tag_session(session: &Session, mode: TagMode) -> Option<String> {
        Self::tag(session.notes(), mode)
    }

    /// Content between the first `[` and the first `]`, lower-cased
    fn bracketed(notes: &str) -> Option<String> {
        let start = notes.find('[')? + 1;
        let end = notes.find(']')?;
        (end > start).then(|| notes[start..end].to_lowercase())
    }

    /// First vocabulary word that appears anywhere in the notes
    fn keyword(notes: &str) -> Option<String> {
        let lowered = notes.to_lowercase();
        MUSCLE_GROUP_VOCABULARY
            .iter()
            .find(|group| lowered.contains(*group))
            .map(|group| (*group).to_owned())
    }
}
