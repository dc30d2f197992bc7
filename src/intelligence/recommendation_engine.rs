// ABOUTME: Workout recommendation engine composing balance, recovery, goal and time candidates
// ABOUTME: Ranks candidates by priority weight with a stable sort and caps the result list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

//! Workout recommendations
//!
//! Candidates are generated in a fixed order (balance, recovery-driven,
//! goal template, time constraint), then stable-sorted by priority weight so
//! equal priorities keep that order, then truncated.

use std::collections::BTreeSet;
use std::fmt::{self, Write as _};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregation::{
    days_since_last_session, most_recent_date, AggregationEngine, MuscleGroupStats,
};
use super::muscle_tagger::{MuscleGroupTagger, TagMode, CANONICAL_MUSCLE_GROUPS};
use crate::config::intelligence::{
    IntelligenceConfig, PriorityWeights, RecommendationEngineConfig, SessionTimeConfig,
};
use crate::models::Session;

/// Recommendation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Nice to have
    Low,
    /// Worth doing soon
    Medium,
    /// Do this next
    High,
}

impl RecommendationPriority {
    /// Ranking weight of the priority
    #[must_use]
    pub const fn weight(self, weights: &PriorityWeights) -> u8 {
        match self {
            Self::Low => weights.low,
            Self::Medium => weights.medium,
            Self::High => weights.high,
        }
    }
}

/// Kind of session being recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Train an under-worked muscle group
    MuscleBalance,
    /// Hard session after enough rest
    Intensity,
    /// Light session after recent training
    Recovery,
    /// Heavy compound lifting
    Strength,
    /// Moderate load, higher volume
    Hypertrophy,
    /// High rep circuits
    Endurance,
    /// Mixed strength and cardio
    General,
    /// Short high-intensity intervals
    TimeEfficient,
}

impl RecommendationType {
    /// Wire label of the type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MuscleBalance => "muscle_balance",
            Self::Intensity => "intensity",
            Self::Recovery => "recovery",
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Endurance => "endurance",
            Self::General => "general",
            Self::TimeEfficient => "time_efficient",
        }
    }
}

/// Session intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    /// Easy effort
    #[serde(rename = "low")]
    Low,
    /// Moderate effort
    #[serde(rename = "medium")]
    Medium,
    /// Between moderate and hard
    #[serde(rename = "medium-high")]
    MediumHigh,
    /// Hard effort
    #[serde(rename = "high")]
    High,
}

impl Intensity {
    /// Wire label of the intensity
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::MediumHigh => "medium-high",
            Self::High => "high",
        }
    }
}

/// Training goal selecting the goal template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FitnessGoal {
    /// Maximal strength
    Strength,
    /// Hypertrophy
    MuscleBuilding,
    /// Muscular endurance
    Endurance,
    /// Anything else
    #[default]
    #[serde(rename = "general_fitness")]
    GeneralFitness,
}

impl FitnessGoal {
    /// Parse a goal, case-insensitively; unknown goals mean general fitness
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "strength" => Self::Strength,
            "muscle_building" => Self::MuscleBuilding,
            "endurance" => Self::Endurance,
            _ => Self::GeneralFitness,
        }
    }

    /// Template used for this goal's candidate
    #[must_use]
    pub fn template(self) -> &'static GoalTemplate {
        match self {
            Self::Strength => &STRENGTH_TEMPLATE,
            Self::MuscleBuilding => &HYPERTROPHY_TEMPLATE,
            Self::Endurance => &ENDURANCE_TEMPLATE,
            Self::GeneralFitness => &GENERAL_TEMPLATE,
        }
    }
}

impl From<String> for FitnessGoal {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strength => "strength",
            Self::MuscleBuilding => "muscle_building",
            Self::Endurance => "endurance",
            Self::GeneralFitness => "general_fitness",
        })
    }
}

/// How a template derives its session length from the available time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationRule {
    /// Use the available time as is
    Available,
    /// Use the available time, but never less than the strength minimum
    AtLeastStrengthMinimum,
}

/// Fixed content of a goal-based candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTemplate {
    /// Candidate title
    pub title: &'static str,
    /// Candidate description
    pub description: &'static str,
    /// Recommendation type
    pub recommendation_type: RecommendationType,
    /// Session intensity
    pub intensity: Intensity,
    /// Candidate priority
    pub priority: RecommendationPriority,
    /// Session length rule
    pub duration: DurationRule,
    /// Suggested exercises, possibly none
    pub exercises: &'static [&'static str],
}

static STRENGTH_TEMPLATE: GoalTemplate = GoalTemplate {
    title: "Strength Building Session",
    description: "Focus on compound movements with heavy weights and low reps",
    recommendation_type: RecommendationType::Strength,
    intensity: Intensity::High,
    priority: RecommendationPriority::Medium,
    duration: DurationRule::AtLeastStrengthMinimum,
    exercises: &["Deadlifts", "Squats", "Bench Press", "Overhead Press"],
};

static HYPERTROPHY_TEMPLATE: GoalTemplate = GoalTemplate {
    title: "Hypertrophy Training",
    description: "Moderate weights, higher volume for muscle growth",
    recommendation_type: RecommendationType::Hypertrophy,
    intensity: Intensity::MediumHigh,
    priority: RecommendationPriority::Medium,
    duration: DurationRule::Available,
    exercises: &["Incline Press", "Rows", "Leg Press", "Lateral Raises"],
};

static ENDURANCE_TEMPLATE: GoalTemplate = GoalTemplate {
    title: "Endurance Circuit",
    description: "High rep, low weight circuit training",
    recommendation_type: RecommendationType::Endurance,
    intensity: Intensity::Medium,
    priority: RecommendationPriority::Medium,
    duration: DurationRule::Available,
    exercises: &["Bodyweight Squats", "Push-ups", "Lunges", "Planks"],
};

static GENERAL_TEMPLATE: GoalTemplate = GoalTemplate {
    title: "General Fitness",
    description: "Balanced workout combining strength and cardio",
    recommendation_type: RecommendationType::General,
    intensity: Intensity::Medium,
    priority: RecommendationPriority::Low,
    duration: DurationRule::Available,
    exercises: &[],
};

const QUICK_HIIT_EXERCISES: [&str; 4] = ["Burpees", "Mountain Climbers", "Jump Squats", "Push-ups"];

/// One ranked workout recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Short title
    pub title: String,
    /// One-sentence description
    pub description: String,
    /// Recommendation type
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    /// Ranking priority
    pub priority: RecommendationPriority,
    /// Session length in minutes
    pub estimated_time: u32,
    /// Muscle group the session targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_muscle: Option<String>,
    /// Session intensity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    /// Suggested exercises
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exercises: Vec<String>,
}

impl Recommendation {
    fn from_template(template: &GoalTemplate, estimated_time: u32) -> Self {
        Self {
            title: template.title.to_owned(),
            description: template.description.to_owned(),
            recommendation_type: template.recommendation_type,
            priority: template.priority,
            estimated_time,
            target_muscle: None,
            intensity: Some(template.intensity),
            exercises: template.exercises.iter().map(|e| (*e).to_owned()).collect(),
        }
    }

    /// Notes stored when this recommendation is saved as a planned session
    ///
    /// The target muscle is written in bracket form so the saved session
    /// tags back to the same group.
    #[must_use]
    pub fn planned_session_notes(&self) -> String {
        let mut notes = format!(
            "AI Recommendation: {}\nDescription: {}\n",
            self.title, self.description
        );
        // Writing to a String cannot fail.
        let _ = writeln!(notes, "Type: {}", self.recommendation_type.as_str());
        if let Some(muscle) = &self.target_muscle {
            let _ = writeln!(notes, "Target: [{muscle}]");
        }
        if let Some(intensity) = self.intensity {
            let _ = writeln!(notes, "Intensity: {}", intensity.as_str());
        }
        let _ = write!(notes, "Estimated Time: {} minutes", self.estimated_time);
        notes.trim().to_owned()
    }
}

/// User preferences for workout suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutPreferences {
    /// Minutes available for the session
    pub available_time: u32,
    /// Equipment on hand; recorded but not used to filter templates
    pub equipment: String,
    /// Training goal
    pub fitness_goal: FitnessGoal,
}

impl WorkoutPreferences {
    /// General fitness preferences using the configured default session length
    #[must_use]
    pub fn with_session_time(session_time: &SessionTimeConfig) -> Self {
        Self {
            available_time: session_time.default_available_time,
            equipment: "full_gym".to_owned(),
            fitness_goal: FitnessGoal::GeneralFitness,
        }
    }
}

impl Default for WorkoutPreferences {
    fn default() -> Self {
        Self::with_session_time(&IntelligenceConfig::global().recommendation_engine.session_time)
    }
}

/// Summary of the history the suggestions were based on
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// Sessions in the suggestion window
    pub total_sessions: usize,
    /// Sessions per week across the window
    pub average_frequency: f64,
    /// Days since the most recent session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_last_workout: Option<i64>,
    /// Muscle groups trained in the window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_muscle_groups: Option<BTreeSet<String>>,
}

/// Ranked recommendations with their context
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSuggestions {
    /// At most the configured number of recommendations, by priority
    pub recommendations: Vec<Recommendation>,
    /// What the recommendations were based on
    pub based_on_data: AnalysisSummary,
    /// Earliest advisable date for the next session
    pub next_suggested_date: NaiveDate,
}

/// One-line suggestion for today
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickSuggestion {
    /// What to do
    pub suggestion: String,
    /// Why
    pub reason: String,
    /// Plan to start with, only offered without history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_plan: Option<String>,
}

/// Composes ranked workout recommendations from session history
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: RecommendationEngineConfig,
    aggregation: AggregationEngine,
}

impl RecommendationEngine {
    /// Create an engine from configuration
    #[must_use]
    pub fn new(config: &RecommendationEngineConfig, aggregation: AggregationEngine) -> Self {
        Self {
            config: config.clone(),
            aggregation,
        }
    }

    /// Ranked, capped recommendations for the recent history
    #[must_use]
    pub fn recommend(
        &self,
        sessions: &[Session],
        preferences: &WorkoutPreferences,
        today: NaiveDate,
    ) -> Vec<Recommendation> {
        let frequency = self
            .aggregation
            .muscle_group_frequency(sessions, TagMode::TagOrNull);
        let days_since_last = days_since_last_session(sessions, today)
            .unwrap_or(self.config.schedule.empty_history_days_since_last);

        let mut candidates = vec![self.balance_candidate(&frequency, preferences)];
        candidates.extend(self.recovery_candidate(days_since_last, preferences));
        candidates.push(self.goal_candidate(preferences));
        candidates.extend(self.time_constraint_candidate(preferences));

        debug!(
            candidates = candidates.len(),
            days_since_last,
            goal = %preferences.fitness_goal,
            equipment = %preferences.equipment,
            "Generated recommendation candidates"
        );

        self.rank(candidates)
    }

    /// Recommendations plus the summary and next suggested date
    #[must_use]
    pub fn suggest(
        &self,
        sessions: &[Session],
        preferences: &WorkoutPreferences,
        today: NaiveDate,
    ) -> WorkoutSuggestions {
        WorkoutSuggestions {
            recommendations: self.recommend(sessions, preferences, today),
            based_on_data: self.summary(sessions, today),
            next_suggested_date: self.next_suggested_date(sessions, today),
        }
    }

    /// Stable sort by priority weight, descending, then cap
    #[must_use]
    pub fn rank(&self, mut candidates: Vec<Recommendation>) -> Vec<Recommendation> {
        let weights = &self.config.weights;
        candidates.sort_by(|a, b| b.priority.weight(weights).cmp(&a.priority.weight(weights)));
        candidates.truncate(self.config.limits.max_recommendations);
        candidates
    }

    /// Summary of the suggestion window
    #[must_use]
    pub fn summary(&self, sessions: &[Session], today: NaiveDate) -> AnalysisSummary {
        let weeks = self.config.schedule.suggestion_window_days as f64 / 7.0;
        let total_sessions = sessions.len();
        let has_history = !sessions.is_empty();

        AnalysisSummary {
            total_sessions,
            average_frequency: total_sessions as f64 / weeks,
            days_since_last_workout: days_since_last_session(sessions, today),
            trained_muscle_groups: has_history.then(|| {
                sessions
                    .iter()
                    .filter_map(|s| MuscleGroupTagger::tag_session(s, TagMode::TagOrNull))
                    .collect()
            }),
        }
    }

    /// Today after enough rest, otherwise the last session plus the rest gap
    #[must_use]
    pub fn next_suggested_date(&self, sessions: &[Session], today: NaiveDate) -> NaiveDate {
        let rest_days = self.config.schedule.rest_days_before_next_session;
        match most_recent_date(sessions) {
            Some(last) if (today - last).num_days() < rest_days => Duration::try_days(rest_days)
                .and_then(|gap| last.checked_add_signed(gap))
                .unwrap_or(today),
            _ => today,
        }
    }

    /// One-line suggestion from the last week of sessions
    #[must_use]
    pub fn quick_suggestion(&self, sessions: &[Session], today: NaiveDate) -> QuickSuggestion {
        let Some(days_since_last) = days_since_last_session(sessions, today) else {
            return QuickSuggestion {
                suggestion: "Start with a full-body workout to establish your baseline".to_owned(),
                reason: "No recent training history".to_owned(),
                recommended_plan: Some("Beginner Full Body".to_owned()),
            };
        };

        let ladder = &self.config.quick_suggestion;
        let suggestion = if days_since_last >= ladder.well_rested_days {
            "You're well-rested! Time for a challenging full-body session."
        } else if days_since_last >= ladder.complementary_focus_days {
            Self::complementary_focus(sessions)
        } else {
            "Recent training detected. Consider light cardio or stretching."
        };

        QuickSuggestion {
            suggestion: suggestion.to_owned(),
            reason: "Based on recent training pattern".to_owned(),
            recommended_plan: None,
        }
    }

    fn complementary_focus(sessions: &[Session]) -> &'static str {
        let trained: BTreeSet<String> = sessions
            .iter()
            .filter_map(|s| MuscleGroupTagger::tag_session(s, TagMode::TagOrNull))
            .collect();
        let has = |group: &str| trained.contains(group);

        if has("chest") || has("shoulders") {
            "Focus on back and biceps today for balance."
        } else if has("back") {
            "Great time for chest and triceps work."
        } else if has("legs") {
            "Perfect day for upper body training."
        } else {
            "Consider a leg-focused workout today."
        }
    }

    fn balance_candidate(
        &self,
        frequency: &MuscleGroupStats,
        preferences: &WorkoutPreferences,
    ) -> Recommendation {
        let target = undertrained_group(frequency);
        Recommendation {
            title: "Balance Your Training".to_owned(),
            description: format!("Focus on {target} training to improve muscle balance"),
            recommendation_type: RecommendationType::MuscleBalance,
            priority: RecommendationPriority::High,
            estimated_time: preferences
                .available_time
                .min(self.config.session_time.balance_time_cap),
            target_muscle: Some(target.to_owned()),
            intensity: None,
            exercises: Vec::new(),
        }
    }

    fn recovery_candidate(
        &self,
        days_since_last: i64,
        preferences: &WorkoutPreferences,
    ) -> Option<Recommendation> {
        let schedule = &self.config.schedule;
        if days_since_last >= schedule.high_intensity_rest_days {
            Some(Recommendation {
                title: "High-Intensity Session".to_owned(),
                description:
                    "You're well-rested! Perfect time for a challenging compound movement session"
                        .to_owned(),
                recommendation_type: RecommendationType::Intensity,
                priority: RecommendationPriority::Medium,
                estimated_time: preferences.available_time,
                target_muscle: None,
                intensity: Some(Intensity::High),
                exercises: Vec::new(),
            })
        } else if days_since_last <= schedule.active_recovery_max_days {
            Some(Recommendation {
                title: "Active Recovery".to_owned(),
                description: "Light cardio and stretching to promote recovery".to_owned(),
                recommendation_type: RecommendationType::Recovery,
                priority: RecommendationPriority::Medium,
                estimated_time: preferences
                    .available_time
                    .min(self.config.session_time.active_recovery_time_cap),
                target_muscle: None,
                intensity: Some(Intensity::Low),
                exercises: Vec::new(),
            })
        } else {
            None
        }
    }

    fn goal_candidate(&self, preferences: &WorkoutPreferences) -> Recommendation {
        let template = preferences.fitness_goal.template();
        let estimated_time = match template.duration {
            DurationRule::Available => preferences.available_time,
            DurationRule::AtLeastStrengthMinimum => preferences
                .available_time
                .max(self.config.session_time.strength_min_time),
        };
        Recommendation::from_template(template, estimated_time)
    }

    fn time_constraint_candidate(&self, preferences: &WorkoutPreferences) -> Option<Recommendation> {
        (preferences.available_time <= self.config.session_time.quick_session_threshold).then(|| {
            Recommendation {
                title: "Quick HIIT Session".to_owned(),
                description: "High-intensity interval training for maximum efficiency".to_owned(),
                recommendation_type: RecommendationType::TimeEfficient,
                priority: RecommendationPriority::High,
                estimated_time: preferences.available_time,
                target_muscle: None,
                intensity: Some(Intensity::High),
                exercises: QUICK_HIIT_EXERCISES.iter().map(|e| (*e).to_owned()).collect(),
            }
        })
    }
}

/// Canonical group with the fewest sessions; the first listed wins ties
#[must_use]
pub fn undertrained_group(frequency: &MuscleGroupStats) -> &'static str {
    CANONICAL_MUSCLE_GROUPS
        .iter()
        .copied()
        .fold(None, |least: Option<(&'static str, usize)>, group| {
            let count = frequency.count(group);
            match least {
                Some((_, min)) if count >= min => least,
                _ => Some((group, count)),
            }
        })
        .map_or(CANONICAL_MUSCLE_GROUPS[0], |(group, _)| group)
}
