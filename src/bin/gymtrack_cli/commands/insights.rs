// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors
// ABOUTME: Training insight commands for gymtrack-cli
// ABOUTME: Selects the session window for each report and renders it as JSON

use chrono::NaiveDate;
use gymtrack_insights::{
    config::intelligence::{window_in_range, MAX_WINDOW_DAYS},
    constants::windows,
    errors::{AppError, AppResult},
    intelligence::{sessions_within, FitnessGoal, WorkoutPreferences},
    models::Session,
    services::TrainingInsightsService,
};
use serde::Serialize;
use serde_json::Value;

/// Preference flags of the `workout-suggestions` command
pub struct WorkoutArgs {
    pub available_time: u32,
    pub equipment: String,
    pub goal: String,
}

fn to_json(report: &impl Serialize) -> AppResult<Value> {
    Ok(serde_json::to_value(report)?)
}

fn window_days(days: i64) -> AppResult<i64> {
    if window_in_range(days) {
        Ok(days)
    } else {
        Err(AppError::out_of_range(format!(
            "Window must be between 1 and {MAX_WINDOW_DAYS} days, got {days}"
        )))
    }
}

pub fn quick_suggestion(
    service: &TrainingInsightsService,
    sessions: &[Session],
    today: NaiveDate,
) -> AppResult<Value> {
    let recent = sessions_within(sessions, today, windows::RECENT_DAYS);
    to_json(&service.quick_suggestion(&recent, today))
}

pub fn recovery_status(
    service: &TrainingInsightsService,
    sessions: &[Session],
    today: NaiveDate,
) -> AppResult<Value> {
    let recent = sessions_within(sessions, today, windows::RECENT_DAYS);
    to_json(&service.recovery_status(&recent, today))
}

pub fn workout_suggestions(
    service: &TrainingInsightsService,
    sessions: &[Session],
    args: &WorkoutArgs,
    today: NaiveDate,
) -> AppResult<Value> {
    let recent = sessions_within(sessions, today, windows::SUGGESTION_DAYS);
    let preferences = WorkoutPreferences {
        available_time: args.available_time,
        equipment: args.equipment.clone(),
        fitness_goal: FitnessGoal::parse(&args.goal),
    };
    to_json(&service.workout_suggestions(&recent, &preferences, today))
}

pub fn volume(
    service: &TrainingInsightsService,
    sessions: &[Session],
    today: NaiveDate,
    days: i64,
) -> AppResult<Value> {
    let window = sessions_within(sessions, today, window_days(days)?);
    to_json(&service.volume_analytics(&window))
}

pub fn muscle_balance(
    service: &TrainingInsightsService,
    sessions: &[Session],
    today: NaiveDate,
    days: i64,
) -> AppResult<Value> {
    let window = sessions_within(sessions, today, window_days(days)?);
    to_json(&service.muscle_balance(&window))
}

pub fn performance_trends(
    service: &TrainingInsightsService,
    sessions: &[Session],
    today: NaiveDate,
) -> AppResult<Value> {
    to_json(&service.performance_trends(sessions, today))
}

pub fn recovery_recommendations(
    service: &TrainingInsightsService,
    sessions: &[Session],
    today: NaiveDate,
) -> AppResult<Value> {
    let recent = sessions_within(sessions, today, windows::SUGGESTION_DAYS);
    to_json(&service.recovery_recommendations(&recent))
}

pub fn personal_bests(
    service: &TrainingInsightsService,
    sessions: &[Session],
) -> AppResult<Value> {
    to_json(&service.personal_bests(sessions))
}
