// ABOUTME: GymTrack CLI - command-line surface over the training insight entry points
// ABOUTME: Loads a session history file and prints the requested report as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors
//!
//! Usage:
//! ```bash
//! # What should I do today?
//! gymtrack-cli --sessions history.json quick-suggestion
//!
//! # Ranked recommendations for a 30 minute strength session
//! gymtrack-cli --sessions history.json workout-suggestions --available-time 30 --goal strength
//!
//! # Weekly volume over the last 8 weeks, as of a fixed date
//! gymtrack-cli --sessions history.json --today 2025-03-14 volume --days 56
//!
//! # Performance trend with debug logging on stderr
//! gymtrack-cli --sessions history.json -v performance-trends
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use clap::{ArgAction, Parser, Subcommand};
use gymtrack_insights::{
    config::intelligence::IntelligenceConfig,
    constants::{service_names, windows},
    errors::{AppError, AppResult},
    logging::{AppLogger, LoggingConfig},
    models::Session,
    services::{load_sessions, TrainingInsightsService},
};
use tracing::info;

use commands::insights::{self, WorkoutArgs};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = service_names::GYMTRACK_CLI,
    about = "GymTrack training insights CLI",
    long_about = "Computes training analytics, readiness and workout recommendations from a JSON session history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file holding an array of {date, weight?, notes?} sessions
    #[arg(long, short = 's', global = true, default_value = "sessions.json")]
    sessions: PathBuf,

    /// Reference date (YYYY-MM-DD), defaults to the current UTC date
    #[arg(long, global = true)]
    today: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// One-line suggestion for today from the last week
    QuickSuggestion,

    /// Readiness to train from the last week
    RecoveryStatus,

    /// Ranked workout recommendations from the last two weeks
    WorkoutSuggestions {
        /// Minutes available for the session
        #[arg(long)]
        available_time: Option<u32>,

        /// Equipment on hand
        #[arg(long, default_value = "full_gym")]
        equipment: String,

        /// Training goal (strength, muscle_building, endurance, general_fitness)
        #[arg(long, default_value = "general_fitness")]
        goal: String,
    },

    /// Weekly volume over a window
    Volume {
        /// Window length in days
        #[arg(long, default_value_t = windows::ANALYTICS_DAYS)]
        days: i64,
    },

    /// Muscle group distribution over a window
    MuscleBalance {
        /// Window length in days
        #[arg(long, default_value_t = windows::ANALYTICS_DAYS)]
        days: i64,
    },

    /// Trend, plateau and best two-week window over the full history
    PerformanceTrends,

    /// Rest-pattern advice from the last two weeks
    RecoveryRecommendations,

    /// Heaviest load on record
    PersonalBests,
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::QuickSuggestion => "quick-suggestion",
            Self::RecoveryStatus => "recovery-status",
            Self::WorkoutSuggestions { .. } => "workout-suggestions",
            Self::Volume { .. } => "volume",
            Self::MuscleBalance { .. } => "muscle-balance",
            Self::PerformanceTrends => "performance-trends",
            Self::RecoveryRecommendations => "recovery-recommendations",
            Self::PersonalBests => "personal-bests",
        }
    }
}

fn reference_date(raw: Option<&str>) -> Result<NaiveDate> {
    raw.map_or_else(|| Ok(Utc::now().date_naive()), Session::parse_date)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env()
        .with_verbosity(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Logging setup failed: {e}")))?;

    let today = reference_date(cli.today.as_deref())?;
    let sessions = load_sessions(&cli.sessions)?;
    let config = IntelligenceConfig::global();
    let service = TrainingInsightsService::new(config);
    info!(
        sessions = sessions.len(),
        today = %today,
        command = cli.command.name(),
        "GymTrack CLI"
    );

    let started = Instant::now();
    let name = cli.command.name();
    let report = match cli.command {
        Command::QuickSuggestion => insights::quick_suggestion(&service, &sessions, today),
        Command::RecoveryStatus => insights::recovery_status(&service, &sessions, today),
        Command::WorkoutSuggestions {
            available_time,
            equipment,
            goal,
        } => {
            let args = WorkoutArgs {
                available_time: available_time
                    .unwrap_or(config.recommendation_engine.session_time.default_available_time),
                equipment,
                goal,
            };
            insights::workout_suggestions(&service, &sessions, &args, today)
        }
        Command::Volume { days } => insights::volume(&service, &sessions, today, days),
        Command::MuscleBalance { days } => {
            insights::muscle_balance(&service, &sessions, today, days)
        }
        Command::PerformanceTrends => insights::performance_trends(&service, &sessions, today),
        Command::RecoveryRecommendations => {
            insights::recovery_recommendations(&service, &sessions, today)
        }
        Command::PersonalBests => insights::personal_bests(&service, &sessions),
    };

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_command(name, sessions.len(), report.is_ok(), elapsed_ms);

    helpers::output::print_json(&report?)
}
