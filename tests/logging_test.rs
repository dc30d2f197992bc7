// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment handling, format parsing and CLI verbosity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gymtrack_insights::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_SPANS",
    "SERVICE_NAME",
];

fn clear_logging_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "gymtrack-batch");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "gymtrack-batch");
    // Production always records source locations
    assert!(config.include_location);
    assert!(!config.include_spans);
}

#[test]
#[serial]
fn test_logging_config_defaults_without_env() {
    clear_logging_env();
    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "gymtrack-insights");
    assert!(!config.include_location);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::parse("fancy"), LogFormat::Pretty);
    assert_eq!(LogFormat::Json.to_string(), "json");
}

#[test]
fn test_verbosity_raises_level() {
    assert_eq!(LoggingConfig::default().with_verbosity(0).level, "warn");
    assert_eq!(LoggingConfig::default().with_verbosity(1).level, "debug");
    assert_eq!(LoggingConfig::default().with_verbosity(3).level, "trace");
}
