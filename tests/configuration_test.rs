// ABOUTME: Tests for environment-driven application and logging configuration
// ABOUTME: Runs serially since each test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use musclemap::config::environment::{DATA_DIR_VAR, DEFAULT_SESSION_VAR, OUTPUT_FORMAT_VAR};
use musclemap::config::AppConfig;
use musclemap::errors::ErrorCode;
use musclemap::formatters::OutputFormat;
use musclemap::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    for var in [
        DATA_DIR_VAR,
        DEFAULT_SESSION_VAR,
        OUTPUT_FORMAT_VAR,
        "RUST_LOG",
        "LOG_FORMAT",
        "LOG_INCLUDE_LOCATION",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_app_config_defaults() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.default_session, "default");
    assert_eq!(config.output_format, OutputFormat::Text);
    assert!(config.data_dir.ends_with("musclemap") || config.data_dir.ends_with(".musclemap"));
}

#[test]
#[serial]
fn test_app_config_reads_overrides() {
    clear_env();
    env::set_var(DATA_DIR_VAR, "/tmp/musclemap-test");
    env::set_var(DEFAULT_SESSION_VAR, "coach_01");
    env::set_var(OUTPUT_FORMAT_VAR, "json");

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.data_dir, PathBuf::from("/tmp/musclemap-test"));
    assert_eq!(config.default_session, "coach_01");
    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(config.summary().contains("coach_01"));

    clear_env();
}

#[test]
#[serial]
fn test_app_config_rejects_bad_values() {
    clear_env();
    env::set_var(OUTPUT_FORMAT_VAR, "yaml");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);

    clear_env();
    env::set_var(DEFAULT_SESSION_VAR, "bad name");
    assert!(AppConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    let defaults = LoggingConfig::from_env();
    assert_eq!(defaults.level, "warn");
    assert_eq!(defaults.format, LogFormat::Compact);
    assert!(!defaults.include_location);

    env::set_var("RUST_LOG", "info");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    let configured = LoggingConfig::from_env();
    assert_eq!(configured.level, "info");
    assert_eq!(configured.format, LogFormat::Json);
    assert!(configured.include_location);
    assert_eq!(configured.verbose().level, "debug");

    clear_env();
}
