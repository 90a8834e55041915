// ABOUTME: Environment-based configuration for the MuscleMap CLI
// ABOUTME: Resolves the session data directory, default session name, and output format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration from environment variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `MUSCLEMAP_DATA_DIR` | `<platform data dir>/musclemap`, else `./.musclemap` |
//! | `MUSCLEMAP_DEFAULT_SESSION` | `default` |
//! | `MUSCLEMAP_OUTPUT_FORMAT` | `text` |

use crate::errors::{AppError, AppResult};
use crate::formatters::OutputFormat;
use musclemap_core::constants::session::DEFAULT_NAME;
use musclemap_core::validation::validate_session_name;
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable naming the data directory
pub const DATA_DIR_VAR: &str = "MUSCLEMAP_DATA_DIR";
/// Environment variable naming the default session
pub const DEFAULT_SESSION_VAR: &str = "MUSCLEMAP_DEFAULT_SESSION";
/// Environment variable selecting the output format
pub const OUTPUT_FORMAT_VAR: &str = "MUSCLEMAP_OUTPUT_FORMAT";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one JSON record per session
    pub data_dir: PathBuf,
    /// Session used when the CLI is not given one
    pub default_session: String,
    /// Output format for rendered plans and tables
    pub output_format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the default session name or output format is invalid
    pub fn from_env() -> AppResult<Self> {
        let data_dir = env::var_os(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let default_session = env_var_or(DEFAULT_SESSION_VAR, DEFAULT_NAME);
        validate_session_name(&default_session)?;

        let output_format = env_var_or(OUTPUT_FORMAT_VAR, "text")
            .parse::<OutputFormat>()
            .map_err(|e| AppError::config(format!("Invalid {OUTPUT_FORMAT_VAR}: {e}")))?;

        let config = Self {
            data_dir,
            default_session,
            output_format,
        };
        debug!("{}", config.summary());
        Ok(config)
    }

    /// One-line description for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "MuscleMap config: data_dir={}, default_session={}, output_format={}",
            self.data_dir.display(),
            self.default_session,
            self.output_format
        )
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".musclemap"), |dir| dir.join("musclemap"))
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
