// ABOUTME: Check-in and history commands for musclemap-cli
// ABOUTME: Adapts the current plan from a new weight and renders the weight history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use musclemap::{
    errors::{AppResult, ErrorCode},
    formatters::{render_history, render_plan, OutputFormat},
    intelligence::AdaptationEngine,
    models::ProgressLog,
    session_store::SessionStore,
};
use tracing::{info, warn};

use crate::helpers::display::emit;

/// Log a check-in and show the adapted plan
pub fn check_in(
    store: &SessionStore,
    name: &str,
    weight: f64,
    notes: Option<String>,
    format: OutputFormat,
) -> AppResult<()> {
    let mut session = store.load(name).inspect_err(|e| {
        if e.code == ErrorCode::ResourceNotFound {
            warn!("No profile for session '{name}': run `profile create` first");
        }
    })?;

    let progress = ProgressLog::new(weight, notes)?;
    let engine = AdaptationEngine::new();

    info!(
        "Analyzing check-in #{} for session '{name}'",
        session.check_in_count() + 1
    );
    let rendered = render_plan(session.check_in(progress, &engine), format)?;
    store.save(&session)?;

    emit(&rendered);
    Ok(())
}

/// Show the weight history table
pub fn history(store: &SessionStore, name: &str, format: OutputFormat) -> AppResult<()> {
    let session = store.load(name)?;
    emit(&render_history(&session.history_table(), format)?);
    Ok(())
}
