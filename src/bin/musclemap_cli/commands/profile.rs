// ABOUTME: Profile commands for musclemap-cli
// ABOUTME: Creates a session with its first plan and shows the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use musclemap::{
    errors::{AppError, AppResult},
    formatters::{render_profile, OutputFormat},
    models::Profile,
    session::Session,
    session_store::SessionStore,
};
use tracing::info;

use crate::helpers::display::{emit, print_session_overview};
use crate::ProfileArgs;

/// Create a profile and its first plan
pub fn create(
    store: &SessionStore,
    name: &str,
    args: &ProfileArgs,
    force: bool,
    format: OutputFormat,
) -> AppResult<()> {
    if store.exists(name)? && !force {
        return Err(AppError::already_exists(format!(
            "Session '{name}' (use --force to replace it)"
        )));
    }

    let profile = Profile::new(
        args.age,
        args.height,
        args.weight,
        args.goal,
        args.interval,
        args.experience,
    )?;

    info!("Creating profile for session '{name}'");
    let session = Session::start(name, profile)?;
    store.save(&session)?;

    print_session_overview(&session, format)
}

/// Show the current profile
pub fn show(store: &SessionStore, name: &str, format: OutputFormat) -> AppResult<()> {
    let session = store.load(name)?;
    emit(&render_profile(session.profile(), format)?);
    Ok(())
}
