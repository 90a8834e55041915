// ABOUTME: Plan commands for musclemap-cli
// ABOUTME: Previews initial plans and shows a session's current plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use musclemap::{
    errors::AppResult,
    formatters::{render_plan, OutputFormat},
    intelligence::build_initial_plan,
    models::{ExperienceLevel, Goal},
    session_store::SessionStore,
};

use crate::helpers::display::emit;

/// Show the initial plan for a goal and experience level
pub fn preview(goal: Goal, experience: ExperienceLevel, format: OutputFormat) -> AppResult<()> {
    let plan = build_initial_plan(goal, experience);
    emit(&render_plan(&plan, format)?);
    Ok(())
}

/// Show a session's current plan
pub fn show(store: &SessionStore, name: &str, format: OutputFormat) -> AppResult<()> {
    let session = store.load(name)?;
    emit(&render_plan(session.current_plan(), format)?);
    Ok(())
}
