// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output helpers for musclemap-cli
// ABOUTME: Writes rendered plans and the new-session overview to stdout

use musclemap::{
    errors::AppResult,
    formatters::{render_plan, render_profile, OutputFormat},
    session::Session,
};

/// Print rendered output
pub fn emit(rendered: &str) {
    println!("{rendered}");
}

/// Display a freshly created session: profile metrics followed by the first plan
pub fn print_session_overview(session: &Session, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => emit(&serde_json::to_string_pretty(session)?),
        OutputFormat::Text => {
            println!("\nYour profile and first plan are ready!");
            println!("{}", "=".repeat(60));
            emit(&render_profile(session.profile(), format)?);
            println!();
            emit(&render_plan(session.current_plan(), format)?);
        }
    }
    Ok(())
}
