// ABOUTME: Session listing and deletion commands for musclemap-cli
// ABOUTME: Shows every stored session and removes sessions by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use musclemap::{
    errors::AppResult,
    formatters::{render_sessions, OutputFormat},
    session_store::SessionStore,
};

use crate::helpers::display::emit;

/// List stored sessions
pub fn list(store: &SessionStore, format: OutputFormat) -> AppResult<()> {
    emit(&render_sessions(&store.list()?, format)?);
    Ok(())
}

/// Delete a stored session
pub fn delete(store: &SessionStore, name: &str) -> AppResult<()> {
    store.delete(name)?;
    println!("Session '{name}' deleted.");
    Ok(())
}
