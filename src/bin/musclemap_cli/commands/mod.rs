// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for musclemap-cli
// ABOUTME: Provides profile, plan, check-in, and session management commands

pub mod plan;
pub mod profile;
pub mod progress;
pub mod sessions;
