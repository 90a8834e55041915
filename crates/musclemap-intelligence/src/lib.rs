// ABOUTME: Fitness plan intelligence for MuscleMap
// ABOUTME: Initial plan construction and rule-based adaptation to weight check-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MuscleMap` Intelligence
//!
//! Two deterministic components:
//!
//! - **`PlanFactory`**: builds the first plan from a goal and experience level
//! - **`AdaptationEngine`**: derives the next plan from the profile, the
//!   previous plan and the latest check-in
//!
//! Neither component performs I/O or touches shared state; both are total
//! over validated input.

/// Rule thresholds and their validation
pub mod config;

/// Initial plan construction from goal and experience
pub mod plan_factory;

/// Check-in driven plan adaptation
pub mod adaptation_engine;

pub use adaptation_engine::{adapt, AdaptationDecision, AdaptationEngine, PlanAdapter};
pub use config::{AdaptationConfig, ConfigError};
pub use plan_factory::{build_initial_plan, PlanFactory};
