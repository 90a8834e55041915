// ABOUTME: Core data models for the MuscleMap planner
// ABOUTME: Re-exports Profile, Plan, PlanDetails, ProgressLog and the enumerated choices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain value types exchanged between the input boundary, the plan engine and
//! the session layer.
//!
//! ## Design Principles
//!
//! - **Closed domains**: goal, experience and interval are enums, so an
//!   out-of-domain value cannot reach the engine
//! - **Value semantics**: plans are owned snapshots; adapting a plan produces a
//!   new value and never aliases the previous one
//! - **Serializable**: every model is a plain structured record for persistence

mod plan;
mod profile;
mod progress;

pub use plan::{Plan, PlanDetails};
pub use profile::{ExperienceLevel, Goal, Profile, TimeInterval};
pub use progress::ProgressLog;
