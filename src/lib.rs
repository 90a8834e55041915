// ABOUTME: Main library entry point for the MuscleMap adaptive fitness planner
// ABOUTME: Session ownership, persistence, rendering, and logging around the plan engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MuscleMap`
//!
//! Rule-based workout and diet plans that adapt to periodic weight check-ins.
//!
//! ## Architecture
//!
//! - **`musclemap-core`**: profile, plan and check-in models, input bounds, errors
//! - **`musclemap-intelligence`**: `PlanFactory` and `AdaptationEngine`, both pure
//! - **this crate**: the `Session` that owns one user's state, the file-backed
//!   `SessionStore`, output formatting, logging and environment configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use musclemap::models::{ExperienceLevel, Goal, Profile, ProgressLog, TimeInterval};
//! use musclemap::session::Session;
//! use musclemap::intelligence::AdaptationEngine;
//!
//! # fn main() -> musclemap::errors::AppResult<()> {
//! let profile = Profile::new(
//!     25,
//!     170,
//!     80.0,
//!     Goal::WeightReduction,
//!     TimeInterval::FourWeeks,
//!     ExperienceLevel::Beginner,
//! )?;
//! let mut session = Session::start("demo", profile)?;
//!
//! let engine = AdaptationEngine::new();
//! let plan = session.check_in(ProgressLog::new(79.0, None)?, &engine);
//! assert_eq!(plan.title, "Adapted Plan (Check-in #1)");
//! assert_eq!(plan.details.cardio_minutes_per_session, 35);
//! # Ok(())
//! # }
//! ```

/// Environment configuration and adaptation rule re-exports
pub mod config;

/// Unified error handling, re-exported from `musclemap-core`
pub mod errors;

/// Plan, profile and history rendering (text, JSON)
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Per-user session state
pub mod session;

/// File-backed session persistence
pub mod session_store;

/// Data models, re-exported from `musclemap-core`
pub mod models {
    pub use musclemap_core::models::*;
}

/// Plan factory and adaptation engine, re-exported from `musclemap-intelligence`
pub mod intelligence {
    pub use musclemap_intelligence::*;
}

/// Constants, re-exported from `musclemap-core`
pub mod constants {
    pub use musclemap_core::constants::*;
}
