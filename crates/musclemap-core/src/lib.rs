// ABOUTME: Core types and constants for the MuscleMap adaptive fitness planner
// ABOUTME: Foundation crate with plan/profile models, input validation, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MuscleMap` Core
//!
//! Foundation crate providing shared types and constants for the `MuscleMap`
//! planner. The plan engine in `musclemap-intelligence` and the session layer
//! in the main crate both build on these types.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: input bounds and the fixed wording of plans
//! - **models**: `Profile`, `Plan`, `PlanDetails`, `ProgressLog`
//! - **validation**: boundary checks applied before the engine is called

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, Plan, `ProgressLog`, ...)
pub mod models;

/// Input validation at the collection boundary
pub mod validation;
