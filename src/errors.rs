// ABOUTME: Error types re-exported from musclemap-core
// ABOUTME: Gives binaries and tests a single errors path on the main crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling, re-exported from `musclemap-core`

pub use musclemap_core::errors::*;
