// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for musclemap-cli
// ABOUTME: Output display utilities shared by commands

pub mod display;
