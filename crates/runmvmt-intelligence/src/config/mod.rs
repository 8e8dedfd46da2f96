// ABOUTME: Configuration module for runmvmt-intelligence crate
// ABOUTME: Re-exports planner configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Planner configuration (volume curve, envelope, quality budget)
pub mod planner;

pub use planner::{ConfigError, PlannerConfig};
