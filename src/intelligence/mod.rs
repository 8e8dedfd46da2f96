// ABOUTME: Intelligence module re-exports from runmvmt-intelligence crate
// ABOUTME: Exposes the plan pipeline under runmvmt_planner::intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The training plan pipeline. Everything here is pure and synchronous.

pub use runmvmt_intelligence::*;

// Submodules for path-based access (e.g., runmvmt_planner::intelligence::volume::VolumeRange)
pub use runmvmt_intelligence::{
    ability, modifiers, pdf_content, persona, phase, plan_generator, sessions,
    training_constants, volume,
};
