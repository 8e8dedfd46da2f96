// ABOUTME: Main library entry point for the RunMVMT training plan planner
// ABOUTME: Re-exports the core and intelligence crates and adds answer loading and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # RunMVMT Planner
//!
//! Generates a twelve-week running plan from quiz answers.
//!
//! ## Architecture
//!
//! - **runmvmt-core**: answer model, wire-format enumerations, errors
//! - **runmvmt-intelligence**: the pure plan pipeline
//! - **this crate**: answer loading, environment configuration, logging,
//!   and the `runmvmt-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use runmvmt_planner::intelligence::generate_training_plan;
//! use runmvmt_planner::models::QuizAnswers;
//!
//! let answers = QuizAnswers::new()
//!     .with("goal_distance", "half_marathon")
//!     .with("current_weekly_km", "30_50");
//! let plan = generate_training_plan(&answers);
//! assert_eq!(plan.weekly_structure.len(), 12);
//! ```

/// Quiz answer loading from files, stdin, and JSON text
pub mod answers;

/// Planner configuration loaded from the environment
pub mod config;

/// Unified error handling (re-exported from runmvmt-core)
pub mod errors;

/// Plan pipeline (re-exported from runmvmt-intelligence)
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Answer model and domain enumerations (re-exported from runmvmt-core)
pub mod models;
