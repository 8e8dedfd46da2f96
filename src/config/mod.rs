// ABOUTME: Planner configuration entry point for the binary and tests
// ABOUTME: Loads PlannerConfig from RUNMVMT_* variables and converts failures into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-driven configuration
//!
//! The pipeline itself never reads the environment. Binaries call
//! `load_planner_config` once at startup and hand the result to
//! `PlanGenerator::with_config`.

pub use runmvmt_intelligence::config::planner::{
    env_vars, CurveConfig, EnvelopeConfig, QualityConfig,
};
pub use runmvmt_intelligence::config::{ConfigError, PlannerConfig};

use crate::errors::AppResult;
use tracing::debug;

/// Load and validate planner configuration from the environment
///
/// # Errors
///
/// Returns a configuration `AppError` when an override cannot be parsed or
/// the resulting configuration is incoherent
pub fn load_planner_config() -> AppResult<PlannerConfig> {
    let config = PlannerConfig::load()?;
    debug!(
        down_week = config.curve.down_week,
        down_week_factor = config.curve.down_week_factor,
        weekly_ceiling_km = config.envelope.long_distance_weekly_ceiling_km,
        max_quality_sessions = config.quality.max_sessions_per_week,
        "planner configuration loaded"
    );
    Ok(config)
}
