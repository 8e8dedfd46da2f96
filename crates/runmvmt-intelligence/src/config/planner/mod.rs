// ABOUTME: Planner configuration for the training plan pipeline
// ABOUTME: Groups curve, envelope, and quality settings with env overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration Module
//!
//! Type-safe configuration for the plan pipeline. Defaults reproduce the
//! literal tuning values exactly; environment overrides exist for
//! experimentation and are validated before use.
//!
//! The pipeline never reads the environment itself. A `PlannerConfig` is
//! passed in explicitly, so identical answers and an identical config always
//! produce an identical plan.
//!
//! # Module Structure
//!
//! - `curve` - Weekly base volume curve shape
//! - `envelope` - Start, peak, and long-run envelope placement
//! - `quality` - Weekly quality-session budget
//! - `error` - Validation and parse errors

pub mod curve;
pub mod envelope;
pub mod error;
pub mod quality;

pub use curve::CurveConfig;
pub use envelope::EnvelopeConfig;
pub use error::ConfigError;
pub use quality::QualityConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Environment variable names recognised by `PlannerConfig::from_env`
pub mod env_vars {
    /// Down-week volume factor
    pub const DOWN_WEEK_FACTOR: &str = "RUNMVMT_DOWN_WEEK_FACTOR";
    /// Scheduled down-week number
    pub const DOWN_WEEK: &str = "RUNMVMT_DOWN_WEEK";
    /// Peak scaling while currently injured
    pub const INJURY_PEAK_FACTOR: &str = "RUNMVMT_INJURY_PEAK_FACTOR";
    /// Weekly ceiling for marathon and longer
    pub const WEEKLY_CEILING_KM: &str = "RUNMVMT_WEEKLY_CEILING_KM";
    /// Long-run peak position within its range
    pub const LONG_RUN_PEAK_POSITION: &str = "RUNMVMT_LONG_RUN_PEAK_POSITION";
    /// Base quality-session budget
    pub const MAX_QUALITY_SESSIONS: &str = "RUNMVMT_MAX_QUALITY_SESSIONS";
}

/// Main planner configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Weekly base volume curve
    pub curve: CurveConfig,
    /// Start/peak/long-run envelope placement
    pub envelope: EnvelopeConfig,
    /// Quality-session budget
    pub quality: QualityConfig,
}

impl PlannerConfig {
    /// Load configuration: defaults, then environment overrides, then validation
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied, not yet validated
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if an override cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config.curve.down_week_factor =
            env_override(env_vars::DOWN_WEEK_FACTOR, config.curve.down_week_factor)?;
        config.curve.down_week = env_override(env_vars::DOWN_WEEK, config.curve.down_week)?;
        config.curve.current_injury_peak_factor = env_override(
            env_vars::INJURY_PEAK_FACTOR,
            config.curve.current_injury_peak_factor,
        )?;
        config.envelope.long_distance_weekly_ceiling_km = env_override(
            env_vars::WEEKLY_CEILING_KM,
            config.envelope.long_distance_weekly_ceiling_km,
        )?;
        config.envelope.long_run_peak_position = env_override(
            env_vars::LONG_RUN_PEAK_POSITION,
            config.envelope.long_run_peak_position,
        )?;
        config.quality.max_sessions_per_week = env_override(
            env_vars::MAX_QUALITY_SESSIONS,
            config.quality.max_sessions_per_week,
        )?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first incoherent value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_curve()?;
        self.validate_envelope()?;

        if self.quality.max_sessions_per_week > 7 {
            return Err(ConfigError::ValueOutOfRange(
                "max_sessions_per_week must be at most 7",
            ));
        }

        Ok(())
    }

    fn validate_curve(&self) -> Result<(), ConfigError> {
        let curve = &self.curve;

        if !is_fraction(curve.down_week_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "down_week_factor must be in (0, 1]",
            ));
        }
        if !is_fraction(curve.current_injury_peak_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "current_injury_peak_factor must be in (0, 1]",
            ));
        }
        if !(curve.foundation_end_fraction >= 0.0
            && curve.foundation_end_fraction <= curve.build_start_fraction
            && curve.build_start_fraction < curve.build_end_fraction
            && curve.build_end_fraction <= 1.0)
        {
            return Err(ConfigError::InvalidRange(
                "ramp fractions must increase from foundation through build and stay within 1.0",
            ));
        }
        if !(4..=7).contains(&curve.down_week) || !(4..=7).contains(&curve.recurring_injury_down_week)
        {
            return Err(ConfigError::ValueOutOfRange(
                "down weeks must fall inside the build phase (weeks 4-7)",
            ));
        }
        if !curve.peak_week_fractions.iter().all(|f| is_fraction(*f)) {
            return Err(ConfigError::ValueOutOfRange(
                "peak_week_fractions must be in (0, 1]",
            ));
        }

        let lowest_peak = curve
            .peak_week_fractions
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let [taper_first, taper_race] = curve.taper_week_fractions;
        if !(taper_race > 0.0 && taper_race < taper_first && taper_first < lowest_peak) {
            return Err(ConfigError::InvalidRange(
                "taper fractions must decrease and stay below every peak week",
            ));
        }

        Ok(())
    }

    fn validate_envelope(&self) -> Result<(), ConfigError> {
        let envelope = &self.envelope;

        if envelope.long_distance_weekly_ceiling_km <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "long_distance_weekly_ceiling_km must be positive",
            ));
        }

        let positions = [
            envelope.long_run_peak_position,
            envelope.time_poor_start_band,
            envelope.cautious_peak_position,
            envelope.time_poor_peak_position,
            envelope.builder_peak_position,
            envelope.racer_peak_position,
        ];
        if !positions.iter().all(|p| (0.0..=1.0).contains(p)) {
            return Err(ConfigError::ValueOutOfRange(
                "range positions must be within [0, 1]",
            ));
        }

        if envelope.cautious_start_multiplier <= 0.0
            || envelope.racer_start_multiplier <= 0.0
            || envelope.elite_peak_floor_multiplier <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "volume multipliers must be positive",
            ));
        }

        Ok(())
    }
}

fn is_fraction(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

/// Read `name` from the environment, keeping `current` when unset
fn env_override<T>(name: &'static str, current: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::Parse(format!("{name}={raw}: {e}")))?;
            debug!(variable = name, value = %raw.trim(), "planner config override");
            Ok(value)
        }
        Err(env::VarError::NotPresent) => Ok(current),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
