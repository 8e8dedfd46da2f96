// ABOUTME: Tests for planner configuration defaults, environment overrides, and validation
// ABOUTME: Runs serially because overrides are read from process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use runmvmt_planner::config::{env_vars, load_planner_config, ConfigError, PlannerConfig};
use runmvmt_planner::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 6] = [
    env_vars::DOWN_WEEK_FACTOR,
    env_vars::DOWN_WEEK,
    env_vars::INJURY_PEAK_FACTOR,
    env_vars::WEEKLY_CEILING_KM,
    env_vars::LONG_RUN_PEAK_POSITION,
    env_vars::MAX_QUALITY_SESSIONS,
];

/// Removes every planner override on creation and again on drop
struct EnvGuard;

impl EnvGuard {
    fn new() -> Self {
        clear_overrides();
        Self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear_overrides();
    }
}

fn clear_overrides() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_are_valid() {
    let _guard = EnvGuard::new();
    let config = PlannerConfig::load().unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.curve.down_week, 5);
    assert_eq!(config.curve.recurring_injury_down_week, 4);
    assert_eq!(config.curve.down_week_factor, 0.85);
    assert_eq!(config.envelope.long_distance_weekly_ceiling_km, 150.0);
    assert_eq!(config.quality.max_sessions_per_week, 2);
}

#[test]
#[serial]
fn test_environment_overrides() {
    let _guard = EnvGuard::new();
    env::set_var(env_vars::DOWN_WEEK, "6");
    env::set_var(env_vars::WEEKLY_CEILING_KM, " 140 ");
    env::set_var(env_vars::MAX_QUALITY_SESSIONS, "1");

    let config = PlannerConfig::load().unwrap();
    assert_eq!(config.curve.down_week, 6);
    assert_eq!(config.envelope.long_distance_weekly_ceiling_km, 140.0);
    assert_eq!(config.quality.max_sessions_per_week, 1);
    assert_eq!(config.curve.down_week_factor, 0.85);
}

#[test]
#[serial]
fn test_unparsable_override_is_parse_error() {
    let _guard = EnvGuard::new();
    env::set_var(env_vars::DOWN_WEEK_FACTOR, "lots");

    let error = PlannerConfig::load().unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().contains(env_vars::DOWN_WEEK_FACTOR));

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    let _guard = EnvGuard::new();
    env::set_var(env_vars::DOWN_WEEK, "9");

    let error = PlannerConfig::load().unwrap_err();
    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));

    env::set_var(env_vars::DOWN_WEEK, "5");
    env::set_var(env_vars::INJURY_PEAK_FACTOR, "1.5");
    assert!(matches!(
        PlannerConfig::load().unwrap_err(),
        ConfigError::ValueOutOfRange(_)
    ));
}

#[test]
#[serial]
fn test_load_planner_config_maps_to_app_error() {
    let _guard = EnvGuard::new();
    env::set_var(env_vars::LONG_RUN_PEAK_POSITION, "2.0");

    let error = load_planner_config().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_validation_rejects_incoherent_taper() {
    let mut config = PlannerConfig::default();
    config.curve.taper_week_fractions = [0.5, 0.7];
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = PlannerConfig::default();
    config.curve.taper_week_fractions = [0.96, 0.5];
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_validation_rejects_bad_ramp_and_quality() {
    let mut config = PlannerConfig::default();
    config.curve.build_start_fraction = 0.7;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = PlannerConfig::default();
    config.quality.max_sessions_per_week = 8;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = PlannerConfig::default();
    config.envelope.long_distance_weekly_ceiling_km = 0.0;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = PlannerConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: PlannerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
