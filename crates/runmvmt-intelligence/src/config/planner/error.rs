// ABOUTME: Configuration error types for planner configuration validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and environment access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for planner configuration validation.

use runmvmt_core::errors::AppError;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Related values are in the wrong order (e.g., taper above peak)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                Self::config_invalid(error.to_string()).with_source(error)
            }
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => {
                Self::config(error.to_string()).with_source(error)
            }
        }
    }
}
