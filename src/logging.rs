// ABOUTME: Logging configuration and structured logging setup for the planner CLI
// ABOUTME: Configures log level, output format, and source locations; writes to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs always go to stderr so that plan and report JSON on stdout stays
//! machine-readable.

use anyhow::Result;
use std::env;
use std::io;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in startup logs
pub const SERVICE_NAME: &str = "runmvmt-planner";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log shipping
    Json,
    /// Multi-line human-readable output
    Pretty,
    /// Single-line output
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unrecognised is `Compact`
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |raw| LogFormat::from_name(&raw)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
        }
    }

    /// Raise the level to `debug` (CLI `--verbose`)
    #[must_use]
    pub fn verbose(mut self) -> Self {
        "debug".clone_into(&mut self.level);
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("warn"));
        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_writer(io::stderr);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(compact_layer).try_init()?;
            }
        }

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from the environment
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_names() {
        assert_eq!(LogFormat::from_name("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_name("whatever"), LogFormat::Compact);
    }

    #[test]
    fn test_verbose_switches_to_debug() {
        let config = LoggingConfig::default().verbose();
        assert_eq!(config.level, "debug");
    }
}
