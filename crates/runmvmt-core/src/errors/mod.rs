// ABOUTME: Unified error types for the RunMVMT plan engine boundary
// ABOUTME: Error codes, AppError with chaining, and conversions from serde and io errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The plan pipeline itself is total and never fails. Errors only surface at
//! the edges: decoding answer documents, reading files, and validating
//! configuration. This module gives those edges one error type.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the plan engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input could not be decoded
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric input outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Referenced file or record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Generic configuration failure
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration loaded but failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Reading or writing a file failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// HTTP status an API layer would map this code to
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::InvalidFormat | Self::ValueOutOfRange => 400,
            Self::ResourceNotFound => 404,
            Self::ConfigError
            | Self::ConfigInvalid
            | Self::InternalError
            | Self::StorageError
            | Self::SerializationError => 500,
        }
    }

    /// User-facing description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the plan engine boundary
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details for callers that render errors
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Undecodable input
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Missing file or record
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Configuration validation failure
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        let message = error.to_string();
        let details = json!({
            "line": error.line(),
            "column": error.column(),
        });
        if error.is_data() || error.is_syntax() || error.is_eof() {
            Self::invalid_format(message)
                .with_details(details)
                .with_source(error)
        } else {
            Self::serialization(message)
                .with_details(details)
                .with_source(error)
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let code = if error.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::ConfigInvalid.http_status(), 500);
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::invalid_input("goal_distance must be a string");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: goal_distance must be a string"
        );
    }

    #[test]
    fn test_json_syntax_error_maps_to_invalid_format() {
        let error = serde_json::from_str::<Value>("{ not json")
            .err()
            .map(AppError::from);
        assert_eq!(error.as_ref().map(|e| e.code), Some(ErrorCode::InvalidFormat));
        assert!(error.is_some_and(|e| e.details.get("line").is_some()));
    }

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "answers.json");
        assert_eq!(AppError::from(io_error).code, ErrorCode::ResourceNotFound);
    }
}
