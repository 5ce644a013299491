// ABOUTME: Configuration error types for analyzer config loading and validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and bad weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! Configuration error types for analyzer config validation.

use hunter_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds out of order (e.g. epic tier above legendary)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weight is negative or not finite
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse(_) => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_)
            | ConfigError::InvalidWeights(_)
            | ConfigError::ValueOutOfRange(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string())
    }
}
