// ABOUTME: Field-level validation errors for nutrition facts and records
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! # Validation Error Types
//!
//! - `FieldError` - a single rejected input field
//! - Conversion to `AppError` carrying the field name in the error details

use std::error::Error;
use std::fmt;

use serde_json::json;

use super::{AppError, ErrorCode};

/// Errors describing why a single input field was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Field is NaN or infinite
    NotFinite {
        /// Name of the field
        field: &'static str,
    },
    /// Field is below zero
    Negative {
        /// Name of the field
        field: &'static str,
        /// Rejected value
        value: f64,
    },
    /// Field is outside an explicit range
    OutOfRange {
        /// Name of the field
        field: &'static str,
        /// Rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// Required text field is empty
    Empty {
        /// Name of the field
        field: &'static str,
    },
}

impl FieldError {
    /// Name of the rejected field
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NotFinite { field }
            | Self::Negative { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::Empty { field } => field,
        }
    }

    /// Check a numeric quantity: finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `NotFinite` for NaN/infinity and `Negative` for values below zero
    pub fn check_quantity(field: &'static str, value: f64) -> Result<(), Self> {
        if !value.is_finite() {
            return Err(Self::NotFinite { field });
        }
        if value < 0.0 {
            return Err(Self::Negative { field, value });
        }
        Ok(())
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field } => write!(f, "'{field}' must be a finite number"),
            Self::Negative { field, value } => {
                write!(f, "'{field}' must not be negative (got {value})")
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "'{field}' must be between {min} and {max} (got {value})"),
            Self::Empty { field } => write!(f, "'{field}' must not be empty"),
        }
    }
}

impl Error for FieldError {}

impl From<FieldError> for AppError {
    fn from(error: FieldError) -> Self {
        let code = match error {
            FieldError::Negative { .. } | FieldError::OutOfRange { .. } => {
                ErrorCode::ValueOutOfRange
            }
            FieldError::NotFinite { .. } | FieldError::Empty { .. } => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string()).with_details(json!({ "field": error.field() }))
    }
}
