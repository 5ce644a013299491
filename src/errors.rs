// ABOUTME: Error types re-exported from the core crate for library consumers
// ABOUTME: AppError, ErrorCode, ErrorResponse, and field validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! # Unified Error Handling System
//!
//! The error types live in `hunter-core` so the models can validate
//! themselves; this module keeps the `calorie_hunter::errors` path stable.

pub use hunter_core::errors::*;
