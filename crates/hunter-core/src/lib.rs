// ABOUTME: Core types and constants for the Calorie Hunter game engine
// ABOUTME: Foundation crate with error handling, game constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

#![deny(unsafe_code)]

//! # Hunter Core
//!
//! Foundation crate providing shared types and constants for the Calorie Hunter
//! food classification engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Classification weights, thresholds, and display constants by domain
//! - **models**: Nutrition facts, monsters, items, and classification results

/// Unified error handling system with standard error codes
pub mod errors;

/// Game constants organized by domain
pub mod constants;

/// Core data models (`NutritionFacts`, `Monster`, `Item`, `ClassificationResult`)
pub mod models;
