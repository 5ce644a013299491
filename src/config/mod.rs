// ABOUTME: Configuration management for the food analyzer and logging
// ABOUTME: Environment-driven overrides layered over the canonical game balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! Configuration Module
//!
//! - `analyzer` - classification weights, thresholds, and monster lifetime
//! - `error` - configuration error types

pub mod analyzer;
pub mod error;

pub use analyzer::{
    AnalyzerConfig, ClassWeightsConfig, CorruptionWeightsConfig, MonsterLifetimeConfig,
    PolarityConfig, TierThresholdsConfig,
};
pub use error::ConfigError;
