// ABOUTME: Main library entry point for the Calorie Hunter food classification engine
// ABOUTME: Turns nutrition facts into monsters or items and summarizes nutrition logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

#![deny(unsafe_code)]

//! # Calorie Hunter
//!
//! Game engine core that maps a food's nutrition facts to exactly one game
//! entity: a monster for unhealthy food, an item for healthy food.
//!
//! ## Features
//!
//! - **Deterministic classification**: identity class, corruption score, and
//!   polarity decision are pure functions of the nutrients
//! - **Injectable ids and time**: tests pin UUIDs and timestamps
//! - **Tunable balance**: `HUNTER_*` environment overrides on top of the
//!   canonical weights and thresholds
//! - **Nutrition statistics**: health score, grade, and daily breakdown
//!
//! ## Architecture
//!
//! - **Models** (`hunter-core`): nutrition facts, monsters, items, results
//! - **Intelligence**: the analyzer pipeline and statistics
//! - **Config**: analyzer weights and thresholds
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use calorie_hunter::intelligence::FoodAnalyzer;
//! use calorie_hunter::models::NutritionFacts;
//!
//! let cola = NutritionFacts::builder("콜라")
//!     .calories(140.0)
//!     .carbohydrates(39.0)
//!     .sugar(39.0)
//!     .sodium(45.0)
//!     .build();
//!
//! let result = FoodAnalyzer::new().classify(&cola, "player-1");
//! if let Some(monster) = result.monster() {
//!     println!("{} appeared with {} HP", monster.name, monster.max_hp);
//! }
//! ```

/// Analyzer configuration with environment overrides
pub mod config;

/// Unified error handling
pub mod errors;

/// Food classification and nutrition statistics
pub mod intelligence;

/// JSON file loading
pub mod io;

/// Logging configuration and structured game events
pub mod logging;

/// Game constants
pub use hunter_core::constants;

/// Core data models
pub use hunter_core::models;
