// ABOUTME: Core data models for the Calorie Hunter classification engine
// ABOUTME: Re-exports nutrition input, monster and item descriptors, and classification results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! # Data Models
//!
//! Value objects flowing into and out of the food analyzer.
//!
//! ## Design Principles
//!
//! - **Immutable input**: `NutritionFacts` is built once and only read by the engine
//! - **Provider agnostic**: provenance fields are carried but never interpreted
//! - **Serializable**: all models use the camelCase wire names the persistence layer stores
//!
//! ## Core Models
//!
//! - `NutritionFacts`: nutrient quantities for one serving
//! - `Monster` / `Item`: synthesized game entities
//! - `ClassificationResult`: outcome plus intermediate scores
//! - `NutritionRecord`: nutrition log entry for statistics

mod classification;
mod item;
mod monster;
mod nutrition;
mod record;

// Classification
pub use classification::{ClassScores, ClassificationOutcome, ClassificationResult, FoodClass};

// Items
pub use item::{Item, ItemRarity, ItemStats, ItemType};

// Monsters
pub use monster::{Element, Monster, MonsterStatus, MonsterTier};

// Nutrition input
pub use nutrition::{NutritionFacts, NutritionFactsBuilder, NutritionSource};

// Nutrition log
pub use record::NutritionRecord;
