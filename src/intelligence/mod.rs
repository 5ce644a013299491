// ABOUTME: Intelligence module grouping the food analyzer and nutrition statistics
// ABOUTME: Re-exports the classification pipeline, its scoring stages, and log aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! # Intelligence Module
//!
//! Game logic derived from nutrition data: turning a scanned food into a
//! monster or an item, and summarizing a player's food log.

/// Injectable time and identifier sources
pub mod clock;
/// Food classification pipeline
pub mod food_analyzer;
/// Aggregated statistics over nutrition records
pub mod nutrition_stats;
/// Pure scoring stages
pub mod scoring;
/// Monster and item stat synthesis
pub mod synthesis;

pub use clock::{
    Clock, FixedClock, IdGenerator, SequentialIdGenerator, SystemClock, UuidV4Generator,
};
pub use food_analyzer::FoodAnalyzer;
pub use nutrition_stats::{daily_breakdown, HealthGrade, Nutrient, NutritionStats};
pub use scoring::{
    class_scores, corruption_score, determine_class, is_fast_food, item_rarity, monster_tier,
    purity_score,
};
pub use synthesis::{item_blueprint, monster_name, monster_stats, ItemBlueprint, MonsterStats};
