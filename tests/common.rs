// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides a deterministic analyzer, reference foods, and nutrition record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments
)]
//! Shared test utilities for `calorie_hunter`
//!
//! Every analyzer built here uses a frozen clock and sequential ids so
//! results are fully reproducible.

use std::env;
use std::sync::{Arc, Once};

use calorie_hunter::{
    config::AnalyzerConfig,
    intelligence::{FixedClock, FoodAnalyzer, SequentialIdGenerator},
    models::{NutritionFacts, NutritionRecord},
};
use chrono::NaiveDate;
use tracing::Level;

/// Frozen "now" for every test analyzer (2023-11-14T22:13:20Z)
pub const FIXED_NOW_MS: i64 = 1_700_000_000_000;

/// Owner used by fixtures
pub const OWNER: &str = "player-1";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Analyzer with the canonical balance, a frozen clock, and sequential ids
pub fn test_analyzer() -> FoodAnalyzer {
    test_analyzer_with_config(AnalyzerConfig::canonical())
}

/// Deterministic analyzer with a custom configuration
pub fn test_analyzer_with_config(config: AnalyzerConfig) -> FoodAnalyzer {
    init_test_logging();
    FoodAnalyzer::with_config(config)
        .with_clock(Arc::new(FixedClock::new(FIXED_NOW_MS)))
        .with_id_generator(Arc::new(SequentialIdGenerator::new("test")))
}

// ============================================================================
// Reference foods (per 100 g)
// ============================================================================

/// Lean protein: Warrior, pure
pub fn chicken_breast() -> NutritionFacts {
    NutritionFacts::builder("닭가슴살")
        .barcode("8801234567890")
        .calories(165.0)
        .protein(31.0)
        .fat(3.6)
        .build()
}

/// Pure sugar water: Priest, corrupted
pub fn cola() -> NutritionFacts {
    NutritionFacts::builder("콜라")
        .calories(140.0)
        .carbohydrates(39.0)
        .sugar(39.0)
        .sodium(45.0)
        .build()
}

/// Saturated and trans fat heavy: Berserker, corrupted, fast food
pub fn fried_chicken() -> NutritionFacts {
    NutritionFacts::builder("후라이드치킨")
        .calories(400.0)
        .protein(20.0)
        .fat(30.0)
        .saturated_fat(15.0)
        .trans_fat(1.5)
        .build()
}

/// Salty refined carbs: Mage, corrupted
pub fn instant_ramen() -> NutritionFacts {
    NutritionFacts::builder("라면")
        .calories(500.0)
        .protein(10.0)
        .fat(16.0)
        .saturated_fat(8.0)
        .carbohydrates(80.0)
        .sugar(4.0)
        .sodium(1800.0)
        .build()
}

/// Complex carbs: Mage, pure
pub fn brown_rice() -> NutritionFacts {
    NutritionFacts::builder("현미밥")
        .calories(370.0)
        .protein(7.9)
        .fat(2.9)
        .saturated_fat(0.6)
        .carbohydrates(77.0)
        .sugar(0.9)
        .fiber(3.5)
        .sodium(5.0)
        .build()
}

/// Healthy fat: Berserker, pure
pub fn almonds() -> NutritionFacts {
    NutritionFacts::builder("아몬드")
        .calories(579.0)
        .protein(21.0)
        .fat(50.0)
        .saturated_fat(3.8)
        .carbohydrates(22.0)
        .sugar(4.4)
        .fiber(12.5)
        .sodium(1.0)
        .build()
}

/// Fiber dominant: Priest, pure, potion
pub fn broccoli() -> NutritionFacts {
    NutritionFacts::builder("브로콜리")
        .calories(34.0)
        .protein(2.8)
        .fat(0.4)
        .carbohydrates(7.0)
        .sugar(1.7)
        .fiber(2.6)
        .sodium(33.0)
        .build()
}

/// Nothing at all: Priest, pure, shield
pub fn water() -> NutritionFacts {
    NutritionFacts::builder("물").build()
}

/// Every reference food
pub fn all_fixtures() -> Vec<NutritionFacts> {
    vec![
        chicken_breast(),
        cola(),
        fried_chicken(),
        instant_ramen(),
        brown_rice(),
        almonds(),
        broccoli(),
        water(),
    ]
}

// ============================================================================
// Nutrition records
// ============================================================================

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Record with the given nutrient totals
pub fn record(
    date: NaiveDate,
    is_healthy: bool,
    calories: f64,
    protein: f64,
    sugar: f64,
    sodium: f64,
    fiber: f64,
) -> NutritionRecord {
    NutritionRecord {
        id: format!("record-{date}-{calories}"),
        owner_id: OWNER.to_owned(),
        date,
        food_name: "test food".to_owned(),
        calories,
        protein,
        carbohydrate: 0.0,
        fat: 0.0,
        sugar,
        sodium,
        fiber,
        saturated_fat: 0.0,
        trans_fat: 0.0,
        is_healthy,
        result_type: if is_healthy { "ITEM" } else { "MONSTER" }.to_owned(),
        timestamp: FIXED_NOW_MS,
    }
}
