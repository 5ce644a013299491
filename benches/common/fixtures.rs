// ABOUTME: Benchmark fixtures generating deterministic nutrition facts and records
// ABOUTME: Mixes protein, carb, fat, fiber, and junk profiles so every branch is exercised
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! Benchmark fixtures for reproducible performance measurements.

use calorie_hunter::models::{NutritionFacts, NutritionRecord};
use chrono::{Days, NaiveDate};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum FoodBatchSize {
    /// One meal's worth of scans
    Small,
    /// A week of scans
    Medium,
    /// Bulk import
    Large,
}

impl FoodBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1_000,
        }
    }
}

/// Generate one food; the profile cycles with `index`
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_food(index: usize) -> NutritionFacts {
    let jitter = (index % 17) as f64;
    let builder = NutritionFacts::builder(format!("bench-food-{index}"));

    match index % 5 {
        0 => builder
            .calories(165.0 + jitter)
            .protein(25.0 + jitter)
            .fat(3.0)
            .sodium(70.0),
        1 => builder
            .calories(350.0)
            .carbohydrates(70.0 + jitter)
            .sugar(2.0)
            .fiber(3.0),
        2 => builder
            .calories(580.0)
            .protein(20.0)
            .fat(45.0 + jitter)
            .saturated_fat(4.0),
        3 => builder
            .calories(35.0)
            .carbohydrates(7.0)
            .fiber(2.0 + jitter / 10.0)
            .sodium(30.0),
        _ => builder
            .calories(450.0 + jitter * 10.0)
            .protein(12.0)
            .fat(28.0)
            .saturated_fat(10.0)
            .trans_fat(0.5)
            .carbohydrates(45.0)
            .sugar(30.0)
            .sodium(1_100.0),
    }
    .build()
}

/// Generate a batch of foods
#[must_use]
pub fn generate_foods(size: FoodBatchSize) -> Vec<NutritionFacts> {
    (0..size.count()).map(generate_food).collect()
}

/// Generate `count` records spread over the `days` days ending at `today`
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_records(count: usize, today: NaiveDate, days: u64) -> Vec<NutritionRecord> {
    (0..count)
        .map(|index| {
            let offset = index as u64 % days.max(1);
            let date = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
            let is_healthy = index % 3 != 0;
            NutritionRecord {
                id: format!("bench-record-{index}"),
                owner_id: "bench-player".to_owned(),
                date,
                food_name: format!("bench-food-{index}"),
                calories: 300.0 + (index % 200) as f64,
                protein: 10.0 + (index % 30) as f64,
                carbohydrate: 40.0,
                fat: 12.0,
                sugar: (index % 25) as f64,
                sodium: 200.0 + (index % 600) as f64,
                fiber: (index % 8) as f64,
                saturated_fat: 3.0,
                trans_fat: 0.0,
                is_healthy,
                result_type: if is_healthy { "ITEM" } else { "MONSTER" }.to_owned(),
                timestamp: 0,
            }
        })
        .collect()
}
