// ABOUTME: Nutrition log record kept for every scanned food
// ABOUTME: NutritionRecord built from facts plus the classification outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::classification::ClassificationResult;
use super::nutrition::NutritionFacts;

/// One scanned food in a player's nutrition log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRecord {
    /// Unique identifier
    pub id: String,
    /// Player that scanned the food
    pub owner_id: String,
    /// Day the food was eaten (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Food name
    pub food_name: String,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbohydrate: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat: f64,
    /// Sugars (g)
    #[serde(default)]
    pub sugar: f64,
    /// Sodium (mg)
    #[serde(default)]
    pub sodium: f64,
    /// Fiber (g)
    #[serde(default)]
    pub fiber: f64,
    /// Saturated fat (g)
    #[serde(default)]
    pub saturated_fat: f64,
    /// Trans fat (g)
    #[serde(default)]
    pub trans_fat: f64,
    /// Whether the food became an item
    pub is_healthy: bool,
    /// "MONSTER" or "ITEM"
    pub result_type: String,
    /// Time recorded (epoch milliseconds)
    pub timestamp: i64,
}

impl NutritionRecord {
    /// Record a classified food
    #[must_use]
    pub fn from_classification(
        facts: &NutritionFacts,
        result: &ClassificationResult,
        owner_id: impl Into<String>,
        date: NaiveDate,
        timestamp: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            date,
            food_name: facts.food_name.clone(),
            calories: facts.calories,
            protein: facts.protein,
            carbohydrate: facts.carbohydrates,
            fat: facts.fat,
            sugar: facts.sugar,
            sodium: facts.sodium,
            fiber: facts.fiber,
            saturated_fat: facts.saturated_fat,
            trans_fat: facts.trans_fat,
            is_healthy: !result.is_monster(),
            result_type: result.result_type().to_owned(),
            timestamp,
        }
    }
}
