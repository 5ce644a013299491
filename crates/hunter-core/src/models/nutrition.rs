// ABOUTME: Nutrition facts value object consumed by the food analyzer
// ABOUTME: NutritionFacts, NutritionSource, builder, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult, FieldError};

/// Where a nutrition record came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutritionSource {
    /// Open Food Facts barcode lookup
    OpenFoodFacts,
    /// Korean food safety (MFDS) database
    FoodSafety,
    /// AI photo or text estimation
    Gemini,
    /// Entered by hand
    Manual,
}

impl NutritionSource {
    /// Parse a source from string, `None` when unrecognised
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openfoodfacts" | "open_food_facts" => Some(Self::OpenFoodFacts),
            "foodsafety" | "food_safety" => Some(Self::FoodSafety),
            "gemini" => Some(Self::Gemini),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }
}

/// Nutrition facts for one serving of a food
///
/// Quantities are grams except `calories` (kcal) and `sodium` (mg). Absent
/// numeric fields deserialize as zero, matching how data providers report
/// unknown nutrients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    /// Display name of the food
    pub food_name: String,
    /// Barcode if the food was scanned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Total fat (g)
    #[serde(default)]
    pub fat: f64,
    /// Saturated fat (g)
    #[serde(default)]
    pub saturated_fat: f64,
    /// Trans fat (g)
    #[serde(default)]
    pub trans_fat: f64,
    /// Total carbohydrates (g)
    #[serde(default)]
    pub carbohydrates: f64,
    /// Sugars (g)
    #[serde(default)]
    pub sugar: f64,
    /// Dietary fiber (g)
    #[serde(default)]
    pub fiber: f64,
    /// Sodium (mg)
    #[serde(default)]
    pub sodium: f64,
    /// Product image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Serving description, e.g. "100g" or "1개"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    /// Data provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<NutritionSource>,
    /// Provider confidence (0.0 - 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl NutritionFacts {
    /// Start building facts for the named food; every nutrient starts at zero
    #[must_use]
    pub fn builder(food_name: impl Into<String>) -> NutritionFactsBuilder {
        NutritionFactsBuilder::new(food_name)
    }

    /// Carbohydrates that are not sugar, never negative
    #[must_use]
    pub fn complex_carbohydrates(&self) -> f64 {
        (self.carbohydrates - self.sugar).max(0.0)
    }

    /// Numeric fields paired with their wire names, in declaration order
    #[must_use]
    pub const fn quantities(&self) -> [(&'static str, f64); 9] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("fat", self.fat),
            ("saturatedFat", self.saturated_fat),
            ("transFat", self.trans_fat),
            ("carbohydrates", self.carbohydrates),
            ("sugar", self.sugar),
            ("fiber", self.fiber),
            ("sodium", self.sodium),
        ]
    }

    /// Validate the caller contract of the analyzer
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty food name or a NaN/infinite
    /// quantity, and `ValueOutOfRange` for a negative quantity or a
    /// confidence outside 0.0 - 1.0.
    pub fn validate(&self) -> AppResult<()> {
        if self.food_name.trim().is_empty() {
            return Err(FieldError::Empty { field: "foodName" }.into());
        }

        for (field, value) in self.quantities() {
            FieldError::check_quantity(field, value)
                .map_err(|e| AppError::from(e).with_resource_id(self.food_name.clone()))?;
        }

        if let Some(confidence) = self.confidence {
            if !(0.0..=1.0).contains(&confidence) {
                return Err(AppError::from(FieldError::OutOfRange {
                    field: "confidence",
                    value: confidence,
                    min: 0.0,
                    max: 1.0,
                })
                .with_resource_id(self.food_name.clone()));
            }
        }

        Ok(())
    }
}

/// Builder for `NutritionFacts`
#[derive(Debug, Clone)]
pub struct NutritionFactsBuilder {
    facts: NutritionFacts,
}

impl NutritionFactsBuilder {
    /// Create a builder with all nutrients at zero
    #[must_use]
    pub fn new(food_name: impl Into<String>) -> Self {
        Self {
            facts: NutritionFacts {
                food_name: food_name.into(),
                barcode: None,
                calories: 0.0,
                protein: 0.0,
                fat: 0.0,
                saturated_fat: 0.0,
                trans_fat: 0.0,
                carbohydrates: 0.0,
                sugar: 0.0,
                fiber: 0.0,
                sodium: 0.0,
                image_url: None,
                serving_size: None,
                source: None,
                confidence: None,
            },
        }
    }

    /// Sets the barcode
    #[must_use]
    pub fn barcode(mut self, value: impl Into<String>) -> Self {
        self.facts.barcode = Some(value.into());
        self
    }

    /// Sets calories (kcal)
    #[must_use]
    pub const fn calories(mut self, value: f64) -> Self {
        self.facts.calories = value;
        self
    }

    /// Sets protein (g)
    #[must_use]
    pub const fn protein(mut self, value: f64) -> Self {
        self.facts.protein = value;
        self
    }

    /// Sets total fat (g)
    #[must_use]
    pub const fn fat(mut self, value: f64) -> Self {
        self.facts.fat = value;
        self
    }

    /// Sets saturated fat (g)
    #[must_use]
    pub const fn saturated_fat(mut self, value: f64) -> Self {
        self.facts.saturated_fat = value;
        self
    }

    /// Sets trans fat (g)
    #[must_use]
    pub const fn trans_fat(mut self, value: f64) -> Self {
        self.facts.trans_fat = value;
        self
    }

    /// Sets total carbohydrates (g)
    #[must_use]
    pub const fn carbohydrates(mut self, value: f64) -> Self {
        self.facts.carbohydrates = value;
        self
    }

    /// Sets sugars (g)
    #[must_use]
    pub const fn sugar(mut self, value: f64) -> Self {
        self.facts.sugar = value;
        self
    }

    /// Sets dietary fiber (g)
    #[must_use]
    pub const fn fiber(mut self, value: f64) -> Self {
        self.facts.fiber = value;
        self
    }

    /// Sets sodium (mg)
    #[must_use]
    pub const fn sodium(mut self, value: f64) -> Self {
        self.facts.sodium = value;
        self
    }

    /// Sets the product image URL
    #[must_use]
    pub fn image_url(mut self, value: impl Into<String>) -> Self {
        self.facts.image_url = Some(value.into());
        self
    }

    /// Sets the serving description
    #[must_use]
    pub fn serving_size(mut self, value: impl Into<String>) -> Self {
        self.facts.serving_size = Some(value.into());
        self
    }

    /// Sets the data provider
    #[must_use]
    pub fn source(mut self, value: NutritionSource) -> Self {
        self.facts.source = Some(value);
        self
    }

    /// Sets the provider confidence
    #[must_use]
    pub fn confidence(mut self, value: f64) -> Self {
        self.facts.confidence = Some(value);
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> NutritionFacts {
        self.facts
    }
}
