// ABOUTME: JSON file loading for nutrition facts and nutrition records
// ABOUTME: Maps read and parse failures onto AppError with the file path attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

use std::fs;
use std::path::Path;

use hunter_core::errors::{AppError, AppResult};
use hunter_core::models::NutritionFacts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Read and deserialize a JSON file
///
/// # Errors
///
/// Returns `ResourceNotFound` if the file does not exist, `StorageError` for
/// other read failures, and `InvalidFormat` if the content is not valid JSON
/// for `T`. The path is recorded as the error's resource id.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> AppResult<T> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let content =
        fs::read_to_string(path).map_err(|e| AppError::from(e).with_resource_id(&display))?;
    serde_json::from_str(&content).map_err(|e| AppError::from(e).with_resource_id(display))
}

/// Contents of a nutrition facts file: one food or a list of foods
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FactsDocument {
    /// A JSON array
    Batch(Vec<NutritionFacts>),
    /// A single JSON object
    Single(Box<NutritionFacts>),
}

impl FactsDocument {
    /// Whether the file held an array
    #[must_use]
    pub const fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Foods in file order
    #[must_use]
    pub fn into_foods(self) -> Vec<NutritionFacts> {
        match self {
            Self::Batch(foods) => foods,
            Self::Single(facts) => vec![*facts],
        }
    }
}

/// Load nutrition facts from a file holding either one object or an array
///
/// # Errors
///
/// Same as [`load_json`].
pub fn load_facts(path: impl AsRef<Path>) -> AppResult<FactsDocument> {
    load_json(path)
}
