// ABOUTME: Classification result types returned by the food analyzer
// ABOUTME: FoodClass, ClassScores, ClassificationOutcome, and ClassificationResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

use serde::{Deserialize, Serialize};

use super::item::Item;
use super::monster::{Element, Monster};

/// Dominant macro-nutrient identity of a food, independent of healthiness
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodClass {
    /// Protein dominates
    Warrior,
    /// Complex carbohydrates dominate
    Mage,
    /// Fat dominates
    Berserker,
    /// Fiber dominates, or nothing registers at all
    Priest,
}

impl FoodClass {
    /// Title used as the monster name suffix
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Warrior => "전사",
            Self::Mage => "마법사",
            Self::Berserker => "광전사",
            Self::Priest => "사제",
        }
    }

    /// Element of monsters spawned from this class
    #[must_use]
    pub const fn element(&self) -> Element {
        match self {
            Self::Warrior => Element::Rage,
            Self::Mage => Element::Chaos,
            Self::Berserker => Element::Greasy,
            Self::Priest => Element::Toxic,
        }
    }
}

/// Stage 1 identity scores, one per class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassScores {
    /// Warrior score
    pub protein: f64,
    /// Mage score (complex carbohydrates only)
    pub carbs: f64,
    /// Berserker score
    pub fat: f64,
    /// Priest score
    pub fiber: f64,
}

/// The entity a classification produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "entity", rename_all = "UPPERCASE")]
pub enum ClassificationOutcome {
    /// Corrupted food spawns a monster
    Monster(Monster),
    /// Pure food yields an item
    Item(Item),
}

/// Full result of classifying one food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Synthesized monster or item
    pub outcome: ClassificationOutcome,
    /// Stage 1 class
    pub food_class: FoodClass,
    /// Stage 1 scores
    pub class_scores: ClassScores,
    /// Stage 2 corruption score
    pub corruption_score: f64,
    /// Stage 2 fast-food flag
    pub is_fast_food: bool,
    /// Purity score used for item rarity; `None` for monsters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purity_score: Option<f64>,
}

impl ClassificationResult {
    /// Whether the food spawned a monster
    #[must_use]
    pub const fn is_monster(&self) -> bool {
        matches!(self.outcome, ClassificationOutcome::Monster(_))
    }

    /// The monster, if one was spawned
    #[must_use]
    pub const fn monster(&self) -> Option<&Monster> {
        match &self.outcome {
            ClassificationOutcome::Monster(monster) => Some(monster),
            ClassificationOutcome::Item(_) => None,
        }
    }

    /// The item, if one was produced
    #[must_use]
    pub const fn item(&self) -> Option<&Item> {
        match &self.outcome {
            ClassificationOutcome::Item(item) => Some(item),
            ClassificationOutcome::Monster(_) => None,
        }
    }

    /// Result type label stored alongside nutrition records
    #[must_use]
    pub const fn result_type(&self) -> &'static str {
        match self.outcome {
            ClassificationOutcome::Monster(_) => "MONSTER",
            ClassificationOutcome::Item(_) => "ITEM",
        }
    }
}
