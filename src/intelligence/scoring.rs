// ABOUTME: Pure scoring functions behind the food classification stages
// ABOUTME: Class identity scores, corruption, fast-food detection, purity, and tier ladders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! Scoring Stages
//!
//! Every function here is a pure function of its inputs. The analyzer
//! composes them; tests and benches call them directly.
//!
//! | Stage | Function | Canonical formula |
//! |-------|----------|-------------------|
//! | 1 | [`class_scores`] | protein, complex carbs, fat x 2, fiber x 3 |
//! | 1 | [`determine_class`] | argmax, ties fiber > protein > carbs > fat |
//! | 2 | [`corruption_score`] | sugar + sodium x 0.01 + sat fat x 3 + trans fat x 20 |
//! | 2 | [`is_fast_food`] | sat fat >= 3 and protein / sat fat < 2 |
//! | 4 | [`purity_score`] | protein x 2 + fiber x 3 + complex carbs x 0.5 - corruption x 0.5 |

use hunter_core::constants::item;
use hunter_core::models::{ClassScores, FoodClass, ItemRarity, MonsterTier, NutritionFacts};

use crate::config::{
    ClassWeightsConfig, CorruptionWeightsConfig, PolarityConfig, TierThresholdsConfig,
};

/// Stage 1 identity scores
#[must_use]
pub fn class_scores(facts: &NutritionFacts, weights: &ClassWeightsConfig) -> ClassScores {
    ClassScores {
        protein: facts.protein * weights.protein,
        carbs: facts.complex_carbohydrates() * weights.carbs,
        fat: facts.fat * weights.fat,
        fiber: facts.fiber * weights.fiber,
    }
}

/// Pick the dominant class from the identity scores
///
/// Nothing registering (every score `<= 0`) defaults to Priest. Ties go to
/// the class listed first in fiber, protein, carbs, fat order.
#[must_use]
pub fn determine_class(scores: &ClassScores) -> FoodClass {
    let ranked = [
        (scores.fiber, FoodClass::Priest),
        (scores.protein, FoodClass::Warrior),
        (scores.carbs, FoodClass::Mage),
        (scores.fat, FoodClass::Berserker),
    ];

    if ranked.iter().all(|(score, _)| *score <= 0.0) {
        return FoodClass::Priest;
    }

    let mut best = ranked[0];
    for candidate in &ranked[1..] {
        // Strict comparison keeps the earlier class on ties
        if candidate.0 > best.0 {
            best = *candidate;
        }
    }
    best.1
}

/// Stage 2 corruption score (0 or more, unbounded above)
#[must_use]
pub fn corruption_score(facts: &NutritionFacts, weights: &CorruptionWeightsConfig) -> f64 {
    facts.saturated_fat.mul_add(
        weights.saturated_fat,
        facts.sodium.mul_add(
            weights.sodium,
            facts
                .sugar
                .mul_add(weights.sugar, facts.trans_fat * weights.trans_fat),
        ),
    )
}

/// Saturated fat is high and protein does not offset it
#[must_use]
pub fn is_fast_food(facts: &NutritionFacts, polarity: &PolarityConfig) -> bool {
    facts.saturated_fat >= polarity.fast_food_min_saturated_fat
        && facts.protein / facts.saturated_fat < polarity.fast_food_protein_ratio
}

/// Stage 3 decision: corruption strictly above the threshold, or fast food
#[must_use]
pub fn is_monster(corruption: f64, fast_food: bool, polarity: &PolarityConfig) -> bool {
    corruption > polarity.corruption_threshold || fast_food
}

/// Purity of a healthy food, floored at zero
#[must_use]
pub fn purity_score(facts: &NutritionFacts, corruption: f64) -> f64 {
    let gain = facts.complex_carbohydrates().mul_add(
        item::PURITY_PER_COMPLEX_CARB,
        facts
            .fiber
            .mul_add(item::PURITY_PER_FIBER, facts.protein * item::PURITY_PER_PROTEIN),
    );
    corruption
        .mul_add(-item::PURITY_PENALTY_PER_CORRUPTION, gain)
        .max(0.0)
}

/// Monster tier for a corruption score
#[must_use]
pub fn monster_tier(corruption: f64, tiers: &TierThresholdsConfig) -> MonsterTier {
    match tiers.step(corruption) {
        3 => MonsterTier::Legendary,
        2 => MonsterTier::Epic,
        1 => MonsterTier::Rare,
        _ => MonsterTier::Common,
    }
}

/// Item rarity for a purity score
#[must_use]
pub fn item_rarity(purity: f64, rarity: &TierThresholdsConfig) -> ItemRarity {
    match rarity.step(purity) {
        3 => ItemRarity::Legendary,
        2 => ItemRarity::Epic,
        1 => ItemRarity::Rare,
        _ => ItemRarity::Common,
    }
}

/// Round half away from zero, then clamp into `[min, max]`
#[must_use]
pub fn clamped_stat(value: f64, min: i32, max: i32) -> i32 {
    round_stat(value).clamp(min, max)
}

/// Round half away from zero into an integer stat
#[must_use]
pub fn round_stat(value: f64) -> i32 {
    // f64::round already rounds half away from zero; the cast saturates
    value.round() as i32
}
