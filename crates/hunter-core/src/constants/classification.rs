// ABOUTME: Classification weights and thresholds for the food analyzer
// ABOUTME: Class identity scores, corruption weights, fast-food rule, and polarity cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

/// Protein grams count once toward the Warrior score
pub const PROTEIN_CLASS_WEIGHT: f64 = 1.0;
/// Complex carbohydrate grams count once toward the Mage score
pub const CARBS_CLASS_WEIGHT: f64 = 1.0;
/// Fat grams are doubled for the Berserker score
pub const FAT_CLASS_WEIGHT: f64 = 2.0;
/// Fiber grams are tripled for the Priest score (rarest nutrient)
pub const FIBER_CLASS_WEIGHT: f64 = 3.0;

/// Corruption points per gram of sugar
pub const SUGAR_CORRUPTION_WEIGHT: f64 = 1.0;
/// Corruption points per milligram of sodium
pub const SODIUM_CORRUPTION_WEIGHT: f64 = 0.01;
/// Corruption points per gram of saturated fat
pub const SATURATED_FAT_CORRUPTION_WEIGHT: f64 = 3.0;
/// Corruption points per gram of trans fat
pub const TRANS_FAT_CORRUPTION_WEIGHT: f64 = 20.0;

/// Food becomes a monster when corruption is strictly above this value
pub const CORRUPTION_THRESHOLD: f64 = 20.0;

/// Minimum saturated fat (g) before the fast-food rule applies
pub const FAST_FOOD_MIN_SATURATED_FAT: f64 = 3.0;
/// Protein-to-saturated-fat ratio below which food counts as fast food
pub const FAST_FOOD_PROTEIN_RATIO: f64 = 2.0;
