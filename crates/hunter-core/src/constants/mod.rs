// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for classification, monster and item synthesis, and stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.
//! The classification defaults here are the values `AnalyzerConfig::default()` starts from.

/// Class scoring and corruption weights, polarity thresholds
pub mod classification;
/// Monster stat coefficients, clamps, tiers, and lifetime
pub mod monster;
/// Item stat coefficients, clamps, and rarity thresholds
pub mod item;

/// Daily reference intake values (Korean MFDS labelling standard)
pub mod daily_values {
    /// Calories (kcal)
    pub const CALORIES: f64 = 2000.0;
    /// Protein (g)
    pub const PROTEIN: f64 = 55.0;
    /// Carbohydrate (g)
    pub const CARBOHYDRATE: f64 = 324.0;
    /// Fat (g)
    pub const FAT: f64 = 54.0;
    /// Sugars (g)
    pub const SUGAR: f64 = 50.0;
    /// Sodium (mg)
    pub const SODIUM: f64 = 2000.0;
    /// Dietary fiber (g)
    pub const FIBER: f64 = 25.0;
}

/// Hex colors shared by tier, rarity, and grade badges
pub mod colors {
    /// Legendary tier / rarity
    pub const LEGENDARY: &str = "#FFD700";
    /// Epic tier / rarity
    pub const EPIC: &str = "#A855F7";
    /// Rare tier / rarity
    pub const RARE: &str = "#3B82F6";
    /// Common tier / rarity
    pub const COMMON: &str = "#9CA3AF";

    /// Health grade A
    pub const GRADE_A: &str = "#4CAF50";
    /// Health grade B
    pub const GRADE_B: &str = "#8BC34A";
    /// Health grade C
    pub const GRADE_C: &str = "#FFC107";
    /// Health grade D
    pub const GRADE_D: &str = "#FF9800";
    /// Health grade F
    pub const GRADE_F: &str = "#F44336";
}

/// Time conversions
pub mod time {
    /// Milliseconds in one hour
    pub const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;
}
