// ABOUTME: Monster synthesis constants for stats, tiers, and lifetime
// ABOUTME: Coefficients convert corruption and nutrients into battle stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

/// Corruption score at or above which a monster is legendary
pub const TIER_LEGENDARY_MIN: f64 = 80.0;
/// Corruption score at or above which a monster is epic
pub const TIER_EPIC_MIN: f64 = 50.0;
/// Corruption score at or above which a monster is rare
pub const TIER_RARE_MIN: f64 = 30.0;

/// HP per corruption point
pub const HP_PER_CORRUPTION: f64 = 3.0;
/// HP per kcal
pub const HP_PER_CALORIE: f64 = 0.03;
/// Minimum HP
pub const HP_MIN: i32 = 30;
/// Maximum HP
pub const HP_MAX: i32 = 500;

/// Attack per corruption point
pub const ATTACK_PER_CORRUPTION: f64 = 1.5;
/// Warrior attack bonus per gram of protein
pub const WARRIOR_ATTACK_PER_PROTEIN: f64 = 1.0;
/// Berserker attack bonus per gram of saturated fat
pub const BERSERKER_ATTACK_PER_SATURATED_FAT: f64 = 2.0;
/// Minimum attack
pub const ATTACK_MIN: i32 = 5;
/// Maximum attack
pub const ATTACK_MAX: i32 = 80;

/// Default defense per mg of sodium
pub const DEFENSE_PER_SODIUM: f64 = 0.015;
/// Warrior defense per mg of sodium
pub const WARRIOR_DEFENSE_PER_SODIUM: f64 = 0.01;
/// Minimum defense
pub const DEFENSE_MIN: i32 = 0;
/// Maximum defense
pub const DEFENSE_MAX: i32 = 50;

/// Mage poison per gram of sugar
pub const MAGE_POISON_PER_SUGAR: f64 = 0.3;
/// Priest poison per gram of sugar
pub const PRIEST_POISON_PER_SUGAR: f64 = 0.5;
/// Priest poison per gram of trans fat
pub const PRIEST_POISON_PER_TRANS_FAT: f64 = 5.0;

/// Hours before a spawned monster despawns
pub const LIFETIME_HOURS: i64 = 24;

/// Name prefix for legendary monsters
pub const PREFIX_LEGENDARY: &str = "고대의 ";
/// Name prefix for epic monsters
pub const PREFIX_EPIC: &str = "분노한 ";
/// Name prefix for rare monsters
pub const PREFIX_RARE: &str = "거대한 ";
/// Name prefix for low-tier Priest monsters
pub const PREFIX_CORRUPTED: &str = "부패한 ";
