// ABOUTME: Item synthesis constants for weapon, potion, and buff stats
// ABOUTME: Coefficients, clamps, and purity-based rarity thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

/// Warrior weapon attack per gram of protein
pub const WARRIOR_ATTACK_PER_PROTEIN: f64 = 2.5;
/// Warrior weapon attack lower bound
pub const WARRIOR_ATTACK_MIN: i32 = 15;
/// Warrior weapon attack upper bound
pub const WARRIOR_ATTACK_MAX: i32 = 100;
/// Warrior weapon durability per gram of protein
pub const WARRIOR_DURABILITY_PER_PROTEIN: f64 = 0.8;
/// Warrior weapon durability lower bound
pub const WARRIOR_DURABILITY_MIN: i32 = 10;
/// Warrior weapon durability upper bound
pub const WARRIOR_DURABILITY_MAX: i32 = 30;

/// Berserker weapon attack per gram of fat
pub const BERSERKER_ATTACK_PER_FAT: f64 = 3.0;
/// Berserker weapon attack lower bound
pub const BERSERKER_ATTACK_MIN: i32 = 20;
/// Berserker weapon attack upper bound
pub const BERSERKER_ATTACK_MAX: i32 = 120;
/// Berserker weapons are fragile
pub const BERSERKER_DURABILITY: i32 = 8;

/// Mage buff power per gram of complex carbohydrate
pub const MAGE_BUFF_PER_COMPLEX_CARB: f64 = 1.5;
/// Mage buff power lower bound
pub const MAGE_BUFF_MIN: i32 = 20;
/// Mage buff power upper bound
pub const MAGE_BUFF_MAX: i32 = 80;

/// Fiber (g) needed for a Priest item to become a potion
pub const PRIEST_POTION_MIN_FIBER: f64 = 2.0;
/// Potion heal per gram of fiber
pub const PRIEST_HEAL_PER_FIBER: f64 = 10.0;
/// Potion heal lower bound
pub const PRIEST_HEAL_MIN: i32 = 15;
/// Potion heal upper bound
pub const PRIEST_HEAL_MAX: i32 = 80;
/// Priest shield defense boost
pub const PRIEST_DEFENSE_BOOST: i32 = 30;
/// Priest shield defense display lower bound
pub const PRIEST_DEFENSE_MIN: i32 = 15;
/// Priest shield defense display upper bound
pub const PRIEST_DEFENSE_MAX: i32 = 40;

/// Buff duration in seconds
pub const BUFF_DURATION_SECS: u32 = 30;

/// Purity points per gram of protein
pub const PURITY_PER_PROTEIN: f64 = 2.0;
/// Purity points per gram of fiber
pub const PURITY_PER_FIBER: f64 = 3.0;
/// Purity points per gram of complex carbohydrate
pub const PURITY_PER_COMPLEX_CARB: f64 = 0.5;
/// Purity penalty per corruption point
pub const PURITY_PENALTY_PER_CORRUPTION: f64 = 0.5;

/// Purity at or above which an item is legendary
pub const RARITY_LEGENDARY_MIN: f64 = 50.0;
/// Purity at or above which an item is epic
pub const RARITY_EPIC_MIN: f64 = 35.0;
/// Purity at or above which an item is rare
pub const RARITY_RARE_MIN: f64 = 20.0;

/// Name suffix for Warrior weapons
pub const SUFFIX_SWORD: &str = " 소드";
/// Name suffix for Berserker weapons
pub const SUFFIX_AXE: &str = " 도끼";
/// Name suffix for Mage buffs
pub const SUFFIX_ENERGY: &str = " 에너지";
/// Name suffix for Priest potions
pub const SUFFIX_POTION: &str = " 포션";
/// Name suffix for Priest shields
pub const SUFFIX_SHIELD: &str = " 방패";
