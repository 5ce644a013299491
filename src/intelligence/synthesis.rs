// ABOUTME: Monster and item stat synthesis from classified nutrition facts
// ABOUTME: Stat formulas, clamping ranges, and display names for both entity kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! Entity Synthesis
//!
//! Turns a classified food into the numbers and names of a monster or an
//! item. Identity (ids, owner, timestamps) is stamped by the analyzer; this
//! module only derives what follows from the nutrients.
//!
//! Every stat is rounded half away from zero before it is clamped.

use hunter_core::constants::{item, monster};
use hunter_core::models::{FoodClass, ItemStats, ItemType, MonsterTier, NutritionFacts};

use super::scoring::{clamped_stat, round_stat};

/// Combat stats of a freshly spawned monster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterStats {
    /// Maximum (and starting) HP, 30 - 500
    pub max_hp: i32,
    /// Attack, 5 - 80
    pub attack: i32,
    /// Defense, 0 - 50
    pub defense: i32,
    /// Poison damage per turn, 0 or more
    pub poison_damage: i32,
}

/// Derive monster stats from its nutrients, class, and corruption
#[must_use]
pub fn monster_stats(facts: &NutritionFacts, class: FoodClass, corruption: f64) -> MonsterStats {
    let max_hp = clamped_stat_sum(
        round_stat(corruption * monster::HP_PER_CORRUPTION),
        round_stat(facts.calories * monster::HP_PER_CALORIE),
        monster::HP_MIN,
        monster::HP_MAX,
    );

    let attack_bonus = match class {
        FoodClass::Warrior => round_stat(facts.protein * monster::WARRIOR_ATTACK_PER_PROTEIN),
        FoodClass::Berserker => {
            round_stat(facts.saturated_fat * monster::BERSERKER_ATTACK_PER_SATURATED_FAT)
        }
        FoodClass::Mage | FoodClass::Priest => 0,
    };
    let attack = clamped_stat_sum(
        round_stat(corruption * monster::ATTACK_PER_CORRUPTION),
        attack_bonus,
        monster::ATTACK_MIN,
        monster::ATTACK_MAX,
    );

    let defense_per_sodium = match class {
        FoodClass::Warrior => monster::WARRIOR_DEFENSE_PER_SODIUM,
        FoodClass::Mage | FoodClass::Berserker | FoodClass::Priest => monster::DEFENSE_PER_SODIUM,
    };
    let defense = clamped_stat(
        facts.sodium * defense_per_sodium,
        monster::DEFENSE_MIN,
        monster::DEFENSE_MAX,
    );

    let poison_damage = match class {
        FoodClass::Mage => round_stat(facts.sugar * monster::MAGE_POISON_PER_SUGAR),
        FoodClass::Priest => round_stat(facts.trans_fat.mul_add(
            monster::PRIEST_POISON_PER_TRANS_FAT,
            facts.sugar * monster::PRIEST_POISON_PER_SUGAR,
        )),
        FoodClass::Warrior | FoodClass::Berserker => 0,
    };

    MonsterStats {
        max_hp,
        attack,
        defense,
        poison_damage: poison_damage.max(0),
    }
}

/// Display name: tier prefix, food name, class title
///
/// Priest monsters below epic tier are always "부패한" (corrupted).
#[must_use]
pub fn monster_name(food_name: &str, class: FoodClass, tier: MonsterTier) -> String {
    let prefix = match (class, tier) {
        (FoodClass::Priest, MonsterTier::Common | MonsterTier::Rare) => monster::PREFIX_CORRUPTED,
        _ => tier.name_prefix(),
    };
    format!("{prefix}{food_name} {}", class.title())
}

/// Type, stats, and name of the item a pure food yields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBlueprint {
    /// Item kind
    pub item_type: ItemType,
    /// Type-specific stats
    pub stats: ItemStats,
    /// Display name
    pub name: String,
}

/// Derive the item for a pure food of the given class
#[must_use]
pub fn item_blueprint(facts: &NutritionFacts, class: FoodClass) -> ItemBlueprint {
    let (item_type, stats, suffix) = match class {
        FoodClass::Warrior => {
            let durability = clamped_stat(
                facts.protein * item::WARRIOR_DURABILITY_PER_PROTEIN,
                item::WARRIOR_DURABILITY_MIN,
                item::WARRIOR_DURABILITY_MAX,
            );
            let stats = ItemStats::Weapon {
                attack_power: clamped_stat(
                    facts.protein * item::WARRIOR_ATTACK_PER_PROTEIN,
                    item::WARRIOR_ATTACK_MIN,
                    item::WARRIOR_ATTACK_MAX,
                ),
                durability,
                max_durability: durability,
            };
            (ItemType::Weapon, stats, item::SUFFIX_SWORD)
        }
        FoodClass::Berserker => {
            let stats = ItemStats::Weapon {
                attack_power: clamped_stat(
                    facts.fat * item::BERSERKER_ATTACK_PER_FAT,
                    item::BERSERKER_ATTACK_MIN,
                    item::BERSERKER_ATTACK_MAX,
                ),
                durability: item::BERSERKER_DURABILITY,
                max_durability: item::BERSERKER_DURABILITY,
            };
            (ItemType::Weapon, stats, item::SUFFIX_AXE)
        }
        FoodClass::Mage => {
            let stats = ItemStats::Buff {
                buff_power: clamped_stat(
                    facts.complex_carbohydrates() * item::MAGE_BUFF_PER_COMPLEX_CARB,
                    item::MAGE_BUFF_MIN,
                    item::MAGE_BUFF_MAX,
                ),
                defense_boost: 0,
                duration_secs: item::BUFF_DURATION_SECS,
            };
            (ItemType::Buff, stats, item::SUFFIX_ENERGY)
        }
        FoodClass::Priest if facts.fiber >= item::PRIEST_POTION_MIN_FIBER => {
            let stats = ItemStats::Potion {
                heal_amount: clamped_stat(
                    facts.fiber * item::PRIEST_HEAL_PER_FIBER,
                    item::PRIEST_HEAL_MIN,
                    item::PRIEST_HEAL_MAX,
                ),
            };
            (ItemType::Potion, stats, item::SUFFIX_POTION)
        }
        FoodClass::Priest => {
            // The display range never binds; the boost is always 30
            let stats = ItemStats::Buff {
                buff_power: 0,
                defense_boost: item::PRIEST_DEFENSE_BOOST
                    .clamp(item::PRIEST_DEFENSE_MIN, item::PRIEST_DEFENSE_MAX),
                duration_secs: item::BUFF_DURATION_SECS,
            };
            (ItemType::Buff, stats, item::SUFFIX_SHIELD)
        }
    };

    ItemBlueprint {
        item_type,
        stats,
        name: format!("{}{suffix}", facts.food_name),
    }
}

fn clamped_stat_sum(base: i32, bonus: i32, min: i32, max: i32) -> i32 {
    base.saturating_add(bonus).clamp(min, max)
}
