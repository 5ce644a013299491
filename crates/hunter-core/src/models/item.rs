// ABOUTME: Item descriptor synthesized from pure (healthy) food
// ABOUTME: Item, ItemType, ItemRarity, and type-specific ItemStats with durability helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

use serde::{Deserialize, Serialize};

use crate::constants::colors;

/// Kind of item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemType {
    /// Adds attack power; wears down with use
    Weapon,
    /// Restores HP
    Potion,
    /// Temporary stat boost
    Buff,
}

impl ItemType {
    /// Badge emoji for the item type
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Weapon => "⚔️",
            Self::Potion => "💚",
            Self::Buff => "⚡",
        }
    }
}

/// Item rarity, derived from the purity score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ItemRarity {
    /// purity < 20
    Common,
    /// 20 <= purity < 35
    Rare,
    /// 35 <= purity < 50
    Epic,
    /// purity >= 50
    Legendary,
}

impl ItemRarity {
    /// Badge color
    #[must_use]
    pub const fn color_hex(&self) -> &'static str {
        match self {
            Self::Legendary => colors::LEGENDARY,
            Self::Epic => colors::EPIC,
            Self::Rare => colors::RARE,
            Self::Common => colors::COMMON,
        }
    }
}

/// Type-specific item stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ItemStats {
    /// Weapon stats
    Weapon {
        /// Attack bonus
        attack_power: i32,
        /// Remaining uses
        durability: i32,
        /// Uses when new
        max_durability: i32,
    },
    /// Potion stats
    Potion {
        /// HP restored
        heal_amount: i32,
    },
    /// Buff stats
    Buff {
        /// Attack boost (Mage buffs)
        buff_power: i32,
        /// Defense boost (Priest shields)
        defense_boost: i32,
        /// Effect duration in seconds
        duration_secs: u32,
    },
}

/// Item obtained from healthy food
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier
    pub id: String,
    /// Player that scanned the food
    pub owner_id: String,
    /// Display name, e.g. "닭가슴살 소드"
    pub name: String,
    /// Item kind
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Source food name
    pub food_name: String,
    /// Source barcode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Rarity
    pub rarity: ItemRarity,
    /// Stack size
    pub quantity: u32,
    /// Time obtained (epoch milliseconds)
    pub obtained_at: i64,
    /// Type-specific stats
    pub stats: ItemStats,
}

impl Item {
    /// Weapon attack power, zero for other types
    #[must_use]
    pub const fn attack_power(&self) -> i32 {
        match self.stats {
            ItemStats::Weapon { attack_power, .. } => attack_power,
            _ => 0,
        }
    }

    /// Potion heal amount, zero for other types
    #[must_use]
    pub const fn heal_amount(&self) -> i32 {
        match self.stats {
            ItemStats::Potion { heal_amount } => heal_amount,
            _ => 0,
        }
    }

    /// Wear a weapon down by `amount`; returns true once it is broken
    ///
    /// Potions and buffs have no durability and never break.
    pub fn reduce_durability(&mut self, amount: i32) -> bool {
        match &mut self.stats {
            ItemStats::Weapon { durability, .. } => {
                *durability = (*durability - amount).max(0);
                *durability <= 0
            }
            ItemStats::Potion { .. } | ItemStats::Buff { .. } => false,
        }
    }

    /// Remaining durability as a truncated percentage
    #[must_use]
    pub fn durability_percent(&self) -> u32 {
        match self.stats {
            ItemStats::Weapon {
                durability,
                max_durability,
                ..
            } if max_durability > 0 => {
                (f64::from(durability) / f64::from(max_durability) * 100.0) as u32
            }
            _ => 100,
        }
    }
}
