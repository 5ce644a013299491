// ABOUTME: Monster descriptor synthesized from corrupted (unhealthy) food
// ABOUTME: Monster, Element, MonsterTier, and MonsterStatus with expiry helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

use serde::{Deserialize, Serialize};

use crate::constants::{colors, monster};

/// Monster element, derived from the food class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// Protein-heavy (Warrior) monsters
    Rage,
    /// Carbohydrate-heavy (Mage) monsters
    Chaos,
    /// Fat-heavy (Berserker) monsters
    Greasy,
    /// Fiber or empty-calorie (Priest) monsters
    Toxic,
    /// Fallback for unrecognised stored elements
    #[default]
    Dark,
}

impl Element {
    /// Parse an element from its stored name; unknown names map to `Dark`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "rage" => Self::Rage,
            "chaos" => Self::Chaos,
            "greasy" => Self::Greasy,
            "toxic" => Self::Toxic,
            _ => Self::Dark,
        }
    }

    /// Stored name of the element
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rage => "rage",
            Self::Chaos => "chaos",
            Self::Greasy => "greasy",
            Self::Toxic => "toxic",
            Self::Dark => "dark",
        }
    }

    /// Badge emoji for the element
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Rage => "🔥",
            Self::Chaos => "🌀",
            Self::Greasy => "🛢️",
            Self::Toxic => "☠️",
            Self::Dark => "👾",
        }
    }
}

/// Monster strength tier, derived from the corruption score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MonsterTier {
    /// corruption < 30
    Common,
    /// 30 <= corruption < 50
    Rare,
    /// 50 <= corruption < 80
    Epic,
    /// corruption >= 80; requires a raid
    Legendary,
}

impl MonsterTier {
    /// Prefix prepended to the food name in the monster name
    #[must_use]
    pub const fn name_prefix(&self) -> &'static str {
        match self {
            Self::Legendary => monster::PREFIX_LEGENDARY,
            Self::Epic => monster::PREFIX_EPIC,
            Self::Rare => monster::PREFIX_RARE,
            Self::Common => "",
        }
    }

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

/// Lifecycle state of a spawned monster
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MonsterStatus {
    /// Waiting in the battle queue
    #[default]
    Active,
    /// Beaten by the player
    Defeated,
    /// Despawned after its lifetime elapsed
    Expired,
}

/// Monster spawned from unhealthy food
///
/// Timestamps are epoch milliseconds. The `original_*` fields echo the
/// nutrients that made the food corrupted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    /// Unique identifier
    pub id: String,
    /// Player that scanned the food
    pub owner_id: String,
    /// Display name, e.g. "분노한 콜라 사제"
    pub name: String,
    /// Source food name
    pub food_name: String,
    /// Source barcode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Current HP
    pub hp: i32,
    /// Maximum HP (30 - 500)
    pub max_hp: i32,
    /// Attack (5 - 80)
    pub attack: i32,
    /// Defense (0 - 50)
    pub defense: i32,
    /// Damage-over-time applied each turn
    pub poison_damage: i32,
    /// Element
    pub element: Element,
    /// Tier
    pub tier: MonsterTier,
    /// Lifecycle state
    pub status: MonsterStatus,
    /// Spawn time
    pub created_at: i64,
    /// Despawn time
    pub expires_at: i64,
    /// Sugar (g) of the source food
    pub original_sugar: f64,
    /// Sodium (mg) of the source food
    pub original_sodium: f64,
    /// Saturated fat (g) of the source food
    pub original_sat_fat: f64,
    /// Trans fat (g) of the source food
    pub original_trans_fat: f64,
    /// Calories of the source food
    pub original_calories: f64,
}

impl Monster {
    /// Whether the monster's lifetime has elapsed at `now_ms`
    #[must_use]
    pub const fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at
    }

    /// Effective status at `now_ms`: active monsters past their lifetime are expired
    #[must_use]
    pub const fn status_at(&self, now_ms: i64) -> MonsterStatus {
        match self.status {
            MonsterStatus::Active if self.is_expired_at(now_ms) => MonsterStatus::Expired,
            status => status,
        }
    }

    /// Milliseconds until despawn, zero once expired
    #[must_use]
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        (self.expires_at - now_ms).max(0)
    }
}
