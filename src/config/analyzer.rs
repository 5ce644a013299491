// ABOUTME: Food analyzer configuration with environment overrides and validation
// ABOUTME: Class weights, corruption weights, polarity cutoffs, tier/rarity thresholds, lifetime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! Food Analyzer Configuration
//!
//! Defaults reproduce the canonical game balance exactly; environment
//! variables prefixed `HUNTER_` let operators tune it without a rebuild.

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use hunter_core::constants::{classification, item, monster};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;

/// Global configuration singleton
static ANALYZER_CONFIG: OnceLock<AnalyzerConfig> = OnceLock::new();

/// Food analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Stage 1 class identity weights
    pub class_weights: ClassWeightsConfig,
    /// Stage 2 corruption weights
    pub corruption_weights: CorruptionWeightsConfig,
    /// Stage 3 monster/item decision
    pub polarity: PolarityConfig,
    /// Monster tier cutoffs on the corruption score
    pub monster_tiers: TierThresholdsConfig,
    /// Item rarity cutoffs on the purity score
    pub item_rarity: TierThresholdsConfig,
    /// Monster lifetime
    pub monster_lifetime: MonsterLifetimeConfig,
}

/// Per-gram multipliers for the class identity scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassWeightsConfig {
    /// Warrior: protein (1.0)
    pub protein: f64,
    /// Mage: complex carbohydrates (1.0)
    pub carbs: f64,
    /// Berserker: fat (2.0)
    pub fat: f64,
    /// Priest: fiber (3.0)
    pub fiber: f64,
}

/// Weights of the "bad" nutrients in the corruption score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorruptionWeightsConfig {
    /// Per gram of sugar (1.0)
    pub sugar: f64,
    /// Per milligram of sodium (0.01)
    pub sodium: f64,
    /// Per gram of saturated fat (3.0)
    pub saturated_fat: f64,
    /// Per gram of trans fat (20.0)
    pub trans_fat: f64,
}

/// Monster/item decision parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarityConfig {
    /// Corruption strictly above this spawns a monster (20.0)
    pub corruption_threshold: f64,
    /// Saturated fat needed before the fast-food rule applies (3.0 g)
    pub fast_food_min_saturated_fat: f64,
    /// Protein/saturated-fat ratio below which food is fast food (2.0)
    pub fast_food_protein_ratio: f64,
}

/// Descending cutoffs for a four-step ladder (common below `rare`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierThresholdsConfig {
    /// Minimum score for the top step
    pub legendary: f64,
    /// Minimum score for the second step
    pub epic: f64,
    /// Minimum score for the third step
    pub rare: f64,
}

/// How long spawned monsters stay in the battle queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterLifetimeConfig {
    /// Hours until despawn (24)
    pub hours: i64,
}

impl Default for ClassWeightsConfig {
    fn default() -> Self {
        Self {
            protein: classification::PROTEIN_CLASS_WEIGHT,
            carbs: classification::CARBS_CLASS_WEIGHT,
            fat: classification::FAT_CLASS_WEIGHT,
            fiber: classification::FIBER_CLASS_WEIGHT,
        }
    }
}

impl Default for CorruptionWeightsConfig {
    fn default() -> Self {
        Self {
            sugar: classification::SUGAR_CORRUPTION_WEIGHT,
            sodium: classification::SODIUM_CORRUPTION_WEIGHT,
            saturated_fat: classification::SATURATED_FAT_CORRUPTION_WEIGHT,
            trans_fat: classification::TRANS_FAT_CORRUPTION_WEIGHT,
        }
    }
}

impl Default for PolarityConfig {
    fn default() -> Self {
        Self {
            corruption_threshold: classification::CORRUPTION_THRESHOLD,
            fast_food_min_saturated_fat: classification::FAST_FOOD_MIN_SATURATED_FAT,
            fast_food_protein_ratio: classification::FAST_FOOD_PROTEIN_RATIO,
        }
    }
}

impl TierThresholdsConfig {
    /// Monster tier defaults (80 / 50 / 30)
    #[must_use]
    pub const fn monster_defaults() -> Self {
        Self {
            legendary: monster::TIER_LEGENDARY_MIN,
            epic: monster::TIER_EPIC_MIN,
            rare: monster::TIER_RARE_MIN,
        }
    }

    /// Item rarity defaults (50 / 35 / 20)
    #[must_use]
    pub const fn rarity_defaults() -> Self {
        Self {
            legendary: item::RARITY_LEGENDARY_MIN,
            epic: item::RARITY_EPIC_MIN,
            rare: item::RARITY_RARE_MIN,
        }
    }

    /// Step index for `score`: 3 = legendary, 2 = epic, 1 = rare, 0 = common
    #[must_use]
    pub fn step(&self, score: f64) -> u8 {
        if score >= self.legendary {
            3
        } else if score >= self.epic {
            2
        } else if score >= self.rare {
            1
        } else {
            0
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if !(self.legendary > self.epic && self.epic > self.rare && self.rare > 0.0) {
            return Err(ConfigError::InvalidRange(name));
        }
        Ok(())
    }
}

impl Default for MonsterLifetimeConfig {
    fn default() -> Self {
        Self {
            hours: monster::LIFETIME_HOURS,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

impl AnalyzerConfig {
    /// Configuration with the canonical game balance
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            class_weights: ClassWeightsConfig::default(),
            corruption_weights: CorruptionWeightsConfig::default(),
            polarity: PolarityConfig::default(),
            monster_tiers: TierThresholdsConfig::monster_defaults(),
            item_rarity: TierThresholdsConfig::rarity_defaults(),
            monster_lifetime: MonsterLifetimeConfig::default(),
        }
    }

    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ANALYZER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analyzer config: {e}, using defaults");
                Self::canonical()
            })
        })
    }

    /// Load configuration from environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::canonical().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate weights, threshold ordering, and lifetime
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cw = &self.class_weights;
        let weights = [cw.protein, cw.carbs, cw.fat, cw.fiber];
        if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(ConfigError::InvalidWeights(
                "class weights must be positive and finite",
            ));
        }

        let rw = &self.corruption_weights;
        let weights = [rw.sugar, rw.sodium, rw.saturated_fat, rw.trans_fat];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "corruption weights must be non-negative and finite",
            ));
        }

        let threshold = self.polarity.corruption_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "corruption_threshold must be finite and >= 0",
            ));
        }
        let sat_fat_min = self.polarity.fast_food_min_saturated_fat;
        if !sat_fat_min.is_finite() || sat_fat_min <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fast_food_min_saturated_fat must be finite and > 0",
            ));
        }
        let protein_ratio = self.polarity.fast_food_protein_ratio;
        if !protein_ratio.is_finite() || protein_ratio <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fast_food_protein_ratio must be finite and > 0",
            ));
        }

        self.monster_tiers
            .validate("monster tiers must satisfy legendary > epic > rare > 0")?;
        self.item_rarity
            .validate("item rarity must satisfy legendary > epic > rare > 0")?;

        if self.monster_lifetime.hours <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "monster lifetime must be at least one hour",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Corruption weights
        Self::apply_env_var("HUNTER_SUGAR_WEIGHT", &mut self.corruption_weights.sugar)?;
        Self::apply_env_var("HUNTER_SODIUM_WEIGHT", &mut self.corruption_weights.sodium)?;
        Self::apply_env_var(
            "HUNTER_SATURATED_FAT_WEIGHT",
            &mut self.corruption_weights.saturated_fat,
        )?;
        Self::apply_env_var(
            "HUNTER_TRANS_FAT_WEIGHT",
            &mut self.corruption_weights.trans_fat,
        )?;

        // Polarity
        Self::apply_env_var(
            "HUNTER_CORRUPTION_THRESHOLD",
            &mut self.polarity.corruption_threshold,
        )?;
        Self::apply_env_var(
            "HUNTER_FAST_FOOD_SAT_FAT_MIN",
            &mut self.polarity.fast_food_min_saturated_fat,
        )?;
        Self::apply_env_var(
            "HUNTER_FAST_FOOD_PROTEIN_RATIO",
            &mut self.polarity.fast_food_protein_ratio,
        )?;

        // Tiers
        Self::apply_env_var(
            "HUNTER_TIER_LEGENDARY_MIN",
            &mut self.monster_tiers.legendary,
        )?;
        Self::apply_env_var("HUNTER_TIER_EPIC_MIN", &mut self.monster_tiers.epic)?;
        Self::apply_env_var("HUNTER_TIER_RARE_MIN", &mut self.monster_tiers.rare)?;

        Self::apply_env_var(
            "HUNTER_MONSTER_LIFETIME_HOURS",
            &mut self.monster_lifetime.hours,
        )?;

        Ok(self)
    }
}
