// ABOUTME: Food analyzer turning nutrition facts into exactly one monster or item
// ABOUTME: Runs class determination, corruption scoring, polarity decision, and entity synthesis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! Food Analyzer
//!
//! Classification runs as a fixed pipeline:
//!
//! 1. **Class**: which macro-nutrient dominates the food's identity
//! 2. **Corruption**: how unhealthy it is, plus the fast-food flag
//! 3. **Polarity**: corrupted food spawns a monster, pure food yields an item
//! 4. **Synthesis**: stats, tier or rarity, and display name
//!
//! Classification never fails. Callers that cannot vouch for their input use
//! [`FoodAnalyzer::classify_checked`], which validates first.
//!
//! # Example
//!
//! ```rust,no_run
//! use calorie_hunter::intelligence::FoodAnalyzer;
//! use calorie_hunter::models::NutritionFacts;
//!
//! let analyzer = FoodAnalyzer::new();
//! let chicken = NutritionFacts::builder("닭가슴살")
//!     .calories(165.0)
//!     .protein(31.0)
//!     .fat(3.6)
//!     .build();
//! let result = analyzer.classify(&chicken, "player-1");
//! assert!(!result.is_monster());
//! ```

use std::fmt;
use std::sync::Arc;

use hunter_core::constants::time::MILLIS_PER_HOUR;
use hunter_core::errors::AppResult;
use hunter_core::models::{
    ClassificationOutcome, ClassificationResult, FoodClass, Item, Monster, MonsterStatus,
    NutritionFacts,
};
use rayon::prelude::*;
use serde_json::json;
use tracing::debug;

use super::clock::{Clock, IdGenerator, SystemClock, UuidV4Generator};
use super::scoring::{
    class_scores, corruption_score, determine_class, is_fast_food, is_monster, item_rarity,
    monster_tier, purity_score,
};
use super::synthesis::{item_blueprint, monster_name, monster_stats};
use crate::config::AnalyzerConfig;

/// Classifies foods into monsters and items
///
/// Stateless apart from its collaborators; share one instance across threads.
#[derive(Clone)]
pub struct FoodAnalyzer {
    config: AnalyzerConfig,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl fmt::Debug for FoodAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoodAnalyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for FoodAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodAnalyzer {
    /// Analyzer using the global configuration, wall clock, and v4 UUIDs
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::global().clone())
    }

    /// Analyzer using an explicit configuration
    #[must_use]
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidV4Generator),
        }
    }

    /// Replace the time source
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the identifier source
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Classify one food for `owner_id`
    ///
    /// Total over finite, non-negative input. Returns exactly one monster or
    /// item plus the intermediate scores.
    #[must_use]
    pub fn classify(&self, facts: &NutritionFacts, owner_id: &str) -> ClassificationResult {
        let scores = class_scores(facts, &self.config.class_weights);
        let food_class = determine_class(&scores);

        let corruption = corruption_score(facts, &self.config.corruption_weights);
        let fast_food = is_fast_food(facts, &self.config.polarity);
        let corrupted = is_monster(corruption, fast_food, &self.config.polarity);

        debug!(
            food = %facts.food_name,
            class = ?food_class,
            corruption,
            fast_food,
            outcome = if corrupted { "monster" } else { "item" },
            "Food classified"
        );

        let (outcome, purity) = if corrupted {
            let monster = self.spawn_monster(facts, owner_id, food_class, corruption);
            (ClassificationOutcome::Monster(monster), None)
        } else {
            let purity = purity_score(facts, corruption);
            let item = self.forge_item(facts, owner_id, food_class, purity);
            (ClassificationOutcome::Item(item), Some(purity))
        };

        ClassificationResult {
            outcome,
            food_class,
            class_scores: scores,
            corruption_score: corruption,
            is_fast_food: fast_food,
            purity_score: purity,
        }
    }

    /// Validate `facts`, then classify
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` or `ValueOutOfRange` when the facts break the
    /// analyzer's input contract (empty name, NaN, infinite or negative values).
    pub fn classify_checked(
        &self,
        facts: &NutritionFacts,
        owner_id: &str,
    ) -> AppResult<ClassificationResult> {
        facts
            .validate()
            .map_err(|e| e.with_owner_id(owner_id))?;
        Ok(self.classify(facts, owner_id))
    }

    /// Classify many foods in parallel, preserving input order
    #[must_use]
    pub fn classify_batch(
        &self,
        foods: &[NutritionFacts],
        owner_id: &str,
    ) -> Vec<ClassificationResult> {
        foods
            .par_iter()
            .map(|facts| self.classify(facts, owner_id))
            .collect()
    }

    /// Validate every food, then classify them all in parallel
    ///
    /// # Errors
    ///
    /// Returns the validation error of the first invalid food, tagged with its
    /// position in `foods`. Nothing is classified in that case.
    pub fn classify_batch_checked(
        &self,
        foods: &[NutritionFacts],
        owner_id: &str,
    ) -> AppResult<Vec<ClassificationResult>> {
        for (index, facts) in foods.iter().enumerate() {
            facts.validate().map_err(|mut e| {
                if let Some(details) = e.context.details.as_object_mut() {
                    details.insert("index".to_owned(), json!(index));
                }
                e.with_owner_id(owner_id)
            })?;
        }
        Ok(self.classify_batch(foods, owner_id))
    }

    fn spawn_monster(
        &self,
        facts: &NutritionFacts,
        owner_id: &str,
        food_class: FoodClass,
        corruption: f64,
    ) -> Monster {
        let tier = monster_tier(corruption, &self.config.monster_tiers);
        let stats = monster_stats(facts, food_class, corruption);
        let created_at = self.clock.now_millis();
        let lifetime_ms = self
            .config
            .monster_lifetime
            .hours
            .saturating_mul(MILLIS_PER_HOUR);

        Monster {
            id: self.ids.next_id(),
            owner_id: owner_id.to_owned(),
            name: monster_name(&facts.food_name, food_class, tier),
            food_name: facts.food_name.clone(),
            barcode: facts.barcode.clone(),
            hp: stats.max_hp,
            max_hp: stats.max_hp,
            attack: stats.attack,
            defense: stats.defense,
            poison_damage: stats.poison_damage,
            element: food_class.element(),
            tier,
            status: MonsterStatus::Active,
            created_at,
            expires_at: created_at.saturating_add(lifetime_ms),
            original_sugar: facts.sugar,
            original_sodium: facts.sodium,
            original_sat_fat: facts.saturated_fat,
            original_trans_fat: facts.trans_fat,
            original_calories: facts.calories,
        }
    }

    fn forge_item(
        &self,
        facts: &NutritionFacts,
        owner_id: &str,
        food_class: FoodClass,
        purity: f64,
    ) -> Item {
        let blueprint = item_blueprint(facts, food_class);

        Item {
            id: self.ids.next_id(),
            owner_id: owner_id.to_owned(),
            name: blueprint.name,
            item_type: blueprint.item_type,
            food_name: facts.food_name.clone(),
            barcode: facts.barcode.clone(),
            rarity: item_rarity(purity, &self.config.item_rarity),
            quantity: 1,
            obtained_at: self.clock.now_millis(),
            stats: blueprint.stats,
        }
    }
}
