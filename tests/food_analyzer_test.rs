// ABOUTME: Integration tests for the food analyzer classification pipeline
// ABOUTME: Covers reference foods, polarity boundaries, naming, stat ranges, and batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter
//! Food analyzer tests
//!
//! Reference foods pin exact stats; the sweep at the end checks the range
//! and consistency invariants over a few thousand generated inputs.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;

use calorie_hunter::{
    config::AnalyzerConfig,
    errors::ErrorCode,
    intelligence::{class_scores, corruption_score, determine_class},
    models::{
        ClassificationOutcome, ClassificationResult, Element, FoodClass, ItemRarity, ItemStats,
        ItemType, MonsterStatus, MonsterTier, NutritionFacts,
    },
};

mod common;

use common::{FIXED_NOW_MS, OWNER};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

// ============================================================================
// REFERENCE FOODS
// ============================================================================

#[test]
fn test_chicken_breast_forges_legendary_sword() {
    let result = common::test_analyzer().classify(&common::chicken_breast(), OWNER);

    assert_eq!(result.food_class, FoodClass::Warrior);
    assert!((result.class_scores.protein - 31.0).abs() < f64::EPSILON);
    assert!((result.class_scores.fat - 7.2).abs() < 1e-9);
    assert!(result.corruption_score.abs() < f64::EPSILON);
    assert!(!result.is_fast_food);
    assert!((result.purity_score.unwrap() - 62.0).abs() < 1e-9);

    let item = result.item().expect("chicken breast should be an item");
    assert_eq!(item.item_type, ItemType::Weapon);
    assert_eq!(item.name, "닭가슴살 소드");
    assert_eq!(item.rarity, ItemRarity::Legendary);
    assert_eq!(item.owner_id, OWNER);
    assert_eq!(item.barcode.as_deref(), Some("8801234567890"));
    assert_eq!(item.obtained_at, FIXED_NOW_MS);
    assert_eq!(item.quantity, 1);
    assert_eq!(
        item.stats,
        ItemStats::Weapon {
            attack_power: 78,
            durability: 25,
            max_durability: 25,
        }
    );
}

#[test]
fn test_cola_spawns_corrupted_priest() {
    let result = common::test_analyzer().classify(&common::cola(), OWNER);

    assert!((result.corruption_score - 39.45).abs() < 1e-9);
    assert!(!result.is_fast_food);
    assert_eq!(result.food_class, FoodClass::Priest);
    assert!(result.purity_score.is_none());

    let monster = result.monster().expect("cola should be a monster");
    assert_eq!(monster.element, Element::Toxic);
    assert_eq!(monster.tier, MonsterTier::Rare);
    assert_eq!(monster.name, "부패한 콜라 사제");
    assert_eq!(monster.max_hp, 122);
    assert_eq!(monster.hp, 122);
    assert_eq!(monster.attack, 59);
    assert_eq!(monster.defense, 1);
    assert_eq!(monster.poison_damage, 20);
    assert_eq!(monster.status, MonsterStatus::Active);
    assert_eq!(monster.created_at, FIXED_NOW_MS);
    assert_eq!(monster.expires_at, FIXED_NOW_MS + DAY_MS);
    assert!((monster.original_sugar - 39.0).abs() < f64::EPSILON);
    assert!((monster.original_sodium - 45.0).abs() < f64::EPSILON);
    assert!((monster.original_calories - 140.0).abs() < f64::EPSILON);
}

#[test]
fn test_fried_chicken_spawns_epic_berserker() {
    let result = common::test_analyzer().classify(&common::fried_chicken(), OWNER);

    assert!((result.corruption_score - 75.0).abs() < 1e-9);
    assert!(result.is_fast_food);
    assert_eq!(result.food_class, FoodClass::Berserker);

    let monster = result.monster().unwrap();
    assert_eq!(monster.tier, MonsterTier::Epic);
    assert_eq!(monster.element, Element::Greasy);
    assert_eq!(monster.name, "분노한 후라이드치킨 광전사");
    // round(225) + round(12)
    assert_eq!(monster.max_hp, 237);
    // round(112.5) + round(30) clamps to 80
    assert_eq!(monster.attack, 80);
    assert_eq!(monster.defense, 0);
    assert_eq!(monster.poison_damage, 0);
    assert!((monster.original_trans_fat - 1.5).abs() < f64::EPSILON);
    assert!((monster.original_sat_fat - 15.0).abs() < f64::EPSILON);
}

#[test]
fn test_instant_ramen_spawns_rare_mage() {
    let result = common::test_analyzer().classify(&common::instant_ramen(), OWNER);

    assert!((result.corruption_score - 46.0).abs() < 1e-9);
    assert_eq!(result.food_class, FoodClass::Mage);

    let monster = result.monster().unwrap();
    assert_eq!(monster.tier, MonsterTier::Rare);
    assert_eq!(monster.element, Element::Chaos);
    assert_eq!(monster.name, "거대한 라면 마법사");
    assert_eq!(monster.max_hp, 153);
    assert_eq!(monster.attack, 69);
    assert_eq!(monster.defense, 27);
    assert_eq!(monster.poison_damage, 1);
}

#[test]
fn test_brown_rice_forges_energy_buff() {
    let result = common::test_analyzer().classify(&common::brown_rice(), OWNER);

    assert_eq!(result.food_class, FoodClass::Mage);
    let item = result.item().unwrap();
    assert_eq!(item.item_type, ItemType::Buff);
    assert_eq!(item.name, "현미밥 에너지");
    assert_eq!(item.rarity, ItemRarity::Legendary);
    assert_eq!(
        item.stats,
        ItemStats::Buff {
            buff_power: 80,
            defense_boost: 0,
            duration_secs: 30,
        }
    );
}

#[test]
fn test_almonds_forge_axe_despite_saturated_fat() {
    let result = common::test_analyzer().classify(&common::almonds(), OWNER);

    // Saturated fat passes 3 g but protein offsets it
    assert!(!result.is_fast_food);
    assert_eq!(result.food_class, FoodClass::Berserker);

    let item = result.item().unwrap();
    assert_eq!(item.name, "아몬드 도끼");
    assert_eq!(item.attack_power(), 120);
    assert_eq!(
        item.stats,
        ItemStats::Weapon {
            attack_power: 120,
            durability: 8,
            max_durability: 8,
        }
    );
}

#[test]
fn test_broccoli_forges_potion() {
    let result = common::test_analyzer().classify(&common::broccoli(), OWNER);

    assert_eq!(result.food_class, FoodClass::Priest);
    let item = result.item().unwrap();
    assert_eq!(item.item_type, ItemType::Potion);
    assert_eq!(item.name, "브로콜리 포션");
    assert_eq!(item.heal_amount(), 26);
    assert_eq!(item.rarity, ItemRarity::Common);
}

#[test]
fn test_water_forges_constant_shield() {
    let result = common::test_analyzer().classify(&common::water(), OWNER);

    assert_eq!(result.food_class, FoodClass::Priest);
    assert!(result.purity_score.unwrap().abs() < f64::EPSILON);

    let item = result.item().unwrap();
    assert_eq!(item.name, "물 방패");
    assert_eq!(item.rarity, ItemRarity::Common);
    assert_eq!(
        item.stats,
        ItemStats::Buff {
            buff_power: 0,
            defense_boost: 30,
            duration_secs: 30,
        }
    );
}

// ============================================================================
// POLARITY BOUNDARIES
// ============================================================================

#[test]
fn test_corruption_exactly_at_threshold_is_item() {
    let candy = NutritionFacts::builder("사탕").sugar(20.0).build();
    let result = common::test_analyzer().classify(&candy, OWNER);

    assert!((result.corruption_score - 20.0).abs() < f64::EPSILON);
    assert!(!result.is_fast_food);
    assert!(!result.is_monster());
}

#[test]
fn test_corruption_just_above_threshold_is_monster() {
    let candy = NutritionFacts::builder("사탕").sugar(20.0001).build();
    let result = common::test_analyzer().classify(&candy, OWNER);

    assert!(!result.is_fast_food);
    assert!(result.is_monster());
}

#[test]
fn test_fast_food_overrides_low_corruption() {
    let nuggets = NutritionFacts::builder("너겟")
        .saturated_fat(3.0)
        .protein(5.9)
        .build();
    let result = common::test_analyzer().classify(&nuggets, OWNER);

    assert!((result.corruption_score - 9.0).abs() < 1e-9);
    assert!(result.is_fast_food);
    assert!(result.is_monster());
}

#[test]
fn test_protein_ratio_at_two_is_not_fast_food() {
    let steak = NutritionFacts::builder("스테이크")
        .saturated_fat(3.0)
        .protein(6.0)
        .build();
    let result = common::test_analyzer().classify(&steak, OWNER);

    assert!(!result.is_fast_food);
    assert!(!result.is_monster());
}

#[test]
fn test_zero_saturated_fat_never_divides() {
    let facts = NutritionFacts::builder("zero").protein(10.0).build();
    let result = common::test_analyzer().classify(&facts, OWNER);
    assert!(!result.is_fast_food);
}

// ============================================================================
// CLASS DETERMINATION
// ============================================================================

#[test]
fn test_fiber_wins_tie_with_protein() {
    // fiber 2 x 3 == protein 6
    let facts = NutritionFacts::builder("tie").protein(6.0).fiber(2.0).build();
    let result = common::test_analyzer().classify(&facts, OWNER);
    assert_eq!(result.food_class, FoodClass::Priest);
}

#[test]
fn test_protein_wins_tie_with_fat() {
    let facts = NutritionFacts::builder("tie").protein(10.0).fat(5.0).build();
    let result = common::test_analyzer().classify(&facts, OWNER);
    assert_eq!(result.food_class, FoodClass::Warrior);
}

#[test]
fn test_carbs_win_tie_with_fat() {
    let facts = NutritionFacts::builder("tie")
        .carbohydrates(8.0)
        .fat(4.0)
        .build();
    let result = common::test_analyzer().classify(&facts, OWNER);
    assert_eq!(result.food_class, FoodClass::Mage);
}

#[test]
fn test_sugar_above_carbohydrates_is_tolerated() {
    let facts = NutritionFacts::builder("syrup")
        .carbohydrates(5.0)
        .sugar(8.0)
        .build();
    let scores = class_scores(&facts, &AnalyzerConfig::canonical().class_weights);

    assert!(scores.carbs.abs() < f64::EPSILON);
    assert_eq!(determine_class(&scores), FoodClass::Priest);
}

// ============================================================================
// MONSTER NAMING
// ============================================================================

fn candy_monster_name(sugar: f64) -> String {
    let candy = NutritionFacts::builder("사탕").sugar(sugar).build();
    let result = common::test_analyzer().classify(&candy, OWNER);
    result.monster().unwrap().name.clone()
}

#[test]
fn test_priest_names_by_tier() {
    assert_eq!(candy_monster_name(25.0), "부패한 사탕 사제");
    assert_eq!(candy_monster_name(35.0), "부패한 사탕 사제");
    assert_eq!(candy_monster_name(60.0), "분노한 사탕 사제");
    assert_eq!(candy_monster_name(90.0), "고대의 사탕 사제");
}

#[test]
fn test_common_tier_has_no_prefix() {
    let chips = NutritionFacts::builder("감자칩")
        .fat(35.0)
        .saturated_fat(4.0)
        .sodium(500.0)
        .build();
    let result = common::test_analyzer().classify(&chips, OWNER);
    let monster = result.monster().unwrap();

    // 12 + 5
    assert_eq!(monster.tier, MonsterTier::Common);
    assert_eq!(monster.name, "감자칩 광전사");
}

// ============================================================================
// SCORING PROPERTIES
// ============================================================================

#[test]
fn test_corruption_is_monotonic_in_trans_fat() {
    let weights = AnalyzerConfig::canonical().corruption_weights;
    let mut previous = f64::MIN;

    for step in 0..=100 {
        let facts = NutritionFacts::builder("test")
            .sugar(5.0)
            .sodium(300.0)
            .saturated_fat(2.0)
            .trans_fat(f64::from(step) * 0.1)
            .build();
        let corruption = corruption_score(&facts, &weights);
        assert!(corruption >= previous);
        previous = corruption;
    }
}

#[test]
fn test_scoring_is_idempotent() {
    let config = AnalyzerConfig::canonical();
    for facts in common::all_fixtures() {
        let first = class_scores(&facts, &config.class_weights);
        let second = class_scores(&facts, &config.class_weights);
        assert_eq!(first, second);
        assert_eq!(determine_class(&first), determine_class(&second));
        assert_eq!(
            corruption_score(&facts, &config.corruption_weights).to_bits(),
            corruption_score(&facts, &config.corruption_weights).to_bits()
        );
    }
}

#[test]
fn test_repeat_classification_differs_only_in_identity() {
    let analyzer = common::test_analyzer();
    let first = analyzer.classify(&common::cola(), OWNER);
    let second = analyzer.classify(&common::cola(), OWNER);

    let mut first_monster = first.monster().unwrap().clone();
    let second_monster = second.monster().unwrap();
    assert_ne!(first_monster.id, second_monster.id);

    first_monster.id.clone_from(&second_monster.id);
    assert_eq!(&first_monster, second_monster);
}

/// Tiny linear congruential generator for reproducible sweeps
struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn next_in(&mut self, max: f64) -> f64 {
        // A quarter of draws are exactly zero to exercise the defaults
        let unit = self.next_unit();
        if unit < 0.25 {
            0.0
        } else {
            self.next_unit() * max
        }
    }
}

fn assert_invariants(facts: &NutritionFacts, result: &ClassificationResult) {
    let expected_monster = result.corruption_score > 20.0 || result.is_fast_food;
    assert_eq!(result.is_monster(), expected_monster, "{facts:?}");
    assert!(result.corruption_score >= 0.0);

    match &result.outcome {
        ClassificationOutcome::Monster(monster) => {
            assert!((30..=500).contains(&monster.max_hp), "{monster:?}");
            assert_eq!(monster.hp, monster.max_hp);
            assert!((5..=80).contains(&monster.attack), "{monster:?}");
            assert!((0..=50).contains(&monster.defense), "{monster:?}");
            assert!(monster.poison_damage >= 0);
            assert_eq!(monster.element, result.food_class.element());
            assert_eq!(monster.expires_at - monster.created_at, DAY_MS);
            assert!(monster.name.contains(&facts.food_name));
            assert!(result.purity_score.is_none());
        }
        ClassificationOutcome::Item(item) => {
            assert_eq!(item.quantity, 1);
            assert!(result.purity_score.unwrap() >= 0.0);
            match item.stats {
                ItemStats::Weapon {
                    attack_power,
                    durability,
                    max_durability,
                } => {
                    assert!((15..=120).contains(&attack_power));
                    assert!((8..=30).contains(&durability));
                    assert_eq!(durability, max_durability);
                }
                ItemStats::Potion { heal_amount } => {
                    assert!((15..=80).contains(&heal_amount));
                }
                ItemStats::Buff {
                    buff_power,
                    defense_boost,
                    duration_secs,
                } => {
                    assert!(buff_power == 0 || (20..=80).contains(&buff_power));
                    assert!(defense_boost == 0 || defense_boost == 30);
                    assert_eq!(duration_secs, 30);
                }
            }
        }
    }
}

#[test]
fn test_generated_inputs_respect_invariants() {
    let analyzer = common::test_analyzer();
    let mut rng = Lcg(42);

    for i in 0..2_000 {
        let facts = NutritionFacts::builder(format!("food-{i}"))
            .calories(rng.next_in(900.0))
            .protein(rng.next_in(60.0))
            .fat(rng.next_in(60.0))
            .saturated_fat(rng.next_in(25.0))
            .trans_fat(rng.next_in(4.0))
            .carbohydrates(rng.next_in(100.0))
            .sugar(rng.next_in(70.0))
            .fiber(rng.next_in(20.0))
            .sodium(rng.next_in(3_000.0))
            .build();

        let result = analyzer.classify(&facts, OWNER);
        assert_invariants(&facts, &result);
    }
}

// ============================================================================
// CHECKED AND BATCH CLASSIFICATION
// ============================================================================

#[test]
fn test_classify_checked_accepts_valid_input() {
    let result = common::test_analyzer()
        .classify_checked(&common::chicken_breast(), OWNER)
        .unwrap();
    assert!(!result.is_monster());
}

#[test]
fn test_classify_checked_rejects_nan() {
    let facts = NutritionFacts::builder("nan").sodium(f64::NAN).build();
    let err = common::test_analyzer()
        .classify_checked(&facts, OWNER)
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.context.owner_id.as_deref(), Some(OWNER));
}

#[test]
fn test_classify_checked_rejects_empty_name() {
    let facts = NutritionFacts::builder("  ").protein(3.0).build();
    let err = common::test_analyzer()
        .classify_checked(&facts, OWNER)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_batch_preserves_order() {
    let analyzer = common::test_analyzer();
    let foods = common::all_fixtures();
    let batch = analyzer.classify_batch(&foods, OWNER);

    assert_eq!(batch.len(), foods.len());
    for (facts, result) in foods.iter().zip(&batch) {
        let single = analyzer.classify(facts, OWNER);
        assert_eq!(result.food_class, single.food_class);
        assert_eq!(result.is_monster(), single.is_monster());
        assert_eq!(
            result.corruption_score.to_bits(),
            single.corruption_score.to_bits()
        );
    }

    let ids: HashSet<String> = batch
        .iter()
        .map(|r| match &r.outcome {
            ClassificationOutcome::Monster(m) => m.id.clone(),
            ClassificationOutcome::Item(i) => i.id.clone(),
        })
        .collect();
    assert_eq!(ids.len(), foods.len());
}

#[test]
fn test_batch_checked_reports_failing_index() {
    let mut foods = common::all_fixtures();
    foods[2].fiber = -1.0;

    let err = common::test_analyzer()
        .classify_batch_checked(&foods, OWNER)
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.context.details["index"], 2);
    assert_eq!(err.context.details["field"], "fiber");
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_custom_threshold_changes_polarity() {
    let mut config = AnalyzerConfig::canonical();
    config.polarity.corruption_threshold = 50.0;

    let result = common::test_analyzer_with_config(config).classify(&common::cola(), OWNER);
    assert!(!result.is_monster());
}

#[test]
fn test_custom_lifetime_changes_expiry() {
    let mut config = AnalyzerConfig::canonical();
    config.monster_lifetime.hours = 2;

    let result = common::test_analyzer_with_config(config).classify(&common::cola(), OWNER);
    let monster = result.monster().unwrap();
    assert_eq!(monster.expires_at - monster.created_at, 2 * 60 * 60 * 1000);
}

// ============================================================================
// WIRE FORMAT
// ============================================================================

#[test]
fn test_result_json_shape() {
    let result = common::test_analyzer().classify(&common::cola(), OWNER);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["outcome"]["type"], "MONSTER");
    assert_eq!(value["outcome"]["entity"]["maxHp"], 122);
    assert_eq!(value["outcome"]["entity"]["element"], "toxic");
    assert_eq!(value["outcome"]["entity"]["tier"], "rare");
    assert_eq!(value["outcome"]["entity"]["status"], "active");
    assert_eq!(value["foodClass"], "priest");
    assert_eq!(value["isFastFood"], false);
    assert!(value.get("purityScore").is_none());

    let parsed: ClassificationResult = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn test_item_json_shape() {
    let result = common::test_analyzer().classify(&common::chicken_breast(), OWNER);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["outcome"]["type"], "ITEM");
    assert_eq!(value["outcome"]["entity"]["type"], "WEAPON");
    assert_eq!(value["outcome"]["entity"]["rarity"], "legendary");
    assert_eq!(value["outcome"]["entity"]["stats"]["kind"], "weapon");
    assert_eq!(value["outcome"]["entity"]["stats"]["attackPower"], 78);
}
