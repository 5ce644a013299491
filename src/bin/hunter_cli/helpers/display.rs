// ABOUTME: Output formatting helpers for hunter-cli
// ABOUTME: JSON printing, error envelopes, and human-readable monster and item cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

use calorie_hunter::{
    errors::{AppError, ErrorResponse},
    models::{ClassificationOutcome, ClassificationResult, ItemStats},
};
use serde::Serialize;

use crate::Result;

/// Print `value` as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| AppError::serialization(format!("Failed to render output: {e}")))?;
    println!("{rendered}");
    Ok(())
}

/// Print `error` as an `ErrorResponse` JSON envelope on stderr
pub fn print_error(error: AppError) {
    let fallback = error.to_string();
    match serde_json::to_string(&ErrorResponse::from(error)) {
        Ok(rendered) => eprintln!("{rendered}"),
        Err(_) => eprintln!("{fallback}"),
    }
}

/// Display one classification as a short card
pub fn display_result_card(result: &ClassificationResult) {
    println!("{}", "=".repeat(50));
    match &result.outcome {
        ClassificationOutcome::Monster(monster) => {
            println!(
                "{} MONSTER: {} [{:?}]",
                monster.element.emoji(),
                monster.name,
                monster.tier
            );
            println!(
                "   HP {} | ATK {} | DEF {} | Poison {}",
                monster.max_hp, monster.attack, monster.defense, monster.poison_damage
            );
        }
        ClassificationOutcome::Item(item) => {
            println!(
                "{} ITEM: {} [{:?}]",
                item.item_type.emoji(),
                item.name,
                item.rarity
            );
            match item.stats {
                ItemStats::Weapon {
                    attack_power,
                    durability,
                    ..
                } => println!("   ATK +{attack_power} | Durability {durability}"),
                ItemStats::Potion { heal_amount } => println!("   Heal {heal_amount}"),
                ItemStats::Buff {
                    buff_power,
                    defense_boost,
                    duration_secs,
                } => println!(
                    "   Buff +{buff_power} | DEF +{defense_boost} | {duration_secs}s"
                ),
            }
        }
    }
    println!(
        "   Class {:?} | Corruption {:.2}{}",
        result.food_class,
        result.corruption_score,
        if result.is_fast_food { " | Fast food" } else { "" }
    );
}
