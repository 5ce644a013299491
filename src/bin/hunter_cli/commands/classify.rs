// ABOUTME: Classify command for hunter-cli
// ABOUTME: Loads nutrition facts, runs the food analyzer, and prints results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

use std::path::PathBuf;
use std::time::Instant;

use calorie_hunter::{
    errors::AppError,
    intelligence::FoodAnalyzer,
    io::load_facts,
    logging::GameLogger,
    models::{ClassificationResult, MonsterTier, NutritionFacts},
};
use serde_json::Value;
use tracing::info;

use crate::helpers::display::{display_result_card, print_json};
use crate::Result;

/// Arguments of `hunter-cli classify`
pub struct ClassifyArgs {
    pub file: PathBuf,
    pub owner: String,
    pub pretty: bool,
    pub summary: bool,
    pub validate: bool,
}

/// Classify every food in the file
pub fn run(args: &ClassifyArgs) -> Result<()> {
    let document = load_facts(&args.file)?;
    let batch = document.is_batch();
    let foods = document.into_foods();
    info!("Loaded {} food(s) from {}", foods.len(), args.file.display());

    let analyzer = FoodAnalyzer::new();
    let started = Instant::now();

    let results = if args.validate {
        analyzer
            .classify_batch_checked(&foods, &args.owner)
            .inspect_err(|e| log_rejection(&args.owner, &foods, e))?
    } else {
        analyzer.classify_batch(&foods, &args.owner)
    };

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    log_results(&args.owner, &results, duration_ms);

    if args.summary {
        for result in &results {
            display_result_card(result);
        }
        return Ok(());
    }

    // Single object in, single object out
    match results.as_slice() {
        [single] if !batch => print_json(single, args.pretty),
        _ => print_json(&results, args.pretty),
    }
}

fn log_results(owner: &str, results: &[ClassificationResult], duration_ms: u64) {
    for result in results {
        let food_name = result
            .monster()
            .map(|m| m.food_name.as_str())
            .or_else(|| result.item().map(|i| i.food_name.as_str()))
            .unwrap_or_default();
        GameLogger::log_classification(owner, food_name, result);

        if let Some(monster) = result.monster() {
            if monster.tier == MonsterTier::Legendary {
                GameLogger::log_legendary_spawn(monster);
            }
        }
    }

    let monsters = results.iter().filter(|r| r.is_monster()).count();
    GameLogger::log_batch_summary(owner, results.len(), monsters, duration_ms);
}

fn log_rejection(owner: &str, foods: &[NutritionFacts], error: &AppError) {
    let food_name = error
        .context
        .details
        .get("index")
        .and_then(Value::as_u64)
        .and_then(|index| foods.get(usize::try_from(index).ok()?))
        .map_or("<unknown>", |facts| facts.food_name.as_str());
    GameLogger::log_rejected_input(owner, food_name, &error.message);
}
