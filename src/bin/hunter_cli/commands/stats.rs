// ABOUTME: Stats command for hunter-cli
// ABOUTME: Aggregates a nutrition log into totals, health grade, and a daily breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

use std::path::Path;

use calorie_hunter::{
    intelligence::{daily_breakdown, Nutrient, NutritionStats},
    io::load_json,
    models::NutritionRecord,
};
use chrono::{NaiveDate, Utc};
use serde_json::{json, Map, Value};
use tracing::info;

use crate::helpers::display::print_json;
use crate::Result;

/// Print aggregate and per-day statistics for the records in `file`
pub fn run(file: &Path, today: Option<NaiveDate>, days: u32, pretty: bool) -> Result<()> {
    let records: Vec<NutritionRecord> = load_json(file)?;
    info!("Loaded {} record(s) from {}", records.len(), file.display());

    let today = today.unwrap_or_else(|| Utc::now().date_naive());
    let overall = NutritionStats::from_records(&records);

    let daily: Vec<Value> = daily_breakdown(&records, today, days)
        .iter()
        .map(|(date, stats)| {
            let mut entry = stats_json(stats);
            if let Value::Object(fields) = &mut entry {
                fields.insert("date".to_owned(), json!(date));
            }
            entry
        })
        .collect();

    let report = json!({
        "overall": stats_json(&overall),
        "daily": daily,
    });

    print_json(&report, pretty)
}

fn stats_json(stats: &NutritionStats) -> Value {
    let grade = stats.health_grade();
    let percents: Map<String, Value> = Nutrient::ALL
        .iter()
        .map(|nutrient| {
            let key = serde_json::to_value(nutrient)
                .ok()
                .and_then(|v| v.as_str().map(str::to_owned))
                .unwrap_or_default();
            (key, json!(stats.daily_value_percent(*nutrient)))
        })
        .collect();

    json!({
        "totals": stats,
        "healthScore": stats.health_score(),
        "healthGrade": grade.as_str(),
        "healthGradeColor": grade.color_hex(),
        "dailyValuePercent": percents,
    })
}
