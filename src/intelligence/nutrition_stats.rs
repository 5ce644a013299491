// ABOUTME: Aggregated nutrition statistics over a player's food log
// ABOUTME: Totals, health score and grade, daily-value percentages, and per-day breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! Nutrition Statistics
//!
//! Reference daily values follow the Korean MFDS labeling standard
//! (2000 kcal, 55 g protein, 324 g carbohydrate, 54 g fat, 50 g sugar,
//! 2000 mg sodium, 25 g fiber).
//!
//! The health score (0 - 100) is half food choice and half nutrient balance:
//!
//! - healthy-food share x 50 (truncated)
//! - protein within 80 - 150 % of the daily value: 10 (5 if at least 50 %)
//! - sugar and sodium at most 50 / 80 / 100 %: 15 / 10 / 5 each
//! - fiber at least 100 / 70 / 40 %: 10 / 7 / 4

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use hunter_core::constants::{colors, daily_values};
use hunter_core::models::NutritionRecord;
use serde::{Deserialize, Serialize};

/// Nutrients with a reference daily value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrate (g)
    Carbohydrate,
    /// Fat (g)
    Fat,
    /// Sugars (g)
    Sugar,
    /// Sodium (mg)
    Sodium,
    /// Fiber (g)
    Fiber,
}

impl Nutrient {
    /// All nutrients in display order
    pub const ALL: [Self; 7] = [
        Self::Calories,
        Self::Protein,
        Self::Carbohydrate,
        Self::Fat,
        Self::Sugar,
        Self::Sodium,
        Self::Fiber,
    ];

    /// Reference daily value
    #[must_use]
    pub const fn daily_value(self) -> f64 {
        match self {
            Self::Calories => daily_values::CALORIES,
            Self::Protein => daily_values::PROTEIN,
            Self::Carbohydrate => daily_values::CARBOHYDRATE,
            Self::Fat => daily_values::FAT,
            Self::Sugar => daily_values::SUGAR,
            Self::Sodium => daily_values::SODIUM,
            Self::Fiber => daily_values::FIBER,
        }
    }
}

/// Letter grade for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthGrade {
    /// Score 80 or more
    A,
    /// Score 60 - 79
    B,
    /// Score 40 - 59
    C,
    /// Score 20 - 39
    D,
    /// Score below 20
    F,
}

impl HealthGrade {
    /// Grade for a 0 - 100 score
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::A,
            60..=79 => Self::B,
            40..=59 => Self::C,
            20..=39 => Self::D,
            _ => Self::F,
        }
    }

    /// Badge color
    #[must_use]
    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::A => colors::GRADE_A,
            Self::B => colors::GRADE_B,
            Self::C => colors::GRADE_C,
            Self::D => colors::GRADE_D,
            Self::F => colors::GRADE_F,
        }
    }

    /// Letter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

/// Running totals over a set of nutrition records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionStats {
    /// Total energy (kcal)
    pub total_calories: f64,
    /// Total protein (g)
    pub total_protein: f64,
    /// Total carbohydrate (g)
    pub total_carbohydrate: f64,
    /// Total fat (g)
    pub total_fat: f64,
    /// Total sugars (g)
    pub total_sugar: f64,
    /// Total sodium (mg)
    pub total_sodium: f64,
    /// Total fiber (g)
    pub total_fiber: f64,
    /// Foods that became items
    pub healthy_count: u32,
    /// Foods that spawned monsters
    pub unhealthy_count: u32,
    /// All foods
    pub total_count: u32,
}

impl NutritionStats {
    /// Aggregate a slice of records
    #[must_use]
    pub fn from_records(records: &[NutritionRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.add_record(record);
        }
        stats
    }

    /// Fold one record into the totals
    pub fn add_record(&mut self, record: &NutritionRecord) {
        self.total_calories += record.calories;
        self.total_protein += record.protein;
        self.total_carbohydrate += record.carbohydrate;
        self.total_fat += record.fat;
        self.total_sugar += record.sugar;
        self.total_sodium += record.sodium;
        self.total_fiber += record.fiber;

        if record.is_healthy {
            self.healthy_count += 1;
        } else {
            self.unhealthy_count += 1;
        }
        self.total_count += 1;
    }

    /// Clear every total
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total for one nutrient
    #[must_use]
    pub const fn total(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.total_calories,
            Nutrient::Protein => self.total_protein,
            Nutrient::Carbohydrate => self.total_carbohydrate,
            Nutrient::Fat => self.total_fat,
            Nutrient::Sugar => self.total_sugar,
            Nutrient::Sodium => self.total_sodium,
            Nutrient::Fiber => self.total_fiber,
        }
    }

    /// Percent of the reference daily value, truncated
    #[must_use]
    pub fn daily_value_percent(&self, nutrient: Nutrient) -> u32 {
        let percent = self.ratio(nutrient) * 100.0;
        // Truncates toward zero; the cast saturates
        percent as u32
    }

    /// Health score 0 - 100; zero with no records
    #[must_use]
    pub fn health_score(&self) -> u32 {
        if self.total_count == 0 {
            return 0;
        }

        let healthy_ratio = f64::from(self.healthy_count) / f64::from(self.total_count);
        let choice_score = (healthy_ratio * 50.0) as u32;

        let balance_score = protein_points(self.ratio(Nutrient::Protein))
            + limit_points(self.ratio(Nutrient::Sugar))
            + limit_points(self.ratio(Nutrient::Sodium))
            + fiber_points(self.ratio(Nutrient::Fiber));

        (choice_score + balance_score).min(100)
    }

    /// Letter grade of the health score
    #[must_use]
    pub fn health_grade(&self) -> HealthGrade {
        HealthGrade::from_score(self.health_score())
    }

    fn ratio(&self, nutrient: Nutrient) -> f64 {
        self.total(nutrient) / nutrient.daily_value()
    }
}

fn protein_points(ratio: f64) -> u32 {
    if (0.8..=1.5).contains(&ratio) {
        10
    } else if ratio >= 0.5 {
        5
    } else {
        0
    }
}

/// Sugar and sodium: less is better
fn limit_points(ratio: f64) -> u32 {
    if ratio <= 0.5 {
        15
    } else if ratio <= 0.8 {
        10
    } else if ratio <= 1.0 {
        5
    } else {
        0
    }
}

fn fiber_points(ratio: f64) -> u32 {
    if ratio >= 1.0 {
        10
    } else if ratio >= 0.7 {
        7
    } else if ratio >= 0.4 {
        4
    } else {
        0
    }
}

/// Stats for each of the last `days` dates ending at `today`
///
/// Every date in the window is present, even with no records. Records dated
/// outside the window are ignored.
#[must_use]
pub fn daily_breakdown(
    records: &[NutritionRecord],
    today: NaiveDate,
    days: u32,
) -> BTreeMap<NaiveDate, NutritionStats> {
    let mut daily: BTreeMap<NaiveDate, NutritionStats> = (0..u64::from(days))
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| (date, NutritionStats::default()))
        .collect();

    for record in records {
        if let Some(stats) = daily.get_mut(&record.date) {
            stats.add_record(record);
        }
    }

    daily
}
