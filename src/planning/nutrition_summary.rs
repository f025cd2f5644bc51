// ABOUTME: Daily and weekly nutrition totals derived from a meal plan
// ABOUTME: Per-day sums, rounded weekly averages, target progress and macro calorie split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use super::meal_plan::MealPlan;
use chrono::Weekday;
use cooksy_core::models::{MacroNutrition, MealType};
use serde::Serialize;

/// Daily intake targets
pub const DAILY_TARGETS: MacroNutrition = MacroNutrition::new(2000, 150, 250, 67, 25);

/// kcal per gram of protein
const PROTEIN_KCAL_PER_GRAM: u32 = 4;
/// kcal per gram of carbohydrate
const CARBS_KCAL_PER_GRAM: u32 = 4;
/// kcal per gram of fat
const FAT_KCAL_PER_GRAM: u32 = 9;

/// A meal contributing to a day's total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealEntry {
    /// Meal slot
    pub meal: MealType,
    /// Recipe title
    pub title: String,
    /// Recipe calories
    pub calories: u32,
}

/// Totals for one day of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyNutrition {
    /// The day
    pub day: Weekday,
    /// Summed nutrition of the day's meals
    pub totals: MacroNutrition,
    /// Meals in plan order
    pub meals: Vec<MealEntry>,
}

/// Share of calories from each macro, whole percentages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MacroSplit {
    /// Protein share
    pub protein_percent: u32,
    /// Carbohydrate share
    pub carbs_percent: u32,
    /// Fat share
    pub fat_percent: u32,
}

/// Nutrition overview of a meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionSummary {
    /// Days with at least one meal, in first-planned order
    pub days: Vec<DailyNutrition>,
    /// Rounded average across `days`; zero when the plan is empty
    pub weekly_average: MacroNutrition,
    /// Targets the averages are compared against
    pub targets: MacroNutrition,
}

impl NutritionSummary {
    /// Summarise a plan
    #[must_use]
    pub fn from_plan(plan: &MealPlan) -> Self {
        let mut days: Vec<DailyNutrition> = Vec::new();
        for planned in plan.meals() {
            let nutrition = planned.recipe.nutrition;
            let entry = MealEntry {
                meal: planned.meal,
                title: planned.recipe.title.clone(),
                calories: nutrition.calories,
            };
            match days.iter_mut().find(|d| d.day == planned.day) {
                Some(day) => {
                    day.totals = day.totals.plus(nutrition);
                    day.meals.push(entry);
                }
                None => days.push(DailyNutrition {
                    day: planned.day,
                    totals: nutrition,
                    meals: vec![entry],
                }),
            }
        }

        let weekly_average = average(&days);
        Self {
            days,
            weekly_average,
            targets: DAILY_TARGETS,
        }
    }

    /// Weekly average as a rounded percentage of each target
    #[must_use]
    pub fn target_progress(&self) -> MacroNutrition {
        let avg = self.weekly_average;
        let target = self.targets;
        MacroNutrition::new(
            percent(avg.calories, target.calories),
            percent(avg.protein, target.protein),
            percent(avg.carbs, target.carbs),
            percent(avg.fat, target.fat),
            percent(avg.fiber, target.fiber),
        )
    }

    /// Calorie share of protein, carbs and fat in the weekly average
    #[must_use]
    pub fn macro_split(&self) -> MacroSplit {
        let protein = self.weekly_average.protein * PROTEIN_KCAL_PER_GRAM;
        let carbs = self.weekly_average.carbs * CARBS_KCAL_PER_GRAM;
        let fat = self.weekly_average.fat * FAT_KCAL_PER_GRAM;
        let total = protein + carbs + fat;
        MacroSplit {
            protein_percent: percent(protein, total),
            carbs_percent: percent(carbs, total),
            fat_percent: percent(fat, total),
        }
    }
}

fn percent(value: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(value) / f64::from(whole) * 100.0).round() as u32
}

fn average(days: &[DailyNutrition]) -> MacroNutrition {
    if days.is_empty() {
        return MacroNutrition::default();
    }
    let count = days.len() as f64;
    let sum = days
        .iter()
        .fold(MacroNutrition::default(), |acc, d| acc.plus(d.totals));
    let mean = |total: u32| (f64::from(total) / count).round() as u32;
    MacroNutrition::new(
        mean(sum.calories),
        mean(sum.protein),
        mean(sum.carbs),
        mean(sum.fat),
        mean(sum.fiber),
    )
}
