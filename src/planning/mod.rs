// ABOUTME: Meal planning layer built on the reference recipe catalog
// ABOUTME: Weekly plan model, aggregated shopping list and nutrition summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Planning
//!
//! Everything here is derived on demand from a [`MealPlan`]; nothing is
//! persisted.

/// Weekly meal plan
pub mod meal_plan;
/// Nutrition totals and averages
pub mod nutrition_summary;
/// Aggregated shopping list
pub mod shopping_list;

pub use meal_plan::{MealPlan, PlannedMeal};
pub use nutrition_summary::{DailyNutrition, MacroSplit, MealEntry, NutritionSummary, DAILY_TARGETS};
pub use shopping_list::{CategoryGroup, ShoppingItem, ShoppingList};
