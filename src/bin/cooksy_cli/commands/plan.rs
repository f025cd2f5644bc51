// ABOUTME: Planning command for cooksy-cli
// ABOUTME: Shopping list and nutrition summary for the demo weekly meal plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use crate::helpers::display::print_json;
use anyhow::{Context, Result};
use cooksy::catalog::resolve_ingredients;
use cooksy::planning::{MealPlan, NutritionSummary, ShoppingList};
use serde_json::json;

/// Print the shopping list and nutrition summary of the demo week
pub fn summary(have: &[String], include_available: bool) -> Result<()> {
    let available = resolve_ingredients(have).context("Invalid pantry ingredient")?;
    let plan = MealPlan::demo_week();
    let list = ShoppingList::from_plan(&plan, &available, !include_available);
    let nutrition = NutritionSummary::from_plan(&plan);

    print_json(&json!({
        "shopping_list": {
            "items": list.len(),
            "checked": list.checked_count(),
            "estimated_cost": (list.estimated_cost() * 100.0).round() / 100.0,
            "by_category": list.by_category(),
        },
        "nutrition": {
            "days": nutrition.days,
            "weekly_average": nutrition.weekly_average,
            "targets": nutrition.targets,
            "target_progress_percent": nutrition.target_progress(),
            "macro_split": nutrition.macro_split(),
        },
    }))
}
