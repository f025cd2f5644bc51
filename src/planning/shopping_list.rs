// ABOUTME: Shopping list aggregated from a meal plan, keyed by ingredient
// ABOUTME: Joins amounts, tracks contributing recipes, groups by category and estimates cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Shopping List
//!
//! Amounts are free text and are joined rather than summed (`400g + 400g`).
//! Prices are flat per-category estimates, one unit per item.

use super::meal_plan::MealPlan;
use crate::catalog::ingredient;
use cooksy_core::models::{Ingredient, IngredientCategory};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Flat unit price for a category label not listed below
const DEFAULT_UNIT_PRICE: f64 = 3.00;

/// Estimated unit price per category
const UNIT_PRICES: &[(&str, f64)] = &[
    ("Vegetables", 2.50),
    ("Protein", 8.99),
    ("Grains", 3.25),
    ("Dairy", 4.50),
    ("Oils", 5.99),
    ("Fruits", 3.75),
    ("Herbs", 2.99),
    ("Legumes", 1.99),
];

/// Estimated price of one item in this category
#[must_use]
pub fn unit_price(category: &IngredientCategory) -> f64 {
    let label = category.label();
    UNIT_PRICES
        .iter()
        .find(|(key, _)| *key == label)
        .map_or(DEFAULT_UNIT_PRICE, |(_, price)| *price)
}

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingItem {
    /// The ingredient to buy
    pub ingredient: Ingredient,
    /// Amounts from every planned use, joined with " + "
    pub total_amount: String,
    /// Titles of contributing recipes, first-seen order, no repeats
    pub recipes: Vec<String>,
    /// Ticked off by the shopper
    pub checked: bool,
}

/// Items grouped under one category label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    /// Category label
    pub category: &'a str,
    /// Items in list order
    pub items: Vec<&'a ShoppingItem>,
}

/// Aggregated list of ingredients needed for a meal plan
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    /// Build the list for a plan
    ///
    /// With `only_needed`, ingredients whose id is in `available` are left out.
    /// Ingredient references missing from the catalog are skipped with a warning.
    #[must_use]
    pub fn from_plan(plan: &MealPlan, available: &[Ingredient], only_needed: bool) -> Self {
        let mut items: Vec<ShoppingItem> = Vec::new();
        let mut index_by_id: HashMap<String, usize> = HashMap::new();

        for planned in plan.meals() {
            let title = &planned.recipe.title;
            for usage in &planned.recipe.ingredients {
                if let Some(&index) = index_by_id.get(&usage.ingredient_id) {
                    let item = &mut items[index];
                    item.total_amount = format!("{} + {}", item.total_amount, usage.amount);
                    if !item.recipes.contains(title) {
                        item.recipes.push(title.clone());
                    }
                    continue;
                }

                let Some(found) = ingredient(&usage.ingredient_id) else {
                    warn!(ingredient_id = %usage.ingredient_id, recipe = %title, "Recipe references unknown ingredient");
                    continue;
                };
                index_by_id.insert(usage.ingredient_id.clone(), items.len());
                items.push(ShoppingItem {
                    ingredient: found.clone(),
                    total_amount: usage.amount.clone(),
                    recipes: vec![title.clone()],
                    checked: false,
                });
            }
        }

        if only_needed {
            items.retain(|item| !available.iter().any(|a| a.id == item.ingredient.id));
        }
        Self { items }
    }

    /// Flip the checked flag of an item; false when the id is not on the list
    pub fn toggle(&mut self, ingredient_id: &str) -> bool {
        match self
            .items
            .iter_mut()
            .find(|item| item.ingredient.id == ingredient_id)
        {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Items in list order
    #[must_use]
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Look up an item by ingredient id
    #[must_use]
    pub fn item(&self, ingredient_id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.ingredient.id == ingredient_id)
    }

    /// Number of checked items
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items grouped by category, groups in first-seen order
    #[must_use]
    pub fn by_category(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for item in &self.items {
            let label = item.ingredient.category.label();
            match groups.iter_mut().find(|g| g.category == label) {
                Some(group) => group.items.push(item),
                None => groups.push(CategoryGroup {
                    category: label,
                    items: vec![item],
                }),
            }
        }
        groups
    }

    /// Estimated cost of the unchecked items
    #[must_use]
    pub fn estimated_cost(&self) -> f64 {
        self.items
            .iter()
            .filter(|i| !i.checked)
            .map(|i| unit_price(&i.ingredient.category))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{recipe, resolve_ingredients};
    use chrono::Weekday;
    use cooksy_core::models::MealType;

    fn pasta_twice() -> MealPlan {
        let pasta = recipe("chicken-tomato-pasta").unwrap().clone();
        let mut plan = MealPlan::new();
        plan.add(Weekday::Mon, MealType::Dinner, pasta.clone());
        plan.add(Weekday::Thu, MealType::Dinner, pasta);
        plan
    }

    #[test]
    fn test_amounts_joined_and_titles_deduplicated() {
        let list = ShoppingList::from_plan(&pasta_twice(), &[], false);
        assert_eq!(list.len(), 6);
        let pasta = list.item("pasta").unwrap();
        assert_eq!(pasta.total_amount, "400g + 400g");
        assert_eq!(pasta.recipes, vec!["Creamy Chicken Tomato Pasta"]);
    }

    #[test]
    fn test_only_needed_filters_available() {
        let have = resolve_ingredients(&["garlic", "olive-oil"]).unwrap();
        let needed = ShoppingList::from_plan(&pasta_twice(), &have, true);
        assert_eq!(needed.len(), 4);
        assert!(needed.item("garlic").is_none());

        let everything = ShoppingList::from_plan(&pasta_twice(), &have, false);
        assert_eq!(everything.len(), 6);
    }

    #[test]
    fn test_toggle_and_cost() {
        let mut list = ShoppingList::from_plan(&pasta_twice(), &[], false);
        // grains 3.25 + protein 8.99 + 3 vegetables 7.50 + oils 5.99
        assert!((list.estimated_cost() - 25.73).abs() < 1e-9);

        assert!(list.toggle("chicken-breast"));
        assert_eq!(list.checked_count(), 1);
        assert!((list.estimated_cost() - 16.74).abs() < 1e-9);

        assert!(list.toggle("chicken-breast"));
        assert_eq!(list.checked_count(), 0);
        assert!(!list.toggle("saffron"));
    }

    #[test]
    fn test_grouping_first_seen_order() {
        let list = ShoppingList::from_plan(&pasta_twice(), &[], false);
        let groups = list.by_category();
        let labels: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(labels, vec!["Grains", "Protein", "Vegetables", "Oils"]);
        assert_eq!(groups[2].items.len(), 3);
    }

    #[test]
    fn test_unit_price_default() {
        assert!((unit_price(&IngredientCategory::Produce) - 3.00).abs() < f64::EPSILON);
        assert!((unit_price(&IngredientCategory::Legumes) - 1.99).abs() < f64::EPSILON);
    }
}
