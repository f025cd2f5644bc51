// ABOUTME: Hand-written reference recipes shipped with the catalog
// ABOUTME: Ingredient references with free-text amounts, whole-number nutrition, and tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use super::recipe::Difficulty;
use serde::{Deserialize, Serialize};

/// One ingredient use inside a reference recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredientRef {
    /// Catalog ingredient id
    pub ingredient_id: String,
    /// Free-text amount (`400g`, `3 cloves`)
    pub amount: String,
}

/// Per-serving nutrition of a reference recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroNutrition {
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fat: u32,
    /// Fiber in grams
    pub fiber: u32,
}

impl MacroNutrition {
    /// Create a nutrition record
    #[must_use]
    pub const fn new(calories: u32, protein: u32, carbs: u32, fat: u32, fiber: u32) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
        }
    }

    /// Field-wise sum
    #[must_use]
    pub const fn plus(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
        }
    }
}

/// A curated recipe from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecipe {
    /// Stable identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Ingredient uses in listing order
    pub ingredients: Vec<RecipeIngredientRef>,
    /// Cook time in minutes
    pub cook_time_minutes: u32,
    /// Number of servings
    pub servings: u8,
    /// Difficulty
    pub difficulty: Difficulty,
    /// Steps
    pub instructions: Vec<String>,
    /// Per-serving nutrition
    pub nutrition: MacroNutrition,
    /// Descriptive tags
    pub tags: Vec<String>,
}

impl ReferenceRecipe {
    /// Ids of the ingredients this recipe uses
    pub fn ingredient_ids(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.ingredient_id.as_str())
    }

    /// Whether the recipe uses an ingredient
    #[must_use]
    pub fn uses(&self, ingredient_id: &str) -> bool {
        self.ingredient_ids().any(|id| id == ingredient_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_sum() {
        let total = MacroNutrition::new(100, 10, 20, 5, 2).plus(MacroNutrition::new(50, 1, 2, 3, 4));
        assert_eq!(total, MacroNutrition::new(150, 11, 22, 8, 6));
    }
}
