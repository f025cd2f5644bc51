// ABOUTME: Ingredient model with catalog category and per-100g nutrition
// ABOUTME: Read-only input consumed by the synthesizer and the planning layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Catalog category of an ingredient
///
/// Serialized as its display label so that categories this enum does not know
/// about round-trip as `Other(label)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IngredientCategory {
    /// Fresh vegetables
    Vegetables,
    /// Meat, fish, eggs and other protein sources
    Protein,
    /// Rice, pasta and other grains
    Grains,
    /// Milk, cheese, yogurt
    Dairy,
    /// Cooking oils and fats
    Oils,
    /// Fresh fruit
    Fruits,
    /// Fresh and dried herbs
    Herbs,
    /// Beans, lentils, chickpeas
    Legumes,
    /// Generic fresh produce
    Produce,
    /// Any other category label
    Other(String),
}

impl IngredientCategory {
    /// Display label as used by the catalog
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Vegetables => "Vegetables",
            Self::Protein => "Protein",
            Self::Grains => "Grains",
            Self::Dairy => "Dairy",
            Self::Oils => "Oils",
            Self::Fruits => "Fruits",
            Self::Herbs => "Herbs",
            Self::Legumes => "Legumes",
            Self::Produce => "Produce",
            Self::Other(label) => label,
        }
    }

    /// Parse a category label; unknown labels become `Other`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Vegetables" => Self::Vegetables,
            "Protein" => Self::Protein,
            "Grains" => Self::Grains,
            "Dairy" => Self::Dairy,
            "Oils" => Self::Oils,
            "Fruits" => Self::Fruits,
            "Herbs" => Self::Herbs,
            "Legumes" => Self::Legumes,
            "Produce" => Self::Produce,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IngredientCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<String> for IngredientCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<IngredientCategory> for String {
    fn from(category: IngredientCategory) -> Self {
        match category {
            IngredientCategory::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

/// Nutrition facts per 100 grams of an ingredient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionPer100g {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    pub fiber: f64,
}

impl NutritionPer100g {
    /// Create a nutrition record
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
        }
    }
}

/// A selectable ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Stable identifier (`chicken-breast`)
    pub id: String,
    /// Display name (`Chicken Breast`)
    pub name: String,
    /// Catalog category
    pub category: IngredientCategory,
    /// Display glyph
    pub emoji: String,
    /// Nutrition facts per 100g
    #[serde(rename = "nutrition_per_100g")]
    pub nutrition: NutritionPer100g,
}

impl Ingredient {
    /// Create an ingredient with no glyph and zeroed nutrition
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: IngredientCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            emoji: String::new(),
            nutrition: NutritionPer100g::default(),
        }
    }

    /// Set the display glyph
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Set the per-100g nutrition facts
    #[must_use]
    pub const fn with_nutrition(mut self, nutrition: NutritionPer100g) -> Self {
        self.nutrition = nutrition;
        self
    }

    /// Lowercased display name, used for keyword matching and instructions
    #[must_use]
    pub fn lowercase_name(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_round_trip() {
        for label in ["Vegetables", "Protein", "Grains", "Legumes", "Produce"] {
            assert_eq!(IngredientCategory::from_label(label).label(), label);
        }
        let other = IngredientCategory::from_label("Spices");
        assert_eq!(other, IngredientCategory::Other("Spices".into()));
        assert_eq!(other.to_string(), "Spices");
    }

    #[test]
    fn test_category_serializes_as_label() {
        let ingredient = Ingredient::new("tofu", "Tofu", IngredientCategory::Protein);
        let json = serde_json::to_value(&ingredient).unwrap();
        assert_eq!(json["category"], "Protein");

        let parsed: Ingredient = serde_json::from_value(serde_json::json!({
            "id": "saffron",
            "name": "Saffron",
            "category": "Spices",
            "emoji": "",
            "nutrition_per_100g": {"calories": 310.0, "protein": 11.0, "carbs": 65.0, "fat": 6.0, "fiber": 3.9}
        }))
        .unwrap();
        assert_eq!(parsed.category, IngredientCategory::Other("Spices".into()));
        assert!((parsed.nutrition.calories - 310.0).abs() < f64::EPSILON);
    }
}
