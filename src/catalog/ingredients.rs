// ABOUTME: Built-in ingredient catalog with glyphs, categories and per-100g nutrition
// ABOUTME: Lookup by id, by category, and bulk resolution of caller-supplied ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use crate::errors::{CatalogError, CatalogResult};
use cooksy_core::models::{Ingredient, IngredientCategory, NutritionPer100g};
use std::sync::OnceLock;

static INGREDIENTS: OnceLock<Vec<Ingredient>> = OnceLock::new();

/// Table row: id, name, category, glyph, kcal, protein, carbs, fat, fiber
type Row = (
    &'static str,
    &'static str,
    IngredientCategory,
    &'static str,
    [f64; 5],
);

fn rows() -> Vec<Row> {
    use IngredientCategory::{Dairy, Fruits, Grains, Herbs, Legumes, Oils, Protein, Vegetables};
    vec![
        ("tomato", "Tomato", Vegetables, "🍅", [18.0, 0.9, 3.9, 0.2, 1.2]),
        ("chicken-breast", "Chicken Breast", Protein, "🐔", [165.0, 31.0, 0.0, 3.6, 0.0]),
        ("rice", "Rice", Grains, "🍚", [130.0, 2.7, 28.0, 0.3, 0.4]),
        ("onion", "Onion", Vegetables, "🧅", [40.0, 1.1, 9.3, 0.1, 1.7]),
        ("garlic", "Garlic", Vegetables, "🧄", [149.0, 6.4, 33.0, 0.5, 2.1]),
        ("olive-oil", "Olive Oil", Oils, "🫒", [884.0, 0.0, 0.0, 100.0, 0.0]),
        ("spinach", "Spinach", Vegetables, "🥬", [23.0, 2.9, 3.6, 0.4, 2.2]),
        ("pasta", "Pasta", Grains, "🍝", [371.0, 13.0, 74.0, 1.5, 3.2]),
        ("cheese", "Cheese", Dairy, "🧀", [402.0, 25.0, 1.3, 33.0, 0.0]),
        ("eggs", "Eggs", Protein, "🥚", [155.0, 13.0, 1.1, 11.0, 0.0]),
        ("bell-pepper", "Bell Pepper", Vegetables, "🫑", [31.0, 1.0, 7.0, 0.3, 2.5]),
        ("mushrooms", "Mushrooms", Vegetables, "🍄", [22.0, 3.1, 3.3, 0.3, 1.0]),
        ("lemon", "Lemon", Fruits, "🍋", [29.0, 1.1, 9.0, 0.3, 2.8]),
        ("basil", "Basil", Herbs, "🌿", [22.0, 3.2, 2.6, 0.6, 1.6]),
        ("salmon", "Salmon", Protein, "🐟", [208.0, 20.0, 0.0, 13.0, 0.0]),
        ("avocado", "Avocado", Fruits, "🥑", [160.0, 2.0, 9.0, 15.0, 7.0]),
        ("broccoli", "Broccoli", Vegetables, "🥦", [34.0, 2.8, 7.0, 0.4, 2.6]),
        ("sweet-potato", "Sweet Potato", Vegetables, "🍠", [86.0, 1.6, 20.0, 0.1, 3.0]),
        ("black-beans", "Black Beans", Legumes, "🫘", [132.0, 8.9, 23.0, 0.5, 8.7]),
        ("quinoa", "Quinoa", Grains, "🌾", [368.0, 14.0, 64.0, 6.0, 7.0]),
    ]
}

/// Every catalog ingredient, in catalog order
pub fn ingredients() -> &'static [Ingredient] {
    INGREDIENTS.get_or_init(|| {
        rows()
            .into_iter()
            .map(|(id, name, category, emoji, [kcal, protein, carbs, fat, fiber])| {
                Ingredient::new(id, name, category)
                    .with_emoji(emoji)
                    .with_nutrition(NutritionPer100g::new(kcal, protein, carbs, fat, fiber))
            })
            .collect()
    })
}

/// Look up an ingredient by id
#[must_use]
pub fn ingredient(id: &str) -> Option<&'static Ingredient> {
    ingredients().iter().find(|i| i.id == id)
}

/// Resolve ids to owned ingredients, preserving order
///
/// # Errors
///
/// Returns `UnknownIngredient` for the first id not in the catalog
pub fn resolve_ingredients<S: AsRef<str>>(ids: &[S]) -> CatalogResult<Vec<Ingredient>> {
    ids.iter()
        .map(|id| {
            let id = id.as_ref();
            ingredient(id)
                .cloned()
                .ok_or_else(|| CatalogError::UnknownIngredient(id.to_owned()))
        })
        .collect()
}

/// Ingredients in one category, in catalog order
#[must_use]
pub fn ingredients_in(category: &IngredientCategory) -> Vec<&'static Ingredient> {
    ingredients()
        .iter()
        .filter(|i| &i.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_ids_unique() {
        let all = ingredients();
        assert_eq!(all.len(), 20);
        let mut ids: Vec<&str> = all.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_lookup() {
        let salmon = ingredient("salmon").unwrap();
        assert_eq!(salmon.name, "Salmon");
        assert_eq!(salmon.category, IngredientCategory::Protein);
        assert!((salmon.nutrition.calories - 208.0).abs() < f64::EPSILON);
        assert!(ingredient("tofu").is_none());
    }

    #[test]
    fn test_resolve_reports_unknown_id() {
        let err = resolve_ingredients(&["rice", "tofu"]).unwrap_err();
        assert_eq!(err, CatalogError::UnknownIngredient("tofu".into()));

        let ok = resolve_ingredients(&["rice", "onion"]).unwrap();
        assert_eq!(ok[1].name, "Onion");
    }

    #[test]
    fn test_by_category() {
        let grains = ingredients_in(&IngredientCategory::Grains);
        let names: Vec<&str> = grains.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Pasta", "Quinoa"]);
    }
}
