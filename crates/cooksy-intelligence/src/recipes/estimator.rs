// ABOUTME: Quantity phrases, nutrition estimate and presentation fields for a synthesized recipe
// ABOUTME: Category-level calorie table plus independent banded draws for the other nutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Quantity and Nutrition Estimator
//!
//! The estimate is an approximation: calories follow each ingredient's
//! category, every other nutrient is drawn from a fixed band. Per-100g values
//! carried by the ingredients are not consulted.

use super::catalog::{CuisineVariation, SynthesisCatalog};
use super::random::RandomSource;
use cooksy_core::constants::nutrition::{
    CALORIE_JITTER, CARBS_BAND, CATEGORY_CALORIES, DEFAULT_CATEGORY_CALORIES, FAT_BAND,
    FIBER_BAND, PROTEIN_BAND, SODIUM_BAND, SUGAR_BAND,
};
use cooksy_core::constants::presentation::{
    MAX_RATING, MIN_RATING, MIN_REVIEWS, MIN_SERVINGS, REVIEW_SPREAD, SERVING_SPREAD,
};
use cooksy_core::constants::quantities::SEASONING_LINE;
use cooksy_core::errors::{SynthesisError, SynthesisResult};
use cooksy_core::models::{Difficulty, Ingredient, IngredientCategory, NutritionEstimate};

/// Calories one ingredient of this category contributes
#[must_use]
pub fn category_calories(category: &IngredientCategory) -> u32 {
    let label = category.label();
    CATEGORY_CALORIES
        .iter()
        .find(|(key, _)| *key == label)
        .map_or(DEFAULT_CATEGORY_CALORIES, |(_, calories)| *calories)
}

/// Ingredient lines: one quantity line per ingredient, the seasoning line, the sauce
///
/// # Errors
///
/// Returns `EmptyCatalog` if the catalog has no quantity phrases
pub fn ingredient_lines(
    ingredients: &[Ingredient],
    catalog: &SynthesisCatalog,
    cuisine: &CuisineVariation,
    rng: &mut dyn RandomSource,
) -> SynthesisResult<Vec<String>> {
    let phrases = catalog.quantity_phrases();
    if phrases.is_empty() {
        return Err(SynthesisError::empty_catalog("quantities"));
    }

    let mut lines: Vec<String> = ingredients
        .iter()
        .map(|ingredient| {
            let phrase = &phrases[rng.pick_index(phrases.len())];
            format!("{phrase} {}", ingredient.name)
        })
        .collect();
    lines.push(SEASONING_LINE.to_owned());
    lines.push(cuisine.sauce.clone());
    Ok(lines)
}

fn banded(rng: &mut dyn RandomSource, (low, span): (f64, f64)) -> u32 {
    rng.range(low, span).round() as u32
}

/// Approximate nutrition for a selection
///
/// Draw order: calorie jitter, protein, carbs, fat, fiber, sugar, sodium.
pub fn estimate_nutrition(
    ingredients: &[Ingredient],
    rng: &mut dyn RandomSource,
) -> NutritionEstimate {
    let base: u32 = ingredients
        .iter()
        .map(|i| category_calories(&i.category))
        .sum();
    let calories = rng.range(f64::from(base), CALORIE_JITTER).round() as u32;

    NutritionEstimate {
        calories,
        protein: banded(rng, PROTEIN_BAND),
        carbs: banded(rng, CARBS_BAND),
        fat: banded(rng, FAT_BAND),
        fiber: banded(rng, FIBER_BAND),
        sugar: banded(rng, SUGAR_BAND),
        sodium: banded(rng, SODIUM_BAND),
    }
}

/// Servings, difficulty, rating and review count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    /// 2 to 4
    pub servings: u8,
    /// Easy or Medium
    pub difficulty: Difficulty,
    /// [4.0, 5.0], one decimal place
    pub rating: f64,
    /// At least 50
    pub reviews: u32,
}

impl Presentation {
    /// Draw presentation fields in order: servings, difficulty, rating, reviews
    pub fn draw(rng: &mut dyn RandomSource, medium_probability: f64) -> Self {
        let servings = MIN_SERVINGS + rng.pick_index(usize::from(SERVING_SPREAD)) as u8;
        let difficulty = if rng.chance(medium_probability) {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        };
        let rating = (rng.range(MIN_RATING, MAX_RATING - MIN_RATING) * 10.0).round() / 10.0;
        let reviews = MIN_REVIEWS + rng.pick_index(REVIEW_SPREAD as usize) as u32;

        Self {
            servings,
            difficulty,
            rating: rating.clamp(MIN_RATING, MAX_RATING),
            reviews,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::random::{RngSource, ScriptedSource};

    #[test]
    fn test_category_calorie_table() {
        assert_eq!(category_calories(&IngredientCategory::Vegetables), 25);
        assert_eq!(category_calories(&IngredientCategory::Grains), 130);
        assert_eq!(category_calories(&IngredientCategory::Produce), 30);
        // table key is "Proteins", so the catalog's "Protein" falls back
        assert_eq!(category_calories(&IngredientCategory::Protein), 50);
        assert_eq!(
            category_calories(&IngredientCategory::Other("Proteins".into())),
            150
        );
        assert_eq!(category_calories(&IngredientCategory::Oils), 50);
    }

    #[test]
    fn test_nutrition_at_band_floors() {
        let items = vec![
            Ingredient::new("tomato", "Tomato", IngredientCategory::Vegetables),
            Ingredient::new("rice", "Rice", IngredientCategory::Grains),
        ];
        let mut rng = ScriptedSource::constant(0.0);
        let estimate = estimate_nutrition(&items, &mut rng);
        assert_eq!(
            estimate,
            NutritionEstimate {
                calories: 155,
                protein: 15,
                carbs: 20,
                fat: 8,
                fiber: 3,
                sugar: 2,
                sodium: 300,
            }
        );
        assert_eq!(rng.draws(), 7);
    }

    #[test]
    fn test_nutrition_bands_hold() {
        let items = vec![Ingredient::new("egg", "Eggs", IngredientCategory::Protein)];
        let mut rng = RngSource::seeded(11);
        for _ in 0..500 {
            let n = estimate_nutrition(&items, &mut rng);
            assert!((50..=150).contains(&n.calories));
            assert!((15..=35).contains(&n.protein));
            assert!((20..=50).contains(&n.carbs));
            assert!((300..=800).contains(&n.sodium));
        }
    }

    #[test]
    fn test_ingredient_lines_shape() {
        let catalog = SynthesisCatalog::builtin();
        let cuisine = catalog.cuisine("Asian").unwrap();
        let items = vec![
            Ingredient::new("tofu", "Tofu", IngredientCategory::Protein),
            Ingredient::new("leek", "Leek", IngredientCategory::Vegetables),
        ];
        let mut rng = ScriptedSource::constant(0.0);
        let lines = ingredient_lines(&items, catalog, cuisine, &mut rng).unwrap();
        assert_eq!(
            lines,
            vec![
                "1 cup Tofu".to_owned(),
                "1 cup Leek".to_owned(),
                "Salt and pepper to taste".to_owned(),
                "soy-ginger glaze".to_owned(),
            ]
        );
    }

    #[test]
    fn test_ingredient_lines_need_phrases() {
        let catalog = SynthesisCatalog::builtin()
            .clone()
            .with_quantity_phrases(Vec::new());
        let cuisine = catalog.cuisines()[0].clone();
        let mut rng = ScriptedSource::constant(0.0);
        let err = ingredient_lines(&[], &catalog, &cuisine, &mut rng).unwrap_err();
        assert_eq!(err, SynthesisError::empty_catalog("quantities"));
    }

    #[test]
    fn test_presentation_extremes() {
        let mut high = ScriptedSource::constant(0.999_999);
        let p = Presentation::draw(&mut high, 0.3);
        assert_eq!(p.servings, 4);
        assert_eq!(p.difficulty, Difficulty::Easy);
        assert!((p.rating - 5.0).abs() < f64::EPSILON);
        assert_eq!(p.reviews, 549);

        let mut low = ScriptedSource::constant(0.0);
        let p = Presentation::draw(&mut low, 0.3);
        assert_eq!(p.servings, 2);
        assert_eq!(p.difficulty, Difficulty::Medium);
        assert!((p.rating - 4.0).abs() < f64::EPSILON);
        assert_eq!(p.reviews, 50);
    }
}
