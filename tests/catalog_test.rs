// ABOUTME: Integration tests for the ingredient and reference recipe catalog
// ABOUTME: Validates lookups, selection resolution and compatible recipe suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cooksy::catalog::{
    ingredient, ingredients, ingredients_in, recipes, require_recipe, resolve_ingredients,
    suggest_catalog_recipes,
};
use cooksy::errors::CatalogError;
use cooksy::models::IngredientCategory;
use std::collections::HashSet;

fn suggested_ids(ids: &[&str]) -> Vec<String> {
    let selected = resolve_ingredients(ids).unwrap();
    suggest_catalog_recipes(&selected)
        .into_iter()
        .map(|r| r.id.clone())
        .collect()
}

// ============================================================================
// Tables
// ============================================================================

#[test]
fn test_catalog_sizes() {
    assert_eq!(ingredients().len(), 20);
    assert_eq!(recipes().len(), 5);
}

#[test]
fn test_every_recipe_ingredient_exists() {
    for recipe in recipes() {
        for id in recipe.ingredient_ids() {
            assert!(ingredient(id).is_some(), "{} uses unknown {id}", recipe.id);
        }
    }
}

#[test]
fn test_ingredient_ids_unique() {
    let ids: HashSet<&str> = ingredients().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids.len(), ingredients().len());
}

#[test]
fn test_category_filter() {
    let fruits: Vec<&str> = ingredients_in(&IngredientCategory::Fruits)
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(fruits, vec!["lemon", "avocado"]);
    assert!(ingredients_in(&IngredientCategory::from_label("Spices")).is_empty());
}

#[test]
fn test_unknown_ids_rejected() {
    assert_eq!(
        resolve_ingredients(&["salmon", "saffron"]).unwrap_err(),
        CatalogError::UnknownIngredient("saffron".into())
    );
    assert_eq!(
        require_recipe("paella").unwrap_err(),
        CatalogError::UnknownRecipe("paella".into())
    );
    assert_eq!(
        require_recipe("veggie-stir-fry").unwrap().title,
        "Colorful Vegetable Stir Fry"
    );
}

// ============================================================================
// Suggestions
// ============================================================================

#[test]
fn test_two_shared_ingredients_required() {
    assert_eq!(suggested_ids(&["salmon", "quinoa"]), vec!["salmon-quinoa-bowl"]);
    assert_eq!(
        suggested_ids(&["garlic", "onion"]),
        vec![
            "chicken-tomato-pasta",
            "veggie-stir-fry",
            "sweet-potato-black-bean-bowl"
        ]
    );
}

#[test]
fn test_single_selection_needs_one_match() {
    assert_eq!(suggested_ids(&["lemon"]), vec!["salmon-quinoa-bowl"]);
}

#[test]
fn test_fallback_to_first_three() {
    // no reference recipe uses basil
    assert_eq!(
        suggested_ids(&["basil"]),
        vec!["chicken-tomato-pasta", "salmon-quinoa-bowl", "veggie-stir-fry"]
    );
}

#[test]
fn test_empty_selection_suggests_nothing() {
    assert!(suggest_catalog_recipes(&[]).is_empty());
}
