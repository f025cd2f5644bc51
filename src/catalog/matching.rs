// ABOUTME: Matches reference recipes against an ingredient selection
// ABOUTME: Compatible means sharing at least two selected ingredients, or all of a smaller selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use super::recipes::recipes;
use cooksy_core::models::{Ingredient, ReferenceRecipe};
use std::collections::HashSet;
use tracing::debug;

/// Minimum shared ingredients for a compatible recipe
const REQUIRED_SHARED: usize = 2;

/// Recipes shown when nothing in the catalog is compatible
const FALLBACK_COUNT: usize = 3;

/// Number of recipe ingredient uses whose id is in the selection
#[must_use]
pub fn shared_ingredient_count(recipe: &ReferenceRecipe, selected_ids: &HashSet<&str>) -> usize {
    recipe
        .ingredient_ids()
        .filter(|id| selected_ids.contains(id))
        .count()
}

/// Compatible recipes from `pool`, or its first three when none match
///
/// An empty selection matches nothing and yields an empty list.
#[must_use]
pub fn suggest_from<'r>(pool: &'r [ReferenceRecipe], selected: &[Ingredient]) -> Vec<&'r ReferenceRecipe> {
    if selected.is_empty() {
        return Vec::new();
    }

    let selected_ids: HashSet<&str> = selected.iter().map(|i| i.id.as_str()).collect();
    let required = REQUIRED_SHARED.min(selected.len());

    let compatible: Vec<&ReferenceRecipe> = pool
        .iter()
        .filter(|r| shared_ingredient_count(r, &selected_ids) >= required)
        .collect();

    if compatible.is_empty() {
        debug!(selected = selected.len(), "No compatible catalog recipes, using fallback");
        pool.iter().take(FALLBACK_COUNT).collect()
    } else {
        compatible
    }
}

/// Compatible reference recipes from the built-in catalog
#[must_use]
pub fn suggest_catalog_recipes(selected: &[Ingredient]) -> Vec<&'static ReferenceRecipe> {
    suggest_from(recipes(), selected)
}
