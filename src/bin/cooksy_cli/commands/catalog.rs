// ABOUTME: Catalog commands for cooksy-cli
// ABOUTME: Lists ingredients and suggests reference recipes for a selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use crate::helpers::display::{print_ingredients, print_json};
use anyhow::{Context, Result};
use cooksy::catalog::{
    ingredients as all_ingredients, ingredients_in, resolve_ingredients, suggest_catalog_recipes,
};
use cooksy::models::IngredientCategory;

/// List catalog ingredients, optionally filtered by category label
pub fn ingredients(category: Option<&str>) -> Result<()> {
    match category {
        Some(label) => {
            let matching = ingredients_in(&IngredientCategory::from_label(label));
            if matching.is_empty() {
                anyhow::bail!("No ingredients in category '{label}'");
            }
            print_ingredients(matching);
        }
        None => print_ingredients(all_ingredients()),
    }
    Ok(())
}

/// Print reference recipes compatible with the selection
pub fn suggest(ids: &[String]) -> Result<()> {
    let selected = resolve_ingredients(ids).context("Invalid ingredient selection")?;
    print_json(&suggest_catalog_recipes(&selected))
}
