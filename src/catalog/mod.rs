// ABOUTME: Static ingredient and reference recipe catalog
// ABOUTME: Read-only tables initialised once, plus recipe matching against a selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Catalog
//!
//! Twenty ingredients and five reference recipes. The tables are built on
//! first access and never change afterwards.

/// Ingredient table and lookups
pub mod ingredients;
/// Reference recipe matching
pub mod matching;
/// Reference recipe table and lookups
pub mod recipes;

pub use ingredients::{ingredient, ingredients, ingredients_in, resolve_ingredients};
pub use matching::suggest_catalog_recipes;
pub use recipes::{recipe, recipes, require_recipe};
