// ABOUTME: Core data models and types for the Cooksy recipe platform
// ABOUTME: Re-exports Ingredient, SynthesizedRecipe, MealType and other fundamental data structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Data Models
//!
//! The data structures exchanged between the synthesizer, the catalog and the
//! planning layer.
//!
//! ## Core Models
//!
//! - `Ingredient`: A selectable ingredient with its category and per-100g nutrition
//! - `IngredientCategory`: Catalog category, with an `Other` escape hatch
//! - `SynthesizedRecipe`: The record produced by one synthesis call
//! - `NutritionEstimate`: Approximate per-serving nutrition of a synthesized recipe
//! - `MealType`: Slot of the day a recipe is planned for
//! - `ReferenceRecipe`: Curated catalog recipe used by meal planning
//! - `RoleBucket`: Culinary role an ingredient can play in a template

mod ingredient;
mod meal;
mod recipe;
mod reference;
mod role;

pub use ingredient::{Ingredient, IngredientCategory, NutritionPer100g};
pub use meal::{day_name, MealType, WEEK};
pub use recipe::{Difficulty, NutritionEstimate, SynthesizedRecipe};
pub use reference::{MacroNutrition, RecipeIngredientRef, ReferenceRecipe};
pub use role::RoleBucket;
