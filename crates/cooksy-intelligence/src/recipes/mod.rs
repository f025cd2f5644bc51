// ABOUTME: Recipe synthesis module turning ingredient selections into recipe records
// ABOUTME: Classifier, template/cuisine catalog, selectors, estimator, renderer and batch synthesizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Recipes Module
//!
//! Synthesizes plausible recipes from a set of selected ingredients. No model
//! inference is involved: ingredients are sorted into role buckets, a template
//! and a cuisine are chosen by rule and by draw, and quantities, nutrition and
//! presentation fields are fabricated from fixed tables.
//!
//! ## Pipeline
//!
//! 1. `classifier`: protein, vegetable and grain buckets
//! 2. `selection`: template by rule, cuisine by draw
//! 3. `estimator`: quantity lines, nutrition estimate, servings and rating
//! 4. `instructions`: role placeholders replaced with ingredient names
//! 5. `synthesizer`: assembles the record; batches vary templates and skip duplicates
//!
//! ## Example Usage
//!
//! ```rust
//! use cooksy_core::models::{Ingredient, IngredientCategory};
//! use cooksy_intelligence::recipes::{synthesize_recipe, RngSource};
//!
//! let picked = vec![
//!     Ingredient::new("tofu", "Tofu", IngredientCategory::Protein),
//!     Ingredient::new("broccoli", "Broccoli", IngredientCategory::Vegetables),
//! ];
//! let recipe = synthesize_recipe(&picked, &mut RngSource::seeded(7)).unwrap();
//! assert_eq!(recipe.ingredients.len(), picked.len() + 2);
//! ```

/// Template and cuisine tables
pub mod catalog;
/// Role bucket classification
pub mod classifier;
/// Quantity, nutrition and presentation estimates
pub mod estimator;
/// Instruction placeholder rendering
pub mod instructions;
/// Injectable random source
pub mod random;
/// Template and cuisine selection rules
pub mod selection;
/// Single and batch synthesis
pub mod synthesizer;

// Re-export main types for convenience
pub use catalog::{CuisineVariation, RecipeTemplate, SynthesisCatalog, TemplateKind};
pub use classifier::RoleBuckets;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use selection::{SelectionRule, TemplateHistory};
pub use synthesizer::{
    synthesize_recipe, synthesize_recipes, AttemptOutcome, BatchReport, RecipeSynthesizer,
};
