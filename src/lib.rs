// ABOUTME: Main library entry point for the Cooksy recipe and meal planning engine
// ABOUTME: Catalog, recipe matching, meal planning, logging, and re-exported recipe synthesis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

#![deny(unsafe_code)]

//! # Cooksy
//!
//! Picks up where an ingredient selection leaves off: synthesized recipe
//! suggestions, matching reference recipes, a weekly meal plan, and the
//! shopping list and nutrition summary derived from it.
//!
//! ## Architecture
//!
//! - **catalog**: twenty reference ingredients and five reference recipes
//! - **intelligence**: the recipe synthesizer (from `cooksy-intelligence`)
//! - **planning**: meal plan, shopping list, nutrition summary
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use cooksy::catalog::{resolve_ingredients, suggest_catalog_recipes};
//! use cooksy::intelligence::{synthesize_recipes, RngSource};
//!
//! let picked = resolve_ingredients(&["chicken-breast", "broccoli", "rice"]).unwrap();
//! let synthesized = synthesize_recipes(&picked, Some(3), &mut RngSource::seeded(42));
//! assert!(synthesized.len() <= 3);
//!
//! let reference = suggest_catalog_recipes(&picked);
//! assert!(!reference.is_empty());
//! ```

/// Static ingredient and recipe catalog with matching
pub mod catalog;

/// Error types for catalog lookups
pub mod errors;

/// Recipe synthesis re-exported from `cooksy-intelligence`
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Meal plan, shopping list and nutrition summary
pub mod planning;

/// Core data models re-exported from `cooksy-core`
pub use cooksy_core::models;
