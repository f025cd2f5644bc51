// ABOUTME: Core types and constants for the Cooksy recipe synthesis platform
// ABOUTME: Foundation crate with error handling, domain models, and catalog constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

#![deny(unsafe_code)]

//! # Cooksy Core
//!
//! Foundation crate providing shared types and constants for the Cooksy recipe
//! synthesis engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `SynthesisError` and its attempt-level classification
//! - **constants**: Quantity phrases, calorie table, nutrition bands and batch limits
//! - **models**: Ingredients, synthesized recipes, nutrition estimates and meal slots

/// Error types shared by the synthesizer and its callers
pub mod errors;

/// Synthesis constants organized by domain
pub mod constants;

/// Core data models (Ingredient, `SynthesizedRecipe`, `MealType`, etc.)
pub mod models;
