// ABOUTME: Error types for catalog lookups and re-exported synthesis errors
// ABOUTME: Unknown ingredient or recipe ids surface as CatalogError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Error Handling
//!
//! Synthesis errors live in `cooksy-core` and are re-exported here. Catalog
//! lookups that take caller-supplied ids report misses as [`CatalogError`].

use thiserror::Error;

pub use cooksy_core::errors::{SynthesisError, SynthesisResult};

/// Catalog lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No ingredient with this id
    #[error("Unknown ingredient id '{0}'")]
    UnknownIngredient(String),

    /// No reference recipe with this id
    #[error("Unknown recipe id '{0}'")]
    UnknownRecipe(String),
}

/// Result type for catalog lookups
pub type CatalogResult<T> = Result<T, CatalogError>;
