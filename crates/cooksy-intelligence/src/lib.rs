// ABOUTME: Recipe synthesis engine for the Cooksy platform
// ABOUTME: Turns ingredient selections into synthesized recipes with environment-driven tunables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

#![deny(unsafe_code)]

//! # Cooksy Intelligence
//!
//! The recipe synthesizer and its configuration. Everything here is
//! synchronous and free of I/O apart from reading environment variables when
//! the configuration is first loaded.
//!
//! ## Modules
//!
//! - **config**: `SynthesisConfig` with `COOKSY_*` environment overrides
//! - **recipes**: classification, template and cuisine selection, estimation, batch synthesis

// Re-export cooksy-core modules so callers can reach models through this crate
pub use cooksy_core::constants;
pub use cooksy_core::errors;
pub use cooksy_core::models;

/// Synthesis configuration
pub mod config;

/// Recipe synthesis pipeline
pub mod recipes;

pub use config::{ConfigError, SynthesisConfig};
pub use recipes::{
    synthesize_recipe, synthesize_recipes, BatchReport, RandomSource, RecipeSynthesizer,
    RngSource,
};
