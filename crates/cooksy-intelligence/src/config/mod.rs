// ABOUTME: Configuration module for cooksy-intelligence crate
// ABOUTME: Re-exports synthesis configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

/// Configuration error types
pub mod error;
/// Synthesis tunables with environment overrides
pub mod synthesis;

pub use error::ConfigError;
pub use synthesis::SynthesisConfig;
