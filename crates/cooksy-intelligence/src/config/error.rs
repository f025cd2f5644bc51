// ABOUTME: Configuration error types for synthesis settings validation
// ABOUTME: Defines error variants for out-of-range values, missing fields, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! Configuration error types for synthesis settings validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required configuration field is missing or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside the valid range for its parameter
    /// (batch size above the cap, probability outside `[0, 1]`)
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
