// ABOUTME: Synthesis error types for the recipe generation pipeline
// ABOUTME: Separates the caller-facing empty-input error from per-attempt generation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Synthesis Error Types
//!
//! `EmptyInput` is the only error a single-recipe caller is expected to handle.
//! The remaining variants describe a broken template/cuisine catalog; the batch
//! synthesizer records them as failed attempts and keeps going.

use thiserror::Error;

/// Errors produced while synthesizing a recipe
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// No ingredients were supplied
    #[error("No ingredients selected")]
    EmptyInput,

    /// A selection rule required a template the catalog does not provide
    #[error("Template '{template}' is not available in the catalog")]
    MissingTemplate {
        /// Display name of the missing template
        template: String,
    },

    /// A catalog table needed for synthesis has no entries
    #[error("Catalog table '{table}' is empty")]
    EmptyCatalog {
        /// Name of the empty table (templates, cuisines, quantities)
        table: &'static str,
    },
}

impl SynthesisError {
    /// Create a "missing template" error
    #[must_use]
    pub fn missing_template(template: impl Into<String>) -> Self {
        Self::MissingTemplate {
            template: template.into(),
        }
    }

    /// Create an "empty catalog" error
    #[must_use]
    pub const fn empty_catalog(table: &'static str) -> Self {
        Self::EmptyCatalog { table }
    }

    /// Whether this is the caller-facing empty-input error
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Whether this failure happened inside a generation attempt
    ///
    /// Attempt failures are discarded by the batch synthesizer instead of
    /// being surfaced to its caller.
    #[must_use]
    pub const fn is_attempt_failure(&self) -> bool {
        !self.is_empty_input()
    }
}

/// Result type for synthesis operations
pub type SynthesisResult<T> = Result<T, SynthesisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_classification() {
        let err = SynthesisError::EmptyInput;
        assert!(err.is_empty_input());
        assert!(!err.is_attempt_failure());
        assert_eq!(err.to_string(), "No ingredients selected");
    }

    #[test]
    fn test_catalog_errors_are_attempt_failures() {
        let missing = SynthesisError::missing_template("Pasta Primavera");
        assert!(missing.is_attempt_failure());
        assert!(missing.to_string().contains("Pasta Primavera"));

        let empty = SynthesisError::empty_catalog("cuisines");
        assert!(empty.is_attempt_failure());
        assert_eq!(empty.to_string(), "Catalog table 'cuisines' is empty");
    }
}
