// ABOUTME: Synthesis configuration with environment variable overrides and validation
// ABOUTME: Holds batch defaults, difficulty odds, prep-time label, and template variety switch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! Synthesis Configuration
//!
//! Tunables for the recipe synthesizer. Values that back an output invariant
//! (batch cap, rating bounds, review floor) are constants in `cooksy-core` and
//! deliberately absent here.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `COOKSY_DEFAULT_BATCH_SIZE` | `default_batch_size` |
//! | `COOKSY_MEDIUM_DIFFICULTY_PROBABILITY` | `medium_difficulty_probability` |
//! | `COOKSY_PREP_TIME_LABEL` | `prep_time_label` |
//! | `COOKSY_VARY_TEMPLATES` | `vary_templates` |

use super::error::ConfigError;
use cooksy_core::constants::{batch, presentation};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static SYNTHESIS_CONFIG: OnceLock<SynthesisConfig> = OnceLock::new();

/// Recipe synthesizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Number of recipes a batch produces when the caller does not specify one
    pub default_batch_size: usize,
    /// Probability that a synthesized recipe is marked Medium instead of Easy
    pub medium_difficulty_probability: f64,
    /// Prep-time label attached to every synthesized recipe
    pub prep_time_label: String,
    /// Prefer templates not yet used in the current batch
    pub vary_templates: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            default_batch_size: batch::DEFAULT_BATCH_SIZE,
            medium_difficulty_probability: presentation::DEFAULT_MEDIUM_PROBABILITY,
            prep_time_label: presentation::DEFAULT_PREP_TIME.to_owned(),
            vary_templates: true,
        }
    }
}

impl SynthesisConfig {
    /// Get the global configuration instance
    ///
    /// Loaded from the environment on first use; invalid environment values
    /// fall back to defaults with a warning.
    pub fn global() -> &'static Self {
        SYNTHESIS_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!("Failed to load synthesis config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_batch_size == 0 || self.default_batch_size > batch::MAX_BATCH_SIZE {
            return Err(ConfigError::ValueOutOfRange(
                "default_batch_size must be between 1 and the batch cap",
            ));
        }

        if !(0.0..=1.0).contains(&self.medium_difficulty_probability) {
            return Err(ConfigError::ValueOutOfRange(
                "medium_difficulty_probability must be within [0, 1]",
            ));
        }

        if self.prep_time_label.trim().is_empty() {
            return Err(ConfigError::MissingField("prep_time_label"));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("COOKSY_DEFAULT_BATCH_SIZE", &mut self.default_batch_size)?;
        Self::apply_env_var(
            "COOKSY_MEDIUM_DIFFICULTY_PROBABILITY",
            &mut self.medium_difficulty_probability,
        )?;
        Self::apply_env_var("COOKSY_VARY_TEMPLATES", &mut self.vary_templates)?;

        if let Ok(label) = env::var("COOKSY_PREP_TIME_LABEL") {
            self.prep_time_label = label;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "COOKSY_DEFAULT_BATCH_SIZE",
        "COOKSY_MEDIUM_DIFFICULTY_PROBABILITY",
        "COOKSY_PREP_TIME_LABEL",
        "COOKSY_VARY_TEMPLATES",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = SynthesisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_batch_size, 3);
        assert!((config.medium_difficulty_probability - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.prep_time_label, "10 mins");
        assert!(config.vary_templates);
    }

    #[test]
    #[serial]
    fn test_env_overrides_applied() {
        clear_env();
        env::set_var("COOKSY_DEFAULT_BATCH_SIZE", "5");
        env::set_var("COOKSY_MEDIUM_DIFFICULTY_PROBABILITY", "0.5");
        env::set_var("COOKSY_PREP_TIME_LABEL", "15 mins");
        env::set_var("COOKSY_VARY_TEMPLATES", "false");

        let config = SynthesisConfig::from_env().unwrap();
        assert_eq!(config.default_batch_size, 5);
        assert!((config.medium_difficulty_probability - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.prep_time_label, "15 mins");
        assert!(!config.vary_templates);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_env_value_rejected() {
        clear_env();
        env::set_var("COOKSY_DEFAULT_BATCH_SIZE", "many");

        let err = SynthesisConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_batch_size_above_cap_rejected() {
        clear_env();
        env::set_var("COOKSY_DEFAULT_BATCH_SIZE", "9");

        let err = SynthesisConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange(_)));

        clear_env();
    }

    #[test]
    fn test_probability_outside_unit_interval_rejected() {
        let config = SynthesisConfig {
            medium_difficulty_probability: 1.5,
            ..SynthesisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(msg)) if msg.starts_with("medium_difficulty_probability")
        ));
    }

    #[test]
    fn test_blank_prep_label_rejected() {
        let config = SynthesisConfig {
            prep_time_label: "  ".into(),
            ..SynthesisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField("prep_time_label"))
        ));
    }
}
