// ABOUTME: Recipe synthesizer combining classification, template and cuisine choice, and estimates
// ABOUTME: Single synthesis fails on empty input; batches record per-attempt outcomes and never fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Recipe Synthesizer
//!
//! Random draws happen in a fixed order for every synthesis: template choice,
//! cuisine, one quantity per ingredient, calorie jitter, protein, carbs, fat,
//! fiber, sugar, sodium, servings, difficulty, rating, reviews. Identifiers and
//! timestamps come from outside the random source, so two synthesizers fed the
//! same seed produce recipes with the same content.

use super::catalog::{SynthesisCatalog, TemplateKind};
use super::classifier::RoleBuckets;
use super::estimator::{estimate_nutrition, ingredient_lines, Presentation};
use super::instructions::render_instructions;
use super::random::RandomSource;
use super::selection::{select_cuisine, select_template, TemplateHistory};
use crate::config::SynthesisConfig;
use chrono::Utc;
use cooksy_core::constants::batch::MAX_BATCH_SIZE;
use cooksy_core::errors::{SynthesisError, SynthesisResult};
use cooksy_core::models::{Ingredient, SynthesizedRecipe};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Result of one batch attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// A recipe was added to the batch
    Produced {
        /// Title of the new recipe
        title: String,
        /// Template it was built from
        template: TemplateKind,
    },
    /// A recipe was synthesized but its title was already in the batch
    DuplicateTitle {
        /// The repeated title
        title: String,
    },
    /// Synthesis failed for this attempt
    Failed {
        /// Why the attempt failed
        #[serde(serialize_with = "serialize_error")]
        error: SynthesisError,
    },
}

fn serialize_error<S: serde::Serializer>(
    error: &SynthesisError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Recipes of a batch plus what happened on each attempt
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Produced recipes, in attempt order, titles unique
    pub recipes: Vec<SynthesizedRecipe>,
    /// One entry per attempt
    pub attempts: Vec<AttemptOutcome>,
}

impl BatchReport {
    /// Number of attempts that produced a recipe
    #[must_use]
    pub fn produced_count(&self) -> usize {
        self.recipes.len()
    }

    /// Number of attempts skipped for a repeated title
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| matches!(a, AttemptOutcome::DuplicateTitle { .. }))
            .count()
    }

    /// Errors of failed attempts
    pub fn failures(&self) -> impl Iterator<Item = &SynthesisError> {
        self.attempts.iter().filter_map(|a| match a {
            AttemptOutcome::Failed { error } => Some(error),
            _ => None,
        })
    }

    /// Drop the attempt log and keep the recipes
    #[must_use]
    pub fn into_recipes(self) -> Vec<SynthesizedRecipe> {
        self.recipes
    }
}

/// Recipe synthesizer bound to a catalog and configuration
#[derive(Debug, Clone)]
pub struct RecipeSynthesizer<'c> {
    catalog: &'c SynthesisCatalog,
    config: SynthesisConfig,
}

impl Default for RecipeSynthesizer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeSynthesizer<'static> {
    /// Synthesizer over the built-in catalog and the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(SynthesisCatalog::builtin(), SynthesisConfig::global().clone())
    }
}

impl<'c> RecipeSynthesizer<'c> {
    /// Synthesizer over an explicit catalog and configuration
    #[must_use]
    pub const fn with_catalog(catalog: &'c SynthesisCatalog, config: SynthesisConfig) -> Self {
        Self { catalog, config }
    }

    /// Replace the configuration
    #[must_use]
    pub fn with_config(mut self, config: SynthesisConfig) -> Self {
        self.config = config;
        self
    }

    /// Catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &'c SynthesisCatalog {
        self.catalog
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Synthesize one recipe
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for an empty selection, or a catalog error when a
    /// required table or template is missing
    pub fn synthesize(
        &self,
        ingredients: &[Ingredient],
        rng: &mut dyn RandomSource,
    ) -> SynthesisResult<SynthesizedRecipe> {
        self.synthesize_with_history(ingredients, None, rng)
            .map(|(recipe, _)| recipe)
    }

    fn synthesize_with_history(
        &self,
        ingredients: &[Ingredient],
        history: Option<&TemplateHistory>,
        rng: &mut dyn RandomSource,
    ) -> SynthesisResult<(SynthesizedRecipe, TemplateKind)> {
        if ingredients.is_empty() {
            return Err(SynthesisError::EmptyInput);
        }

        let buckets = RoleBuckets::classify(ingredients);
        let template = select_template(&buckets, self.catalog, history, rng)?;
        let cuisine = select_cuisine(self.catalog, rng)?;
        let lines = ingredient_lines(ingredients, self.catalog, cuisine, rng)?;
        let nutrition = estimate_nutrition(ingredients, rng);
        let presentation = Presentation::draw(rng, self.config.medium_difficulty_probability);

        let mut tags = template.tags.clone();
        tags.push(cuisine.name.clone());

        let recipe = SynthesizedRecipe {
            id: Uuid::new_v4(),
            title: format!("{} {}", cuisine.name, template.name),
            description: format!(
                "{} with a {} twist",
                template.description,
                cuisine.name.to_lowercase()
            ),
            template: template.name.clone(),
            cook_time: template.cook_time.clone(),
            prep_time: self.config.prep_time_label.clone(),
            servings: presentation.servings,
            difficulty: presentation.difficulty,
            cuisine: cuisine.name.clone(),
            tags,
            ingredients: lines,
            instructions: render_instructions(&template.instructions, &buckets),
            nutrition,
            rating: presentation.rating,
            reviews: presentation.reviews,
            generated_at: Utc::now(),
        };

        debug!(title = %recipe.title, calories = recipe.nutrition.calories, "Synthesized recipe");
        Ok((recipe, template.kind))
    }

    /// Synthesize up to `count` recipes (capped at the batch maximum)
    ///
    /// `None` uses the configured default batch size. Titles within the batch
    /// are unique; failed attempts are logged and skipped. An empty selection
    /// yields an empty report.
    pub fn synthesize_batch(
        &self,
        ingredients: &[Ingredient],
        count: Option<usize>,
        rng: &mut dyn RandomSource,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        if ingredients.is_empty() {
            debug!("Empty ingredient selection, skipping batch");
            return report;
        }

        let attempts = count
            .unwrap_or(self.config.default_batch_size)
            .min(MAX_BATCH_SIZE);
        let template_count = self.catalog.templates().len();
        let mut history = TemplateHistory::new();

        for attempt in 0..attempts {
            history.reset_if_exhausted(template_count);
            let steer = self.config.vary_templates.then_some(&history);

            let outcome = match self.synthesize_with_history(ingredients, steer, rng) {
                Ok((recipe, kind)) => {
                    if report.recipes.iter().any(|r| r.title == recipe.title) {
                        debug!(attempt, title = %recipe.title, "Skipping duplicate recipe title");
                        AttemptOutcome::DuplicateTitle {
                            title: recipe.title,
                        }
                    } else {
                        history.record(kind);
                        let outcome = AttemptOutcome::Produced {
                            title: recipe.title.clone(),
                            template: kind,
                        };
                        report.recipes.push(recipe);
                        outcome
                    }
                }
                Err(error) => {
                    warn!(attempt, error = %error, "Recipe synthesis attempt failed");
                    AttemptOutcome::Failed { error }
                }
            };
            report.attempts.push(outcome);
        }

        info!(
            attempts,
            produced = report.produced_count(),
            duplicates = report.duplicate_count(),
            failed = report.failures().count(),
            "Recipe batch complete"
        );
        report
    }

    /// Synthesize up to `count` recipes, discarding the attempt log
    pub fn synthesize_many(
        &self,
        ingredients: &[Ingredient],
        count: Option<usize>,
        rng: &mut dyn RandomSource,
    ) -> Vec<SynthesizedRecipe> {
        self.synthesize_batch(ingredients, count, rng).into_recipes()
    }
}

/// Synthesize one recipe with the built-in catalog and global configuration
///
/// # Errors
///
/// Returns `EmptyInput` when `ingredients` is empty
pub fn synthesize_recipe(
    ingredients: &[Ingredient],
    rng: &mut dyn RandomSource,
) -> SynthesisResult<SynthesizedRecipe> {
    RecipeSynthesizer::new().synthesize(ingredients, rng)
}

/// Synthesize up to `min(count, 5)` recipes with the built-in catalog
///
/// Never fails; returns an empty list for an empty selection.
pub fn synthesize_recipes(
    ingredients: &[Ingredient],
    count: Option<usize>,
    rng: &mut dyn RandomSource,
) -> Vec<SynthesizedRecipe> {
    RecipeSynthesizer::new().synthesize_many(ingredients, count, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::catalog::CuisineVariation;
    use crate::recipes::random::{RngSource, ScriptedSource};
    use cooksy_core::models::{Difficulty, IngredientCategory};

    fn selection() -> Vec<Ingredient> {
        vec![
            Ingredient::new("chicken-breast", "Chicken Breast", IngredientCategory::Protein),
            Ingredient::new("broccoli", "Broccoli", IngredientCategory::Vegetables),
        ]
    }

    fn synthesizer() -> RecipeSynthesizer<'static> {
        RecipeSynthesizer::with_catalog(SynthesisCatalog::builtin(), SynthesisConfig::default())
    }

    #[test]
    fn test_empty_input_rejected() {
        let mut rng = RngSource::seeded(1);
        let err = synthesizer().synthesize(&[], &mut rng).unwrap_err();
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_scripted_recipe_fields() {
        // 0.9 everywhere: Stir-Fry, last cuisine, last quantity, high bands
        let mut rng = ScriptedSource::constant(0.9);
        let recipe = synthesizer().synthesize(&selection(), &mut rng).unwrap();

        assert_eq!(recipe.title, "Indian Savory Stir-Fry");
        assert_eq!(
            recipe.description,
            "A quick and delicious stir-fry featuring your fresh ingredients with a indian twist"
        );
        assert_eq!(recipe.template, "Savory Stir-Fry");
        assert_eq!(recipe.cook_time, "15 mins");
        assert_eq!(recipe.prep_time, "10 mins");
        assert_eq!(recipe.cuisine, "Indian");
        assert_eq!(recipe.tags, vec!["Quick", "Healthy", "One-Pan", "Indian"]);
        assert_eq!(
            recipe.ingredients,
            vec![
                "2 large Chicken Breast",
                "2 large Broccoli",
                "Salt and pepper to taste",
                "spiced yogurt",
            ]
        );
        assert_eq!(recipe.instructions[1], "Add chicken breast and cook until nearly done");
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.servings, 4);
        assert!((recipe.rating - 4.9).abs() < 1e-9);
        assert_eq!(recipe.reviews, 500);
        // 50 (Protein falls back) + 25 + 90
        assert_eq!(recipe.nutrition.calories, 165);
        assert_eq!(rng.draws(), 15);
    }

    #[test]
    fn test_same_seed_same_content() {
        let a = synthesizer()
            .synthesize(&selection(), &mut RngSource::seeded(99))
            .unwrap();
        let b = synthesizer()
            .synthesize(&selection(), &mut RngSource::seeded(99))
            .unwrap();
        assert!(a.same_content(&b));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_batch_capped_at_five() {
        let mut rng = RngSource::seeded(3);
        let report = synthesizer().synthesize_batch(&selection(), Some(10), &mut rng);
        assert_eq!(report.attempts.len(), 5);
        assert!(report.recipes.len() <= 5);
    }

    #[test]
    fn test_batch_default_count_from_config() {
        let config = SynthesisConfig {
            default_batch_size: 2,
            ..SynthesisConfig::default()
        };
        let synth = synthesizer().with_config(config);
        let report = synth.synthesize_batch(&selection(), None, &mut RngSource::seeded(5));
        assert_eq!(report.attempts.len(), 2);
    }

    #[test]
    fn test_batch_skips_duplicate_titles() {
        // one cuisine and a constant draw force the same title every attempt
        let catalog = SynthesisCatalog::new(
            SynthesisCatalog::builtin().templates().to_vec(),
            vec![CuisineVariation::new("Asian", &["ginger"], "soy-ginger glaze")],
        );
        let config = SynthesisConfig {
            vary_templates: false,
            ..SynthesisConfig::default()
        };
        let synth = RecipeSynthesizer::with_catalog(&catalog, config);
        let mut rng = ScriptedSource::constant(0.9);
        let report = synth.synthesize_batch(&selection(), Some(3), &mut rng);

        assert_eq!(report.produced_count(), 1);
        assert_eq!(report.duplicate_count(), 2);
        assert_eq!(report.recipes[0].title, "Asian Savory Stir-Fry");
    }

    #[test]
    fn test_batch_varies_templates() {
        let catalog = SynthesisCatalog::new(
            SynthesisCatalog::builtin().templates().to_vec(),
            vec![CuisineVariation::new("Asian", &["ginger"], "soy-ginger glaze")],
        );
        let synth = RecipeSynthesizer::with_catalog(&catalog, SynthesisConfig::default());
        let mut rng = ScriptedSource::constant(0.9);
        let report = synth.synthesize_batch(&selection(), Some(2), &mut rng);

        let titles: Vec<&str> = report.recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Asian Savory Stir-Fry", "Asian Protein Bowl"]);
    }

    #[test]
    fn test_batch_records_failed_attempts() {
        let catalog = SynthesisCatalog::new(SynthesisCatalog::builtin().templates().to_vec(), vec![]);
        let synth = RecipeSynthesizer::with_catalog(&catalog, SynthesisConfig::default());
        let report = synth.synthesize_batch(&selection(), Some(3), &mut RngSource::seeded(8));

        assert!(report.recipes.is_empty());
        assert_eq!(report.failures().count(), 3);
        assert!(report
            .failures()
            .all(|e| *e == SynthesisError::empty_catalog("cuisines")));
    }

    #[test]
    fn test_batch_empty_input() {
        let report = synthesizer().synthesize_batch(&[], Some(3), &mut RngSource::seeded(1));
        assert!(report.recipes.is_empty());
        assert!(report.attempts.is_empty());
    }
}
