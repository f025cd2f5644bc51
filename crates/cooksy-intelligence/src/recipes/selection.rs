// ABOUTME: Template and cuisine selection from classified ingredient buckets
// ABOUTME: Ordered rules pick a candidate set, batch history steers toward unused templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Template Selection
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. protein and vegetables present: Stir-Fry or Protein Bowl
//! 2. at least three vegetables: Salad or Soup
//! 3. grain and vegetables present: Pasta Primavera
//! 4. otherwise any template
//!
//! Every rule except the fixed one consumes exactly one random draw, so the
//! draw sequence of a synthesis does not depend on the batch history.

use super::catalog::{CuisineVariation, RecipeTemplate, SynthesisCatalog, TemplateKind};
use super::classifier::RoleBuckets;
use super::random::RandomSource;
use cooksy_core::constants::classification::VEGETABLE_ABUNDANCE_THRESHOLD;
use cooksy_core::errors::{SynthesisError, SynthesisResult};
use cooksy_core::models::RoleBucket;
use std::collections::HashSet;
use tracing::debug;

/// Which selection rule matched a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    /// Protein and vegetables present
    ProteinWithVegetables,
    /// Enough vegetables for a salad or soup
    AbundantVegetables,
    /// Grain and vegetables present
    GrainWithVegetables,
    /// Nothing more specific matched
    Any,
}

impl SelectionRule {
    /// First rule matching the buckets
    #[must_use]
    pub fn for_buckets(buckets: &RoleBuckets<'_>) -> Self {
        let has_vegetables = buckets.has(RoleBucket::Vegetable);
        if buckets.has(RoleBucket::Protein) && has_vegetables {
            Self::ProteinWithVegetables
        } else if buckets.count(RoleBucket::Vegetable) >= VEGETABLE_ABUNDANCE_THRESHOLD {
            Self::AbundantVegetables
        } else if buckets.has(RoleBucket::Grain) && has_vegetables {
            Self::GrainWithVegetables
        } else {
            Self::Any
        }
    }

    /// Template kinds this rule chooses between
    ///
    /// For two-way rules the first kind wins on a coin flip above one half.
    #[must_use]
    pub fn candidates(&self, catalog: &SynthesisCatalog) -> Vec<TemplateKind> {
        match self {
            Self::ProteinWithVegetables => vec![TemplateKind::StirFry, TemplateKind::ProteinBowl],
            Self::AbundantVegetables => vec![TemplateKind::Salad, TemplateKind::Soup],
            Self::GrainWithVegetables => vec![TemplateKind::PastaPrimavera],
            Self::Any => catalog.template_kinds(),
        }
    }

    /// Whether the rule always yields the same template without drawing
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::GrainWithVegetables)
    }
}

/// Templates already used within one batch
#[derive(Debug, Clone, Default)]
pub struct TemplateHistory {
    used: HashSet<TemplateKind>,
}

impl TemplateHistory {
    /// Empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a used template
    pub fn record(&mut self, kind: TemplateKind) {
        self.used.insert(kind);
    }

    /// Whether a template was used
    #[must_use]
    pub fn contains(&self, kind: TemplateKind) -> bool {
        self.used.contains(&kind)
    }

    /// Number of distinct templates used
    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Whether no template was used yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Forget every recorded template once the whole catalog has been used
    pub fn reset_if_exhausted(&mut self, catalog_size: usize) {
        if catalog_size > 0 && self.used.len() >= catalog_size {
            self.used.clear();
        }
    }

    /// Narrow candidates to unused ones; all of them when every one was used
    #[must_use]
    pub fn prefer_unused(&self, candidates: Vec<TemplateKind>) -> Vec<TemplateKind> {
        let unused: Vec<TemplateKind> = candidates
            .iter()
            .copied()
            .filter(|k| !self.contains(*k))
            .collect();
        if unused.is_empty() {
            candidates
        } else {
            unused
        }
    }
}

/// Pick a template for the buckets
///
/// With a history, candidates already used in the batch are avoided when an
/// unused one exists.
///
/// # Errors
///
/// Returns `EmptyCatalog` when the catalog has no templates, or
/// `MissingTemplate` when the matched rule names a template the catalog lacks
pub fn select_template<'c>(
    buckets: &RoleBuckets<'_>,
    catalog: &'c SynthesisCatalog,
    history: Option<&TemplateHistory>,
    rng: &mut dyn RandomSource,
) -> SynthesisResult<&'c RecipeTemplate> {
    if catalog.templates().is_empty() {
        return Err(SynthesisError::empty_catalog("templates"));
    }

    let rule = SelectionRule::for_buckets(buckets);
    let mut candidates = rule.candidates(catalog);
    if let Some(history) = history {
        candidates = history.prefer_unused(candidates);
    }

    let kind = if rule.is_fixed() {
        candidates
            .first()
            .copied()
            .ok_or_else(|| SynthesisError::empty_catalog("templates"))?
    } else {
        draw_candidate(&candidates, rng)?
    };

    debug!(?rule, template = %kind, "Selected recipe template");
    catalog.template(kind)
}

fn draw_candidate(
    candidates: &[TemplateKind],
    rng: &mut dyn RandomSource,
) -> SynthesisResult<TemplateKind> {
    match candidates {
        [] => Err(SynthesisError::empty_catalog("templates")),
        [first, second] => Ok(if rng.coin_flip() { *first } else { *second }),
        _ => Ok(candidates[rng.pick_index(candidates.len())]),
    }
}

/// Pick a cuisine uniformly
///
/// # Errors
///
/// Returns `EmptyCatalog` when the catalog has no cuisines
pub fn select_cuisine<'c>(
    catalog: &'c SynthesisCatalog,
    rng: &mut dyn RandomSource,
) -> SynthesisResult<&'c CuisineVariation> {
    let cuisines = catalog.cuisines();
    if cuisines.is_empty() {
        return Err(SynthesisError::empty_catalog("cuisines"));
    }
    let cuisine = &cuisines[rng.pick_index(cuisines.len())];
    debug!(cuisine = %cuisine.name, "Selected cuisine variation");
    Ok(cuisine)
}
