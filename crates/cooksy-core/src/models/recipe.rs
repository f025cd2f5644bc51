// ABOUTME: Synthesized recipe record and its nutrition estimate
// ABOUTME: Immutable output of one synthesis call, owned by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Recipe difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// Simple techniques, few steps
    #[default]
    Easy,
    /// Some technique required
    Medium,
    /// Demanding; never produced by synthesis, only by reference recipes
    Hard,
}

impl Difficulty {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Approximate per-serving nutrition of a synthesized recipe
///
/// Values are rounded whole numbers. Calories follow the ingredient
/// categories; the remaining fields are drawn from fixed bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionEstimate {
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fat: u32,
    /// Fiber in grams
    pub fiber: u32,
    /// Sugar in grams
    pub sugar: u32,
    /// Sodium in milligrams
    pub sodium: u32,
}

/// A recipe produced by the synthesizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesizedRecipe {
    /// Unique identifier for this synthesis call
    pub id: Uuid,
    /// Cuisine name followed by template name
    pub title: String,
    /// Template description with a cuisine suffix
    pub description: String,
    /// Name of the template the recipe was built from
    pub template: String,
    /// Cook-time label (`15 mins`)
    pub cook_time: String,
    /// Prep-time label (`10 mins`)
    pub prep_time: String,
    /// Servings, 2 to 4
    pub servings: u8,
    /// Easy or Medium
    pub difficulty: Difficulty,
    /// Cuisine name
    pub cuisine: String,
    /// Template tags followed by the cuisine name
    pub tags: Vec<String>,
    /// Quantity lines, then the seasoning line, then the sauce line
    pub ingredients: Vec<String>,
    /// Template instructions with role placeholders substituted
    pub instructions: Vec<String>,
    /// Approximate nutrition
    pub nutrition: NutritionEstimate,
    /// Rating in [4.0, 5.0], one decimal place
    pub rating: f64,
    /// Review count, at least 50
    pub reviews: u32,
    /// When the recipe was synthesized
    pub generated_at: DateTime<Utc>,
}

impl SynthesizedRecipe {
    /// Whether the record carries the given tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Content equality ignoring the identifier and timestamp
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.template == other.template
            && self.cuisine == other.cuisine
            && self.cook_time == other.cook_time
            && self.prep_time == other.prep_time
            && self.servings == other.servings
            && self.difficulty == other.difficulty
            && self.tags == other.tags
            && self.ingredients == other.ingredients
            && self.instructions == other.instructions
            && self.nutrition == other.nutrition
            && (self.rating - other.rating).abs() < f64::EPSILON
            && self.reviews == other.reviews
    }
}
