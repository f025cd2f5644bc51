// ABOUTME: Static template and cuisine tables consulted by the synthesizer
// ABOUTME: Built-in catalog is initialised once and shared process-wide, read-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Synthesis Catalog
//!
//! Five recipe templates and five cuisine variations. The built-in catalog is a
//! process-wide constant; [`SynthesisCatalog::new`] exists so tests and callers
//! can supply reduced or alternative tables.

use cooksy_core::constants::quantities::QUANTITY_PHRASES;
use cooksy_core::errors::{SynthesisError, SynthesisResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static BUILTIN_CATALOG: OnceLock<SynthesisCatalog> = OnceLock::new();

/// Identity of a template, independent of its display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Quick wok dish
    StirFry,
    /// No-cook salad
    Salad,
    /// Simmered soup
    Soup,
    /// Pasta with vegetables
    PastaPrimavera,
    /// Grain bowl with protein
    ProteinBowl,
}

impl TemplateKind {
    /// Short name used in logs and errors
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::StirFry => "Stir-Fry",
            Self::Salad => "Salad",
            Self::Soup => "Soup",
            Self::PastaPrimavera => "Pasta Primavera",
            Self::ProteinBowl => "Protein Bowl",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A recipe skeleton combined with a cuisine at synthesis time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeTemplate {
    /// Which template this is
    pub kind: TemplateKind,
    /// Display name (`Savory Stir-Fry`)
    pub name: String,
    /// Cook-time label
    pub cook_time: String,
    /// Description before the cuisine suffix
    pub description: String,
    /// Ingredient roles the template is built around
    pub roles: Vec<String>,
    /// Steps, possibly containing role placeholders
    pub instructions: Vec<String>,
    /// Descriptive tags
    pub tags: Vec<String>,
}

impl RecipeTemplate {
    fn from_parts(
        kind: TemplateKind,
        name: &str,
        cook_time: &str,
        description: &str,
        roles: &[&str],
        instructions: &[&str],
        tags: &[&str],
    ) -> Self {
        Self {
            kind,
            name: name.to_owned(),
            cook_time: cook_time.to_owned(),
            description: description.to_owned(),
            roles: to_strings(roles),
            instructions: to_strings(instructions),
            tags: to_strings(tags),
        }
    }
}

/// Flavour profile applied on top of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineVariation {
    /// Cuisine name (`Mediterranean`)
    pub name: String,
    /// Characteristic spices
    pub spices: Vec<String>,
    /// Sauce or dressing line appended to the ingredient list
    pub sauce: String,
}

impl CuisineVariation {
    /// Create a cuisine variation
    #[must_use]
    pub fn new(name: &str, spices: &[&str], sauce: &str) -> Self {
        Self {
            name: name.to_owned(),
            spices: to_strings(spices),
            sauce: sauce.to_owned(),
        }
    }
}

/// Template, cuisine and quantity tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisCatalog {
    templates: Vec<RecipeTemplate>,
    cuisines: Vec<CuisineVariation>,
    quantity_phrases: Vec<String>,
}

impl SynthesisCatalog {
    /// Catalog from explicit tables, using the default quantity phrases
    #[must_use]
    pub fn new(templates: Vec<RecipeTemplate>, cuisines: Vec<CuisineVariation>) -> Self {
        Self {
            templates,
            cuisines,
            quantity_phrases: to_strings(QUANTITY_PHRASES),
        }
    }

    /// Replace the quantity phrases
    #[must_use]
    pub fn with_quantity_phrases(mut self, phrases: Vec<String>) -> Self {
        self.quantity_phrases = phrases;
        self
    }

    /// The shared built-in catalog
    pub fn builtin() -> &'static Self {
        BUILTIN_CATALOG.get_or_init(|| Self::new(builtin_templates(), builtin_cuisines()))
    }

    /// All templates in catalog order
    #[must_use]
    pub fn templates(&self) -> &[RecipeTemplate] {
        &self.templates
    }

    /// All cuisines in catalog order
    #[must_use]
    pub fn cuisines(&self) -> &[CuisineVariation] {
        &self.cuisines
    }

    /// Quantity phrases drawn for ingredient lines
    #[must_use]
    pub fn quantity_phrases(&self) -> &[String] {
        &self.quantity_phrases
    }

    /// Look up a template by kind
    ///
    /// # Errors
    ///
    /// Returns `MissingTemplate` if the catalog does not carry that template
    pub fn template(&self, kind: TemplateKind) -> SynthesisResult<&RecipeTemplate> {
        self.templates
            .iter()
            .find(|t| t.kind == kind)
            .ok_or_else(|| SynthesisError::missing_template(kind.short_name()))
    }

    /// Look up a cuisine by name, case-insensitively
    #[must_use]
    pub fn cuisine(&self, name: &str) -> Option<&CuisineVariation> {
        self.cuisines
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Template kinds present in the catalog, in catalog order
    #[must_use]
    pub fn template_kinds(&self) -> Vec<TemplateKind> {
        self.templates.iter().map(|t| t.kind).collect()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn builtin_templates() -> Vec<RecipeTemplate> {
    vec![
        RecipeTemplate::from_parts(
            TemplateKind::StirFry,
            "Savory Stir-Fry",
            "15 mins",
            "A quick and delicious stir-fry featuring your fresh ingredients",
            &["protein", "vegetables"],
            &[
                "Heat oil in a large pan or wok over high heat",
                "Add protein and cook until nearly done",
                "Add harder vegetables first, then softer ones",
                "Season with salt, pepper, and your choice of sauce",
                "Stir-fry for 2-3 minutes until vegetables are tender-crisp",
                "Serve immediately over rice or noodles",
            ],
            &["Quick", "Healthy", "One-Pan"],
        ),
        RecipeTemplate::from_parts(
            TemplateKind::Salad,
            "Fresh Garden Salad",
            "10 mins",
            "A vibrant salad showcasing the best of your fresh ingredients",
            &["vegetables", "greens"],
            &[
                "Wash and prepare all vegetables",
                "Chop vegetables into bite-sized pieces",
                "Arrange greens in a large bowl",
                "Add prepared vegetables on top",
                "Drizzle with olive oil and vinegar",
                "Season with salt and pepper to taste",
                "Toss gently and serve immediately",
            ],
            &["Healthy", "Fresh", "No-Cook"],
        ),
        RecipeTemplate::from_parts(
            TemplateKind::Soup,
            "Hearty Soup",
            "30 mins",
            "A comforting soup made with your available ingredients",
            &["vegetables", "herbs"],
            &[
                "Heat oil in a large pot over medium heat",
                "Sauté onions and garlic until fragrant",
                "Add harder vegetables and cook for 5 minutes",
                "Pour in broth or water to cover vegetables",
                "Bring to a boil, then simmer for 20 minutes",
                "Add softer vegetables and herbs in the last 5 minutes",
                "Season with salt and pepper to taste",
            ],
            &["Comfort", "Healthy", "One-Pot"],
        ),
        RecipeTemplate::from_parts(
            TemplateKind::PastaPrimavera,
            "Pasta Primavera",
            "20 mins",
            "A colorful pasta dish highlighting your fresh vegetables",
            &["vegetables", "herbs"],
            &[
                "Cook pasta according to package directions",
                "Heat olive oil in a large pan",
                "Sauté garlic until fragrant",
                "Add vegetables in order of cooking time needed",
                "Cook until vegetables are tender",
                "Drain pasta and add to the pan",
                "Toss with vegetables and fresh herbs",
                "Serve with grated cheese if desired",
            ],
            &["Vegetarian", "Colorful", "Italian"],
        ),
        RecipeTemplate::from_parts(
            TemplateKind::ProteinBowl,
            "Protein Bowl",
            "25 mins",
            "A nutritious bowl combining protein with your selected ingredients",
            &["protein", "vegetables"],
            &[
                "Season and cook protein according to type",
                "Prepare vegetables by roasting or steaming",
                "Cook grains or prepare base as desired",
                "Arrange all components in a bowl",
                "Drizzle with sauce or dressing",
                "Garnish with fresh herbs or nuts",
                "Serve warm or at room temperature",
            ],
            &["Healthy", "Balanced", "Customizable"],
        ),
    ]
}

fn builtin_cuisines() -> Vec<CuisineVariation> {
    vec![
        CuisineVariation::new(
            "Mediterranean",
            &["oregano", "basil", "garlic"],
            "olive oil and lemon",
        ),
        CuisineVariation::new(
            "Asian",
            &["ginger", "soy sauce", "sesame"],
            "soy-ginger glaze",
        ),
        CuisineVariation::new(
            "Mexican",
            &["cumin", "paprika", "lime"],
            "lime-cilantro dressing",
        ),
        CuisineVariation::new("Italian", &["basil", "oregano", "garlic"], "herb oil"),
        CuisineVariation::new(
            "Indian",
            &["turmeric", "cumin", "coriander"],
            "spiced yogurt",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables() {
        let catalog = SynthesisCatalog::builtin();
        assert_eq!(catalog.templates().len(), 5);
        assert_eq!(catalog.cuisines().len(), 5);
        assert_eq!(catalog.quantity_phrases().len(), 8);
    }

    #[test]
    fn test_every_kind_present_once() {
        let kinds = SynthesisCatalog::builtin().template_kinds();
        assert_eq!(
            kinds,
            vec![
                TemplateKind::StirFry,
                TemplateKind::Salad,
                TemplateKind::Soup,
                TemplateKind::PastaPrimavera,
                TemplateKind::ProteinBowl,
            ]
        );
    }

    #[test]
    fn test_template_lookup() {
        let catalog = SynthesisCatalog::builtin();
        let soup = catalog.template(TemplateKind::Soup).unwrap();
        assert_eq!(soup.name, "Hearty Soup");
        assert_eq!(soup.cook_time, "30 mins");
        assert_eq!(soup.instructions.len(), 7);
    }

    #[test]
    fn test_missing_template_reported() {
        let catalog = SynthesisCatalog::new(Vec::new(), builtin_cuisines());
        let err = catalog.template(TemplateKind::Salad).unwrap_err();
        assert_eq!(err, SynthesisError::missing_template("Salad"));
    }

    #[test]
    fn test_cuisine_lookup_ignores_case() {
        let catalog = SynthesisCatalog::builtin();
        let indian = catalog.cuisine("indian").unwrap();
        assert_eq!(indian.sauce, "spiced yogurt");
        assert!(catalog.cuisine("Nordic").is_none());
    }
}
