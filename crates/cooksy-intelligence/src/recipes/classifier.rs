// ABOUTME: Sorts selected ingredients into protein, vegetable and grain buckets
// ABOUTME: Keyword match on names for protein and grain, category match for vegetables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use cooksy_core::constants::classification::{
    GRAIN_KEYWORDS, PROTEIN_KEYWORDS, VEGETABLE_CATEGORIES,
};
use cooksy_core::models::{Ingredient, RoleBucket};
use tracing::debug;

/// Selected ingredients grouped by role, in input order
///
/// Buckets are independent; an ingredient may appear in several or none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleBuckets<'a> {
    proteins: Vec<&'a Ingredient>,
    vegetables: Vec<&'a Ingredient>,
    grains: Vec<&'a Ingredient>,
}

impl<'a> RoleBuckets<'a> {
    /// Classify a selection
    #[must_use]
    pub fn classify(ingredients: &'a [Ingredient]) -> Self {
        let mut buckets = Self::default();
        for ingredient in ingredients {
            let name = ingredient.lowercase_name();
            if PROTEIN_KEYWORDS.iter().any(|k| name.contains(k)) {
                buckets.proteins.push(ingredient);
            }
            if VEGETABLE_CATEGORIES.contains(&ingredient.category.label()) {
                buckets.vegetables.push(ingredient);
            }
            if GRAIN_KEYWORDS.iter().any(|k| name.contains(k)) {
                buckets.grains.push(ingredient);
            }
        }

        debug!(
            proteins = buckets.proteins.len(),
            vegetables = buckets.vegetables.len(),
            grains = buckets.grains.len(),
            "Classified ingredient selection"
        );
        buckets
    }

    /// Ingredients in one bucket
    #[must_use]
    pub fn bucket(&self, role: RoleBucket) -> &[&'a Ingredient] {
        match role {
            RoleBucket::Protein => &self.proteins,
            RoleBucket::Vegetable => &self.vegetables,
            RoleBucket::Grain => &self.grains,
        }
    }

    /// Count of ingredients in one bucket
    #[must_use]
    pub fn count(&self, role: RoleBucket) -> usize {
        self.bucket(role).len()
    }

    /// Whether a bucket has at least one ingredient
    #[must_use]
    pub fn has(&self, role: RoleBucket) -> bool {
        !self.bucket(role).is_empty()
    }

    /// Lowercased names of a bucket joined with ", "; `None` when empty
    #[must_use]
    pub fn joined_names(&self, role: RoleBucket) -> Option<String> {
        let bucket = self.bucket(role);
        if bucket.is_empty() {
            return None;
        }
        Some(
            bucket
                .iter()
                .map(|i| i.lowercase_name())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cooksy_core::models::IngredientCategory;

    fn ingredient(name: &str, category: IngredientCategory) -> Ingredient {
        Ingredient::new(name.to_lowercase().replace(' ', "-"), name, category)
    }

    #[test]
    fn test_protein_by_name_keyword() {
        let items = vec![
            ingredient("Chicken Breast", IngredientCategory::Protein),
            ingredient("Black Beans", IngredientCategory::Legumes),
            ingredient("Salmon", IngredientCategory::Protein),
        ];
        let buckets = RoleBuckets::classify(&items);
        // salmon matches no keyword
        assert_eq!(buckets.count(RoleBucket::Protein), 2);
        assert_eq!(
            buckets.joined_names(RoleBucket::Protein).as_deref(),
            Some("chicken breast, black beans")
        );
    }

    #[test]
    fn test_vegetable_by_category() {
        let items = vec![
            ingredient("Tomato", IngredientCategory::Vegetables),
            ingredient("Kale", IngredientCategory::Produce),
            ingredient("Lemon", IngredientCategory::Fruits),
        ];
        let buckets = RoleBuckets::classify(&items);
        assert_eq!(buckets.count(RoleBucket::Vegetable), 2);
        assert!(!buckets.has(RoleBucket::Protein));
    }

    #[test]
    fn test_buckets_overlap() {
        // "Rice Beans" matches both keyword sets
        let items = vec![ingredient("Rice Beans", IngredientCategory::Vegetables)];
        let buckets = RoleBuckets::classify(&items);
        assert!(buckets.has(RoleBucket::Protein));
        assert!(buckets.has(RoleBucket::Vegetable));
        assert!(buckets.has(RoleBucket::Grain));
    }

    #[test]
    fn test_empty_selection() {
        let buckets = RoleBuckets::classify(&[]);
        for role in RoleBucket::ALL {
            assert!(!buckets.has(role));
            assert!(buckets.joined_names(role).is_none());
        }
    }
}
