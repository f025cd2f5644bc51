// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for classification, quantities, nutrition bands and batch limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large table. Everything here is read-only and process-wide; the tunables
//! that may change per deployment live in the intelligence crate's config.

/// Keyword sets used to sort ingredients into role buckets
pub mod classification {
    /// Lowercase name fragments that mark an ingredient as a protein
    pub const PROTEIN_KEYWORDS: &[&str] = &["chicken", "beef", "fish", "tofu", "eggs", "beans"];

    /// Lowercase name fragments that mark an ingredient as a grain
    pub const GRAIN_KEYWORDS: &[&str] = &["rice", "pasta", "quinoa", "bread"];

    /// Category labels that place an ingredient in the vegetable bucket
    pub const VEGETABLE_CATEGORIES: &[&str] = &["Vegetables", "Produce"];

    /// Instruction placeholder replaced by vegetable names
    pub const VEGETABLES_TOKEN: &str = "vegetables";

    /// Instruction placeholder replaced by protein names
    pub const PROTEIN_TOKEN: &str = "protein";

    /// Minimum vegetable count that selects the salad/soup rule
    pub const VEGETABLE_ABUNDANCE_THRESHOLD: usize = 3;
}

/// Ingredient-line fabrication constants
pub mod quantities {
    /// Quantity phrases drawn uniformly for each selected ingredient
    pub const QUANTITY_PHRASES: &[&str] = &[
        "1 cup", "2 cups", "3-4", "1 lb", "2 tbsp", "1/2 cup", "1 medium", "2 large",
    ];

    /// Fixed seasoning line appended after the selected ingredients
    pub const SEASONING_LINE: &str = "Salt and pepper to taste";
}

/// Nutrition estimate constants
///
/// These are category-level approximations, not per-ingredient values.
pub mod nutrition {
    /// Calories contributed per ingredient, keyed by category label
    ///
    /// Keys are matched exactly against the ingredient's category label.
    pub const CATEGORY_CALORIES: &[(&str, u32)] = &[
        ("Proteins", 150),
        ("Vegetables", 25),
        ("Fruits", 60),
        ("Dairy", 100),
        ("Grains", 130),
        ("Produce", 30),
    ];

    /// Calories for a category missing from `CATEGORY_CALORIES`
    pub const DEFAULT_CATEGORY_CALORIES: u32 = 50;

    /// Upper bound (exclusive) of the random calorie jitter
    pub const CALORIE_JITTER: f64 = 100.0;

    /// Protein band in grams: `[low, low + span)`
    pub const PROTEIN_BAND: (f64, f64) = (15.0, 20.0);
    /// Carbohydrate band in grams
    pub const CARBS_BAND: (f64, f64) = (20.0, 30.0);
    /// Fat band in grams
    pub const FAT_BAND: (f64, f64) = (8.0, 15.0);
    /// Fiber band in grams
    pub const FIBER_BAND: (f64, f64) = (3.0, 8.0);
    /// Sugar band in grams
    pub const SUGAR_BAND: (f64, f64) = (2.0, 10.0);
    /// Sodium band in milligrams
    pub const SODIUM_BAND: (f64, f64) = (300.0, 500.0);
}

/// Presentation constants for synthesized recipes
pub mod presentation {
    /// Smallest number of servings
    pub const MIN_SERVINGS: u8 = 2;
    /// Number of distinct serving sizes (2, 3 or 4)
    pub const SERVING_SPREAD: u8 = 3;

    /// Lowest rating a synthesized recipe can carry
    pub const MIN_RATING: f64 = 4.0;
    /// Highest rating a synthesized recipe can carry
    pub const MAX_RATING: f64 = 5.0;

    /// Review count floor
    pub const MIN_REVIEWS: u32 = 50;
    /// Number of distinct review counts above the floor
    pub const REVIEW_SPREAD: u32 = 500;

    /// Default prep-time label
    pub const DEFAULT_PREP_TIME: &str = "10 mins";

    /// Default probability of a Medium difficulty
    pub const DEFAULT_MEDIUM_PROBABILITY: f64 = 0.3;
}

/// Batch synthesis limits
pub mod batch {
    /// Hard cap on recipes per batch, regardless of the requested count
    pub const MAX_BATCH_SIZE: usize = 5;
    /// Count used when the caller does not ask for a specific number
    pub const DEFAULT_BATCH_SIZE: usize = 3;
}
