// ABOUTME: Built-in reference recipes used for suggestions and the demo meal plan
// ABOUTME: Five curated recipes with ingredient amounts, steps, nutrition and tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use crate::errors::{CatalogError, CatalogResult};
use cooksy_core::models::{Difficulty, MacroNutrition, RecipeIngredientRef, ReferenceRecipe};
use std::sync::OnceLock;

static RECIPES: OnceLock<Vec<ReferenceRecipe>> = OnceLock::new();

struct Draft {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    ingredients: &'static [(&'static str, &'static str)],
    cook_time_minutes: u32,
    servings: u8,
    difficulty: Difficulty,
    instructions: &'static [&'static str],
    nutrition: MacroNutrition,
    tags: &'static [&'static str],
}

impl Draft {
    fn build(self) -> ReferenceRecipe {
        ReferenceRecipe {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            ingredients: self
                .ingredients
                .iter()
                .map(|(id, amount)| RecipeIngredientRef {
                    ingredient_id: (*id).to_owned(),
                    amount: (*amount).to_owned(),
                })
                .collect(),
            cook_time_minutes: self.cook_time_minutes,
            servings: self.servings,
            difficulty: self.difficulty,
            instructions: self.instructions.iter().map(|s| (*s).to_owned()).collect(),
            nutrition: self.nutrition,
            tags: self.tags.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

fn drafts() -> [Draft; 5] {
    [
        Draft {
            id: "chicken-tomato-pasta",
            title: "Creamy Chicken Tomato Pasta",
            description: "A delicious pasta dish with tender chicken, fresh tomatoes, and a creamy sauce.",
            ingredients: &[
                ("pasta", "400g"),
                ("chicken-breast", "500g"),
                ("tomato", "3 large"),
                ("onion", "1 medium"),
                ("garlic", "3 cloves"),
                ("olive-oil", "2 tbsp"),
            ],
            cook_time_minutes: 25,
            servings: 4,
            difficulty: Difficulty::Medium,
            instructions: &[
                "Boil salted water in a large pot and cook pasta according to package directions.",
                "Cut chicken breast into bite-sized pieces and season with salt and pepper.",
                "Heat olive oil in a large skillet over medium-high heat.",
                "Cook chicken pieces until golden brown and cooked through, about 6-8 minutes.",
                "Add diced onion and cook until softened, about 3 minutes.",
                "Add minced garlic and cook for another minute.",
                "Add diced tomatoes and cook until they start to break down, about 5 minutes.",
                "Drain pasta and add to the skillet with chicken and tomatoes.",
                "Toss everything together and serve hot.",
            ],
            nutrition: MacroNutrition::new(485, 35, 55, 12, 4),
            tags: &["Italian", "Comfort Food", "High Protein"],
        },
        Draft {
            id: "salmon-quinoa-bowl",
            title: "Grilled Salmon Quinoa Bowl",
            description: "Healthy bowl with grilled salmon, fluffy quinoa, and fresh vegetables.",
            ingredients: &[
                ("salmon", "300g"),
                ("quinoa", "1 cup"),
                ("avocado", "1 large"),
                ("broccoli", "200g"),
                ("lemon", "1 whole"),
            ],
            cook_time_minutes: 20,
            servings: 2,
            difficulty: Difficulty::Easy,
            instructions: &[
                "Rinse quinoa and cook in 2 cups of water until fluffy, about 15 minutes.",
                "Season salmon fillets with salt, pepper, and lemon juice.",
                "Heat a grill pan or skillet over medium-high heat.",
                "Cook salmon for 4-5 minutes per side until cooked through.",
                "Steam broccoli until tender-crisp, about 5 minutes.",
                "Slice avocado and prepare lemon wedges.",
                "Divide quinoa between bowls and top with salmon, broccoli, and avocado.",
                "Serve with lemon wedges and enjoy!",
            ],
            nutrition: MacroNutrition::new(520, 32, 45, 22, 8),
            tags: &["Healthy", "High Protein", "Gluten-Free"],
        },
        Draft {
            id: "veggie-stir-fry",
            title: "Colorful Vegetable Stir Fry",
            description: "A vibrant mix of fresh vegetables stir-fried to perfection.",
            ingredients: &[
                ("bell-pepper", "2 large"),
                ("broccoli", "300g"),
                ("mushrooms", "200g"),
                ("onion", "1 medium"),
                ("garlic", "3 cloves"),
                ("rice", "1.5 cups"),
            ],
            cook_time_minutes: 15,
            servings: 3,
            difficulty: Difficulty::Easy,
            instructions: &[
                "Cook rice according to package directions.",
                "Cut all vegetables into bite-sized pieces.",
                "Heat oil in a large wok or skillet over high heat.",
                "Add onion and garlic, stir-fry for 1 minute.",
                "Add broccoli and bell peppers, stir-fry for 3 minutes.",
                "Add mushrooms and continue cooking for 2 minutes.",
                "Season with soy sauce, salt, and pepper.",
                "Serve hot over steamed rice.",
            ],
            nutrition: MacroNutrition::new(280, 8, 58, 3, 6),
            tags: &["Vegetarian", "Quick", "Healthy"],
        },
        Draft {
            id: "spinach-egg-scramble",
            title: "Spinach and Cheese Scramble",
            description: "Fluffy scrambled eggs with fresh spinach and melted cheese.",
            ingredients: &[
                ("eggs", "6 large"),
                ("spinach", "100g"),
                ("cheese", "50g"),
                ("onion", "0.5 medium"),
                ("olive-oil", "1 tbsp"),
            ],
            cook_time_minutes: 10,
            servings: 2,
            difficulty: Difficulty::Easy,
            instructions: &[
                "Beat eggs in a bowl with salt and pepper.",
                "Heat olive oil in a non-stick pan over medium heat.",
                "Add diced onion and cook until softened.",
                "Add spinach and cook until wilted.",
                "Pour in beaten eggs and gently scramble.",
                "Add cheese in the last minute of cooking.",
                "Serve immediately while hot.",
            ],
            nutrition: MacroNutrition::new(320, 24, 4, 23, 2),
            tags: &["Breakfast", "High Protein", "Quick"],
        },
        Draft {
            id: "sweet-potato-black-bean-bowl",
            title: "Sweet Potato & Black Bean Bowl",
            description: "Nutritious bowl with roasted sweet potatoes, seasoned black beans, and fresh toppings.",
            ingredients: &[
                ("sweet-potato", "2 large"),
                ("black-beans", "400g can"),
                ("avocado", "2 medium"),
                ("bell-pepper", "1 large"),
                ("onion", "1 medium"),
                ("garlic", "2 cloves"),
            ],
            cook_time_minutes: 35,
            servings: 4,
            difficulty: Difficulty::Medium,
            instructions: &[
                "Preheat oven to 425°F (220°C).",
                "Cube sweet potatoes and toss with olive oil, salt, and pepper.",
                "Roast sweet potatoes for 25-30 minutes until tender.",
                "Sauté diced onion and bell pepper until softened.",
                "Add garlic and black beans, cook until heated through.",
                "Season beans with cumin, paprika, salt, and pepper.",
                "Slice avocado just before serving.",
                "Assemble bowls with sweet potatoes, beans, and avocado.",
            ],
            nutrition: MacroNutrition::new(385, 12, 68, 10, 15),
            tags: &["Vegan", "High Fiber", "Meal Prep"],
        },
    ]
}

/// Every reference recipe, in catalog order
pub fn recipes() -> &'static [ReferenceRecipe] {
    RECIPES.get_or_init(|| drafts().into_iter().map(Draft::build).collect())
}

/// Look up a reference recipe by id
#[must_use]
pub fn recipe(id: &str) -> Option<&'static ReferenceRecipe> {
    recipes().iter().find(|r| r.id == id)
}

/// Look up a reference recipe by id, reporting a miss as an error
///
/// # Errors
///
/// Returns `UnknownRecipe` when no recipe has this id
pub fn require_recipe(id: &str) -> CatalogResult<&'static ReferenceRecipe> {
    recipe(id).ok_or_else(|| CatalogError::UnknownRecipe(id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ingredients::ingredient;

    #[test]
    fn test_five_recipes() {
        assert_eq!(recipes().len(), 5);
        assert_eq!(recipes()[0].id, "chicken-tomato-pasta");
        assert_eq!(recipes()[4].title, "Sweet Potato & Black Bean Bowl");
    }

    #[test]
    fn test_every_ingredient_reference_resolves() {
        for recipe in recipes() {
            for id in recipe.ingredient_ids() {
                assert!(ingredient(id).is_some(), "{} uses unknown {id}", recipe.id);
            }
        }
    }

    #[test]
    fn test_lookup() {
        let scramble = recipe("spinach-egg-scramble").unwrap();
        assert_eq!(scramble.cook_time_minutes, 10);
        assert_eq!(scramble.instructions.len(), 7);
        assert!(scramble.uses("cheese"));

        assert_eq!(
            require_recipe("lasagna").unwrap_err(),
            CatalogError::UnknownRecipe("lasagna".into())
        );
    }
}
