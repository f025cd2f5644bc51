// ABOUTME: Weekly meal plan of reference recipes assigned to day and meal slots
// ABOUTME: Ordered entries with stable ids; add, remove, per-day queries and a demo week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use crate::catalog::recipes;
use chrono::Weekday;
use cooksy_core::models::{MealType, ReferenceRecipe};
use serde::{Deserialize, Serialize};

/// A recipe assigned to a day and meal slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMeal {
    /// Identifier unique within the plan
    pub id: u32,
    /// Day of the week
    pub day: Weekday,
    /// Meal slot
    pub meal: MealType,
    /// The planned recipe
    pub recipe: ReferenceRecipe,
}

/// Ordered list of planned meals
///
/// Several meals may share a slot; entries keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    meals: Vec<PlannedMeal>,
    next_id: u32,
}

impl MealPlan {
    /// Empty plan
    #[must_use]
    pub fn new() -> Self {
        Self {
            meals: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a meal and return its id
    pub fn add(&mut self, day: Weekday, meal: MealType, recipe: ReferenceRecipe) -> u32 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.meals.push(PlannedMeal {
            id,
            day,
            meal,
            recipe,
        });
        id
    }

    /// Remove a meal by id
    pub fn remove(&mut self, id: u32) -> Option<PlannedMeal> {
        let index = self.meals.iter().position(|m| m.id == id)?;
        Some(self.meals.remove(index))
    }

    /// Meals planned for one day, in plan order
    pub fn meals_on(&self, day: Weekday) -> impl Iterator<Item = &PlannedMeal> {
        self.meals.iter().filter(move |m| m.day == day)
    }

    /// All meals in plan order
    #[must_use]
    pub fn meals(&self) -> &[PlannedMeal] {
        &self.meals
    }

    /// Number of planned meals
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Whether nothing is planned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// The eleven-slot reference week built from the catalog recipes
    #[must_use]
    pub fn demo_week() -> Self {
        const SLOTS: [(Weekday, MealType, usize); 11] = [
            (Weekday::Mon, MealType::Breakfast, 3),
            (Weekday::Mon, MealType::Lunch, 2),
            (Weekday::Mon, MealType::Dinner, 0),
            (Weekday::Tue, MealType::Breakfast, 3),
            (Weekday::Tue, MealType::Dinner, 1),
            (Weekday::Wed, MealType::Lunch, 4),
            (Weekday::Thu, MealType::Dinner, 0),
            (Weekday::Fri, MealType::Breakfast, 3),
            (Weekday::Fri, MealType::Lunch, 2),
            (Weekday::Sat, MealType::Dinner, 1),
            (Weekday::Sun, MealType::Lunch, 4),
        ];

        let pool = recipes();
        let mut plan = Self::new();
        for (day, meal, index) in SLOTS {
            if let Some(recipe) = pool.get(index) {
                plan.add(day, meal, recipe.clone());
            }
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::recipe;

    #[test]
    fn test_demo_week_shape() {
        let plan = MealPlan::demo_week();
        assert_eq!(plan.len(), 11);
        assert_eq!(plan.meals()[0].id, 1);
        assert_eq!(plan.meals()[10].id, 11);
        assert_eq!(plan.meals_on(Weekday::Mon).count(), 3);
        assert_eq!(plan.meals_on(Weekday::Wed).count(), 1);

        let monday_breakfast = &plan.meals()[0];
        assert_eq!(monday_breakfast.meal, MealType::Breakfast);
        assert_eq!(monday_breakfast.recipe.id, "spinach-egg-scramble");
    }

    #[test]
    fn test_add_and_remove() {
        let mut plan = MealPlan::new();
        let pasta = recipe("chicken-tomato-pasta").unwrap().clone();
        let first = plan.add(Weekday::Thu, MealType::Dinner, pasta.clone());
        let second = plan.add(Weekday::Thu, MealType::Dinner, pasta);
        assert_ne!(first, second);
        assert_eq!(plan.meals_on(Weekday::Thu).count(), 2);

        let removed = plan.remove(first).unwrap();
        assert_eq!(removed.id, first);
        assert!(plan.remove(first).is_none());
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut plan = MealPlan::default();
        let scramble = recipe("spinach-egg-scramble").unwrap().clone();
        let a = plan.add(Weekday::Sat, MealType::Breakfast, scramble.clone());
        plan.remove(a);
        let b = plan.add(Weekday::Sat, MealType::Breakfast, scramble);
        assert!(b > a);
    }
}
