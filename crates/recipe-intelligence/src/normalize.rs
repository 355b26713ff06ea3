// ABOUTME: Fills defaults into partially parsed recipes to produce a complete GeneratedRecipe
// ABOUTME: Title, description, ingredients, steps, time, and difficulty each have a fallback value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::synthesis::{
    AS_NEEDED, DEFAULT_DESCRIPTION, DEFAULT_PREPARATION_MINUTES,
};
use recipe_core::models::{GeneratedIngredient, GeneratedRecipe, IngredientList};

use crate::parsing::RawRecipe;

/// Complete a parsed recipe with defaults for anything the model omitted
///
/// A missing ingredient list is replaced by the requested ingredients with an
/// `"as needed"` quantity; blank quantities get the same treatment.
#[must_use]
pub fn normalize_recipe(raw: RawRecipe, requested: &IngredientList) -> GeneratedRecipe {
    let title = raw
        .title
        .unwrap_or_else(|| format!("{} Dish", requested.first()));

    let ingredients = if raw.ingredients.is_empty() {
        requested
            .iter()
            .map(|name| GeneratedIngredient::new(name, AS_NEEDED))
            .collect()
    } else {
        raw.ingredients
            .into_iter()
            .map(|mut line| {
                if line.quantity.trim().is_empty() {
                    AS_NEEDED.clone_into(&mut line.quantity);
                }
                line
            })
            .collect()
    };

    GeneratedRecipe {
        title,
        description: raw
            .description
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned()),
        ingredients,
        cooking_method: raw.cooking_steps.join("\n"),
        preparation_time: raw.preparation_time.unwrap_or(DEFAULT_PREPARATION_MINUTES),
        difficulty: raw.difficulty.unwrap_or_default(),
    }
}
