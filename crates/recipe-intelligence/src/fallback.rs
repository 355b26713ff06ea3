// ABOUTME: Rule-based recipe generator used when the language model is unavailable
// ABOUTME: Builds title, quantities, and keyword-triggered steps from ingredient names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fallback Recipe Generation
//!
//! Produces a plausible recipe from nothing but the ingredient names. Every
//! step is chosen by keyword rules so the output is deterministic apart from
//! the quantities, preparation time, and difficulty, which are drawn from the
//! caller's RNG. Seeding that RNG makes the whole recipe reproducible.

use rand::seq::SliceRandom;
use rand::Rng;
use recipe_core::constants::keywords::{
    CUP_MEASURED, GRAINS, HERBS, PIECE_MEASURED, PROTEINS, SEASONINGS, TABLESPOON_MEASURED,
    VEGETABLES,
};
use recipe_core::constants::synthesis::{
    FALLBACK_AMOUNT_RANGE, FALLBACK_PREPARATION_MINUTES, TO_TASTE,
};
use recipe_core::models::{Difficulty, GeneratedIngredient, GeneratedRecipe, IngredientList};
use tracing::debug;

const OPENING_STEP: &str = "Start by preparing all your ingredients. \
    Measure and prepare all your ingredients before you turn on the heat.";

const CLOSING_STEPS: [&str; 3] = [
    "Combine all the cooked ingredients in a large bowl.",
    "Mix well and adjust the seasoning to taste.",
    "Serve and enjoy your meal!",
];

fn matches_any(name: &str, keywords: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

fn first_match<'a>(ingredients: &'a IngredientList, keywords: &[&str]) -> Option<&'a str> {
    ingredients.iter().find(|name| matches_any(name, keywords))
}

fn unit_for(name: &str) -> &'static str {
    if matches_any(name, CUP_MEASURED) {
        "cups"
    } else if matches_any(name, PIECE_MEASURED) {
        "pieces"
    } else if matches_any(name, TABLESPOON_MEASURED) {
        "tablespoons"
    } else {
        "portions"
    }
}

/// Quantity text for one ingredient
///
/// Seasonings are always `"to taste"` and consume no randomness.
pub fn fallback_quantity<R: Rng + ?Sized>(name: &str, rng: &mut R) -> String {
    if matches_any(name, SEASONINGS) {
        return TO_TASTE.to_owned();
    }
    let (low, high) = FALLBACK_AMOUNT_RANGE;
    let amount = rng.gen_range(low..=high);
    format!("{amount} {}", unit_for(name))
}

/// Cooking steps for an ingredient list
///
/// Category steps appear in the order protein, vegetable, grain, herb, each
/// included when any ingredient name contains one of its keywords.
#[must_use]
pub fn fallback_steps(ingredients: &IngredientList) -> Vec<String> {
    let mut steps = vec![OPENING_STEP.to_owned()];

    if let Some(protein) = first_match(ingredients, PROTEINS) {
        steps.push(format!(
            "Season and cook the {} in a hot pan until golden and cooked through.",
            protein.to_lowercase()
        ));
    }

    if first_match(ingredients, VEGETABLES).is_some() {
        steps.push("Wash and chop the vegetables into bite-sized pieces.".to_owned());
        steps.push("Sauté the vegetables in a little oil until tender.".to_owned());
    }

    if let Some(grain) = first_match(ingredients, GRAINS) {
        steps.push(format!(
            "Cook the {} according to the package instructions.",
            grain.to_lowercase()
        ));
    }

    if first_match(ingredients, HERBS).is_some() {
        steps.push("Finely chop the fresh herbs for garnish.".to_owned());
    }

    steps.extend(CLOSING_STEPS.iter().map(|s| (*s).to_owned()));
    steps
}

/// Generate a complete recipe without consulting the language model
///
/// Never fails for a non-empty ingredient list. Randomness is drawn in a fixed
/// order (quantities, then preparation time, then difficulty) so a seeded RNG
/// yields an identical recipe.
pub fn generate_fallback_recipe<R: Rng + ?Sized>(
    ingredients: &IngredientList,
    rng: &mut R,
) -> GeneratedRecipe {
    let first = ingredients.first();
    let title = ingredients.second().map_or_else(
        || format!("{first} Delight"),
        |second| format!("{first} with {second} Delight"),
    );

    let names: Vec<&str> = ingredients.iter().collect();
    let description = format!(
        "A simple homemade dish featuring {}.",
        names.join(", ")
    );

    let generated_ingredients = ingredients
        .iter()
        .map(|name| GeneratedIngredient::new(name, fallback_quantity(name, rng)))
        .collect();

    let (min_minutes, max_minutes) = FALLBACK_PREPARATION_MINUTES;
    let preparation_time = rng.gen_range(min_minutes..max_minutes);
    let difficulty = Difficulty::ALL
        .choose(rng)
        .copied()
        .unwrap_or_default();

    debug!(
        ingredient_count = ingredients.len(),
        preparation_time,
        difficulty = difficulty.as_str(),
        "Generated fallback recipe"
    );

    GeneratedRecipe {
        title,
        description,
        ingredients: generated_ingredients,
        cooking_method: fallback_steps(ingredients).join("\n"),
        preparation_time,
        difficulty,
    }
}
