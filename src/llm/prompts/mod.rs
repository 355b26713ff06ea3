// ABOUTME: Prompts for recipe generation loaded at compile time
// ABOUTME: Builds the system and user messages sent to the language model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Prompts
//!
//! The system prompt lives in a markdown file so it can be edited without
//! touching code.

use std::fmt::Write;

use recipe_core::models::{IngredientCatalog, IngredientList};

use super::ChatMessage;

/// Recipe writer system prompt describing the required JSON shape
pub const RECIPE_SYSTEM_PROMPT: &str = include_str!("recipe_system.md");

/// Build the user prompt listing the ingredients
///
/// Ingredients found in the catalog are annotated with their usual unit of
/// measure so the model picks sensible quantities.
#[must_use]
pub fn build_recipe_prompt(ingredients: &IngredientList, catalog: &IngredientCatalog) -> String {
    let mut prompt = String::from("Create a recipe using these ingredients:\n");
    for name in ingredients.iter() {
        match catalog.unit_of_measure(name) {
            Some(unit) => {
                let _ = writeln!(prompt, "- {name} (measured in {unit})");
            }
            None => {
                let _ = writeln!(prompt, "- {name}");
            }
        }
    }
    prompt.push_str("\nReturn only the JSON object.");
    prompt
}

/// System and user messages for a recipe request
#[must_use]
pub fn build_recipe_messages(
    ingredients: &IngredientList,
    catalog: &IngredientCatalog,
) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(RECIPE_SYSTEM_PROMPT),
        ChatMessage::user(build_recipe_prompt(ingredients, catalog)),
    ]
}
