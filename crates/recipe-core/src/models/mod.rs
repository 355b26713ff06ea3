// ABOUTME: Core data models for ingredients, recipes, and votes
// ABOUTME: Re-exports the domain types shared by every crate in the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ingredient reference data, categories, and the non-empty ingredient list
pub mod ingredient;
/// Generated and persisted recipe types
pub mod recipe;
/// Vote types, tallies, and derived scores
pub mod vote;

pub use ingredient::{Ingredient, IngredientCatalog, IngredientCategory, IngredientList};
pub use recipe::{
    Difficulty, GeneratedIngredient, GeneratedRecipe, NewRecipe, Recipe, RecipeIngredientLine,
    UpdateRecipeRequest,
};
pub use vote::{RecipeScore, VoteAction, VoteTally, VoteType};
