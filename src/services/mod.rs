// ABOUTME: Domain service layer for recipe synthesis, persistence, and voting
// ABOUTME: Protocol-agnostic business logic shared by the CLI and any future front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold their collaborators (`Arc<dyn RecipeRepository>`,
//! `Arc<dyn LlmProvider>`) explicitly; there is no global state.

/// Recipe persistence with ownership rules and derived scores
pub mod recipes;

/// Ingredient-to-recipe synthesis with model recovery and fallback
pub mod synthesizer;

/// Vote casting and rating recomputation
pub mod votes;

pub use recipes::{RecipeService, ScoredRecipe};
pub use synthesizer::RecipeSynthesizer;
pub use votes::{VoteOutcome, VoteService};
