// ABOUTME: Recipe intelligence engine with synthesis heuristics and vote aggregation
// ABOUTME: Pure, stateless algorithms shared by the synthesizer and vote services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Intelligence
//!
//! Stateless algorithms behind Recipe Studio:
//!
//! - **fallback**: deterministic rule-based recipe generation (given an RNG)
//! - **parsing**: recovery of recipes from free-form model output
//! - **normalize**: defaults applied to partially parsed recipes
//! - **quantity**: reconciliation of free-text quantities into amount and unit
//! - **rating**: vote toggle semantics and Bayesian-smoothed ratings

/// Rule-based recipe generator used when the model is unavailable
pub mod fallback;
/// Normalization of parsed model output into a complete recipe
pub mod normalize;
/// Tagged-union parser for free-form model responses
pub mod parsing;
/// Free-text quantity reconciliation
pub mod quantity;
/// Vote toggling and rating recomputation
pub mod rating;

pub use fallback::{fallback_quantity, fallback_steps, generate_fallback_recipe};
pub use normalize::normalize_recipe;
pub use parsing::{parse_model_response, ParsedResponse, RawRecipe};
pub use quantity::{reconcile_quantity, ReconciledQuantity};
pub use rating::{apply_vote, recompute, score};
