// ABOUTME: Recipe storage abstraction with recipes, per-user votes, and committed counts
// ABOUTME: Defines the RecipeRepository trait plus list filters and vote change results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Storage
//!
//! Services depend on [`RecipeRepository`] rather than a concrete store. A
//! backend must apply each vote (toggle plus count update) atomically per
//! recipe and return the tally it committed.

mod memory;

pub use memory::MemoryRepository;

use async_trait::async_trait;
use recipe_core::models::{Recipe, UpdateRecipeRequest, VoteAction, VoteTally, VoteType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppResult;

/// Ordering for recipe listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSort {
    /// Most recently created first
    #[default]
    Newest,
    /// Highest smoothed rating first, ties broken by net score
    TopRated,
    /// Most likes plus dislikes first
    MostVoted,
}

/// Filter and pagination for recipe listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFilter {
    /// Only recipes owned by this user
    pub owner_id: Option<Uuid>,
    /// Ordering
    pub sort: RecipeSort,
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Number of results to skip
    pub offset: usize,
}

impl RecipeFilter {
    /// Filter listing one owner's recipes
    #[must_use]
    pub fn by_owner(owner_id: Uuid) -> Self {
        Self {
            owner_id: Some(owner_id),
            ..Self::default()
        }
    }

    /// Set the ordering
    #[must_use]
    pub const fn sorted_by(mut self, sort: RecipeSort) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination
    #[must_use]
    pub const fn paginate(mut self, limit: usize, offset: usize) -> Self {
        self.limit = Some(limit);
        self.offset = offset;
        self
    }
}

/// Result of applying one vote request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteChange {
    /// The user's vote before the request
    pub previous: Option<VoteType>,
    /// The user's vote after the request
    pub current: Option<VoteType>,
    /// Counts committed together with the vote
    pub tally: VoteTally,
}

/// Storage for recipes and their votes
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Store a new recipe
    async fn insert(&self, recipe: Recipe) -> AppResult<Recipe>;

    /// Fetch a recipe by id
    async fn get(&self, recipe_id: Uuid) -> AppResult<Option<Recipe>>;

    /// List recipes matching a filter
    async fn list(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>>;

    /// Apply an edit without touching vote counts; `None` if the recipe is gone
    async fn update(
        &self,
        recipe_id: Uuid,
        update: UpdateRecipeRequest,
    ) -> AppResult<Option<Recipe>>;

    /// Delete a recipe and its votes; returns whether it existed
    async fn delete(&self, recipe_id: Uuid) -> AppResult<bool>;

    /// A user's current vote on a recipe; `NotFound` if the recipe is missing
    async fn user_vote(&self, user_id: Uuid, recipe_id: Uuid) -> AppResult<Option<VoteType>>;

    /// Toggle a user's vote and update counts in one critical section
    ///
    /// Returns `NotFound` if the recipe does not exist.
    async fn apply_vote(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        action: VoteAction,
    ) -> AppResult<VoteChange>;
}
