// ABOUTME: Vote service applying toggle semantics and recomputing the recipe rating
// ABOUTME: Ratings are derived from the counts committed together with each vote
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use recipe_core::models::{RecipeScore, VoteAction, VoteType};
use recipe_intelligence::{recompute, score};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::database::RecipeRepository;
use crate::errors::{AppError, AppResult};

/// Result of casting a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    /// Net score after the vote
    pub votes: i64,
    /// Smoothed rating after the vote
    pub rating: u8,
    /// The user's vote after the request, if any
    pub user_vote: Option<VoteType>,
}

/// Casts votes and reports scores
#[derive(Clone)]
pub struct VoteService {
    repository: Arc<dyn RecipeRepository>,
}

impl VoteService {
    /// Create a vote service over a repository
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// Cast, switch, or withdraw a user's vote
    ///
    /// Repeating the current vote withdraws it.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the recipe does not exist.
    #[instrument(skip(self), fields(user_id = %user_id, recipe_id = %recipe_id, action = ?action))]
    pub async fn cast_vote(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        action: VoteAction,
    ) -> AppResult<VoteOutcome> {
        let change = self
            .repository
            .apply_vote(user_id, recipe_id, action)
            .await?;
        let recipe_score = score(&change.tally);

        info!(
            previous = ?change.previous,
            current = ?change.current,
            likes = change.tally.likes,
            dislikes = change.tally.dislikes,
            rating = recipe_score.rating,
            "Vote applied"
        );

        Ok(VoteOutcome {
            votes: recipe_score.votes,
            rating: recipe_score.rating,
            user_vote: change.current,
        })
    }

    /// A user's current vote on a recipe
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the recipe does not exist.
    pub async fn user_vote(&self, user_id: Uuid, recipe_id: Uuid) -> AppResult<Option<VoteType>> {
        self.repository.user_vote(user_id, recipe_id).await
    }

    /// Current score of a recipe
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the recipe does not exist.
    pub async fn score(&self, recipe_id: Uuid) -> AppResult<RecipeScore> {
        self.repository
            .get(recipe_id)
            .await?
            .map(|recipe| recompute(recipe.likes, recipe.dislikes))
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))
    }
}
