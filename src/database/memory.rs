// ABOUTME: In-memory RecipeRepository backed by DashMap with per-recipe entry locks
// ABOUTME: Serializes concurrent votes on one recipe so no count update is lost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use recipe_core::models::{Recipe, UpdateRecipeRequest, VoteAction, VoteTally, VoteType};
use recipe_intelligence::{apply_vote, recompute};
use tracing::debug;
use uuid::Uuid;

use super::{RecipeFilter, RecipeRepository, RecipeSort, VoteChange};
use crate::errors::{AppError, AppResult, ErrorCode};

/// A recipe together with its per-user votes
#[derive(Debug, Clone)]
struct RecipeEntry {
    recipe: Recipe,
    votes: HashMap<Uuid, VoteType>,
}

/// In-memory recipe store
///
/// `DashMap` shards its locks, and `get_mut` holds the write lock for a
/// single recipe, which makes each vote's toggle and count update atomic.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    recipes: DashMap<Uuid, RecipeEntry>,
}

impl MemoryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn sort(recipes: &mut [Recipe], sort: RecipeSort) {
        match sort {
            RecipeSort::Newest => recipes.sort_by_key(|r| Reverse(r.created_at)),
            RecipeSort::TopRated => recipes.sort_by_key(|r| {
                let score = recompute(r.likes, r.dislikes);
                (Reverse(score.rating), Reverse(score.votes), Reverse(r.created_at))
            }),
            RecipeSort::MostVoted => recipes.sort_by_key(|r| {
                (
                    Reverse(r.likes.saturating_add(r.dislikes)),
                    Reverse(r.created_at),
                )
            }),
        }
    }
}

#[async_trait]
impl RecipeRepository for MemoryRepository {
    async fn insert(&self, recipe: Recipe) -> AppResult<Recipe> {
        match self.recipes.entry(recipe.id) {
            Entry::Occupied(_) => {
                return Err(AppError::new(
                    ErrorCode::ResourceAlreadyExists,
                    format!("Recipe {} already exists", recipe.id),
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(RecipeEntry {
                    recipe: recipe.clone(),
                    votes: HashMap::new(),
                });
            }
        }
        debug!(recipe_id = %recipe.id, "Stored recipe");
        Ok(recipe)
    }

    async fn get(&self, recipe_id: Uuid) -> AppResult<Option<Recipe>> {
        Ok(self
            .recipes
            .get(&recipe_id)
            .map(|entry| entry.recipe.clone()))
    }

    async fn list(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|entry| {
                filter
                    .owner_id
                    .is_none_or(|owner| entry.recipe.owner_id == owner)
            })
            .map(|entry| entry.recipe.clone())
            .collect();

        Self::sort(&mut recipes, filter.sort);

        Ok(recipes
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit.unwrap_or(usize::MAX))
            .collect())
    }

    async fn update(
        &self,
        recipe_id: Uuid,
        update: UpdateRecipeRequest,
    ) -> AppResult<Option<Recipe>> {
        Ok(self.recipes.get_mut(&recipe_id).map(|mut entry| {
            entry.recipe.apply_update(update);
            entry.recipe.clone()
        }))
    }

    async fn delete(&self, recipe_id: Uuid) -> AppResult<bool> {
        Ok(self.recipes.remove(&recipe_id).is_some())
    }

    async fn user_vote(&self, user_id: Uuid, recipe_id: Uuid) -> AppResult<Option<VoteType>> {
        self.recipes
            .get(&recipe_id)
            .map(|entry| entry.votes.get(&user_id).copied())
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))
    }

    async fn apply_vote(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        action: VoteAction,
    ) -> AppResult<VoteChange> {
        let mut entry = self
            .recipes
            .get_mut(&recipe_id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;

        let previous = entry.votes.get(&user_id).copied();
        let current = apply_vote(previous, action);
        match current {
            Some(vote) => entry.votes.insert(user_id, vote),
            None => entry.votes.remove(&user_id),
        };

        let mut tally = VoteTally::new(entry.recipe.likes, entry.recipe.dislikes);
        tally.transition(previous, current);
        entry.recipe.likes = tally.likes;
        entry.recipe.dislikes = tally.dislikes;
        drop(entry);

        Ok(VoteChange {
            previous,
            current,
            tally,
        })
    }
}
