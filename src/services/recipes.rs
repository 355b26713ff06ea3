// ABOUTME: Recipe persistence service applying quantity reconciliation and ownership rules
// ABOUTME: Saves generated recipes, lists them with derived scores, and guards owner-only edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use recipe_core::models::{
    GeneratedRecipe, IngredientCatalog, NewRecipe, Recipe, RecipeIngredientLine, RecipeScore,
    UpdateRecipeRequest,
};
use recipe_intelligence::{reconcile_quantity, recompute};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::database::{RecipeFilter, RecipeRepository};
use crate::errors::{AppError, AppResult};

/// A recipe with its score derived from the committed counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecipe {
    /// Stored recipe
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Net votes and smoothed rating
    #[serde(flatten)]
    pub score: RecipeScore,
}

impl From<Recipe> for ScoredRecipe {
    fn from(recipe: Recipe) -> Self {
        let score = recompute(recipe.likes, recipe.dislikes);
        Self { recipe, score }
    }
}

/// Recipe persistence and ownership rules
#[derive(Clone)]
pub struct RecipeService {
    repository: Arc<dyn RecipeRepository>,
    catalog: Arc<IngredientCatalog>,
}

impl RecipeService {
    /// Create a service over a repository and ingredient catalog
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeRepository>, catalog: Arc<IngredientCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Persist a generated recipe for its owner
    ///
    /// Each free-text quantity is split into a numeric amount and a unit,
    /// defaulting the unit from the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository rejects the insert.
    #[instrument(skip(self, generated), fields(owner_id = %owner_id, title = %generated.title))]
    pub async fn save_generated(
        &self,
        owner_id: Uuid,
        generated: &GeneratedRecipe,
    ) -> AppResult<Recipe> {
        let ingredients = generated
            .ingredients
            .iter()
            .map(|item| {
                let reference = self.catalog.find(&item.name);
                let reconciled = reconcile_quantity(
                    &item.quantity,
                    reference.and_then(|i| i.unit_of_measure.as_deref()),
                );
                RecipeIngredientLine {
                    name: item.name.clone(),
                    ingredient_id: reference.map(|i| i.id),
                    quantity: reconciled.amount,
                    unit: reconciled.unit,
                }
            })
            .collect();

        let recipe = Recipe::from_new(NewRecipe {
            owner_id,
            title: generated.title.clone(),
            description: generated.description.clone(),
            ingredients,
            cooking_method: generated.cooking_method.clone(),
            preparation_time: generated.preparation_time,
            difficulty: generated.difficulty,
        });

        let saved = self.repository.insert(recipe).await?;
        info!(recipe_id = %saved.id, "Saved generated recipe");
        Ok(saved)
    }

    /// Fetch a recipe with its score
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the recipe does not exist.
    pub async fn get(&self, recipe_id: Uuid) -> AppResult<ScoredRecipe> {
        self.repository
            .get(recipe_id)
            .await?
            .map(ScoredRecipe::from)
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))
    }

    /// List recipes with their scores
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn list(&self, filter: &RecipeFilter) -> AppResult<Vec<ScoredRecipe>> {
        let recipes = self.repository.list(filter).await?;
        Ok(recipes.into_iter().map(ScoredRecipe::from).collect())
    }

    /// Apply an owner's edit
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank title or method or a zero preparation
    /// time, `ResourceNotFound` if the recipe is missing, and
    /// `PermissionDenied` if `owner_id` does not own it.
    #[instrument(skip(self, update), fields(recipe_id = %recipe_id, owner_id = %owner_id))]
    pub async fn update(
        &self,
        recipe_id: Uuid,
        owner_id: Uuid,
        update: UpdateRecipeRequest,
    ) -> AppResult<ScoredRecipe> {
        validate_update(&update)?;
        self.ensure_owner(recipe_id, owner_id).await?;

        let updated = self
            .repository
            .update(recipe_id, update)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;

        info!("Updated recipe");
        Ok(ScoredRecipe::from(updated))
    }

    /// Delete an owner's recipe together with its votes
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the recipe is missing and
    /// `PermissionDenied` if `owner_id` does not own it.
    #[instrument(skip(self), fields(recipe_id = %recipe_id, owner_id = %owner_id))]
    pub async fn delete(&self, recipe_id: Uuid, owner_id: Uuid) -> AppResult<()> {
        self.ensure_owner(recipe_id, owner_id).await?;

        if self.repository.delete(recipe_id).await? {
            info!("Deleted recipe");
            Ok(())
        } else {
            Err(AppError::not_found(format!("Recipe {recipe_id}")))
        }
    }

    async fn ensure_owner(&self, recipe_id: Uuid, owner_id: Uuid) -> AppResult<()> {
        let recipe = self
            .repository
            .get(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;

        if recipe.owner_id == owner_id {
            Ok(())
        } else {
            warn!(actual_owner = %recipe.owner_id, "Rejected edit by non-owner");
            Err(AppError::permission_denied(
                "Only the owner can modify this recipe",
            )
            .with_user_id(owner_id)
            .with_resource_id(recipe_id.to_string()))
        }
    }
}

fn validate_update(update: &UpdateRecipeRequest) -> AppResult<()> {
    if update.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::invalid_input("Recipe title cannot be blank"));
    }
    if update
        .cooking_method
        .as_deref()
        .is_some_and(|m| m.trim().is_empty())
    {
        return Err(AppError::invalid_input("Cooking method cannot be blank"));
    }
    if update.preparation_time == Some(0) {
        return Err(AppError::invalid_input(
            "Preparation time must be at least one minute",
        ));
    }
    Ok(())
}
