// ABOUTME: Data models for generated and persisted recipes
// ABOUTME: Defines Difficulty, GeneratedRecipe, Recipe, and ingredient line types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cooking difficulty of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// Simple recipes, basic techniques
    Easy,
    /// Moderate complexity
    #[default]
    Medium,
    /// Advanced techniques or long preparation
    Hard,
}

impl Difficulty {
    /// All difficulty levels in ascending order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Parse a difficulty label, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Ingredient line of a generated recipe, quantity kept as free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedIngredient {
    /// Ingredient name
    pub name: String,
    /// Free-text quantity such as "2 cups" or "to taste"
    pub quantity: String,
}

impl GeneratedIngredient {
    /// Create a new generated ingredient line
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

/// Output of the recipe synthesizer
///
/// Produced transiently per generation request; persisted only once a user
/// accepts it, at which point it becomes a [`Recipe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    /// Recipe title
    pub title: String,
    /// Short description
    pub description: String,
    /// Ingredient lines with free-text quantities
    pub ingredients: Vec<GeneratedIngredient>,
    /// Ordered steps joined with newlines
    pub cooking_method: String,
    /// Preparation time in minutes
    pub preparation_time: u32,
    /// Cooking difficulty
    pub difficulty: Difficulty,
}

impl GeneratedRecipe {
    /// Iterate over the individual cooking steps
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.cooking_method
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// Persisted ingredient line with a numeric quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientLine {
    /// Ingredient name as generated
    pub name: String,
    /// Catalog reference, when the name matched one
    pub ingredient_id: Option<Uuid>,
    /// Numeric quantity
    pub quantity: f64,
    /// Lower-cased unit
    pub unit: String,
}

/// Recipe ready to be persisted (no identity yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    /// Owner of the recipe
    pub owner_id: Uuid,
    /// Recipe title
    pub title: String,
    /// Short description
    pub description: String,
    /// Ingredient lines with reconciled quantities
    pub ingredients: Vec<RecipeIngredientLine>,
    /// Ordered steps joined with newlines
    pub cooking_method: String,
    /// Preparation time in minutes
    pub preparation_time: u32,
    /// Cooking difficulty
    pub difficulty: Difficulty,
}

/// Persisted recipe
///
/// Only the like and dislike counts are stored; the net score and rating are
/// always derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier
    pub id: Uuid,
    /// Owner of the recipe
    pub owner_id: Uuid,
    /// Recipe title
    pub title: String,
    /// Short description
    pub description: String,
    /// Ingredient lines with reconciled quantities
    pub ingredients: Vec<RecipeIngredientLine>,
    /// Ordered steps joined with newlines
    pub cooking_method: String,
    /// Preparation time in minutes
    pub preparation_time: u32,
    /// Cooking difficulty
    pub difficulty: Difficulty,
    /// Committed like count
    pub likes: u64,
    /// Committed dislike count
    pub dislikes: u64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Materialize a new recipe with a fresh identity and timestamps
    #[must_use]
    pub fn from_new(new: NewRecipe) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id: new.owner_id,
            title: new.title,
            description: new.description,
            ingredients: new.ingredients,
            cooking_method: new.cooking_method,
            preparation_time: new.preparation_time,
            difficulty: new.difficulty,
            likes: 0,
            dislikes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an owner edit, bumping `updated_at`
    pub fn apply_update(&mut self, update: UpdateRecipeRequest) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(cooking_method) = update.cooking_method {
            self.cooking_method = cooking_method;
        }
        if let Some(preparation_time) = update.preparation_time {
            self.preparation_time = preparation_time;
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = difficulty;
        }
        self.updated_at = Utc::now();
    }
}

/// Owner edit of an existing recipe
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecipeRequest {
    /// New title (if provided)
    pub title: Option<String>,
    /// New description (if provided)
    pub description: Option<String>,
    /// New steps (if provided)
    pub cooking_method: Option<String>,
    /// New preparation time (if provided)
    pub preparation_time: Option<u32>,
    /// New difficulty (if provided)
    pub difficulty: Option<Difficulty>,
}
