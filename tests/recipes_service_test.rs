// ABOUTME: Integration tests for saving, listing, editing, and deleting recipes
// ABOUTME: Covers quantity reconciliation, ownership rules, sorting, and pagination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::services;
use recipe_studio::database::{RecipeFilter, RecipeSort};
use recipe_studio::errors::ErrorCode;
use recipe_studio::models::{
    Difficulty, GeneratedIngredient, GeneratedRecipe, UpdateRecipeRequest, VoteAction,
};
use uuid::Uuid;

fn generated(title: &str, ingredients: Vec<GeneratedIngredient>) -> GeneratedRecipe {
    GeneratedRecipe {
        title: title.to_owned(),
        description: "Test dish".to_owned(),
        ingredients,
        cooking_method: "Cook\nServe".to_owned(),
        preparation_time: 25,
        difficulty: Difficulty::Easy,
    }
}

#[tokio::test]
async fn test_save_reconciles_quantities() {
    let (recipes, _) = services();
    let owner = Uuid::new_v4();

    let saved = recipes
        .save_generated(
            owner,
            &generated(
                "Rice Bowl",
                vec![
                    GeneratedIngredient::new("Rice", "1.5 Cups"),
                    GeneratedIngredient::new("Salt", "to taste"),
                    GeneratedIngredient::new("Dragonfruit", "2"),
                ],
            ),
        )
        .await
        .unwrap();

    assert_eq!(saved.owner_id, owner);
    assert_eq!((saved.likes, saved.dislikes), (0, 0));

    let rice = &saved.ingredients[0];
    assert!((rice.quantity - 1.5).abs() < f64::EPSILON);
    assert_eq!(rice.unit, "cups");
    assert!(rice.ingredient_id.is_some());

    let salt = &saved.ingredients[1];
    assert!((salt.quantity - 1.0).abs() < f64::EPSILON);

    let unknown = &saved.ingredients[2];
    assert!((unknown.quantity - 2.0).abs() < f64::EPSILON);
    assert_eq!(unknown.unit, "unit");
    assert!(unknown.ingredient_id.is_none());

    let fetched = recipes.get(saved.id).await.unwrap();
    assert_eq!(fetched.recipe, saved);
    assert_eq!(fetched.score.votes, 0);
    assert_eq!(fetched.score.rating, 0);
}

#[tokio::test]
async fn test_only_owner_can_update_or_delete() {
    let (recipes, votes) = services();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let saved = recipes
        .save_generated(owner, &generated("Soup", Vec::new()))
        .await
        .unwrap();
    votes
        .cast_vote(stranger, saved.id, VoteAction::Like)
        .await
        .unwrap();

    let edit = UpdateRecipeRequest {
        title: Some("Better Soup".to_owned()),
        ..UpdateRecipeRequest::default()
    };

    let error = recipes
        .update(saved.id, stranger, edit.clone())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::PermissionDenied);

    let error = recipes.delete(saved.id, stranger).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::PermissionDenied);

    let updated = recipes.update(saved.id, owner, edit).await.unwrap();
    assert_eq!(updated.recipe.title, "Better Soup");
    assert_eq!(updated.recipe.likes, 1);
    assert!(updated.recipe.updated_at >= saved.updated_at);

    recipes.delete(saved.id, owner).await.unwrap();
    let error = recipes.get(saved.id).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    let error = votes
        .cast_vote(stranger, saved.id, VoteAction::Like)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_update_rejects_blank_fields() {
    let (recipes, _) = services();
    let owner = Uuid::new_v4();
    let saved = recipes
        .save_generated(owner, &generated("Stew", Vec::new()))
        .await
        .unwrap();

    let cases = [
        UpdateRecipeRequest {
            title: Some("   ".to_owned()),
            ..UpdateRecipeRequest::default()
        },
        UpdateRecipeRequest {
            cooking_method: Some(String::new()),
            ..UpdateRecipeRequest::default()
        },
        UpdateRecipeRequest {
            preparation_time: Some(0),
            ..UpdateRecipeRequest::default()
        },
    ];

    for edit in cases {
        let error = recipes.update(saved.id, owner, edit).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    assert_eq!(recipes.get(saved.id).await.unwrap().recipe.title, "Stew");
}

#[tokio::test]
async fn test_update_missing_recipe() {
    let (recipes, _) = services();
    let error = recipes
        .update(
            Uuid::new_v4(),
            Uuid::new_v4(),
            UpdateRecipeRequest::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_listing_sorts_and_paginates() {
    let (recipes, votes) = services();
    let owner = Uuid::new_v4();
    let other = Uuid::new_v4();

    let loved = recipes
        .save_generated(owner, &generated("Loved", Vec::new()))
        .await
        .unwrap();
    let divisive = recipes
        .save_generated(owner, &generated("Divisive", Vec::new()))
        .await
        .unwrap();
    let ignored = recipes
        .save_generated(other, &generated("Ignored", Vec::new()))
        .await
        .unwrap();

    for _ in 0..4 {
        votes
            .cast_vote(Uuid::new_v4(), loved.id, VoteAction::Like)
            .await
            .unwrap();
    }
    for action in [
        VoteAction::Like,
        VoteAction::Like,
        VoteAction::Like,
        VoteAction::Dislike,
        VoteAction::Dislike,
        VoteAction::Dislike,
    ] {
        votes
            .cast_vote(Uuid::new_v4(), divisive.id, action)
            .await
            .unwrap();
    }

    let top_rated = recipes
        .list(&RecipeFilter::default().sorted_by(RecipeSort::TopRated))
        .await
        .unwrap();
    let titles: Vec<&str> = top_rated.iter().map(|r| r.recipe.title.as_str()).collect();
    assert_eq!(titles, vec!["Loved", "Divisive", "Ignored"]);
    assert_eq!(top_rated[0].score.votes, 4);
    assert_eq!(top_rated[1].score.votes, 0);

    let most_voted = recipes
        .list(&RecipeFilter::default().sorted_by(RecipeSort::MostVoted))
        .await
        .unwrap();
    assert_eq!(most_voted[0].recipe.id, divisive.id);

    let mine = recipes
        .list(&RecipeFilter::by_owner(owner))
        .await
        .unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|r| r.recipe.id != ignored.id));

    let page = recipes
        .list(
            &RecipeFilter::default()
                .sorted_by(RecipeSort::TopRated)
                .paginate(1, 1),
        )
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].recipe.id, divisive.id);
}

#[tokio::test]
async fn test_scored_recipe_serializes_flat() {
    let (recipes, votes) = services();
    let saved = recipes
        .save_generated(Uuid::new_v4(), &generated("Flat", Vec::new()))
        .await
        .unwrap();
    votes
        .cast_vote(Uuid::new_v4(), saved.id, VoteAction::Like)
        .await
        .unwrap();

    let json = serde_json::to_value(recipes.get(saved.id).await.unwrap()).unwrap();
    assert_eq!(json["title"], "Flat");
    assert_eq!(json["votes"], 1);
    assert_eq!(json["rating"], 5);
    assert_eq!(json["likes"], 1);
}
