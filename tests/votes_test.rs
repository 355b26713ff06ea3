// ABOUTME: Integration tests for vote toggling and rating recomputation
// ABOUTME: Verifies toggle semantics, unknown recipes, and concurrent voters on one recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{ingredients, services};
use recipe_intelligence::recompute;
use recipe_studio::errors::ErrorCode;
use recipe_studio::models::{VoteAction, VoteType};
use recipe_studio::services::{RecipeService, RecipeSynthesizer};
use uuid::Uuid;

async fn saved_recipe(recipes: &RecipeService) -> Uuid {
    let generated = RecipeSynthesizer::offline()
        .with_fallback_seed(Some(5))
        .synthesize(&ingredients(&["chicken", "rice"]))
        .await;
    recipes
        .save_generated(Uuid::new_v4(), &generated)
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_like_toggle_and_switch() {
    let (recipes, votes) = services();
    let recipe_id = saved_recipe(&recipes).await;
    let user = Uuid::new_v4();

    let liked = votes
        .cast_vote(user, recipe_id, VoteAction::Like)
        .await
        .unwrap();
    assert_eq!(liked.votes, 1);
    assert_eq!(liked.rating, 5);
    assert_eq!(liked.user_vote, Some(VoteType::Like));

    let switched = votes
        .cast_vote(user, recipe_id, VoteAction::Dislike)
        .await
        .unwrap();
    assert_eq!(switched.votes, -1);
    assert_eq!(switched.user_vote, Some(VoteType::Dislike));

    let recipe = recipes.get(recipe_id).await.unwrap();
    assert_eq!((recipe.recipe.likes, recipe.recipe.dislikes), (0, 1));

    let withdrawn = votes
        .cast_vote(user, recipe_id, VoteAction::Dislike)
        .await
        .unwrap();
    assert_eq!(withdrawn.votes, 0);
    assert_eq!(withdrawn.rating, 0);
    assert_eq!(withdrawn.user_vote, None);
    assert_eq!(votes.user_vote(user, recipe_id).await.unwrap(), None);
}

#[tokio::test]
async fn test_unvote_without_vote_is_noop() {
    let (recipes, votes) = services();
    let recipe_id = saved_recipe(&recipes).await;
    let voter = Uuid::new_v4();
    let bystander = Uuid::new_v4();

    votes
        .cast_vote(voter, recipe_id, VoteAction::Like)
        .await
        .unwrap();
    let outcome = votes
        .cast_vote(bystander, recipe_id, VoteAction::Unvote)
        .await
        .unwrap();

    assert_eq!(outcome.votes, 1);
    assert_eq!(outcome.user_vote, None);
    assert_eq!(votes.score(recipe_id).await.unwrap(), recompute(1, 0));
}

#[tokio::test]
async fn test_vote_on_unknown_recipe() {
    let (_, votes) = services();
    let missing = Uuid::new_v4();

    let error = votes
        .cast_vote(Uuid::new_v4(), missing, VoteAction::Like)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    let error = votes
        .user_vote(Uuid::new_v4(), missing)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_rating_follows_committed_counts() {
    let (recipes, votes) = services();
    let recipe_id = saved_recipe(&recipes).await;

    let mut last = None;
    for _ in 0..10 {
        last = Some(
            votes
                .cast_vote(Uuid::new_v4(), recipe_id, VoteAction::Like)
                .await
                .unwrap(),
        );
    }

    let outcome = last.unwrap();
    assert_eq!(outcome.votes, 10);
    assert_eq!(outcome.rating, 8);
    assert_eq!(recipes.get(recipe_id).await.unwrap().score.rating, 8);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_likes_are_not_lost() {
    const VOTERS: u64 = 64;

    let (recipes, votes) = services();
    let recipe_id = saved_recipe(&recipes).await;

    let handles: Vec<_> = (0..VOTERS)
        .map(|_| {
            let votes = votes.clone();
            tokio::spawn(async move {
                votes
                    .cast_vote(Uuid::new_v4(), recipe_id, VoteAction::Like)
                    .await
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let scored = recipes.get(recipe_id).await.unwrap();
    assert_eq!(scored.recipe.likes, VOTERS);
    assert_eq!(scored.recipe.dislikes, 0);
    assert_eq!(scored.score, recompute(VOTERS, 0));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_toggles_by_one_user_stay_consistent() {
    let (recipes, votes) = services();
    let recipe_id = saved_recipe(&recipes).await;
    let user = Uuid::new_v4();

    let handles: Vec<_> = (0..21)
        .map(|_| {
            let votes = votes.clone();
            tokio::spawn(async move {
                votes
                    .cast_vote(user, recipe_id, VoteAction::Like)
                    .await
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    // An odd number of toggles leaves exactly one like
    let scored = recipes.get(recipe_id).await.unwrap();
    assert_eq!(scored.recipe.likes, 1);
    assert_eq!(
        votes.user_vote(user, recipe_id).await.unwrap(),
        Some(VoteType::Like)
    );
}
