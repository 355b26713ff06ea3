// ABOUTME: Operator CLI for generating recipes, computing ratings, and running an end-to-end demo
// ABOUTME: Prints JSON on stdout and structured logs on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Generate a recipe (uses Gemini when GEMINI_API_KEY is set)
//! cargo run --bin recipe-studio -- generate chicken rice carrot
//!
//! # Reproducible rule-based recipe
//! cargo run --bin recipe-studio -- generate chicken rice --offline --seed 7
//!
//! # Rating for a given like/dislike count
//! cargo run --bin recipe-studio -- rate --likes 10 --dislikes 0
//!
//! # Generate, save, vote, and list
//! cargo run --bin recipe-studio -- demo
//!
//! # Report the configured model and whether it is reachable
//! cargo run --bin recipe-studio -- health
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recipe_intelligence::recompute;
use recipe_studio::config::ServerConfig;
use recipe_studio::database::{MemoryRepository, RecipeFilter, RecipeRepository, RecipeSort};
use recipe_studio::logging;
use recipe_studio::models::{IngredientCatalog, IngredientList, VoteAction};
use recipe_studio::services::{RecipeService, RecipeSynthesizer, VoteService};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "recipe-studio",
    about = "Recipe Studio command line",
    long_about = "Generate recipes from ingredients, compute smoothed ratings, and exercise the recipe services end to end."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a recipe from ingredient names
    Generate {
        /// Ingredient names
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Seed for the rule-based fallback
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the language model even if an API key is configured
        #[arg(long)]
        offline: bool,
    },
    /// Compute the score for a like/dislike count
    Rate {
        /// Number of likes
        #[arg(long, default_value = "0")]
        likes: u64,

        /// Number of dislikes
        #[arg(long, default_value = "0")]
        dislikes: u64,
    },
    /// Generate, save, and vote on a few recipes, then print the listing
    Demo {
        /// Seed for the rule-based fallback
        #[arg(long, default_value = "42")]
        seed: u64,
    },
    /// Report the configured language model and check that it is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_from_env()?;

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    info!("{}", config.summary());

    match cli.command {
        Command::Generate {
            ingredients,
            seed,
            offline,
        } => generate(&config, ingredients, seed, offline).await,
        Command::Rate { likes, dislikes } => print_json(&recompute(likes, dislikes)),
        Command::Demo { seed } => demo(seed).await,
        Command::Health => {
            let status = RecipeSynthesizer::from_config(&config)?
                .provider_status()
                .await;
            print_json(&status)
        }
    }
}

async fn generate(
    config: &ServerConfig,
    ingredients: Vec<String>,
    seed: Option<u64>,
    offline: bool,
) -> Result<()> {
    let synthesizer = if offline {
        RecipeSynthesizer::offline()
    } else {
        RecipeSynthesizer::from_config(config)?
    };
    let synthesizer = synthesizer.with_fallback_seed(seed.or(config.synthesis.fallback_seed));

    let recipe = synthesizer.synthesize_names(ingredients).await?;
    print_json(&recipe)
}

async fn demo(seed: u64) -> Result<()> {
    let catalog = Arc::new(IngredientCatalog::with_defaults());
    let repository: Arc<dyn RecipeRepository> = Arc::new(MemoryRepository::new());
    let synthesizer = RecipeSynthesizer::offline()
        .with_catalog(Arc::clone(&catalog))
        .with_fallback_seed(Some(seed));
    let recipes = RecipeService::new(Arc::clone(&repository), catalog);
    let votes = VoteService::new(repository);

    let owner = Uuid::new_v4();
    let voters: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();

    let menus: [&[&str]; 3] = [
        &["chicken", "rice", "carrot", "salt"],
        &["pasta", "tomato", "basil"],
        &["tofu", "spinach", "pepper"],
    ];

    for (index, menu) in menus.iter().enumerate() {
        let ingredients = IngredientList::new(menu.iter().copied())?;
        let generated = synthesizer.synthesize(&ingredients).await;
        let saved = recipes.save_generated(owner, &generated).await?;

        for (position, voter) in voters.iter().enumerate() {
            let action = if (position + index) % 3 == 0 {
                VoteAction::Dislike
            } else {
                VoteAction::Like
            };
            votes.cast_vote(*voter, saved.id, action).await?;
        }
    }

    let listing = recipes
        .list(&RecipeFilter::default().sorted_by(RecipeSort::TopRated))
        .await?;
    print_json(&listing)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}
