// ABOUTME: Main library entry point for the Recipe Studio platform
// ABOUTME: Wires configuration, logging, LLM providers, storage, and recipe services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Studio
//!
//! Turns a list of ingredients into a structured recipe and lets a community
//! vote on saved recipes.
//!
//! ## Architecture
//!
//! - **LLM**: provider trait with a Google Gemini implementation
//! - **Services**: recipe synthesis, recipe persistence, and voting
//! - **Database**: repository trait with an in-memory implementation
//! - **Config**: environment-only configuration
//!
//! Pure algorithms (fallback generation, response parsing, ratings) live in
//! the `recipe-intelligence` crate; shared types live in `recipe-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_studio::config::environment::ServerConfig;
//! use recipe_studio::errors::AppResult;
//! use recipe_studio::models::IngredientList;
//! use recipe_studio::services::RecipeSynthesizer;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let synthesizer = RecipeSynthesizer::from_config(&config)?;
//!     let ingredients = IngredientList::new(["chicken", "rice", "carrot"])?;
//!     let recipe = synthesizer.synthesize(&ingredients).await;
//!     println!("{}", recipe.title);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Recipe storage abstraction and implementations
pub mod database;

/// Unified error handling
pub mod errors;

/// LLM provider abstraction and Gemini implementation
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Recipe synthesis, persistence, and voting services
pub mod services;

/// Domain models shared across the workspace
pub use recipe_core::models;
