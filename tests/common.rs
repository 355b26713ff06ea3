// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides quiet logging, a scripted LLM provider, and service fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `recipe_studio`

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use recipe_studio::database::{MemoryRepository, RecipeRepository};
use recipe_studio::errors::AppError;
use recipe_studio::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use recipe_studio::models::{GeneratedRecipe, IngredientCatalog, IngredientList};
use recipe_studio::services::{RecipeService, VoteService};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Provider that replays scripted replies and records every request
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, AppError>>>,
    requests: Mutex<Vec<ChatRequest>>,
    calls: AtomicUsize,
    capabilities: LlmCapabilities,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<String, AppError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            capabilities: LlmCapabilities::full_featured(),
        }
    }

    /// Provider that always answers with `text`
    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_owned())])
    }

    pub fn with_capabilities(mut self, capabilities: LlmCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["scripted-model"]
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Ok(content)) => Ok(ChatResponse {
                content,
                model: "scripted-model".to_owned(),
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            }),
            Some(Err(error)) => Err(error),
            None => Err(AppError::external_unavailable("scripted", "no reply scripted")),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Build an ingredient list from literals
pub fn ingredients(names: &[&str]) -> IngredientList {
    IngredientList::new(names.iter().copied()).unwrap()
}

/// Recipe and vote services sharing one in-memory repository
pub fn services() -> (RecipeService, VoteService) {
    init_test_logging();
    let repository: Arc<dyn RecipeRepository> = Arc::new(MemoryRepository::new());
    let catalog = Arc::new(IngredientCatalog::with_defaults());
    (
        RecipeService::new(Arc::clone(&repository), catalog),
        VoteService::new(repository),
    )
}

/// Whether a recipe carries the rule-based opening and closing steps
pub fn is_fallback(recipe: &GeneratedRecipe) -> bool {
    recipe
        .cooking_method
        .contains("prepare all your ingredients")
        && recipe.cooking_method.contains("enjoy your meal")
}
