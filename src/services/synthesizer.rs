// ABOUTME: Recipe synthesizer turning an ingredient list into a structured recipe
// ABOUTME: Calls the language model with bounded retries and falls back to rule-based generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Synthesizer
//!
//! [`RecipeSynthesizer::synthesize`] never fails: a missing API key, a network
//! error, a non-success status, or an unparseable response all end in the
//! rule-based fallback recipe.

use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use recipe_core::models::{GeneratedRecipe, IngredientCatalog, IngredientList};
use recipe_intelligence::{
    generate_fallback_recipe, normalize_recipe, parse_model_response, ParsedResponse,
};
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use crate::config::ServerConfig;
use crate::constants::llm_defaults;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::llm::{
    build_recipe_messages, ChatMessage, ChatRequest, GeminiProvider, LlmProvider, ProviderStatus,
};

/// Generates recipes from ingredient lists
#[derive(Clone)]
pub struct RecipeSynthesizer {
    provider: Option<Arc<dyn LlmProvider>>,
    catalog: Arc<IngredientCatalog>,
    temperature: f32,
    max_retries: u32,
    retry_backoff: Duration,
    fallback_seed: Option<u64>,
}

impl RecipeSynthesizer {
    /// Create a synthesizer around an optional provider with default settings
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self {
            provider,
            catalog: Arc::new(IngredientCatalog::with_defaults()),
            temperature: llm_defaults::TEMPERATURE,
            max_retries: llm_defaults::MAX_RETRIES,
            retry_backoff: Duration::from_millis(llm_defaults::RETRY_BACKOFF_MS),
            fallback_seed: None,
        }
    }

    /// Synthesizer that never calls a model
    #[must_use]
    pub fn offline() -> Self {
        Self::new(None)
    }

    /// Build a synthesizer from configuration
    ///
    /// Without an API key the synthesizer runs offline.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let provider: Option<Arc<dyn LlmProvider>> = if config.llm.has_api_key() {
            Some(Arc::new(GeminiProvider::from_config(&config.llm)?))
        } else {
            None
        };

        Ok(Self::new(provider)
            .with_temperature(config.llm.temperature)
            .with_max_retries(config.llm.max_retries)
            .with_fallback_seed(config.synthesis.fallback_seed))
    }

    /// Use a custom ingredient catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<IngredientCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the number of retries after a failed model call
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the base delay between retries
    #[must_use]
    pub const fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Seed the fallback generator; the same seed and ingredients give the same recipe
    #[must_use]
    pub const fn with_fallback_seed(mut self, seed: Option<u64>) -> Self {
        self.fallback_seed = seed;
        self
    }

    /// Whether a language model is configured
    #[must_use]
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Identity and health of the configured model
    pub async fn provider_status(&self) -> ProviderStatus {
        match self.provider.as_deref() {
            Some(provider) => ProviderStatus::check(provider).await,
            None => ProviderStatus::unconfigured(),
        }
    }

    /// Validate raw names and synthesize a recipe
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no non-blank ingredient name is given.
    pub async fn synthesize_names<I, S>(&self, names: I) -> AppResult<GeneratedRecipe>
    where
        I: IntoIterator<Item = S> + Send,
        S: AsRef<str>,
    {
        let ingredients = IngredientList::new(names)?;
        Ok(self.synthesize(&ingredients).await)
    }

    /// Synthesize a recipe; always succeeds
    #[instrument(skip(self, ingredients), fields(ingredient_count = ingredients.len()))]
    pub async fn synthesize(&self, ingredients: &IngredientList) -> GeneratedRecipe {
        let Some(provider) = self.provider.as_deref() else {
            info!("No language model configured, using fallback recipe");
            return self.fallback(ingredients);
        };

        match self.complete_with_retries(provider, ingredients).await {
            Ok(text) => self.recipe_from_response(&text, ingredients),
            Err(e) => {
                warn!(
                    provider = provider.name(),
                    error = %e,
                    "Language model unavailable, using fallback recipe"
                );
                self.fallback(ingredients)
            }
        }
    }

    fn recipe_from_response(&self, text: &str, ingredients: &IngredientList) -> GeneratedRecipe {
        match parse_model_response(text) {
            ParsedResponse::Strict(raw) => {
                debug!("Model returned well-formed recipe JSON");
                normalize_recipe(raw, ingredients)
            }
            ParsedResponse::RecoveredObject(raw) => {
                info!(
                    steps = raw.cooking_steps.len(),
                    "Recovered cooking steps from object-shaped cookingMethod"
                );
                normalize_recipe(raw, ingredients)
            }
            ParsedResponse::RecoveredSteps(raw) => {
                info!(
                    steps = raw.cooking_steps.len(),
                    "Recovered cooking steps from malformed model output"
                );
                normalize_recipe(raw, ingredients)
            }
            ParsedResponse::Failed => {
                warn!(
                    response_length = text.len(),
                    "Model response had no usable recipe, using fallback recipe"
                );
                self.fallback(ingredients)
            }
        }
    }

    fn fallback(&self, ingredients: &IngredientList) -> GeneratedRecipe {
        match self.fallback_seed {
            Some(seed) => {
                generate_fallback_recipe(ingredients, &mut ChaCha8Rng::seed_from_u64(seed))
            }
            None => generate_fallback_recipe(ingredients, &mut rand::thread_rng()),
        }
    }

    fn build_request(
        &self,
        provider: &dyn LlmProvider,
        ingredients: &IngredientList,
    ) -> ChatRequest {
        let capabilities = provider.capabilities();
        let mut messages = build_recipe_messages(ingredients, &self.catalog);

        if !capabilities.supports_system_messages() {
            let combined = messages
                .iter()
                .map(|m| m.content.as_str())
                .collect::<Vec<_>>()
                .join("\n\n");
            messages = vec![ChatMessage::user(combined)];
        }

        let request = ChatRequest::new(messages)
            .with_temperature(self.temperature)
            .with_max_tokens(llm_defaults::MAX_OUTPUT_TOKENS);

        if capabilities.supports_json_mode() {
            request.with_json_mode()
        } else {
            request
        }
    }

    async fn complete_with_retries(
        &self,
        provider: &dyn LlmProvider,
        ingredients: &IngredientList,
    ) -> AppResult<String> {
        let request = self.build_request(provider, ingredients);
        let mut attempt: u32 = 0;

        loop {
            match provider.complete(&request).await {
                Ok(response) => {
                    debug!(
                        model = %response.model,
                        attempt,
                        "Received model response"
                    );
                    return Ok(response.content);
                }
                Err(e) if attempt < self.max_retries && is_retryable(&e) => {
                    attempt += 1;
                    warn!(
                        attempt,
                        max_retries = self.max_retries,
                        error = %e,
                        "Model call failed, retrying"
                    );
                    sleep(self.retry_backoff.saturating_mul(attempt)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Transient failures worth another attempt; auth and config errors are not
const fn is_retryable(error: &AppError) -> bool {
    matches!(
        error.code,
        ErrorCode::ExternalServiceError
            | ErrorCode::ExternalServiceUnavailable
            | ErrorCode::ExternalRateLimited
    )
}
