// ABOUTME: Application constants with environment variable names and LLM defaults
// ABOUTME: Re-exports domain constants from recipe-core and adds runtime configuration keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::constants::*;

/// Environment variable names
pub mod env_config {
    /// Gemini API key; synthesis is fallback-only without it
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Model identifier
    pub const LLM_MODEL: &str = "RECIPE_LLM_MODEL";
    /// API base URL
    pub const LLM_BASE_URL: &str = "RECIPE_LLM_BASE_URL";
    /// Per-request timeout in seconds
    pub const LLM_TIMEOUT_SECS: &str = "RECIPE_LLM_TIMEOUT_SECS";
    /// Retries after the first failed model call
    pub const LLM_MAX_RETRIES: &str = "RECIPE_LLM_MAX_RETRIES";
    /// Sampling temperature
    pub const LLM_TEMPERATURE: &str = "RECIPE_LLM_TEMPERATURE";
    /// Seed for reproducible fallback recipes
    pub const FALLBACK_SEED: &str = "RECIPE_FALLBACK_SEED";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level / filter directives
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Defaults for the language model client
pub mod llm_defaults {
    /// Default Gemini model
    pub const MODEL: &str = "gemini-2.5-flash";
    /// Generative Language API base URL
    pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Per-request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;
    /// Retries after the first failed model call
    pub const MAX_RETRIES: u32 = 1;
    /// Sampling temperature
    pub const TEMPERATURE: f32 = 0.7;
    /// Upper bound accepted for the sampling temperature
    pub const MAX_TEMPERATURE: f32 = 2.0;
    /// Base delay between retries, multiplied by the attempt number
    pub const RETRY_BACKOFF_MS: u64 = 250;
    /// Output token cap for a single recipe
    pub const MAX_OUTPUT_TOKENS: u32 = 2048;
}
