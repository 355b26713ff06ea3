// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into typed LLM, synthesis, and logging configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use std::env;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};

use crate::constants::{env_config, llm_defaults};
use crate::errors::{AppError, AppResult};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    ///
    /// Accepts a bare level or the first directive of an `EnvFilter` string,
    /// so `RUST_LOG=debug,hyper=warn` yields `Debug`.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        let first = s.split(',').next().unwrap_or_default().trim();
        match first.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Language model client configuration
#[derive(Clone)]
pub struct LlmConfig {
    /// API key; `None` means synthesis always uses the fallback
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// API base URL
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Retries after the first failed call
    pub max_retries: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl LlmConfig {
    /// Whether an API key is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: llm_defaults::MODEL.to_owned(),
            base_url: llm_defaults::GEMINI_API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(llm_defaults::TIMEOUT_SECS),
            max_retries: llm_defaults::MAX_RETRIES,
            temperature: llm_defaults::TEMPERATURE,
        }
    }
}

impl Debug for LlmConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Recipe synthesis configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Seed for the fallback RNG; unseeded when `None`
    pub fallback_seed: Option<u64>,
}

/// Complete runtime configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Language model client settings
    pub llm: LlmConfig,
    /// Synthesis settings
    pub synthesis: SynthesisConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a numeric variable cannot be parsed or is
    /// out of range.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let api_key = env::var(env_config::GEMINI_API_KEY)
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty());

        let timeout_secs: u64 = parse_env(env_config::LLM_TIMEOUT_SECS, llm_defaults::TIMEOUT_SECS)?;
        let temperature: f32 = parse_env(env_config::LLM_TEMPERATURE, llm_defaults::TEMPERATURE)?;

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_config::RUST_LOG, "info")),
            llm: LlmConfig {
                api_key,
                model: env_var_or(env_config::LLM_MODEL, llm_defaults::MODEL),
                base_url: env_var_or(env_config::LLM_BASE_URL, llm_defaults::GEMINI_API_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                timeout: Duration::from_secs(timeout_secs),
                max_retries: parse_env(env_config::LLM_MAX_RETRIES, llm_defaults::MAX_RETRIES)?,
                temperature,
            },
            synthesis: SynthesisConfig {
                fallback_seed: parse_optional_env(env_config::FALLBACK_SEED)?,
            },
        };

        config.validate()?;

        if !config.llm.has_api_key() {
            warn!(
                "{} not set; recipes will be generated by the rule-based fallback",
                env_config::GEMINI_API_KEY
            );
        }

        Ok(config)
    }

    /// Validate ranges that parsing alone cannot enforce
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero timeout or a temperature outside
    /// `0.0..=2.0`.
    pub fn validate(&self) -> AppResult<()> {
        if self.llm.timeout.is_zero() {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_config::LLM_TIMEOUT_SECS
            )));
        }

        if !(0.0..=llm_defaults::MAX_TEMPERATURE).contains(&self.llm.temperature) {
            return Err(AppError::config_invalid(format!(
                "{} must be between 0.0 and {}, got {}",
                env_config::LLM_TEMPERATURE,
                llm_defaults::MAX_TEMPERATURE,
                self.llm.temperature
            )));
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Studio Configuration: environment={}, log_level={}, model={}, api_key={}, \
             timeout={}s, max_retries={}, temperature={}, fallback_seed={}",
            self.environment,
            self.log_level,
            self.llm.model,
            if self.llm.has_api_key() {
                "set"
            } else {
                "missing"
            },
            self.llm.timeout.as_secs(),
            self.llm.max_retries,
            self.llm.temperature,
            self.synthesis
                .fallback_seed
                .map_or_else(|| "none".to_owned(), |seed| seed.to_string()),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when unset or blank
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    Ok(parse_optional_env(key)?.unwrap_or(default))
}

fn parse_optional_env<T>(key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<T>().map(Some).map_err(|e| {
            AppError::config_invalid(format!("Invalid value for {key}: {raw:?} ({e})"))
        }),
        _ => Ok(None),
    }
}
