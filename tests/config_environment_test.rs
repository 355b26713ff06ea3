// ABOUTME: Integration tests for environment-driven configuration loading
// ABOUTME: Validates defaults, overrides, redaction, and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use recipe_studio::config::{Environment, LogLevel, ServerConfig};
use recipe_studio::errors::ErrorCode;
use serial_test::serial;

const MANAGED_VARS: &[&str] = &[
    "GEMINI_API_KEY",
    "RECIPE_LLM_MODEL",
    "RECIPE_LLM_BASE_URL",
    "RECIPE_LLM_TIMEOUT_SECS",
    "RECIPE_LLM_MAX_RETRIES",
    "RECIPE_LLM_TEMPERATURE",
    "RECIPE_FALLBACK_SEED",
    "ENVIRONMENT",
    "RUST_LOG",
];

fn clear_env() {
    for key in MANAGED_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("debug,hyper=warn"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert!(!config.llm.has_api_key());
    assert_eq!(config.llm.model, "gemini-2.5-flash");
    assert_eq!(config.llm.timeout, Duration::from_secs(30));
    assert_eq!(config.llm.max_retries, 1);
    assert_eq!(config.synthesis.fallback_seed, None);
    assert_eq!(config.environment, Environment::Development);
    assert!(config.summary().contains("api_key=missing"));
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var("GEMINI_API_KEY", "  secret-key-123  ");
    env::set_var("RECIPE_LLM_MODEL", "gemini-2.5-pro");
    env::set_var("RECIPE_LLM_BASE_URL", "http://localhost:9999/v1beta/");
    env::set_var("RECIPE_LLM_TIMEOUT_SECS", "5");
    env::set_var("RECIPE_LLM_MAX_RETRIES", "3");
    env::set_var("RECIPE_LLM_TEMPERATURE", "0.2");
    env::set_var("RECIPE_FALLBACK_SEED", "42");
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.llm.api_key.as_deref(), Some("secret-key-123"));
    assert_eq!(config.llm.model, "gemini-2.5-pro");
    assert_eq!(config.llm.base_url, "http://localhost:9999/v1beta");
    assert_eq!(config.llm.timeout, Duration::from_secs(5));
    assert_eq!(config.llm.max_retries, 3);
    assert!((config.llm.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(config.synthesis.fallback_seed, Some(42));
    assert!(config.environment.is_production());

    let summary = config.summary();
    assert!(summary.contains("api_key=set"));
    assert!(!summary.contains("secret-key-123"));
    assert!(!format!("{:?}", config.llm).contains("secret-key-123"));
}

#[test]
#[serial]
fn test_blank_api_key_is_missing() {
    clear_env();
    env::set_var("GEMINI_API_KEY", "   ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(!config.llm.has_api_key());
}

#[test]
#[serial]
fn test_invalid_numbers_are_config_errors() {
    for (key, value) in [
        ("RECIPE_LLM_TIMEOUT_SECS", "soon"),
        ("RECIPE_LLM_TIMEOUT_SECS", "0"),
        ("RECIPE_LLM_MAX_RETRIES", "-1"),
        ("RECIPE_LLM_TEMPERATURE", "3.5"),
        ("RECIPE_FALLBACK_SEED", "abc"),
    ] {
        clear_env();
        env::set_var(key, value);

        let error = ServerConfig::from_env().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{key}={value}");
    }
    clear_env();
}
