// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Loads environment, logging, LLM, and synthesis settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Recipe Studio
//!
//! Configuration is environment-only; there are no config files.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LlmConfig, LogLevel, ServerConfig, SynthesisConfig};
