// ABOUTME: Unified error handling re-exported from recipe-core
// ABOUTME: Single import path for AppError, ErrorCode, and AppResult within the main crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Errors are defined in `recipe-core` so the intelligence crate and the main
//! crate share one error type.

pub use recipe_core::errors::*;
