// ABOUTME: Recovers structured recipes from free-form language model responses
// ABOUTME: Classifies each response as strict, recovered, or failed via a tagged union
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Model Response Parsing
//!
//! Models are asked for strict JSON but routinely wrap it in prose, emit the
//! step list as an object, or abandon JSON entirely. Strategies are tried in
//! order:
//!
//! 1. Strict: the first `{` through the last `}` parsed as JSON. A
//!    `cookingMethod` array or string is accepted as is.
//! 2. Object recovery: a `cookingMethod` object has its quoted literals
//!    extracted, skipping the first (the leading key).
//! 3. Loose steps: a brace- or bracket-delimited `cookingMethod` value is
//!    scraped with regexes from otherwise invalid JSON.
//! 4. Numbered steps: `<n>. <text>` or `Step <n>. <text>` markers anywhere
//!    in the text, one step per marker.
//!
//! Anything else is [`ParsedResponse::Failed`] and callers fall back to the
//! rule-based generator.

use std::sync::LazyLock;

use recipe_core::models::{Difficulty, GeneratedIngredient};
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

static JSON_BLOCK: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").ok());

static QUOTED_LITERAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)""#).ok());

static METHOD_OBJECT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""cookingMethod"\s*:\s*\{([^{}]*)\}"#).ok());

static METHOD_ARRAY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""cookingMethod"\s*:\s*\[([^\[\]]*)\]"#).ok());

static STEP_MARKER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:step\s+)?\d+[.)]\s+").ok());

static LOOSE_TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""title"\s*:\s*"((?:[^"\\]|\\.)*)""#).ok());

static LOOSE_DESCRIPTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""description"\s*:\s*"((?:[^"\\]|\\.)*)""#).ok());

static LOOSE_PREPARATION_TIME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""preparationTime"\s*:\s*"?(\d+)"#).ok());

static LOOSE_DIFFICULTY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""difficulty"\s*:\s*"(\w+)""#).ok());

static LOOSE_INGREDIENT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r#""name"\s*:\s*"((?:[^"\\]|\\.)*)"\s*,\s*"quantity"\s*:\s*(?:"((?:[^"\\]|\\.)*)"|([^,}\s]+))"#,
    )
    .ok()
});

static LEADING_INTEGER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(\d+)").ok());

/// Partially parsed recipe; every field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecipe {
    /// Recipe title
    pub title: Option<String>,
    /// Short description
    pub description: Option<String>,
    /// Ingredient lines, empty when the model omitted them
    pub ingredients: Vec<GeneratedIngredient>,
    /// Individual cooking steps
    pub cooking_steps: Vec<String>,
    /// Preparation time in minutes
    pub preparation_time: Option<u32>,
    /// Cooking difficulty
    pub difficulty: Option<Difficulty>,
}

/// Outcome of parsing a model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    /// Well-formed JSON with an array or string `cookingMethod`
    Strict(RawRecipe),
    /// Well-formed JSON whose `cookingMethod` was an object
    RecoveredObject(RawRecipe),
    /// Steps scraped from malformed JSON or numbered lines
    RecoveredSteps(RawRecipe),
    /// Nothing usable
    Failed,
}

impl ParsedResponse {
    /// Short label for logging
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Strict(_) => "strict",
            Self::RecoveredObject(_) => "recovered_object",
            Self::RecoveredSteps(_) => "recovered_steps",
            Self::Failed => "failed",
        }
    }

    /// The parsed recipe, if any strategy succeeded
    #[must_use]
    pub fn into_recipe(self) -> Option<RawRecipe> {
        match self {
            Self::Strict(raw) | Self::RecoveredObject(raw) | Self::RecoveredSteps(raw) => Some(raw),
            Self::Failed => None,
        }
    }
}

/// Parse a raw model response
#[must_use]
pub fn parse_model_response(text: &str) -> ParsedResponse {
    let parsed = parse_strict(text)
        .or_else(|| parse_loose(text))
        .unwrap_or(ParsedResponse::Failed);
    debug!(strategy = parsed.label(), "Parsed model response");
    parsed
}

fn parse_strict(text: &str) -> Option<ParsedResponse> {
    let block = JSON_BLOCK.as_ref()?.find(text)?;
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(block.as_str()) else {
        return None;
    };

    let mut raw = raw_from_object(&map);
    match map.get("cookingMethod") {
        Some(Value::Array(items)) => {
            raw.cooking_steps = items.iter().filter_map(step_text).collect();
            finish(raw, ParsedResponse::Strict)
        }
        Some(Value::String(method)) => {
            raw.cooking_steps = split_lines(method);
            finish(raw, ParsedResponse::Strict)
        }
        Some(Value::Object(method)) => {
            raw.cooking_steps = steps_from_method_object(text)
                .unwrap_or_else(|| method.values().filter_map(step_text).collect());
            finish(raw, ParsedResponse::RecoveredObject)
        }
        _ => None,
    }
}

fn parse_loose(text: &str) -> Option<ParsedResponse> {
    let steps = steps_from_method_object(text)
        .or_else(|| steps_from_method_array(text))
        .or_else(|| steps_from_numbered_lines(text))?;

    let raw = RawRecipe {
        title: capture(&LOOSE_TITLE, text).map(|s| unescape(&s)),
        description: capture(&LOOSE_DESCRIPTION, text).map(|s| unescape(&s)),
        ingredients: loose_ingredients(text),
        cooking_steps: steps,
        preparation_time: capture(&LOOSE_PREPARATION_TIME, text)
            .and_then(|s| s.parse().ok())
            .filter(|minutes| *minutes > 0),
        difficulty: capture(&LOOSE_DIFFICULTY, text).and_then(|s| Difficulty::parse(&s)),
    };
    Some(ParsedResponse::RecoveredSteps(raw))
}

fn finish(raw: RawRecipe, variant: fn(RawRecipe) -> ParsedResponse) -> Option<ParsedResponse> {
    if raw.cooking_steps.is_empty() {
        None
    } else {
        Some(variant(raw))
    }
}

fn raw_from_object(map: &Map<String, Value>) -> RawRecipe {
    RawRecipe {
        title: non_empty_string(map.get("title")),
        description: non_empty_string(map.get("description")),
        ingredients: map
            .get("ingredients")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(ingredient_from_value).collect())
            .unwrap_or_default(),
        cooking_steps: Vec::new(),
        preparation_time: map.get("preparationTime").and_then(minutes_from_value),
        difficulty: map
            .get("difficulty")
            .and_then(Value::as_str)
            .and_then(Difficulty::parse),
    }
}

fn ingredient_from_value(value: &Value) -> Option<GeneratedIngredient> {
    match value {
        Value::Object(item) => {
            let name = non_empty_string(item.get("name"))?;
            let quantity = match item.get("quantity") {
                Some(Value::String(s)) => s.trim().to_owned(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            };
            Some(GeneratedIngredient::new(name, quantity))
        }
        Value::String(name) if !name.trim().is_empty() => {
            Some(GeneratedIngredient::new(name.trim(), ""))
        }
        _ => None,
    }
}

fn minutes_from_value(value: &Value) -> Option<u32> {
    let minutes = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64)),
        Value::String(s) => capture(&LEADING_INTEGER, s).and_then(|digits| digits.parse().ok()),
        _ => None,
    }?;
    u32::try_from(minutes).ok().filter(|m| *m > 0)
}

fn step_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        Value::Object(fields) => fields
            .values()
            .filter_map(Value::as_str)
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" "),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn steps_from_method_object(text: &str) -> Option<Vec<String>> {
    let body = capture(&METHOD_OBJECT, text)?;
    let steps: Vec<String> = quoted_literals(&body).into_iter().skip(1).collect();
    (!steps.is_empty()).then_some(steps)
}

fn steps_from_method_array(text: &str) -> Option<Vec<String>> {
    let body = capture(&METHOD_ARRAY, text)?;
    let steps = quoted_literals(&body);
    (!steps.is_empty()).then_some(steps)
}

fn steps_from_numbered_lines(text: &str) -> Option<Vec<String>> {
    let markers: Vec<_> = STEP_MARKER.as_ref()?.find_iter(text).collect();
    let steps: Vec<String> = markers
        .iter()
        .enumerate()
        .filter_map(|(index, marker)| {
            let end = markers.get(index + 1).map_or(text.len(), |next| next.start());
            let segment = text.get(marker.end()..end)?;
            let line = segment.lines().next().unwrap_or_default();
            let step = line.trim().trim_end_matches([',', '"']).trim();
            (!step.is_empty()).then(|| step.to_owned())
        })
        .collect();
    (!steps.is_empty()).then_some(steps)
}

fn loose_ingredients(text: &str) -> Vec<GeneratedIngredient> {
    let Some(re) = LOOSE_INGREDIENT.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(text)
        .filter_map(|caps| {
            let name = unescape(caps.get(1)?.as_str());
            let quantity = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or_else(String::new, |m| unescape(m.as_str()));
            (!name.trim().is_empty()).then(|| GeneratedIngredient::new(name.trim(), quantity.trim()))
        })
        .collect()
}

fn quoted_literals(body: &str) -> Vec<String> {
    let Some(re) = QUOTED_LITERAL.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| unescape(m.as_str()).trim().to_owned())
        .filter(|literal| !literal.is_empty())
        .collect()
}

fn capture(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    pattern
        .as_ref()?
        .captures(text)?
        .get(1)
        .map(|m| m.as_str().to_owned())
}

/// Decode JSON string escapes, keeping the raw text if they are malformed
fn unescape(literal: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{literal}\"")).unwrap_or_else(|_| literal.to_owned())
}

fn split_lines(method: &str) -> Vec<String> {
    method
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
