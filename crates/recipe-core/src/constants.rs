// ABOUTME: Application constants for rating, synthesis defaults, and keyword tables
// ABOUTME: Shared by the intelligence algorithms and the synthesizer service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Vote aggregation constants
pub mod rating {
    /// Upper bound of the rating scale
    pub const MAX_RATING: u8 = 10;

    /// Neutral prior mean on the 0-10 scale
    pub const PRIOR_MEAN: u64 = 5;

    /// Number of virtual neutral votes blended into every rating
    pub const CONFIDENCE_WEIGHT: u64 = 10;

    /// Points contributed by a single like on the 0-10 scale
    pub const LIKE_POINTS: u64 = 10;
}

/// Defaults applied when normalizing a generated recipe
pub mod synthesis {
    /// Preparation time used when the model omits or garbles it
    pub const DEFAULT_PREPARATION_MINUTES: u32 = 30;

    /// Fallback preparation time range (inclusive start, exclusive end)
    pub const FALLBACK_PREPARATION_MINUTES: (u32, u32) = (20, 40);

    /// Fallback per-ingredient amount range (inclusive)
    pub const FALLBACK_AMOUNT_RANGE: (u32, u32) = (1, 3);

    /// Description used when the model omits one
    pub const DEFAULT_DESCRIPTION: &str = "A delicious dish made with the selected ingredients.";

    /// Quantity assigned to seasonings in the fallback recipe
    pub const TO_TASTE: &str = "to taste";

    /// Quantity assigned when the model omits the ingredient list
    pub const AS_NEEDED: &str = "as needed";

    /// Unit used when neither the quantity text nor the catalog supplies one
    pub const DEFAULT_UNIT: &str = "unit";

    /// Amount used when the quantity text has no leading number
    pub const DEFAULT_AMOUNT: f64 = 1.0;
}

/// Keyword tables for the rule-based fallback generator
///
/// Matching is case-insensitive substring containment.
pub mod keywords {
    /// Ingredients measured "to taste"
    pub const SEASONINGS: &[&str] = &["salt", "pepper"];

    /// Ingredients measured in cups
    pub const CUP_MEASURED: &[&str] = &["pasta", "rice"];

    /// Ingredients measured in pieces
    pub const PIECE_MEASURED: &[&str] = &["carrot", "apple"];

    /// Ingredients measured in tablespoons
    pub const TABLESPOON_MEASURED: &[&str] = &["mint", "herb"];

    /// Ingredients that trigger the protein step
    pub const PROTEINS: &[&str] = &["chicken", "beef", "pork", "fish", "shrimp", "tofu"];

    /// Ingredients that trigger the vegetable wash and saute steps
    pub const VEGETABLES: &[&str] = &["carrot", "onion", "pepper", "tomato", "spinach", "lettuce"];

    /// Ingredients that trigger the grain step
    pub const GRAINS: &[&str] = &["pasta", "rice", "noodle", "bread"];

    /// Ingredients that trigger the herb step
    pub const HERBS: &[&str] = &["mint", "basil", "thyme", "oregano", "parsley"];
}

/// Service names used in structured logs
pub mod service_names {
    /// Recipe Studio service
    pub const RECIPE_STUDIO: &str = "recipe-studio";
}
