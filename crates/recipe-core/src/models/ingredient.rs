// ABOUTME: Ingredient reference data with food categories and units of measure
// ABOUTME: Defines Ingredient, IngredientCategory, IngredientList, and IngredientCatalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Food category for ingredient organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Fresh and frozen vegetables
    Vegetables,
    /// Fresh and dried fruit
    Fruits,
    /// Rice, oats, quinoa, flour
    Grains,
    /// Dried and fresh pasta, noodles
    Pasta,
    /// Bread, tortillas, pastry
    Bakery,
    /// Beef, pork, lamb
    Meat,
    /// Chicken, turkey, duck
    Poultry,
    /// Fish and shellfish
    Seafood,
    /// Tofu, tempeh, seitan
    PlantProtein,
    /// Milk, cheese, yogurt, butter
    Dairy,
    /// Eggs
    Eggs,
    /// Beans, lentils, chickpeas
    Legumes,
    /// Nuts and seeds
    NutsSeeds,
    /// Fresh herbs
    Herbs,
    /// Dried spices and salt
    Spices,
    /// Cooking oils and fats
    OilsFats,
    /// Mustard, vinegar, pickles
    Condiments,
    /// Prepared sauces and stocks
    Sauces,
    /// Sugar, honey, syrups
    Sweeteners,
    /// Anything else
    #[default]
    Other,
}

impl IngredientCategory {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Grains => "grains",
            Self::Pasta => "pasta",
            Self::Bakery => "bakery",
            Self::Meat => "meat",
            Self::Poultry => "poultry",
            Self::Seafood => "seafood",
            Self::PlantProtein => "plant_protein",
            Self::Dairy => "dairy",
            Self::Eggs => "eggs",
            Self::Legumes => "legumes",
            Self::NutsSeeds => "nuts_seeds",
            Self::Herbs => "herbs",
            Self::Spices => "spices",
            Self::OilsFats => "oils_fats",
            Self::Condiments => "condiments",
            Self::Sauces => "sauces",
            Self::Sweeteners => "sweeteners",
            Self::Other => "other",
        }
    }

    /// Parse from string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "vegetables" => Self::Vegetables,
            "fruits" => Self::Fruits,
            "grains" => Self::Grains,
            "pasta" => Self::Pasta,
            "bakery" => Self::Bakery,
            "meat" => Self::Meat,
            "poultry" => Self::Poultry,
            "seafood" => Self::Seafood,
            "plant_protein" => Self::PlantProtein,
            "dairy" => Self::Dairy,
            "eggs" => Self::Eggs,
            "legumes" => Self::Legumes,
            "nuts_seeds" => Self::NutsSeeds,
            "herbs" => Self::Herbs,
            "spices" => Self::Spices,
            "oils_fats" => Self::OilsFats,
            "condiments" => Self::Condiments,
            "sauces" => Self::Sauces,
            "sweeteners" => Self::Sweeteners,
            _ => Self::Other,
        }
    }
}

/// Immutable ingredient reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Food category
    pub category: IngredientCategory,
    /// Default unit of measure (e.g. "grams", "cups")
    pub unit_of_measure: Option<String>,
}

impl Ingredient {
    /// Create a new ingredient with a fresh identifier
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: IngredientCategory,
        unit_of_measure: Option<&str>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            unit_of_measure: unit_of_measure.map(str::to_owned),
        }
    }
}

/// Non-empty list of ingredient names selected for a recipe
///
/// Names are trimmed and blank entries dropped; construction fails when
/// nothing remains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    /// Build a list from raw ingredient names
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no non-blank name is supplied.
    pub fn new<I, S>(names: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_owned())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return Err(AppError::invalid_input(
                "At least one ingredient is required to generate a recipe",
            ));
        }

        Ok(Self(names))
    }

    /// First ingredient name (always present)
    #[must_use]
    pub fn first(&self) -> &str {
        // Non-emptiness is guaranteed by construction
        self.0.first().map_or("", String::as_str)
    }

    /// Second ingredient name, if any
    #[must_use]
    pub fn second(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    /// Iterate over ingredient names
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with collections
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for IngredientList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Self::new(names).map_err(|e| DeError::custom(e.message))
    }
}

/// Case-insensitive lookup of ingredient reference data by name
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog {
    by_name: HashMap<String, Ingredient>,
}

impl IngredientCatalog {
    /// Create a catalog from reference ingredients
    #[must_use]
    pub fn new(ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        let by_name = ingredients
            .into_iter()
            .map(|ingredient| (ingredient.name.to_lowercase(), ingredient))
            .collect();
        Self { by_name }
    }

    /// Catalog seeded with common pantry ingredients
    #[must_use]
    pub fn with_defaults() -> Self {
        use IngredientCategory as C;

        let seed: &[(&str, IngredientCategory, Option<&str>)] = &[
            ("Chicken Breast", C::Poultry, Some("grams")),
            ("Ground Beef", C::Meat, Some("grams")),
            ("Pork Chop", C::Meat, Some("pieces")),
            ("Salmon", C::Seafood, Some("grams")),
            ("Shrimp", C::Seafood, Some("grams")),
            ("Tofu", C::PlantProtein, Some("grams")),
            ("Eggs", C::Eggs, Some("pieces")),
            ("Carrot", C::Vegetables, Some("pieces")),
            ("Onion", C::Vegetables, Some("pieces")),
            ("Bell Pepper", C::Vegetables, Some("pieces")),
            ("Tomato", C::Vegetables, Some("pieces")),
            ("Spinach", C::Vegetables, Some("cups")),
            ("Lettuce", C::Vegetables, Some("cups")),
            ("Garlic", C::Vegetables, Some("cloves")),
            ("Apple", C::Fruits, Some("pieces")),
            ("Lemon", C::Fruits, Some("pieces")),
            ("Rice", C::Grains, Some("cups")),
            ("Oats", C::Grains, Some("cups")),
            ("Pasta", C::Pasta, Some("grams")),
            ("Noodles", C::Pasta, Some("grams")),
            ("Bread", C::Bakery, Some("slices")),
            ("Milk", C::Dairy, Some("cups")),
            ("Cheddar Cheese", C::Dairy, Some("grams")),
            ("Butter", C::Dairy, Some("tablespoons")),
            ("Chickpeas", C::Legumes, Some("cups")),
            ("Almonds", C::NutsSeeds, Some("grams")),
            ("Basil", C::Herbs, Some("leaves")),
            ("Mint", C::Herbs, Some("leaves")),
            ("Parsley", C::Herbs, Some("tablespoons")),
            ("Thyme", C::Herbs, Some("sprigs")),
            ("Oregano", C::Herbs, Some("teaspoons")),
            ("Salt", C::Spices, None),
            ("Black Pepper", C::Spices, None),
            ("Olive Oil", C::OilsFats, Some("tablespoons")),
            ("Soy Sauce", C::Sauces, Some("tablespoons")),
            ("Dijon Mustard", C::Condiments, Some("teaspoons")),
            ("Honey", C::Sweeteners, Some("tablespoons")),
        ];

        Self::new(
            seed.iter()
                .map(|(name, category, unit)| Ingredient::new(*name, *category, *unit)),
        )
    }

    /// Look up an ingredient by name (case-insensitive, trimmed)
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Ingredient> {
        self.by_name.get(&name.trim().to_lowercase())
    }

    /// Default unit of measure for an ingredient, if known
    #[must_use]
    pub fn unit_of_measure(&self, name: &str) -> Option<&str> {
        self.find(name)
            .and_then(|ingredient| ingredient.unit_of_measure.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_ingredient_list_rejects_empty_input() {
        let err = IngredientList::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        let err = IngredientList::new(["  ", ""]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_ingredient_list_trims_and_keeps_order() {
        let list = IngredientList::new([" chicken ", "", "rice"]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.first(), "chicken");
        assert_eq!(list.second(), Some("rice"));
    }

    #[test]
    fn test_ingredient_list_deserialize_validates() {
        let list: IngredientList = serde_json::from_str(r#"["tofu"]"#).unwrap();
        assert_eq!(list.first(), "tofu");
        assert!(serde_json::from_str::<IngredientList>("[]").is_err());
    }

    #[test]
    fn test_category_round_trip_names() {
        for category in [
            IngredientCategory::PlantProtein,
            IngredientCategory::NutsSeeds,
            IngredientCategory::OilsFats,
            IngredientCategory::Herbs,
        ] {
            assert_eq!(IngredientCategory::parse(category.as_str()), category);
        }
        assert_eq!(IngredientCategory::parse("mystery"), IngredientCategory::Other);
    }

    #[test]
    fn test_catalog_lookup_is_case_insensitive() {
        let catalog = IngredientCatalog::with_defaults();
        assert_eq!(catalog.unit_of_measure("  chicken breast"), Some("grams"));
        assert_eq!(catalog.unit_of_measure("SALT"), None);
        assert!(catalog.find("dragon fruit").is_none());
        assert_eq!(
            catalog.find("basil").map(|i| i.category),
            Some(IngredientCategory::Herbs)
        );
    }
}
