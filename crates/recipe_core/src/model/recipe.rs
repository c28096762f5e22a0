//! Recipe record and its nested parts.
//!
//! # Responsibility
//! - Define the immutable record rendered by catalog and detail screens.
//! - Validate numeric fields before a record enters a catalog.
//!
//! # Invariants
//! - `servings >= 1`.
//! - `price_per_serving`, every `Nutrition` field and every ingredient
//!   `amount` are finite and non-negative.
//! - Deserialization runs the same checks as [`Recipe::validate`].

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog-unique numeric recipe identifier.
pub type RecipeId = i64;

/// Validation failure for one recipe record.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeValidationError {
    ZeroServings,
    InvalidPrice(f64),
    InvalidNutrition { field: &'static str, value: f64 },
    InvalidIngredientAmount { ingredient_id: i64, value: f64 },
}

impl Display for RecipeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroServings => write!(f, "servings must be at least 1"),
            Self::InvalidPrice(value) => {
                write!(f, "price_per_serving ({value}) must be a non-negative number")
            }
            Self::InvalidNutrition { field, value } => {
                write!(f, "nutrition.{field} ({value}) must be a non-negative number")
            }
            Self::InvalidIngredientAmount {
                ingredient_id,
                value,
            } => write!(
                f,
                "ingredient {ingredient_id} amount ({value}) must be a non-negative number"
            ),
        }
    }
}

impl Error for RecipeValidationError {}

/// One numbered preparation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub id: i64,
    pub step: String,
    /// 1-based position hint; uniqueness is not enforced.
    pub number: u32,
}

/// One ingredient line with quantity and the original free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    /// Image URI; never fetched by core.
    pub image: String,
    /// Free text as written in the source recipe, e.g. `1 cup quinoa`.
    pub original: String,
}

/// Per-serving nutrition facts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl Nutrition {
    /// Rejects the first negative or non-finite field.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        let fields = [
            ("calories", self.calories),
            ("carbs", self.carbs),
            ("protein", self.protein),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("sugar", self.sugar),
            ("sodium", self.sodium),
        ];
        for (field, value) in fields {
            if !is_non_negative(value) {
                return Err(RecipeValidationError::InvalidNutrition { field, value });
            }
        }
        Ok(())
    }
}

/// Catalog record for one recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RecipeRecord")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    /// Cover image URI; never fetched by core.
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    pub price_per_serving: f64,
    /// Unbounded score as delivered by the source.
    pub health_score: i32,
    /// Free-text diet tags, e.g. `vegan`, `gluten free`. Matched by categories.
    pub diets: Vec<String>,
    pub cuisines: Vec<String>,
    /// May contain inline markup; see [`crate::strip_markup`].
    pub summary: String,
    pub instructions: Vec<Instruction>,
    #[serde(rename = "extendedIngredients")]
    pub ingredients: Vec<Ingredient>,
    pub nutrition: Nutrition,
    pub is_favorite: bool,
}

impl Recipe {
    /// Creates a recipe with one serving and every other field empty.
    pub fn new(id: RecipeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: String::new(),
            ready_in_minutes: 0,
            servings: 1,
            price_per_serving: 0.0,
            health_score: 0,
            diets: Vec::new(),
            cuisines: Vec::new(),
            summary: String::new(),
            instructions: Vec::new(),
            ingredients: Vec::new(),
            nutrition: Nutrition::default(),
            is_favorite: false,
        }
    }

    /// Checks record-level numeric invariants.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        if self.servings == 0 {
            return Err(RecipeValidationError::ZeroServings);
        }
        if !is_non_negative(self.price_per_serving) {
            return Err(RecipeValidationError::InvalidPrice(self.price_per_serving));
        }
        self.nutrition.validate()?;
        for ingredient in &self.ingredients {
            if !is_non_negative(ingredient.amount) {
                return Err(RecipeValidationError::InvalidIngredientAmount {
                    ingredient_id: ingredient.id,
                    value: ingredient.amount,
                });
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeRecord {
    id: RecipeId,
    title: String,
    image: String,
    ready_in_minutes: u32,
    servings: u32,
    price_per_serving: f64,
    health_score: i32,
    #[serde(default)]
    diets: Vec<String>,
    #[serde(default)]
    cuisines: Vec<String>,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    instructions: Vec<Instruction>,
    #[serde(default, rename = "extendedIngredients")]
    ingredients: Vec<Ingredient>,
    nutrition: Nutrition,
    #[serde(default)]
    is_favorite: bool,
}

impl TryFrom<RecipeRecord> for Recipe {
    type Error = RecipeValidationError;

    fn try_from(record: RecipeRecord) -> Result<Self, Self::Error> {
        let recipe = Recipe {
            id: record.id,
            title: record.title,
            image: record.image,
            ready_in_minutes: record.ready_in_minutes,
            servings: record.servings,
            price_per_serving: record.price_per_serving,
            health_score: record.health_score,
            diets: record.diets,
            cuisines: record.cuisines,
            summary: record.summary,
            instructions: record.instructions,
            ingredients: record.ingredients,
            nutrition: record.nutrition,
            is_favorite: record.is_favorite,
        };
        recipe.validate()?;
        Ok(recipe)
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
