//! Recipe and meal sources feeding the core services.
//!
//! # Responsibility
//! - Define the provider contract the store is built from.
//! - Ship the bundled sample catalog, an in-memory provider and a JSON
//!   provider for records in the mobile app's wire shape.
//! - Define the meal-log contract behind the daily nutrition overview.
//!
//! # Invariants
//! - A source returns records in catalog order; the store keeps that order.
//! - The store validates on construction; JSON decoding validates earlier.

use crate::model::meal::Meal;
use crate::model::recipe::Recipe;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json;
mod sample;

pub use json::JsonRecipeSource;
pub use sample::{SampleMealSource, SampleRecipeSource};

pub type SourceResult<T> = Result<T, SourceError>;

/// Failure while loading records from a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Provider could not produce records at all.
    Unavailable(String),
    /// Provider produced records that cannot be decoded.
    InvalidData(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "recipe source unavailable: {message}"),
            Self::InvalidData(message) => write!(f, "invalid recipe source data: {message}"),
        }
    }
}

impl Error for SourceError {}

/// Provider of the full recipe catalog.
pub trait RecipeSource {
    fn load_recipes(&self) -> SourceResult<Vec<Recipe>>;
}

impl<S: RecipeSource + ?Sized> RecipeSource for &S {
    fn load_recipes(&self) -> SourceResult<Vec<Recipe>> {
        (**self).load_recipes()
    }
}

/// Provider of the meals logged for the current day.
pub trait MealSource {
    fn load_meals(&self) -> SourceResult<Vec<Meal>>;
}

impl<S: MealSource + ?Sized> MealSource for &S {
    fn load_meals(&self) -> SourceResult<Vec<Meal>> {
        (**self).load_meals()
    }
}

/// Source backed by records already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeSource {
    recipes: Vec<Recipe>,
}

impl InMemoryRecipeSource {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}

impl From<Vec<Recipe>> for InMemoryRecipeSource {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes)
    }
}

impl RecipeSource for InMemoryRecipeSource {
    fn load_recipes(&self) -> SourceResult<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }
}
