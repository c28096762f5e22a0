//! Core domain logic for the recipe catalog.
//! This crate is the single source of truth for catalog and filter invariants.

pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod source;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::Category;
pub use model::meal::Meal;
pub use model::recipe::{
    Ingredient, Instruction, Nutrition, Recipe, RecipeId, RecipeValidationError,
};
pub use search::filter::{filter_recipes, FilterState};
pub use service::catalog_service::{CatalogError, CatalogResult, CatalogStore};
pub use service::daily_nutrition::{
    load_daily_nutrition, summarize_meals, DailyNutrition, NutritionTotals,
};
pub use service::recipe_detail::{
    derive_recipe_detail, strip_markup, IngredientLine, NutritionHighlights, RecipeDetail,
    StepLine,
};
pub use source::{
    InMemoryRecipeSource, JsonRecipeSource, MealSource, RecipeSource, SampleMealSource,
    SampleRecipeSource, SourceError, SourceResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
