//! Detail-screen projection of one recipe.
//!
//! # Responsibility
//! - Strip inline markup from summaries.
//! - Pre-format the labels and headline numbers the detail screen shows.
//!
//! # Invariants
//! - Ingredient and step order follows the recipe record.
//! - Headline nutrition values are truncated toward zero, never rounded.

use crate::model::recipe::{Recipe, RecipeId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static MARKUP_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid markup tag regex"));

/// The four nutrition numbers shown as detail cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NutritionHighlights {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub name: String,
    pub original: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepLine {
    pub number: u32,
    pub text: String,
}

/// Screen-ready view of one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub id: RecipeId,
    pub title: String,
    pub image: String,
    /// Summary with markup tags removed.
    pub summary_text: String,
    /// e.g. `15 min`.
    pub ready_label: String,
    /// e.g. `4 servings`.
    pub servings_label: String,
    pub nutrition: NutritionHighlights,
    pub ingredients: Vec<IngredientLine>,
    pub steps: Vec<StepLine>,
}

/// Removes every `<...>` tag from `text`; entities and whitespace are kept.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG_RE.replace_all(text, "").into_owned()
}

/// Builds the detail projection for `recipe`.
pub fn derive_recipe_detail(recipe: &Recipe) -> RecipeDetail {
    let nutrition = &recipe.nutrition;
    RecipeDetail {
        id: recipe.id,
        title: recipe.title.clone(),
        image: recipe.image.clone(),
        summary_text: strip_markup(&recipe.summary),
        ready_label: format!("{} min", recipe.ready_in_minutes),
        servings_label: format!("{} servings", recipe.servings),
        nutrition: NutritionHighlights {
            calories: nutrition.calories.trunc() as i64,
            protein: nutrition.protein.trunc() as i64,
            carbs: nutrition.carbs.trunc() as i64,
            fat: nutrition.fat.trunc() as i64,
        },
        ingredients: recipe
            .ingredients
            .iter()
            .map(|ingredient| IngredientLine {
                name: ingredient.name.clone(),
                original: ingredient.original.clone(),
                image: ingredient.image.clone(),
            })
            .collect(),
        steps: recipe
            .instructions
            .iter()
            .map(|instruction| StepLine {
                number: instruction.number,
                text: instruction.step.clone(),
            })
            .collect(),
    }
}
