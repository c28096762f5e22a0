//! Category + text filter predicate.
//!
//! # Invariants
//! - `FilterState::default()` matches every recipe.
//! - Output order always equals catalog order.
//! - Matching never fails; no match is an empty result.

use crate::model::category::Category;
use crate::model::recipe::Recipe;
use serde::{Deserialize, Serialize};

/// The two filter inputs driven by the catalog screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// `None` disables category filtering.
    pub category: Option<Category>,
    /// Empty string disables text filtering. Not trimmed.
    pub search_text: String,
}

impl FilterState {
    /// Creates a filter from both inputs.
    pub fn new(category: Option<Category>, search_text: impl Into<String>) -> Self {
        Self {
            category,
            search_text: search_text.into(),
        }
    }

    /// Returns whether neither input narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.search_text.is_empty()
    }

    /// Returns whether `recipe` passes both clauses.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.category_matches(recipe) && self.text_matches(recipe)
    }

    /// Category clause: some diet tag equals or contains the category's
    /// display name, case-insensitively.
    pub fn category_matches(&self, recipe: &Recipe) -> bool {
        let Some(category) = self.category else {
            return true;
        };
        let name = fold_case(category.display_name());
        recipe.diets.iter().any(|diet| {
            let diet = fold_case(diet);
            // equality is subsumed by `contains`; kept as the observed rule
            diet == name || diet.contains(&name)
        })
    }

    /// Text clause: title, summary or any cuisine tag contains the search
    /// text, case-insensitively.
    pub fn text_matches(&self, recipe: &Recipe) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = fold_case(&self.search_text);
        contains_folded(&recipe.title, &needle)
            || contains_folded(&recipe.summary, &needle)
            || recipe
                .cuisines
                .iter()
                .any(|cuisine| contains_folded(cuisine, &needle))
    }
}

/// Stable single-pass filter over `recipes`.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: &FilterState) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| filter.matches(recipe))
        .collect()
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold_case(haystack).contains(folded_needle)
}

/// Lowercases `value` and maps final sigma onto `σ`, which `to_lowercase`
/// alone keeps apart by word position.
fn fold_case(value: &str) -> String {
    value.to_lowercase().replace('ς', "σ")
}

#[cfg(test)]
mod tests {
    use super::{filter_recipes, fold_case, FilterState};
    use crate::model::category::Category;
    use crate::model::recipe::Recipe;

    fn recipe(id: i64, title: &str, diets: &[&str], cuisines: &[&str]) -> Recipe {
        let mut recipe = Recipe::new(id, title);
        recipe.diets = diets.iter().map(|tag| tag.to_string()).collect();
        recipe.cuisines = cuisines.iter().map(|tag| tag.to_string()).collect();
        recipe
    }

    #[test]
    fn default_filter_is_unfiltered() {
        assert!(FilterState::default().is_unfiltered());
        assert!(!FilterState::new(None, " ").is_unfiltered());
    }

    #[test]
    fn category_matches_multi_word_diet_tag_by_substring() {
        let zoodles = recipe(8, "Zoodles", &["vegetarian", "low calorie option"], &[]);
        let filter = FilterState::new(Some(Category::LowCalorie), "");
        assert!(filter.category_matches(&zoodles));
    }

    #[test]
    fn category_without_diet_tags_never_matches() {
        let plain = recipe(1, "Plain Rice", &[], &[]);
        for category in Category::ALL {
            assert!(!FilterState::new(Some(category), "").category_matches(&plain));
        }
    }

    #[test]
    fn text_matches_cuisine_case_insensitively() {
        let bowl = recipe(2, "Quinoa Bowl", &[], &["Mediterranean"]);
        assert!(FilterState::new(None, "MEDITER").text_matches(&bowl));
        assert!(!FilterState::new(None, "greek").text_matches(&bowl));
    }

    #[test]
    fn text_matches_greek_final_sigma_in_any_position() {
        let souvlaki = recipe(9, "ΣΟΥΒΛΑΚΙ ΟΔΟΣ", &[], &[]);
        assert!(FilterState::new(None, "οδοσ").text_matches(&souvlaki));
        assert!(FilterState::new(None, "οδος").text_matches(&souvlaki));
        assert!(FilterState::new(None, "ΟΔΟΣ").text_matches(&souvlaki));
        assert_eq!(fold_case("ΟΔΟΣ"), fold_case("οδοσ"));
    }

    #[test]
    fn whitespace_search_text_is_a_real_needle() {
        let single = recipe(3, "Salad", &[], &[]);
        let spaced = recipe(4, "Taco Salad", &[], &[]);
        let recipes = vec![single, spaced];
        let hits = filter_recipes(&recipes, &FilterState::new(None, " "));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 4);
    }

    #[test]
    fn filter_state_wire_shape_uses_category_keys() {
        let filter = FilterState::new(Some(Category::LowCalorie), "soup");
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "category": "low_calorie", "search_text": "soup" })
        );

        let cleared: FilterState =
            serde_json::from_value(serde_json::json!({ "category": null, "search_text": "" }))
                .unwrap();
        assert!(cleared.is_unfiltered());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let hits = filter_recipes(&[], &FilterState::new(Some(Category::Vegan), "x"));
        assert!(hits.is_empty());
    }
}
