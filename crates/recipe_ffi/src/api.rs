//! FFI use-case API for the mobile shell.
//!
//! # Responsibility
//! - Expose catalog queries, recipe details and the daily nutrition overview
//!   as plain data envelopes.
//! - Keep the shell in charge of filter state; every call is self-contained.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Unknown category keys are reported in the envelope, never as a panic.

use log::warn;
use recipe_core::{
    core_version as core_version_inner, derive_recipe_detail,
    init_logging as init_logging_inner, load_daily_nutrition, ping as ping_inner, CatalogStore,
    Category, DailyNutrition, Recipe, RecipeDetail, SampleMealSource, SampleRecipeSource,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One category chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryItem {
    /// Stable key accepted by [`recipe_query`], e.g. `low_calorie`.
    pub key: String,
    pub display_name: String,
    pub icon: String,
}

/// Card shape for one catalog grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCardItem {
    pub recipe_id: i64,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: u32,
    pub health_score: i32,
    pub is_favorite: bool,
}

/// Catalog query envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeQueryResponse {
    pub ok: bool,
    /// Visible recipes in catalog order.
    pub items: Vec<RecipeCardItem>,
    pub message: String,
}

/// Detail envelope; `detail` is `None` when `ok` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetailResponse {
    pub ok: bool,
    pub detail: Option<RecipeDetail>,
    pub message: String,
}

/// Nutrition overview envelope; `overview` is `None` when `ok` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionOverviewResponse {
    pub ok: bool,
    pub overview: Option<DailyNutrition>,
    pub message: String,
}

/// Lists category chips in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_categories() -> Vec<CategoryItem> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryItem {
            key: category.key().to_string(),
            display_name: category.display_name().to_string(),
            icon: category.icon().to_string(),
        })
        .collect()
}

/// Returns recipes visible for the given category key and search text.
///
/// # FFI contract
/// - `category_key = None` disables the category filter.
/// - `search_text` is used verbatim; empty disables text filtering.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_query(category_key: Option<String>, search_text: String) -> RecipeQueryResponse {
    let category = match category_key.as_deref() {
        None => None,
        Some(key) => match Category::parse(key) {
            Some(category) => Some(category),
            None => {
                warn!("event=recipe_query module=ffi status=rejected reason=unknown_category");
                return RecipeQueryResponse {
                    ok: false,
                    items: Vec::new(),
                    message: format!("recipe_query failed: unknown category `{key}`"),
                };
            }
        },
    };

    let mut store = match CatalogStore::from_source(SampleRecipeSource) {
        Ok(store) => store,
        Err(err) => {
            return RecipeQueryResponse {
                ok: false,
                items: Vec::new(),
                message: format!("recipe_query failed: {err}"),
            };
        }
    };
    store.set_selected_category(category);
    store.set_search_text(search_text);

    let items = store
        .visible_recipes()
        .into_iter()
        .map(to_card_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No recipes found.".to_string()
    } else {
        format!("Found {} recipe(s).", items.len())
    };
    RecipeQueryResponse {
        ok: true,
        items,
        message,
    }
}

/// Returns the detail projection of one recipe.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_detail(recipe_id: i64) -> RecipeDetailResponse {
    let store = match CatalogStore::from_source(SampleRecipeSource) {
        Ok(store) => store,
        Err(err) => {
            return RecipeDetailResponse {
                ok: false,
                detail: None,
                message: format!("recipe_detail failed: {err}"),
            };
        }
    };

    match store.recipe(recipe_id) {
        Some(recipe) => RecipeDetailResponse {
            ok: true,
            detail: Some(derive_recipe_detail(recipe)),
            message: String::new(),
        },
        None => RecipeDetailResponse {
            ok: false,
            detail: None,
            message: format!("recipe not found: {recipe_id}"),
        },
    }
}

/// Returns today's logged meals with their summed calories and macros.
#[flutter_rust_bridge::frb(sync)]
pub fn nutrition_overview() -> NutritionOverviewResponse {
    match load_daily_nutrition(SampleMealSource) {
        Ok(overview) => {
            let message = format!("Logged {} meal(s).", overview.meals.len());
            NutritionOverviewResponse {
                ok: true,
                overview: Some(overview),
                message,
            }
        }
        Err(err) => NutritionOverviewResponse {
            ok: false,
            overview: None,
            message: format!("nutrition_overview failed: {err}"),
        },
    }
}

fn to_card_item(recipe: &Recipe) -> RecipeCardItem {
    RecipeCardItem {
        recipe_id: recipe.id,
        title: recipe.title.clone(),
        image: recipe.image.clone(),
        ready_in_minutes: recipe.ready_in_minutes,
        health_score: recipe.health_score,
        is_favorite: recipe.is_favorite,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, nutrition_overview, ping, recipe_categories, recipe_detail,
        recipe_query,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/recipe-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn categories_expose_keys_in_display_order() {
        let categories = recipe_categories();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0].key, "healthy");
        assert_eq!(categories[1].display_name, "Low Calorie");
        assert_eq!(categories[4].icon, "clock.fill");
    }

    #[test]
    fn query_filters_by_category_key_and_text() {
        let response = recipe_query(Some("vegan".to_string()), "bowl".to_string());
        assert!(response.ok, "{}", response.message);
        let ids = response
            .items
            .iter()
            .map(|item| item.recipe_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 4]);
        assert_eq!(response.message, "Found 2 recipe(s).");
    }

    #[test]
    fn query_without_filters_returns_full_catalog() {
        let response = recipe_query(None, String::new());
        assert!(response.ok);
        assert_eq!(response.items.len(), 10);
    }

    #[test]
    fn query_rejects_unknown_category_key() {
        let response = recipe_query(Some("paleo".to_string()), String::new());
        assert!(!response.ok);
        assert!(response.items.is_empty());
        assert!(response.message.contains("paleo"));
    }

    #[test]
    fn query_reports_empty_result() {
        let response = recipe_query(Some("keto".to_string()), "zzz-no-match".to_string());
        assert!(response.ok);
        assert!(response.items.is_empty());
        assert_eq!(response.message, "No recipes found.");
    }

    #[test]
    fn detail_returns_projection_or_not_found() {
        let found = recipe_detail(3);
        assert!(found.ok);
        let detail = found.detail.expect("detail for recipe 3");
        assert_eq!(detail.title, "Keto Chicken Stir-Fry");
        assert_eq!(detail.steps.len(), 5);

        let missing = recipe_detail(404);
        assert!(!missing.ok);
        assert!(missing.detail.is_none());
        assert_eq!(missing.message, "recipe not found: 404");
    }

    #[test]
    fn nutrition_overview_returns_meals_and_totals() {
        let response = nutrition_overview();
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.message, "Logged 4 meal(s).");
        let overview = response.overview.expect("sample overview");
        assert_eq!(overview.meals.len(), 4);
        assert_eq!(overview.totals.calories, 1230);
        assert_eq!(overview.totals.protein, 86);
        assert_eq!(overview.totals.carbs, 104);
        assert_eq!(overview.totals.fat, 54);
    }
}
