//! Catalog store: immutable recipes plus mutable filter state.
//!
//! # Responsibility
//! - Load and validate the catalog once from an injected [`RecipeSource`].
//! - Expose the visible subset for the current [`FilterState`].
//!
//! # Invariants
//! - Recipes are never added, removed or edited after construction.
//! - Recipe ids are unique within one store.
//! - Filter mutation never fails and never touches the catalog.

use crate::model::category::Category;
use crate::model::recipe::{Recipe, RecipeId, RecipeValidationError};
use crate::search::filter::{filter_recipes, FilterState};
use crate::source::{RecipeSource, SourceError};
use log::{debug, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Store construction error.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Source(SourceError),
    InvalidRecipe {
        id: RecipeId,
        source: RecipeValidationError,
    },
    DuplicateId(RecipeId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
            Self::InvalidRecipe { id, source } => write!(f, "invalid recipe {id}: {source}"),
            Self::DuplicateId(id) => write!(f, "duplicate recipe id: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::InvalidRecipe { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<SourceError> for CatalogError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

/// In-memory recipe catalog with category and text filters.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    recipes: Vec<Recipe>,
    filter: FilterState,
}

impl CatalogStore {
    /// Builds a store with no active filter.
    pub fn from_source<S: RecipeSource>(source: S) -> CatalogResult<Self> {
        Self::with_filter(source, FilterState::default())
    }

    /// Builds a store with an initial filter state.
    ///
    /// # Errors
    /// - [`CatalogError::Source`] when the source fails to load.
    /// - [`CatalogError::InvalidRecipe`] for the first record failing validation.
    /// - [`CatalogError::DuplicateId`] for the first repeated id.
    pub fn with_filter<S: RecipeSource>(source: S, filter: FilterState) -> CatalogResult<Self> {
        let recipes = source.load_recipes()?;
        check_catalog(&recipes)?;
        info!(
            "event=catalog_load module=catalog status=ok recipes={}",
            recipes.len()
        );
        Ok(Self { recipes, filter })
    }

    /// Replaces the category filter; `None` clears it.
    pub fn set_selected_category(&mut self, category: Option<Category>) {
        self.filter.category = category;
    }

    /// Replaces the text filter; an empty string disables it.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
    }

    /// Chip behavior: re-selecting the active category clears it.
    pub fn toggle_category(&mut self, category: Category) {
        if self.filter.category == Some(category) {
            self.filter.category = None;
        } else {
            self.filter.category = Some(category);
        }
    }

    pub fn clear_search(&mut self) {
        self.filter.search_text.clear();
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.filter.category
    }

    pub fn search_text(&self) -> &str {
        &self.filter.search_text
    }

    /// Recomputes the recipes visible under the current filter, in catalog order.
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        let visible = filter_recipes(&self.recipes, &self.filter);
        debug!(
            "event=catalog_filter module=catalog status=ok category={} text_len={} visible={}",
            self.filter.category.map_or("none", Category::key),
            self.filter.search_text.chars().count(),
            visible.len()
        );
        visible
    }

    /// Looks up one recipe by id, ignoring the filter.
    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Full catalog in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Category chips in display order.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }
}

fn check_catalog(recipes: &[Recipe]) -> CatalogResult<()> {
    let mut seen = HashSet::with_capacity(recipes.len());
    for recipe in recipes {
        recipe
            .validate()
            .map_err(|source| CatalogError::InvalidRecipe {
                id: recipe.id,
                source,
            })?;
        if !seen.insert(recipe.id) {
            return Err(CatalogError::DuplicateId(recipe.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CatalogError, CatalogStore};
    use crate::model::category::Category;
    use crate::model::recipe::Recipe;
    use crate::source::{InMemoryRecipeSource, RecipeSource, SourceError, SourceResult};

    struct OfflineSource;

    impl RecipeSource for OfflineSource {
        fn load_recipes(&self) -> SourceResult<Vec<Recipe>> {
            Err(SourceError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn source_failure_is_propagated() {
        let err = CatalogStore::from_source(OfflineSource).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Source(SourceError::Unavailable("offline".to_string()))
        );
        assert!(err.to_string().contains("offline"));
    }

    #[test]
    fn toggle_category_selects_then_clears() {
        let source = InMemoryRecipeSource::new(vec![Recipe::new(1, "Rice")]);
        let mut store = CatalogStore::from_source(&source).unwrap();

        store.toggle_category(Category::Keto);
        assert_eq!(store.selected_category(), Some(Category::Keto));
        store.toggle_category(Category::Vegan);
        assert_eq!(store.selected_category(), Some(Category::Vegan));
        store.toggle_category(Category::Vegan);
        assert_eq!(store.selected_category(), None);
    }

    #[test]
    fn clear_search_resets_text_only() {
        let source = InMemoryRecipeSource::new(vec![Recipe::new(1, "Rice")]);
        let mut store = CatalogStore::from_source(source).unwrap();
        store.set_selected_category(Some(Category::Healthy));
        store.set_search_text("rice");

        store.clear_search();
        assert_eq!(store.search_text(), "");
        assert_eq!(store.selected_category(), Some(Category::Healthy));
    }
}
