//! Closed set of category filter keys.
//!
//! A category is matched against a recipe's free-text diet tags by its display
//! name; see [`crate::search::filter`].

use serde::{Deserialize, Serialize};

/// Named filter key shown as a chip in the catalog screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Healthy,
    LowCalorie,
    Vegan,
    Keto,
    QuickEasy,
    HighProtein,
    GlutenFree,
    Vegetarian,
}

impl Category {
    /// Every category in chip display order.
    pub const ALL: [Category; 8] = [
        Category::Healthy,
        Category::LowCalorie,
        Category::Vegan,
        Category::Keto,
        Category::QuickEasy,
        Category::HighProtein,
        Category::GlutenFree,
        Category::Vegetarian,
    ];

    /// Human-readable name, also the needle matched against diet tags.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::LowCalorie => "Low Calorie",
            Self::Vegan => "Vegan",
            Self::Keto => "Keto",
            Self::QuickEasy => "Quick & Easy",
            Self::HighProtein => "High Protein",
            Self::GlutenFree => "Gluten Free",
            Self::Vegetarian => "Vegetarian",
        }
    }

    /// Presentation icon identifier (SF Symbols naming).
    pub fn icon(self) -> &'static str {
        match self {
            Self::Healthy => "leaf.fill",
            Self::LowCalorie => "flame.fill",
            Self::Vegan => "carrot.fill",
            Self::Keto => "leaf.arrow.circlepath",
            Self::QuickEasy => "clock.fill",
            Self::HighProtein => "dumbbell.fill",
            Self::GlutenFree => "checkmark.circle.fill",
            Self::Vegetarian => "leaf.circle.fill",
        }
    }

    /// Stable snake_case key, identical to the serde wire value.
    pub fn key(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::LowCalorie => "low_calorie",
            Self::Vegan => "vegan",
            Self::Keto => "keto",
            Self::QuickEasy => "quick_easy",
            Self::HighProtein => "high_protein",
            Self::GlutenFree => "gluten_free",
            Self::Vegetarian => "vegetarian",
        }
    }

    /// Resolves a category from its key or display name, ignoring case and
    /// surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|category| {
            category.key() == needle || category.display_name().to_lowercase() == needle
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn keys_match_serde_wire_values() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.key());
        }
    }

    #[test]
    fn parse_accepts_key_and_display_name() {
        assert_eq!(Category::parse("quick_easy"), Some(Category::QuickEasy));
        assert_eq!(Category::parse(" Quick & Easy "), Some(Category::QuickEasy));
        assert_eq!(Category::parse("LOW CALORIE"), Some(Category::LowCalorie));
        assert_eq!(Category::parse("paleo"), None);
    }
}
