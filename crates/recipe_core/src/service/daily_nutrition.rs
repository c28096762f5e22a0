//! Daily nutrition overview: logged meals plus their summed macros.
//!
//! # Invariants
//! - Totals are the plain sum over every logged meal; sums saturate at `u32::MAX`.
//! - Meal order follows the source.

use crate::model::meal::Meal;
use crate::source::{MealSource, SourceResult};
use log::info;

/// Summed headline macros shown as overview cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NutritionTotals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl NutritionTotals {
    fn add_meal(self, meal: &Meal) -> Self {
        Self {
            calories: self.calories.saturating_add(meal.calories),
            protein: self.protein.saturating_add(meal.protein),
            carbs: self.carbs.saturating_add(meal.carbs),
            fat: self.fat.saturating_add(meal.fat),
        }
    }
}

/// Screen-ready overview of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyNutrition {
    pub totals: NutritionTotals,
    pub meals: Vec<Meal>,
}

/// Sums calories and macros over `meals`; an empty log totals zero.
pub fn summarize_meals(meals: &[Meal]) -> NutritionTotals {
    meals
        .iter()
        .fold(NutritionTotals::default(), NutritionTotals::add_meal)
}

/// Loads the day's meals from `source` and derives the overview.
///
/// # Errors
/// - Propagates the source's [`crate::SourceError`].
pub fn load_daily_nutrition<S: MealSource>(source: S) -> SourceResult<DailyNutrition> {
    let meals = source.load_meals()?;
    let totals = summarize_meals(&meals);
    info!(
        "event=daily_nutrition module=service status=ok meals={} calories={}",
        meals.len(),
        totals.calories
    );
    Ok(DailyNutrition { totals, meals })
}

#[cfg(test)]
mod tests {
    use super::{summarize_meals, NutritionTotals};
    use crate::model::meal::Meal;

    fn logged(calories: u32, protein: u32, carbs: u32, fat: u32) -> Meal {
        Meal {
            calories,
            protein,
            carbs,
            fat,
            ..Meal::new("Snack", "4:00 PM", "leaf.fill")
        }
    }

    #[test]
    fn empty_log_totals_zero() {
        assert_eq!(summarize_meals(&[]), NutritionTotals::default());
    }

    #[test]
    fn totals_sum_every_macro_independently() {
        let totals = summarize_meals(&[logged(100, 5, 10, 2), logged(250, 20, 0, 9)]);
        assert_eq!(
            totals,
            NutritionTotals {
                calories: 350,
                protein: 25,
                carbs: 10,
                fat: 11,
            }
        );
    }

    #[test]
    fn totals_saturate_instead_of_wrapping() {
        let totals = summarize_meals(&[logged(u32::MAX, 0, 0, 0), logged(1, 0, 0, 0)]);
        assert_eq!(totals.calories, u32::MAX);
    }
}
