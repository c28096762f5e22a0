//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `recipe_core` linkage without the mobile shell.
//! - Print the visible sample recipes for an optional search text.
//! - Print the sample day's nutrition totals.

use recipe_core::{load_daily_nutrition, CatalogStore, SampleMealSource, SampleRecipeSource};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("recipe_core ping={}", recipe_core::ping());
    println!("recipe_core version={}", recipe_core::core_version());

    let search_text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let mut store = match CatalogStore::from_source(SampleRecipeSource) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("recipe_core catalog error: {err}");
            return ExitCode::FAILURE;
        }
    };
    store.set_search_text(search_text);

    for recipe in store.visible_recipes() {
        println!("{:>3}  {}", recipe.id, recipe.title);
    }

    match load_daily_nutrition(SampleMealSource) {
        Ok(day) => {
            let totals = day.totals;
            println!(
                "today kcal={} protein={}g carbs={}g fat={}g",
                totals.calories, totals.protein, totals.carbs, totals.fat
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("recipe_core meal log error: {err}");
            ExitCode::FAILURE
        }
    }
}
