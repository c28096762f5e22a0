//! Recipe catalog domain model.
//!
//! # Responsibility
//! - Define the records the catalog holds and the filter key enumeration.
//! - Define the logged meals behind the daily nutrition overview.
//! - Keep record-level validation next to the data it guards.
//!
//! # Invariants
//! - A `Recipe` is immutable once it enters a catalog.
//! - `Category` is a closed set; it is never persisted per recipe.

pub mod category;
pub mod meal;
pub mod recipe;
