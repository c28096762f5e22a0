//! Catalog filtering.
//!
//! # Responsibility
//! - Decide recipe visibility from the category and free-text inputs.
//! - Keep filtering pure so the store and tests share one predicate.

pub mod filter;
