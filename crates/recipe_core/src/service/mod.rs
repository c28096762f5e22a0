//! Core use-case services.
//!
//! # Responsibility
//! - Own the catalog and its filter state behind a storage-agnostic store.
//! - Derive screen-ready projections so UI/FFI layers stay thin.
//! - Sum the day's logged meals into the nutrition overview.

pub mod catalog_service;
pub mod daily_nutrition;
pub mod recipe_detail;
