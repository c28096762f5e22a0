//! Flutter-facing bindings over `recipe_core`.

pub mod api;
