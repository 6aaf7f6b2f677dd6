//! # Filter Evaluator
//!
//! Pure function from (catalog, criteria) to the matching subset. Stable:
//! the result preserves the catalog's relative order. No mutation, no
//! side effects — safe to discard and recompute on every criteria change.

use crate::core::model::{Filters, Restaurant};

/// Evaluate `filters` against the whole catalog.
///
/// Each record must pass every predicate (conjunctive match). The
/// criteria's `date_range` field is intentionally not consulted.
pub fn apply(catalog: &[Restaurant], filters: &Filters) -> Vec<Restaurant> {
    catalog
        .iter()
        .filter(|r| matches(r, filters))
        .cloned()
        .collect()
}

/// True when a single record passes every active predicate.
pub fn matches(restaurant: &Restaurant, filters: &Filters) -> bool {
    matches_search(restaurant, &filters.search)
        && (filters.cuisine.is_empty() || restaurant.cuisine == filters.cuisine)
        && (filters.city.is_empty() || restaurant.city == filters.city)
        && (filters.rating == 0.0 || restaurant.rating >= filters.rating)
        && filters
            .price_range
            .is_none_or(|tier| restaurant.price_range == tier)
        && matches_characteristics(restaurant, &filters.characteristics)
}

/// Case-insensitive substring match over name, cuisine, and city.
fn matches_search(restaurant: &Restaurant, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    restaurant.name.to_lowercase().contains(&needle)
        || restaurant.cuisine.to_lowercase().contains(&needle)
        || restaurant.city.to_lowercase().contains(&needle)
}

/// Conjunctive subset test: every required characteristic must be present.
fn matches_characteristics(restaurant: &Restaurant, required: &[String]) -> bool {
    required
        .iter()
        .all(|c| restaurant.characteristics.contains(c))
}
