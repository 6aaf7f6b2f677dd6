//! # Seed Catalog
//!
//! The fixed starter dataset and the suggestion vocabularies. The catalog
//! ships as embedded JSON and is deserialized once at store creation — a
//! stand-in for a future persistence-backed load, which is why it goes
//! through serde instead of being built up in code.
//!
//! The vocabularies only populate selection affordances (cuisine cycling,
//! characteristic toggles). They are suggestions, not closed enumerations:
//! records may carry values outside them.

use log::debug;

use crate::core::model::Restaurant;

const SEED_JSON: &str = include_str!("seed.json");

/// Cuisine suggestions offered by the filter panel and the editor.
pub const SUGGESTED_CUISINES: &[&str] = &[
    "Colombian",
    "Japanese",
    "Italian",
    "Mexican",
    "French",
    "American",
    "Thai",
    "Indian",
    "Chinese",
    "Mediterranean",
    "Contemporary",
    "Fine Dining",
    "Coffee & Brunch",
    "Seafood",
    "Steakhouse",
];

/// Characteristic suggestions offered by the filter panel and the editor.
pub const SUGGESTED_CHARACTERISTICS: &[&str] = &[
    "cozy",
    "modern",
    "upscale",
    "casual",
    "romantic",
    "date night",
    "family-friendly",
    "outdoor seating",
    "historic",
    "trendy",
    "innovative",
    "traditional",
    "fresh seafood",
    "coffee specialty",
    "wine bar",
    "sake bar",
    "tasting menu",
    "wood-fired",
    "authentic",
    "local ingredients",
];

/// Deserialize the embedded starter catalog.
pub fn seed_catalog() -> Vec<Restaurant> {
    let catalog: Vec<Restaurant> =
        serde_json::from_str(SEED_JSON).expect("embedded seed catalog is valid JSON");
    debug!("Seeded catalog with {} restaurants", catalog.len());
    catalog
}
