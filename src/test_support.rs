//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{NaiveDate, TimeZone, Utc};

use crate::core::model::{Coordinates, PriceRange, Restaurant};
use crate::core::state::App;

/// A restaurant with fixed timestamps and sensible defaults for the
/// fields a test doesn't care about.
pub fn sample_restaurant(id: &str, name: &str, cuisine: &str, city: &str) -> Restaurant {
    let stamp = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        address: "Calle 1 #2-34".to_string(),
        city: city.to_string(),
        coordinates: Coordinates { lat: 4.6, lng: -74.08 },
        rating: 4.0,
        description: "A place worth remembering.".to_string(),
        images: vec!["https://example.com/front.jpeg".to_string()],
        date_visited: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
        characteristics: vec!["cozy".to_string()],
        price_range: PriceRange::Moderate,
        tags: vec!["test".to_string()],
        notes: String::new(),
        created_at: stamp,
        updated_at: stamp,
    }
}

/// Creates a test App seeded with the embedded starter catalog.
pub fn test_app() -> App {
    App::new()
}
