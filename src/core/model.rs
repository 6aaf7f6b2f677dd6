//! # Domain Model
//!
//! The restaurant record, the filter criteria, and the small enums the
//! rest of the app is built around. These are plain data types — all
//! behavior lives in `update()` (action.rs) and the filter evaluator
//! (filter.rs).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Restaurant
// ============================================================================

/// Geographic position of a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Price tier, exactly four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    /// The dollar-sign form shown everywhere in the UI.
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Upscale => "$$$",
            PriceRange::Luxury => "$$$$",
        }
    }

    /// Cycle to the next tier, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            PriceRange::Budget => PriceRange::Moderate,
            PriceRange::Moderate => PriceRange::Upscale,
            PriceRange::Upscale => PriceRange::Luxury,
            PriceRange::Luxury => PriceRange::Budget,
        }
    }

    /// Cycle to the previous tier, wrapping around.
    pub fn prev(&self) -> Self {
        match self {
            PriceRange::Budget => PriceRange::Luxury,
            PriceRange::Moderate => PriceRange::Budget,
            PriceRange::Upscale => PriceRange::Moderate,
            PriceRange::Luxury => PriceRange::Upscale,
        }
    }
}

/// One visited restaurant.
///
/// Immutable by convention: edits go through `Action::Update`, which
/// replaces the record wholesale. `id` is unique across the catalog and
/// never reused. `rating` is 0–5 by UI affordance only — the model does
/// not clamp it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub address: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub rating: f64,
    pub description: String,
    /// Image reference URLs; the first is the primary image.
    pub images: Vec<String>,
    pub date_visited: NaiveDate,
    /// Characteristic tags; toggle semantics, duplicates never accumulate.
    pub characteristics: Vec<String>,
    pub price_range: PriceRange,
    /// Free-form hashtag-style tags.
    pub tags: Vec<String>,
    pub notes: String,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Touched on every mutating edit.
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Rating rounded to one decimal, as displayed on cards and rows.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

// ============================================================================
// Filter criteria
// ============================================================================

/// An inclusive visit-date window.
///
/// Part of the criteria schema but never consulted by the evaluator —
/// kept so a saved criteria value round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// The active query over the catalog.
///
/// Empty string / zero / empty vec / `None` all mean "no constraint" for
/// their field. `characteristics` is conjunctive: a record must carry
/// every listed characteristic to match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    pub search: String,
    pub cuisine: String,
    pub city: String,
    pub rating: f64,
    pub characteristics: Vec<String>,
    pub price_range: Option<PriceRange>,
    pub date_range: DateRange,
}

impl Filters {
    /// True when no field constrains the catalog.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.cuisine.is_empty()
            && self.city.is_empty()
            && self.rating == 0.0
            && self.characteristics.is_empty()
            && self.price_range.is_none()
    }

    /// Merge a sparse patch into these criteria. Only populated patch
    /// fields are overwritten; everything else is retained.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(cuisine) = patch.cuisine {
            self.cuisine = cuisine;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(characteristics) = patch.characteristics {
            self.characteristics = characteristics;
        }
        if let Some(price_range) = patch.price_range {
            self.price_range = price_range;
        }
        if let Some(date_range) = patch.date_range {
            self.date_range = date_range;
        }
    }
}

/// A partial set of filter fields, the payload of `Action::SetFilters`.
///
/// Same sparse-override shape as the config structs: `None` = leave the
/// field alone. Note `price_range` is doubly wrapped — the outer `Option`
/// is "touch this field?", the inner one is the criteria value itself.
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub cuisine: Option<String>,
    pub city: Option<String>,
    pub rating: Option<f64>,
    pub characteristics: Option<Vec<String>>,
    pub price_range: Option<Option<PriceRange>>,
    pub date_range: Option<DateRange>,
}

impl FilterPatch {
    /// A patch that resets every field to its unconstrained value.
    pub fn clear_all() -> Self {
        Self {
            search: Some(String::new()),
            cuisine: Some(String::new()),
            city: Some(String::new()),
            rating: Some(0.0),
            characteristics: Some(Vec::new()),
            price_range: Some(None),
            date_range: Some(DateRange::default()),
        }
    }
}

// ============================================================================
// View mode
// ============================================================================

/// Presentation mode for the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Gallery,
    List,
    Map,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Gallery => "Gallery",
            ViewMode::List => "List",
            ViewMode::Map => "Map",
        }
    }

    /// Cycle to the next mode (Tab in the TUI).
    pub fn next(&self) -> Self {
        match self {
            ViewMode::Gallery => ViewMode::List,
            ViewMode::List => ViewMode::Map,
            ViewMode::Map => ViewMode::Gallery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_restaurant;

    #[test]
    fn test_price_range_symbols() {
        assert_eq!(PriceRange::Budget.symbol(), "$");
        assert_eq!(PriceRange::Moderate.symbol(), "$$");
        assert_eq!(PriceRange::Upscale.symbol(), "$$$");
        assert_eq!(PriceRange::Luxury.symbol(), "$$$$");
    }

    #[test]
    fn test_price_range_cycle_wraps() {
        assert_eq!(PriceRange::Luxury.next(), PriceRange::Budget);
        assert_eq!(PriceRange::Budget.prev(), PriceRange::Luxury);
        // next then prev lands back where we started
        let tier = PriceRange::Upscale;
        assert_eq!(tier.next().prev(), tier);
    }

    #[test]
    fn test_price_range_serde_uses_dollar_signs() {
        let json = serde_json::to_string(&PriceRange::Upscale).unwrap();
        assert_eq!(json, "\"$$$\"");
        let parsed: PriceRange = serde_json::from_str("\"$$\"").unwrap();
        assert_eq!(parsed, PriceRange::Moderate);
    }

    #[test]
    fn test_view_mode_cycle_covers_all_modes() {
        let start = ViewMode::Gallery;
        assert_eq!(start.next(), ViewMode::List);
        assert_eq!(start.next().next(), ViewMode::Map);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_rating_label_rounds_to_one_decimal() {
        let mut r = sample_restaurant("1", "Casa", "Colombian", "Bogotá");
        r.rating = 4.55;
        assert_eq!(r.rating_label(), "4.5");
        r.rating = 5.0;
        assert_eq!(r.rating_label(), "5.0");
    }

    #[test]
    fn test_filters_default_is_empty() {
        assert!(Filters::default().is_empty());
    }

    #[test]
    fn test_filters_apply_merges_only_listed_fields() {
        let mut filters = Filters {
            search: "zen".to_string(),
            ..Default::default()
        };
        filters.apply(FilterPatch {
            cuisine: Some("Italian".to_string()),
            ..Default::default()
        });
        assert_eq!(filters.search, "zen");
        assert_eq!(filters.cuisine, "Italian");
        assert_eq!(filters.city, "");
        assert_eq!(filters.rating, 0.0);
    }

    #[test]
    fn test_filters_apply_can_clear_price_range() {
        let mut filters = Filters {
            price_range: Some(PriceRange::Luxury),
            ..Default::default()
        };
        filters.apply(FilterPatch {
            price_range: Some(None),
            ..Default::default()
        });
        assert!(filters.price_range.is_none());
    }

    #[test]
    fn test_clear_all_patch_resets_everything() {
        let mut filters = Filters {
            search: "pizza".to_string(),
            cuisine: "Italian".to_string(),
            city: "Bogotá".to_string(),
            rating: 4.0,
            characteristics: vec!["cozy".to_string()],
            price_range: Some(PriceRange::Moderate),
            ..Default::default()
        };
        filters.apply(FilterPatch::clear_all());
        assert!(filters.is_empty());
        assert_eq!(filters, Filters::default());
    }
}
