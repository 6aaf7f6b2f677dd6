//! End-to-end flows through the public store API: everything a UI
//! session does, minus the terminal.

use chrono::{NaiveDate, TimeZone, Utc};
use mesa::core::action::{Action, Effect, update};
use mesa::core::filter;
use mesa::core::model::{Coordinates, FilterPatch, Filters, PriceRange, Restaurant};
use mesa::core::seed::{SUGGESTED_CHARACTERISTICS, SUGGESTED_CUISINES, seed_catalog};
use mesa::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

/// Builds a record the way the editor does, with a caller-chosen id.
fn record(id: &str, name: &str, cuisine: &str, city: &str, rating: f64) -> Restaurant {
    let stamp = Utc.with_ymd_and_hms(2024, 7, 1, 18, 30, 0).unwrap();
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        address: "Carrera 7 #12-34".to_string(),
        city: city.to_string(),
        coordinates: Coordinates { lat: 4.6, lng: -74.08 },
        rating,
        description: "Worth a return visit.".to_string(),
        images: vec!["https://example.com/door.jpeg".to_string()],
        date_visited: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        characteristics: vec!["casual".to_string()],
        price_range: PriceRange::Moderate,
        tags: Vec::new(),
        notes: String::new(),
        created_at: stamp,
        updated_at: stamp,
    }
}

// ============================================================================
// Session Flows
// ============================================================================

#[test]
fn test_full_catalog_session() {
    let mut app = App::new();
    assert_eq!(app.restaurants.len(), 6);

    // Browse: narrow to Bogotá sushi.
    update(
        &mut app,
        Action::SetFilters(FilterPatch {
            search: Some("sushi".to_string()),
            ..Default::default()
        }),
    );
    assert_eq!(app.filtered.len(), 1);
    let sushi = app.filtered[0].clone();

    // Open it, then edit the rating.
    update(&mut app, Action::Select(Some(sushi.clone())));
    let mut edited = sushi.clone();
    edited.rating = 4.9;
    update(&mut app, Action::Update(edited));
    assert_eq!(app.selected.as_ref().unwrap().rating, 4.9);

    // Mutation reset the view to the whole catalog; re-applying the
    // criteria narrows it again.
    assert_eq!(app.filtered.len(), app.restaurants.len());
    update(&mut app, Action::SetFilters(FilterPatch::default()));
    assert_eq!(app.filtered.len(), 1);

    // Delete it from the detail view.
    update(&mut app, Action::Delete(sushi.id.clone()));
    assert!(app.selected.is_none());
    assert_eq!(app.restaurants.len(), 5);
    assert!(app.restaurants.iter().all(|r| r.id != sushi.id));

    // Quit.
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

#[test]
fn test_add_then_find_through_filters() {
    let mut app = App::new();
    update(
        &mut app,
        Action::Add(record("new-1", "Andrés Carne de Res", "Colombian", "Chía", 4.6)),
    );
    assert_eq!(app.restaurants.len(), 7);
    assert_eq!(app.restaurants.last().unwrap().city, "Chía");

    // The new city is now a filter option, and filtering reaches it.
    assert!(app.cities().contains(&"Chía".to_string()));
    update(
        &mut app,
        Action::SetFilters(FilterPatch {
            city: Some("Chía".to_string()),
            ..Default::default()
        }),
    );
    assert_eq!(app.filtered.len(), 1);
    assert_eq!(app.filtered[0].id, "new-1");
}

#[test]
fn test_filters_stack_conjunctively_across_patches() {
    let mut app = App::new();
    let patches = [
        FilterPatch {
            city: Some("Bogotá".to_string()),
            ..Default::default()
        },
        FilterPatch {
            rating: Some(4.5),
            ..Default::default()
        },
        FilterPatch {
            price_range: Some(Some(PriceRange::Luxury)),
            ..Default::default()
        },
    ];
    let expected_counts = [4, 3, 1];
    for (patch, expected) in patches.into_iter().zip(expected_counts) {
        update(&mut app, Action::SetFilters(patch));
        assert_eq!(app.filtered.len(), expected);
    }
    assert_eq!(app.filtered[0].name, "El Cielo");

    // And the criteria accumulated rather than replacing each other.
    assert_eq!(app.filters.city, "Bogotá");
    assert_eq!(app.filters.rating, 4.5);
    assert_eq!(app.filters.price_range, Some(PriceRange::Luxury));
}

#[test]
fn test_replace_catalog_swaps_everything() {
    let mut app = App::new();
    let fresh = vec![record("a", "One", "Thai", "Cali", 4.0)];
    update(&mut app, Action::ReplaceCatalog(fresh.clone()));
    assert_eq!(app.restaurants, fresh);
    assert_eq!(app.filtered, fresh);
}

// ============================================================================
// Evaluator Against the Seed Data
// ============================================================================

#[test]
fn test_seed_catalog_is_fully_searchable() {
    let catalog = seed_catalog();
    for r in &catalog {
        let filters = Filters {
            search: r.name.to_uppercase(),
            ..Default::default()
        };
        let found = filter::apply(&catalog, &filters);
        assert!(
            found.iter().any(|f| f.id == r.id),
            "search for {:?} should find it",
            r.name
        );
    }
}

#[test]
fn test_characteristic_filters_cover_seed_vocabulary() {
    // Every characteristic used by the seed data is reachable through
    // the suggestion vocabulary, so conjunctive filtering can always be
    // built from the UI affordances.
    let catalog = seed_catalog();
    for r in &catalog {
        let filters = Filters {
            characteristics: r.characteristics.clone(),
            ..Default::default()
        };
        for c in &r.characteristics {
            assert!(SUGGESTED_CHARACTERISTICS.contains(&c.as_str()));
        }
        let found = filter::apply(&catalog, &filters);
        assert!(found.iter().any(|f| f.id == r.id));
    }
    for r in &catalog {
        assert!(SUGGESTED_CUISINES.contains(&r.cuisine.as_str()));
    }
}

#[test]
fn test_derived_view_is_always_a_subsequence() {
    // Whatever criteria are applied, the derived view preserves catalog
    // order and never invents records.
    let mut app = App::new();
    let criteria = [
        FilterPatch {
            search: Some("a".to_string()),
            ..Default::default()
        },
        FilterPatch {
            rating: Some(4.5),
            ..Default::default()
        },
        FilterPatch {
            characteristics: Some(vec!["cozy".to_string()]),
            ..Default::default()
        },
    ];
    for patch in criteria {
        update(&mut app, Action::SetFilters(patch));
        let mut catalog_iter = app.restaurants.iter();
        for shown in &app.filtered {
            assert!(
                catalog_iter.any(|r| r.id == shown.id),
                "derived view out of order or contains unknown record"
            );
        }
    }
}
