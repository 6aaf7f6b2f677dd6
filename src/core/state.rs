//! # Application State
//!
//! Core business state for Mesa. This module contains domain state only —
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── restaurants: Vec<Restaurant>   // the full catalog, insertion order
//! ├── filtered: Vec<Restaurant>      // derived view, never hand-edited
//! ├── selected: Option<Restaurant>   // currently opened record
//! ├── filters: Filters               // active query criteria
//! ├── view_mode: ViewMode            // gallery / list / map
//! ├── dark_mode: bool                // palette toggle
//! ├── edit_mode: bool                // editing the selected record
//! ├── add_mode: bool                 // creating a new record
//! ├── is_loading: bool               // spinner flag
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::model::{Filters, Restaurant, ViewMode};
use crate::core::seed;

pub struct App {
    /// The full catalog, insertion order preserved.
    pub restaurants: Vec<Restaurant>,
    /// Derived view. Recomputed by the reducer, never edited directly.
    pub filtered: Vec<Restaurant>,
    /// The record currently open in the detail overlay, if any.
    pub selected: Option<Restaurant>,
    pub filters: Filters,
    pub view_mode: ViewMode,
    pub dark_mode: bool,
    pub edit_mode: bool,
    pub add_mode: bool,
    pub is_loading: bool,
    pub status_message: String,
}

impl App {
    /// A store seeded with the embedded starter catalog.
    pub fn new() -> Self {
        Self::with_catalog(seed::seed_catalog())
    }

    /// A store over an explicit catalog. The derived view starts as the
    /// whole catalog because the initial criteria constrain nothing.
    pub fn with_catalog(catalog: Vec<Restaurant>) -> Self {
        Self {
            filtered: catalog.clone(),
            restaurants: catalog,
            selected: None,
            filters: Filters::default(),
            view_mode: ViewMode::default(),
            dark_mode: false,
            edit_mode: false,
            add_mode: false,
            is_loading: false,
            status_message: String::new(),
        }
    }

    /// Seeded store with the start view and palette from config.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            view_mode: config.start_view,
            dark_mode: config.dark_mode,
            ..Self::new()
        }
    }

    /// Distinct cities present in the catalog, in first-seen order.
    /// Feeds the filter panel's city cycle.
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();
        for r in &self.restaurants {
            if !cities.contains(&r.city) {
                cities.push(r.city.clone());
            }
        }
        cities
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
