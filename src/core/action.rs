//! # Actions
//!
//! Everything that can happen to the catalog becomes an `Action`.
//! User saves a new entry? That's `Action::Add(restaurant)`.
//! User types in the search box? That's `Action::SetFilters(patch)`.
//!
//! The `update()` function takes the current state and an action, applies
//! it as one atomic transition, and returns an `Effect` for the caller.
//! No I/O here. No action is partially applied, and none can fail: an
//! update or delete naming an absent id is a silent no-op.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```
//!
//! The derived `filtered` view follows two different rules:
//!
//! - A criteria change (`SetFilters`) re-runs the filter evaluator over
//!   the full catalog.
//! - A catalog mutation (`ReplaceCatalog` / `Add` / `Update` / `Delete`)
//!   resets the derived view to the whole mutated catalog. Active
//!   criteria are NOT re-applied until the next `SetFilters`.

use log::debug;

use crate::core::filter;
use crate::core::model::{FilterPatch, Restaurant, ViewMode};
use crate::core::state::App;

/// One intent against the store, with its payload.
#[derive(Debug, Clone)]
pub enum Action {
    /// Swap in a whole new catalog. The derived view becomes the payload
    /// as-is; active criteria are bypassed.
    ReplaceCatalog(Vec<Restaurant>),
    /// Append a record. Id uniqueness is the caller's responsibility —
    /// the store does not check it.
    Add(Restaurant),
    /// Replace the record with the payload's id wholesale.
    Update(Restaurant),
    /// Remove the record with this id.
    Delete(String),
    /// Set or clear the selection. Always leaves edit mode.
    Select(Option<Restaurant>),
    /// Merge a sparse patch into the criteria and recompute the view.
    SetFilters(FilterPatch),
    SetViewMode(ViewMode),
    ToggleDarkMode,
    SetEditMode(bool),
    SetAddMode(bool),
    SetLoading(bool),
    Quit,
}

/// What the caller should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Apply `action` to `app`. Every transition is synchronous and total.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::ReplaceCatalog(catalog) => {
            app.filtered = catalog.clone();
            app.restaurants = catalog;
        }

        Action::Add(restaurant) => {
            app.restaurants.push(restaurant);
            app.filtered = app.restaurants.clone();
        }

        Action::Update(restaurant) => {
            let Some(existing) = app.restaurants.iter_mut().find(|r| r.id == restaurant.id)
            else {
                // No matching id: silent no-op, state untouched.
                return Effect::None;
            };
            *existing = restaurant.clone();
            if app
                .selected
                .as_ref()
                .is_some_and(|s| s.id == restaurant.id)
            {
                app.selected = Some(restaurant);
            }
            app.filtered = app.restaurants.clone();
        }

        Action::Delete(id) => {
            app.restaurants.retain(|r| r.id != id);
            if app.selected.as_ref().is_some_and(|s| s.id == id) {
                app.selected = None;
            }
            app.filtered = app.restaurants.clone();
        }

        Action::Select(restaurant) => {
            app.selected = restaurant;
            // Selecting while editing implicitly cancels the edit.
            app.edit_mode = false;
        }

        Action::SetFilters(patch) => {
            app.filters.apply(patch);
            app.filtered = filter::apply(&app.restaurants, &app.filters);
        }

        Action::SetViewMode(mode) => app.view_mode = mode,
        Action::ToggleDarkMode => app.dark_mode = !app.dark_mode,
        Action::SetEditMode(on) => app.edit_mode = on,
        Action::SetAddMode(on) => app.add_mode = on,
        Action::SetLoading(on) => app.is_loading = on,

        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
