//! # TUI Components
//!
//! All UI components for the terminal interface. Each file is
//! self-contained: state types, event types, rendering, event handling,
//! and tests live together.
//!
//! Two patterns, mirroring the core/adapter split:
//!
//! - **Stateless components** receive all data as props and just draw:
//!   `TitleBar`, `MapView`.
//! - **Stateful components** follow the persistent state + transient
//!   render wrapper pattern: a `*State` struct lives in `TuiState`
//!   across frames, a borrowing wrapper is built each frame to render
//!   it. `Gallery`, `ListView`, `Detail`, `FilterPanel`, `Editor`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status bar)
//! ├── gallery.rs       (card grid view)
//! ├── list_view.rs     (table view)
//! ├── map_view.rs      (map placeholder)
//! ├── detail.rs        (record detail overlay)
//! ├── filter_panel.rs  (criteria editing overlay)
//! ├── editor.rs        (add/edit form overlay)
//! └── input_field.rs   (single-line text input)
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

mod detail;
mod editor;
mod filter_panel;
mod gallery;
mod input_field;
mod list_view;
mod map_view;
mod title_bar;

pub use detail::{Detail, DetailEvent, DetailState};
pub use editor::{Editor, EditorEvent, EditorState};
pub use filter_panel::{FilterEvent, FilterPanel, FilterPanelState};
pub use gallery::{Gallery, GalleryState};
pub use input_field::{InputField, InputFieldEvent};
pub use list_view::{ListView, ListViewState};
pub use map_view::MapView;
pub use title_bar::TitleBar;

/// Event shared by the gallery and the list: both are just different
/// projections of the filtered set, so opening a record means the same
/// thing in each.
pub enum ViewEvent {
    /// Open the record at this index of the filtered set.
    Open(usize),
}

/// Compute a centered overlay rect using percentages of the outer rect.
/// Shared by every overlay component.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{kept}...")
    }
}
