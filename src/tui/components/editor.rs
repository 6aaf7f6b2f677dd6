//! # Editor Component
//!
//! Add/edit form overlay. One single-line input per text field, arrow
//! adjustment for rating and price, a toggle grid for characteristics.
//! Enter saves from any field; required-field validation (name, cuisine,
//! city) happens here — the store itself never validates.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EditorState` lives in `TuiState` (None = hidden)
//! - `Editor` is created each frame with borrowed state

use chrono::{DateTime, Local, NaiveDate, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::model::{Coordinates, PriceRange, Restaurant};
use crate::core::seed::SUGGESTED_CHARACTERISTICS;
use crate::tui::component::EventHandler;
use crate::tui::components::centered_rect;
use crate::tui::components::input_field::InputField;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// The required-field warning, verbatim from the status line's wording.
pub const REQUIRED_FIELDS_MSG: &str = "Please fill in all required fields";

/// Which form row has focus. Order here is the Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Name,
    Cuisine,
    Address,
    City,
    Lat,
    Lng,
    Rating,
    Price,
    DateVisited,
    Description,
    Notes,
    Tags,
    Images,
    Characteristics,
}

const FIELD_ORDER: &[EditorField] = &[
    EditorField::Name,
    EditorField::Cuisine,
    EditorField::Address,
    EditorField::City,
    EditorField::Lat,
    EditorField::Lng,
    EditorField::Rating,
    EditorField::Price,
    EditorField::DateVisited,
    EditorField::Description,
    EditorField::Notes,
    EditorField::Tags,
    EditorField::Images,
    EditorField::Characteristics,
];

impl EditorField {
    fn index(self) -> usize {
        FIELD_ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        FIELD_ORDER[(self.index() + 1) % FIELD_ORDER.len()]
    }

    fn prev(self) -> Self {
        FIELD_ORDER[(self.index() + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()]
    }

    fn label(self) -> &'static str {
        match self {
            EditorField::Name => "Name*",
            EditorField::Cuisine => "Cuisine*",
            EditorField::Address => "Address",
            EditorField::City => "City*",
            EditorField::Lat => "Latitude",
            EditorField::Lng => "Longitude",
            EditorField::Rating => "Rating",
            EditorField::Price => "Price",
            EditorField::DateVisited => "Visited",
            EditorField::Description => "Description",
            EditorField::Notes => "Notes",
            EditorField::Tags => "Tags",
            EditorField::Images => "Images",
            EditorField::Characteristics => "Traits",
        }
    }
}

/// Persistent state for the add/edit form overlay.
pub struct EditorState {
    pub focus: EditorField,
    pub name: InputField,
    pub cuisine: InputField,
    pub address: InputField,
    pub city: InputField,
    pub lat: InputField,
    pub lng: InputField,
    pub date_visited: InputField,
    pub description: InputField,
    pub notes: InputField,
    /// Comma-separated in the form, split on save.
    pub tags: InputField,
    /// Comma-separated image URLs, first is primary.
    pub images: InputField,
    pub rating: f64,
    pub price: PriceRange,
    pub characteristics: Vec<String>,
    pub trait_cursor: usize,
    pub error: Option<String>,
    /// `Some((id, created_at))` when editing; `None` when adding.
    editing: Option<(String, DateTime<Utc>)>,
}

/// Events emitted by the editor.
pub enum EditorEvent {
    /// Validation passed; dispatch Add or Update with this record.
    Save(Restaurant),
    Cancel,
}

impl EditorState {
    /// Blank form for a new record, visit date defaulting to today.
    pub fn add() -> Self {
        Self {
            focus: EditorField::Name,
            name: InputField::new(),
            cuisine: InputField::new(),
            address: InputField::new(),
            city: InputField::new(),
            lat: InputField::with_text("0.0"),
            lng: InputField::with_text("0.0"),
            date_visited: InputField::with_text(&Local::now().date_naive().to_string()),
            description: InputField::new(),
            notes: InputField::new(),
            tags: InputField::new(),
            images: InputField::new(),
            rating: 0.0,
            price: PriceRange::default(),
            characteristics: Vec::new(),
            trait_cursor: 0,
            error: None,
            editing: None,
        }
    }

    /// Form prefilled from an existing record; saving keeps its id and
    /// creation timestamp.
    pub fn edit(restaurant: &Restaurant) -> Self {
        Self {
            focus: EditorField::Name,
            name: InputField::with_text(&restaurant.name),
            cuisine: InputField::with_text(&restaurant.cuisine),
            address: InputField::with_text(&restaurant.address),
            city: InputField::with_text(&restaurant.city),
            lat: InputField::with_text(&restaurant.coordinates.lat.to_string()),
            lng: InputField::with_text(&restaurant.coordinates.lng.to_string()),
            date_visited: InputField::with_text(&restaurant.date_visited.to_string()),
            description: InputField::with_text(&restaurant.description),
            notes: InputField::with_text(&restaurant.notes),
            tags: InputField::with_text(&restaurant.tags.join(", ")),
            images: InputField::with_text(&restaurant.images.join(", ")),
            rating: restaurant.rating,
            price: restaurant.price_range,
            characteristics: restaurant.characteristics.clone(),
            trait_cursor: 0,
            error: None,
            editing: Some((restaurant.id.clone(), restaurant.created_at)),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Rating, price, and the trait grid adjust with ←/→ instead of
    /// editing text.
    fn focus_is_adjustable(&self) -> bool {
        matches!(
            self.focus,
            EditorField::Rating | EditorField::Price | EditorField::Characteristics
        )
    }

    fn focused_input(&mut self) -> Option<&mut InputField> {
        match self.focus {
            EditorField::Name => Some(&mut self.name),
            EditorField::Cuisine => Some(&mut self.cuisine),
            EditorField::Address => Some(&mut self.address),
            EditorField::City => Some(&mut self.city),
            EditorField::Lat => Some(&mut self.lat),
            EditorField::Lng => Some(&mut self.lng),
            EditorField::DateVisited => Some(&mut self.date_visited),
            EditorField::Description => Some(&mut self.description),
            EditorField::Notes => Some(&mut self.notes),
            EditorField::Tags => Some(&mut self.tags),
            EditorField::Images => Some(&mut self.images),
            EditorField::Rating | EditorField::Price | EditorField::Characteristics => None,
        }
    }

    fn toggle_trait(&mut self) {
        let name = SUGGESTED_CHARACTERISTICS[self.trait_cursor].to_string();
        if let Some(at) = self.characteristics.iter().position(|t| *t == name) {
            self.characteristics.remove(at);
        } else {
            self.characteristics.push(name);
        }
    }

    fn adjust(&mut self, forward: bool) {
        match self.focus {
            EditorField::Rating => {
                let step = if forward { 0.5 } else { -0.5 };
                self.rating = (self.rating + step).clamp(0.0, 5.0);
            }
            EditorField::Price => {
                self.price = if forward {
                    self.price.next()
                } else {
                    self.price.prev()
                };
            }
            EditorField::Characteristics => {
                let len = SUGGESTED_CHARACTERISTICS.len();
                self.trait_cursor = if forward {
                    (self.trait_cursor + 1) % len
                } else {
                    (self.trait_cursor + len - 1) % len
                };
            }
            _ => {}
        }
    }

    /// Validate and build the record. Name, cuisine, and city are
    /// required; the visit date must parse. Everything else is coerced
    /// leniently (bad coordinates become 0.0, like an empty number
    /// input).
    fn build_record(&mut self) -> Option<Restaurant> {
        if self.name.value().trim().is_empty()
            || self.cuisine.value().trim().is_empty()
            || self.city.value().trim().is_empty()
        {
            self.error = Some(REQUIRED_FIELDS_MSG.to_string());
            return None;
        }
        let date_visited = match self.date_visited.value().trim().parse::<NaiveDate>() {
            Ok(date) => date,
            Err(_) => {
                self.error = Some("Invalid visit date (use YYYY-MM-DD)".to_string());
                return None;
            }
        };
        self.error = None;

        let now = Utc::now();
        let (id, created_at) = self
            .editing
            .clone()
            .unwrap_or_else(|| (uuid::Uuid::new_v4().to_string(), now));

        Some(Restaurant {
            id,
            name: self.name.value().trim().to_string(),
            cuisine: self.cuisine.value().trim().to_string(),
            address: self.address.value().trim().to_string(),
            city: self.city.value().trim().to_string(),
            coordinates: Coordinates {
                lat: self.lat.value().trim().parse().unwrap_or(0.0),
                lng: self.lng.value().trim().parse().unwrap_or(0.0),
            },
            rating: self.rating,
            description: self.description.value().trim().to_string(),
            images: split_list(self.images.value()),
            date_visited,
            characteristics: self.characteristics.clone(),
            price_range: self.price,
            tags: split_list(self.tags.value()),
            notes: self.notes.value().trim().to_string(),
            created_at,
            updated_at: now,
        })
    }
}

/// Split a comma-separated input into trimmed, non-empty items.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl EventHandler for EditorState {
    type Event = EditorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<EditorEvent> {
        match event {
            TuiEvent::Escape => return Some(EditorEvent::Cancel),
            TuiEvent::Submit => {
                return self.build_record().map(EditorEvent::Save);
            }
            TuiEvent::Tab | TuiEvent::CursorDown => self.focus = self.focus.next(),
            TuiEvent::BackTab | TuiEvent::CursorUp => self.focus = self.focus.prev(),
            TuiEvent::InputChar(' ') if self.focus == EditorField::Characteristics => {
                self.toggle_trait();
            }
            TuiEvent::CursorLeft | TuiEvent::CursorRight if self.focus_is_adjustable() => {
                self.adjust(matches!(event, TuiEvent::CursorRight));
            }
            other => {
                if let Some(input) = self.focused_input() {
                    input.handle_event(other);
                }
            }
        }
        None
    }
}

/// Transient render wrapper for the add/edit form.
pub struct Editor<'a> {
    state: &'a mut EditorState,
    theme: &'a Theme,
}

impl<'a> Editor<'a> {
    pub fn new(state: &'a mut EditorState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn text_row(&self, field: EditorField, value: &str) -> Line<'static> {
        let theme = self.theme;
        let focused = self.state.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.accent)),
            Span::styled(format!("{:<12}", field.label()), theme.dimmed()),
            Span::styled(value.to_string(), Style::default().fg(theme.text)),
        ])
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(80, 90, area);
        frame.render_widget(Clear, overlay);

        let theme = self.theme;
        let state = &self.state;
        let title = if state.is_editing() {
            " Edit Restaurant "
        } else {
            " Add Restaurant "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(title)
            .title_alignment(Alignment::Left)
            .title_bottom(
                Line::from(" Enter Save  Tab Next  ←/→ Adjust  Space Toggle  Esc Cancel ")
                    .centered(),
            )
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            self.text_row(EditorField::Name, state.name.value()),
            self.text_row(EditorField::Cuisine, state.cuisine.value()),
            self.text_row(EditorField::Address, state.address.value()),
            self.text_row(EditorField::City, state.city.value()),
            self.text_row(EditorField::Lat, state.lat.value()),
            self.text_row(EditorField::Lng, state.lng.value()),
            self.text_row(
                EditorField::Rating,
                &if state.rating == 0.0 {
                    "not rated".to_string()
                } else {
                    format!("★ {:.1}", state.rating)
                },
            ),
            self.text_row(EditorField::Price, state.price.symbol()),
            self.text_row(EditorField::DateVisited, state.date_visited.value()),
            self.text_row(EditorField::Description, state.description.value()),
            self.text_row(EditorField::Notes, state.notes.value()),
            self.text_row(EditorField::Tags, state.tags.value()),
            self.text_row(EditorField::Images, state.images.value()),
            self.text_row(EditorField::Characteristics, ""),
        ];

        let on_traits = state.focus == EditorField::Characteristics;
        for chunk_start in (0..SUGGESTED_CHARACTERISTICS.len()).step_by(4) {
            let mut spans = vec![Span::raw("    ")];
            for (offset, name) in SUGGESTED_CHARACTERISTICS
                [chunk_start..(chunk_start + 4).min(SUGGESTED_CHARACTERISTICS.len())]
                .iter()
                .enumerate()
            {
                let index = chunk_start + offset;
                let active = state.characteristics.iter().any(|c| c == name);
                let mark = if active { "✓" } else { " " };
                let style = if on_traits && index == state.trait_cursor {
                    theme.highlight()
                } else if active {
                    Style::default().fg(theme.accent)
                } else {
                    theme.dimmed()
                };
                spans.push(Span::styled(format!("[{mark}] {name:<17}"), style));
            }
            lines.push(Line::from(spans));
        }

        if let Some(error) = &state.error {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                error.clone(),
                Style::default().fg(theme.danger),
            ));
        }

        let body = Paragraph::new(lines).block(block);
        frame.render_widget(body, overlay);

        // Terminal cursor tracks the focused text input.
        let column = match state.focus {
            EditorField::Name => Some(state.name.cursor_column()),
            EditorField::Cuisine => Some(state.cuisine.cursor_column()),
            EditorField::Address => Some(state.address.cursor_column()),
            EditorField::City => Some(state.city.cursor_column()),
            EditorField::Lat => Some(state.lat.cursor_column()),
            EditorField::Lng => Some(state.lng.cursor_column()),
            EditorField::DateVisited => Some(state.date_visited.cursor_column()),
            EditorField::Description => Some(state.description.cursor_column()),
            EditorField::Notes => Some(state.notes.cursor_column()),
            EditorField::Tags => Some(state.tags.cursor_column()),
            EditorField::Images => Some(state.images.cursor_column()),
            EditorField::Rating | EditorField::Price | EditorField::Characteristics => None,
        };
        if let Some(column) = column {
            let row = state.focus.index() as u16;
            let col = overlay.x + 2 + 2 + 12 + column;
            frame.set_cursor_position(Position::new(
                col.min(overlay.right().saturating_sub(2)),
                overlay.y + 1 + row,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_restaurant;

    fn type_into(state: &mut EditorState, text: &str) {
        for c in text.chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn focus(state: &mut EditorState, field: EditorField) {
        while state.focus != field {
            state.handle_event(&TuiEvent::Tab);
        }
    }

    #[test]
    fn test_save_requires_name_cuisine_city() {
        let mut state = EditorState::add();
        assert!(state.handle_event(&TuiEvent::Submit).is_none());
        assert_eq!(state.error.as_deref(), Some(REQUIRED_FIELDS_MSG));

        type_into(&mut state, "Casa");
        focus(&mut state, EditorField::Cuisine);
        type_into(&mut state, "Colombian");
        focus(&mut state, EditorField::City);
        type_into(&mut state, "Bogotá");

        match state.handle_event(&TuiEvent::Submit) {
            Some(EditorEvent::Save(record)) => {
                assert_eq!(record.name, "Casa");
                assert_eq!(record.cuisine, "Colombian");
                assert_eq!(record.city, "Bogotá");
                assert!(!record.id.is_empty());
            }
            _ => panic!("expected Save"),
        }
        assert!(state.error.is_none());
    }

    #[test]
    fn test_add_generates_fresh_ids() {
        let mut first = EditorState::add();
        type_into(&mut first, "A");
        focus(&mut first, EditorField::Cuisine);
        type_into(&mut first, "Thai");
        focus(&mut first, EditorField::City);
        type_into(&mut first, "Cali");

        let mut second = EditorState::add();
        type_into(&mut second, "B");
        focus(&mut second, EditorField::Cuisine);
        type_into(&mut second, "Thai");
        focus(&mut second, EditorField::City);
        type_into(&mut second, "Cali");

        let id_of = |state: &mut EditorState| match state.handle_event(&TuiEvent::Submit) {
            Some(EditorEvent::Save(r)) => r.id,
            _ => panic!("expected Save"),
        };
        assert_ne!(id_of(&mut first), id_of(&mut second));
    }

    #[test]
    fn test_edit_preserves_id_and_created_at() {
        let original = sample_restaurant("keep-me", "Casa", "Colombian", "Bogotá");
        let mut state = EditorState::edit(&original);
        type_into(&mut state, "!"); // append to the name
        match state.handle_event(&TuiEvent::Submit) {
            Some(EditorEvent::Save(record)) => {
                assert_eq!(record.id, "keep-me");
                assert_eq!(record.created_at, original.created_at);
                assert_eq!(record.name, "Casa!");
                assert!(record.updated_at > original.updated_at);
            }
            _ => panic!("expected Save"),
        }
    }

    #[test]
    fn test_invalid_date_blocks_save() {
        let original = sample_restaurant("1", "Casa", "Colombian", "Bogotá");
        let mut state = EditorState::edit(&original);
        focus(&mut state, EditorField::DateVisited);
        state.date_visited.set_text("soon");
        assert!(state.handle_event(&TuiEvent::Submit).is_none());
        assert!(state.error.as_deref().unwrap_or("").contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_tags_and_images_split_on_commas() {
        let original = sample_restaurant("1", "Casa", "Colombian", "Bogotá");
        let mut state = EditorState::edit(&original);
        state.tags.set_text("ajiaco, romantic , ");
        state.images.set_text("https://a.jpeg,https://b.jpeg");
        match state.handle_event(&TuiEvent::Submit) {
            Some(EditorEvent::Save(record)) => {
                assert_eq!(record.tags, ["ajiaco", "romantic"]);
                assert_eq!(record.images, ["https://a.jpeg", "https://b.jpeg"]);
            }
            _ => panic!("expected Save"),
        }
    }

    #[test]
    fn test_rating_adjusts_in_half_steps() {
        let mut state = EditorState::add();
        focus(&mut state, EditorField::Rating);
        state.handle_event(&TuiEvent::CursorRight);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.rating, 1.0);
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.rating, 0.5);
        // Clamped to the 0–5 star widget range.
        for _ in 0..20 {
            state.handle_event(&TuiEvent::CursorRight);
        }
        assert_eq!(state.rating, 5.0);
    }

    #[test]
    fn test_trait_toggle_never_accumulates_duplicates() {
        let mut state = EditorState::add();
        focus(&mut state, EditorField::Characteristics);
        state.handle_event(&TuiEvent::InputChar(' '));
        state.handle_event(&TuiEvent::InputChar(' '));
        state.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(state.characteristics, ["cozy"]);
    }

    #[test]
    fn test_lenient_coordinate_parsing() {
        let original = sample_restaurant("1", "Casa", "Colombian", "Bogotá");
        let mut state = EditorState::edit(&original);
        state.lat.set_text("4.5981");
        state.lng.set_text("west of here");
        match state.handle_event(&TuiEvent::Submit) {
            Some(EditorEvent::Save(record)) => {
                assert_eq!(record.coordinates.lat, 4.5981);
                assert_eq!(record.coordinates.lng, 0.0);
            }
            _ => panic!("expected Save"),
        }
    }
}
