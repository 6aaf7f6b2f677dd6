//! # FilterPanel Component
//!
//! Overlay for editing the active criteria. Filtering is live: every
//! change emits a sparse `FilterPatch` that the event loop dispatches as
//! `Action::SetFilters`, so the view behind the panel narrows while you
//! type.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FilterPanelState` lives in `TuiState` (None = hidden)
//! - `FilterPanel` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::model::{FilterPatch, Filters, PriceRange};
use crate::core::seed::{SUGGESTED_CHARACTERISTICS, SUGGESTED_CUISINES};
use crate::tui::component::EventHandler;
use crate::tui::components::centered_rect;
use crate::tui::components::input_field::{InputField, InputFieldEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Which row of the panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Cuisine,
    City,
    MinRating,
    Price,
    Characteristics,
}

impl FilterField {
    fn next(self) -> Self {
        match self {
            FilterField::Search => FilterField::Cuisine,
            FilterField::Cuisine => FilterField::City,
            FilterField::City => FilterField::MinRating,
            FilterField::MinRating => FilterField::Price,
            FilterField::Price => FilterField::Characteristics,
            FilterField::Characteristics => FilterField::Search,
        }
    }

    fn prev(self) -> Self {
        match self {
            FilterField::Search => FilterField::Characteristics,
            FilterField::Cuisine => FilterField::Search,
            FilterField::City => FilterField::Cuisine,
            FilterField::MinRating => FilterField::City,
            FilterField::Price => FilterField::MinRating,
            FilterField::Characteristics => FilterField::Price,
        }
    }

    fn label(self) -> &'static str {
        match self {
            FilterField::Search => "Search",
            FilterField::Cuisine => "Cuisine",
            FilterField::City => "City",
            FilterField::MinRating => "Min rating",
            FilterField::Price => "Price",
            FilterField::Characteristics => "Traits",
        }
    }
}

/// Persistent state for the filter panel overlay.
pub struct FilterPanelState {
    pub focus: FilterField,
    pub search: InputField,
    /// Mirror of the store's criteria, kept in sync as patches go out.
    pub working: Filters,
    /// Distinct cities captured from the catalog when the panel opened.
    pub cities: Vec<String>,
    /// Cursor within the characteristics vocabulary.
    pub trait_cursor: usize,
}

/// Events emitted by the filter panel.
pub enum FilterEvent {
    /// Dispatch this patch to the store.
    Patch(FilterPatch),
    Dismiss,
}

impl FilterPanelState {
    pub fn new(current: &Filters, cities: Vec<String>) -> Self {
        Self {
            focus: FilterField::Search,
            search: InputField::with_text(&current.search),
            working: current.clone(),
            cities,
            trait_cursor: 0,
        }
    }

    /// Cycle a value through `options`, treating an unlisted current
    /// value as position 0.
    fn cycle(options: &[String], current: &str, forward: bool) -> String {
        if options.is_empty() {
            return current.to_string();
        }
        let at = options.iter().position(|o| o == current).unwrap_or(0);
        let next = if forward {
            (at + 1) % options.len()
        } else {
            (at + options.len() - 1) % options.len()
        };
        options[next].clone()
    }

    fn cuisine_options() -> Vec<String> {
        std::iter::once(String::new())
            .chain(SUGGESTED_CUISINES.iter().map(|c| c.to_string()))
            .collect()
    }

    fn city_options(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.cities.iter().cloned())
            .collect()
    }

    fn cycle_price(current: Option<PriceRange>, forward: bool) -> Option<PriceRange> {
        // None sits between Luxury and Budget in the cycle.
        match (current, forward) {
            (None, true) => Some(PriceRange::Budget),
            (None, false) => Some(PriceRange::Luxury),
            (Some(PriceRange::Luxury), true) => None,
            (Some(PriceRange::Budget), false) => None,
            (Some(tier), true) => Some(tier.next()),
            (Some(tier), false) => Some(tier.prev()),
        }
    }

    fn toggle_trait(&mut self) -> FilterPatch {
        let name = SUGGESTED_CHARACTERISTICS[self.trait_cursor].to_string();
        let mut traits = self.working.characteristics.clone();
        if let Some(at) = traits.iter().position(|t| *t == name) {
            traits.remove(at);
        } else {
            traits.push(name);
        }
        self.working.characteristics = traits.clone();
        FilterPatch {
            characteristics: Some(traits),
            ..Default::default()
        }
    }

    /// Left/right on a value row; returns the patch to dispatch.
    fn adjust(&mut self, forward: bool) -> Option<FilterPatch> {
        match self.focus {
            FilterField::Search => None,
            FilterField::Cuisine => {
                let cuisine =
                    Self::cycle(&Self::cuisine_options(), &self.working.cuisine, forward);
                self.working.cuisine = cuisine.clone();
                Some(FilterPatch {
                    cuisine: Some(cuisine),
                    ..Default::default()
                })
            }
            FilterField::City => {
                let city = Self::cycle(&self.city_options(), &self.working.city, forward);
                self.working.city = city.clone();
                Some(FilterPatch {
                    city: Some(city),
                    ..Default::default()
                })
            }
            FilterField::MinRating => {
                let step = if forward { 0.5 } else { -0.5 };
                let rating = (self.working.rating + step).clamp(0.0, 5.0);
                self.working.rating = rating;
                Some(FilterPatch {
                    rating: Some(rating),
                    ..Default::default()
                })
            }
            FilterField::Price => {
                let price = Self::cycle_price(self.working.price_range, forward);
                self.working.price_range = price;
                Some(FilterPatch {
                    price_range: Some(price),
                    ..Default::default()
                })
            }
            FilterField::Characteristics => {
                let len = SUGGESTED_CHARACTERISTICS.len();
                self.trait_cursor = if forward {
                    (self.trait_cursor + 1) % len
                } else {
                    (self.trait_cursor + len - 1) % len
                };
                None
            }
        }
    }
}

impl EventHandler for FilterPanelState {
    type Event = FilterEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FilterEvent> {
        match event {
            TuiEvent::Escape => return Some(FilterEvent::Dismiss),
            TuiEvent::Tab | TuiEvent::CursorDown => self.focus = self.focus.next(),
            TuiEvent::BackTab | TuiEvent::CursorUp => self.focus = self.focus.prev(),
            TuiEvent::CursorLeft => {
                return self.adjust(false).map(FilterEvent::Patch);
            }
            TuiEvent::CursorRight => {
                return self.adjust(true).map(FilterEvent::Patch);
            }
            TuiEvent::InputChar(' ') if self.focus == FilterField::Characteristics => {
                return Some(FilterEvent::Patch(self.toggle_trait()));
            }
            // Clear everything; inside the search row 'c' is just a letter.
            TuiEvent::InputChar('c') if self.focus != FilterField::Search => {
                self.working = Filters::default();
                self.search.clear();
                return Some(FilterEvent::Patch(FilterPatch::clear_all()));
            }
            other if self.focus == FilterField::Search => {
                if let Some(InputFieldEvent::Changed) = self.search.handle_event(other) {
                    self.working.search = self.search.value().to_string();
                    return Some(FilterEvent::Patch(FilterPatch {
                        search: Some(self.search.value().to_string()),
                        ..Default::default()
                    }));
                }
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the filter panel overlay.
pub struct FilterPanel<'a> {
    state: &'a mut FilterPanelState,
    theme: &'a Theme,
}

impl<'a> FilterPanel<'a> {
    pub fn new(state: &'a mut FilterPanelState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn value_row(&self, field: FilterField, value: String) -> Line<'static> {
        let theme = self.theme;
        let focused = self.state.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        let value_style = if focused {
            theme.highlight()
        } else {
            Style::default().fg(theme.text)
        };
        Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.accent)),
            Span::styled(format!("{:<11}", field.label()), theme.dimmed()),
            Span::styled(value, value_style),
        ])
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 80, area);
        frame.render_widget(Clear, overlay);

        let theme = self.theme;
        let state = &self.state;
        let working = &state.working;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Filters ")
            .title_alignment(Alignment::Left)
            .title_bottom(
                Line::from(" ↑/↓ Field  ←/→ Adjust  Space Toggle  c Clear  Esc Close ")
                    .centered(),
            )
            .padding(Padding::horizontal(1));

        let show = |s: &str| {
            if s.is_empty() {
                "(any)".to_string()
            } else {
                s.to_string()
            }
        };

        let mut lines = vec![
            self.value_row(FilterField::Search, show(state.search.value())),
            self.value_row(FilterField::Cuisine, show(&working.cuisine)),
            self.value_row(FilterField::City, show(&working.city)),
            self.value_row(
                FilterField::MinRating,
                if working.rating == 0.0 {
                    "(any)".to_string()
                } else {
                    format!("★ {:.1}+", working.rating)
                },
            ),
            self.value_row(
                FilterField::Price,
                working
                    .price_range
                    .map(|p| p.symbol().to_string())
                    .unwrap_or_else(|| "(any)".to_string()),
            ),
            self.value_row(FilterField::Characteristics, String::new()),
        ];

        // Vocabulary grid, four per row, ✓ marks active criteria.
        let on_traits = self.state.focus == FilterField::Characteristics;
        for chunk_start in (0..SUGGESTED_CHARACTERISTICS.len()).step_by(4) {
            let mut spans = vec![Span::raw("    ")];
            for (offset, name) in SUGGESTED_CHARACTERISTICS
                [chunk_start..(chunk_start + 4).min(SUGGESTED_CHARACTERISTICS.len())]
                .iter()
                .enumerate()
            {
                let index = chunk_start + offset;
                let active = working.characteristics.iter().any(|c| c == name);
                let mark = if active { "✓" } else { " " };
                let style = if on_traits && index == self.state.trait_cursor {
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

        let body = Paragraph::new(lines).block(block);
        frame.render_widget(body, overlay);

        // Park the terminal cursor in the search row while it has focus.
        if self.state.focus == FilterField::Search {
            let col = overlay.x + 2 + 2 + 11 + self.state.search.cursor_column();
            frame.set_cursor_position(Position::new(
                col.min(overlay.right().saturating_sub(2)),
                overlay.y + 1,
            ));
        }
    }
}
