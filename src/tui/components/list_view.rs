//! # ListView Component
//!
//! Table presentation of the filtered catalog: one row per restaurant
//! with the columns that matter for scanning. Shares its cursor
//! conventions with the gallery — arrows move, Enter opens.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListViewState` lives in `TuiState`
//! - `ListView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph, Row, Table, TableState};

use crate::core::model::Restaurant;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::ViewEvent;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Cursor state for the table.
/// Must be persisted in the parent TuiState.
pub struct ListViewState {
    pub cursor: usize,
    pub table_state: TableState,
    count: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListViewState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            table_state: TableState::default(),
            count: 0,
        }
    }

    /// Reset the cursor after the underlying filtered set changed.
    pub fn clamp_cursor(&mut self, count: usize) {
        self.count = count;
        if count == 0 {
            self.cursor = 0;
            self.table_state.select(None);
        } else {
            self.cursor = self.cursor.min(count - 1);
            self.table_state.select(Some(self.cursor));
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.count == 0 {
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, self.count as isize - 1) as usize;
        self.table_state.select(Some(self.cursor));
    }
}

impl EventHandler for ListViewState {
    type Event = ViewEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ViewEvent> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.move_cursor(-1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.move_cursor(1),
            TuiEvent::PageUp => self.move_cursor(-10),
            TuiEvent::PageDown => self.move_cursor(10),
            TuiEvent::Home => self.move_cursor(isize::MIN / 2),
            TuiEvent::End => self.move_cursor(isize::MAX / 2),
            TuiEvent::Submit if self.count > 0 => {
                return Some(ViewEvent::Open(self.cursor));
            }
            _ => return None,
        }
        None
    }
}

/// Transient render wrapper for the table view.
pub struct ListView<'a> {
    state: &'a mut ListViewState,
    restaurants: &'a [Restaurant],
    theme: &'a Theme,
}

impl<'a> ListView<'a> {
    pub fn new(
        state: &'a mut ListViewState,
        restaurants: &'a [Restaurant],
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            restaurants,
            theme,
        }
    }
}

impl Component for ListView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.restaurants.is_empty() {
            let empty = Paragraph::new("No restaurants match the current filters.")
                .style(self.theme.dimmed())
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp_cursor(self.restaurants.len());

        let theme = self.theme;
        let header = Row::new(["Name", "Cuisine", "City", "Rating", "Price", "Visited"])
            .style(theme.dimmed());
        let rows = self.restaurants.iter().map(|r| {
            Row::new([
                r.name.clone(),
                r.cuisine.clone(),
                r.city.clone(),
                format!("★ {}", r.rating_label()),
                r.price_range.symbol().to_string(),
                r.date_visited.to_string(),
            ])
            .style(Style::default().fg(theme.text))
        });

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(16),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(6),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .row_highlight_style(theme.highlight())
        .block(Block::bordered().border_style(Style::default().fg(theme.border)));

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}
