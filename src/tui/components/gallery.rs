//! # Gallery Component
//!
//! Card grid over the filtered catalog — the default view. Cards flow
//! left-to-right, top-to-bottom inside a ScrollView; arrow keys move the
//! cursor and Enter opens the record under it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GalleryState` lives in `TuiState`
//! - `Gallery` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::model::Restaurant;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{ViewEvent, truncate_str};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Minimum card width; actual width stretches to fill the row.
const CARD_MIN_WIDTH: u16 = 34;
/// Card height including borders: cuisine/city, description, rating/price,
/// characteristics, visit date (name sits in the border title).
const CARD_HEIGHT: u16 = 7;

/// Cursor and scroll state for the gallery grid.
/// Must be persisted in the parent TuiState.
pub struct GalleryState {
    pub cursor: usize,
    pub scroll_state: ScrollViewState,
    /// Filtered count seen at the last render; bounds cursor movement.
    count: usize,
    /// Columns computed at the last render; drives vertical movement.
    columns: usize,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            scroll_state: ScrollViewState::default(),
            count: 0,
            columns: 1,
        }
    }

    /// Reset the cursor after the underlying filtered set changed.
    pub fn clamp_cursor(&mut self, count: usize) {
        self.count = count;
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.count == 0 {
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, self.count as isize - 1) as usize;
    }

    /// Scroll so the cursor's row is inside the viewport.
    fn scroll_to_cursor(&mut self, viewport_height: u16) {
        let row = (self.cursor / self.columns) as u16;
        let top = row * CARD_HEIGHT;
        let bottom = top + CARD_HEIGHT;
        let offset = self.scroll_state.offset().y;
        if top < offset {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset + viewport_height {
            self.scroll_state.set_offset(Position {
                x: 0,
                y: bottom.saturating_sub(viewport_height),
            });
        }
    }
}

impl EventHandler for GalleryState {
    type Event = ViewEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ViewEvent> {
        match event {
            TuiEvent::CursorLeft => self.move_cursor(-1),
            TuiEvent::CursorRight => self.move_cursor(1),
            TuiEvent::CursorUp => self.move_cursor(-(self.columns as isize)),
            TuiEvent::CursorDown => self.move_cursor(self.columns as isize),
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.move_cursor(-((self.columns * 2) as isize)),
            TuiEvent::PageDown => self.move_cursor((self.columns * 2) as isize),
            TuiEvent::Submit if self.count > 0 => {
                return Some(ViewEvent::Open(self.cursor));
            }
            _ => return None,
        }
        None
    }
}

/// Transient render wrapper for the gallery grid.
pub struct Gallery<'a> {
    state: &'a mut GalleryState,
    restaurants: &'a [Restaurant],
    theme: &'a Theme,
}

impl<'a> Gallery<'a> {
    pub fn new(
        state: &'a mut GalleryState,
        restaurants: &'a [Restaurant],
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            restaurants,
            theme,
        }
    }

    fn card<'b>(&self, restaurant: &'b Restaurant, width: u16, hot: bool) -> Paragraph<'b> {
        let theme = self.theme;
        let inner = width.saturating_sub(4) as usize;
        let text_style = Style::default().fg(theme.text);
        let place = truncate_str(
            &format!("{} • {}", restaurant.cuisine, restaurant.city),
            inner,
        );
        let traits = truncate_str(&restaurant.characteristics.join(", "), inner);
        let blurb = truncate_str(&restaurant.description, inner);
        let lines = vec![
            Line::from(Span::styled(place, text_style)),
            Line::from(Span::styled(blurb, theme.dimmed())),
            Line::from(vec![
                Span::styled(
                    format!("★ {}", restaurant.rating_label()),
                    Style::default().fg(theme.rating),
                ),
                Span::styled(
                    format!("  {}", restaurant.price_range.symbol()),
                    Style::default().fg(theme.price),
                ),
            ]),
            Line::from(Span::styled(traits, theme.dimmed())),
            Line::from(Span::styled(
                format!("visited {}", restaurant.date_visited),
                theme.dimmed(),
            )),
        ];
        let border_style = if hot {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.border)
        };
        let title = truncate_str(&restaurant.name, inner.max(1));
        Paragraph::new(lines).block(
            Block::bordered()
                .title(format!(" {title} "))
                .title_style(if hot { theme.highlight() } else { text_style })
                .border_style(border_style),
        )
    }
}

impl Component for Gallery<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.restaurants.is_empty() {
            let empty = Paragraph::new("No restaurants match the current filters.")
                .style(self.theme.dimmed())
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // room for the scrollbar
        let columns = (content_width / CARD_MIN_WIDTH).max(1) as usize;
        let card_width = content_width / columns as u16;
        let rows = self.restaurants.len().div_ceil(columns);

        self.state.columns = columns;
        self.state.clamp_cursor(self.restaurants.len());
        self.state.scroll_to_cursor(area.height);

        let canvas_height = rows as u16 * CARD_HEIGHT;
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, restaurant) in self.restaurants.iter().enumerate() {
            let col = (index % columns) as u16;
            let row = (index / columns) as u16;
            let card_rect = Rect::new(
                col * card_width,
                row * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            );
            let hot = index == self.state.cursor;
            scroll_view.render_widget(self.card(restaurant, card_width, hot), card_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
