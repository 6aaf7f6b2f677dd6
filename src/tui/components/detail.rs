//! # Detail Component
//!
//! Full-record overlay opened from the gallery or list. Shows everything
//! the card doesn't have room for; `e` switches to the editor, `d` twice
//! deletes, Esc dismisses (which clears the selection).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DetailState` lives in `TuiState`
//! - `Detail` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::model::Restaurant;
use crate::tui::component::EventHandler;
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Overlay state for the detail pane.
pub struct DetailState {
    pub confirm_delete: bool,
    pub scroll: u16,
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            confirm_delete: false,
            scroll: 0,
        }
    }
}

/// Events emitted by the detail overlay.
pub enum DetailEvent {
    /// Switch the selected record into the editor.
    Edit,
    /// Delete the record with this id (second `d` press).
    Delete(String),
    /// Close the overlay and clear the selection.
    Dismiss,
}

/// Transient render wrapper; also routes events because it borrows the
/// record the keys act on.
pub struct Detail<'a> {
    state: &'a mut DetailState,
    restaurant: &'a Restaurant,
    theme: &'a Theme,
}

impl<'a> Detail<'a> {
    pub fn new(state: &'a mut DetailState, restaurant: &'a Restaurant, theme: &'a Theme) -> Self {
        Self {
            state,
            restaurant,
            theme,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(80, 80, area);
        frame.render_widget(Clear, overlay);

        let theme = self.theme;
        let r = self.restaurant;

        let help_text = if self.state.confirm_delete {
            " Press d again to confirm delete | Esc Cancel "
        } else {
            " e Edit  d Delete  ↑/↓ Scroll  Esc Back "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if self.state.confirm_delete {
                theme.danger
            } else {
                theme.border
            }))
            .title(format!(" {} ", r.name))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let label = |text: &str| Span::styled(text.to_string(), theme.dimmed());
        let value = |text: String| Span::styled(text, Style::default().fg(theme.text));

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("★ {}", r.rating_label()),
                    Style::default().fg(theme.rating),
                ),
                Span::raw("  "),
                Span::styled(r.price_range.symbol(), Style::default().fg(theme.price)),
                Span::raw("  "),
                value(format!("{} • {}", r.cuisine, r.city)),
            ]),
            Line::from(""),
            Line::from(vec![label("Address    "), value(r.address.clone())]),
            Line::from(vec![
                label("Location   "),
                value(format!("{:.4}, {:.4}", r.coordinates.lat, r.coordinates.lng)),
            ]),
            Line::from(vec![label("Visited    "), value(r.date_visited.to_string())]),
            Line::from(""),
            Line::from(value(r.description.clone())),
            Line::from(""),
        ];

        if !r.characteristics.is_empty() {
            lines.push(Line::from(vec![
                label("Traits     "),
                value(r.characteristics.join(", ")),
            ]));
        }
        if !r.tags.is_empty() {
            let tags = r
                .tags
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(Line::from(vec![label("Tags       "), value(tags)]));
        }
        if !r.images.is_empty() {
            lines.push(Line::from(vec![
                label("Images     "),
                value(format!("{} linked (primary: {})", r.images.len(), r.images[0])),
            ]));
        }
        if !r.notes.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(label("Notes")));
            lines.push(Line::from(value(r.notes.clone())));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "added {}  ·  last updated {}",
                r.created_at.format("%Y-%m-%d"),
                r.updated_at.format("%Y-%m-%d")
            ),
            theme.dimmed(),
        )));

        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .block(block);
        frame.render_widget(body, overlay);
    }
}

impl EventHandler for Detail<'_> {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        // Reset delete confirmation on any non-delete key
        let is_delete_key = matches!(event, TuiEvent::InputChar('d'));
        if !is_delete_key {
            self.state.confirm_delete = false;
        }

        match event {
            TuiEvent::Escape => Some(DetailEvent::Dismiss),
            TuiEvent::InputChar('e') => Some(DetailEvent::Edit),
            TuiEvent::InputChar('d') => {
                if self.state.confirm_delete {
                    self.state.confirm_delete = false;
                    Some(DetailEvent::Delete(self.restaurant.id.clone()))
                } else {
                    self.state.confirm_delete = true;
                    None
                }
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.state.scroll = self.state.scroll.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.state.scroll = self.state.scroll.saturating_add(1);
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_restaurant;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_delete_requires_confirmation() {
        let record = sample_restaurant("1", "Casa", "Colombian", "Bogotá");
        let mut state = DetailState::new();
        let theme = Theme::dark();
        let mut detail = Detail::new(&mut state, &record, &theme);

        assert!(detail.handle_event(&TuiEvent::InputChar('d')).is_none());
        match detail.handle_event(&TuiEvent::InputChar('d')) {
            Some(DetailEvent::Delete(id)) => assert_eq!(id, "1"),
            _ => panic!("expected Delete"),
        }
    }

    #[test]
    fn test_any_other_key_cancels_confirmation() {
        let record = sample_restaurant("1", "Casa", "Colombian", "Bogotá");
        let mut state = DetailState::new();
        let theme = Theme::dark();
        let mut detail = Detail::new(&mut state, &record, &theme);

        detail.handle_event(&TuiEvent::InputChar('d'));
        detail.handle_event(&TuiEvent::CursorDown);
        assert!(!detail.state.confirm_delete);
        // The next 'd' arms again instead of deleting.
        assert!(detail.handle_event(&TuiEvent::InputChar('d')).is_none());
    }

    #[test]
    fn test_edit_and_dismiss_events() {
        let record = sample_restaurant("1", "Casa", "Colombian", "Bogotá");
        let mut state = DetailState::new();
        let theme = Theme::dark();
        let mut detail = Detail::new(&mut state, &record, &theme);

        assert!(matches!(
            detail.handle_event(&TuiEvent::InputChar('e')),
            Some(DetailEvent::Edit)
        ));
        assert!(matches!(
            detail.handle_event(&TuiEvent::Escape),
            Some(DetailEvent::Dismiss)
        ));
    }

    #[test]
    fn test_render_shows_record_fields() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut record = sample_restaurant("1", "Casa San Isidro", "Colombian", "Bogotá");
        record.notes = "Order the ajiaco.".to_string();
        let mut state = DetailState::new();
        let theme = Theme::light();
        terminal
            .draw(|f| {
                Detail::new(&mut state, &record, &theme).render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Casa San Isidro"));
        assert!(text.contains("Colombian"));
        assert!(text.contains("Order the ajiaco."));
    }
}
