//! # TitleBar Component
//!
//! Top status bar: app name, view-mode tabs, filtered/total counts, and
//! the transient status message. Purely presentational — all fields are
//! props copied from core state each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::model::ViewMode;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct TitleBar<'a> {
    pub view_mode: ViewMode,
    /// Records in the derived view.
    pub shown: usize,
    /// Records in the full catalog.
    pub total: usize,
    pub filters_active: bool,
    pub is_loading: bool,
    pub status_message: &'a str,
    pub theme: &'a Theme,
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let mut spans = vec![Span::styled(
            "Mesa",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )];

        for mode in [ViewMode::Gallery, ViewMode::List, ViewMode::Map] {
            spans.push(Span::raw("  "));
            let style = if mode == self.view_mode {
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                theme.dimmed()
            };
            spans.push(Span::styled(mode.label(), style));
        }

        let count = if self.filters_active {
            format!("  │ {} of {} places", self.shown, self.total)
        } else {
            format!("  │ {} places", self.total)
        };
        spans.push(Span::styled(count, Style::default().fg(theme.text)));

        if self.is_loading {
            spans.push(Span::styled("  Loading...", theme.dimmed()));
        }

        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!("  │ {}", self.status_message),
                theme.dimmed(),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
