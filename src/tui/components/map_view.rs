//! # MapView Component
//!
//! Acknowledged placeholder for a real map. Reports what a future map
//! integration would show for the current filtered set; nothing here is
//! interactive.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::model::Restaurant;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Stateless map placeholder; receives the filtered set as props.
pub struct MapView<'a> {
    restaurants: &'a [Restaurant],
    theme: &'a Theme,
}

impl<'a> MapView<'a> {
    pub fn new(restaurants: &'a [Restaurant], theme: &'a Theme) -> Self {
        Self { restaurants, theme }
    }
}

impl Component for MapView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let mut lines = vec![
            Line::from(""),
            Line::styled("◉ Interactive Map View", Style::default().fg(theme.accent)),
            Line::from(""),
            Line::styled(
                format!(
                    "Map integration will display all {} restaurants",
                    self.restaurants.len()
                ),
                Style::default().fg(theme.text),
            ),
            Line::from(""),
            Line::styled("• Pin clustering for dense areas", theme.dimmed()),
            Line::styled("• Location detection", theme.dimmed()),
            Line::styled("• Smooth animations", theme.dimmed()),
            Line::from(""),
        ];
        // A taste of what the pins would anchor to.
        for r in self.restaurants.iter().take(8) {
            lines.push(Line::styled(
                format!(
                    "{} — {:.4}, {:.4}",
                    r.name, r.coordinates.lat, r.coordinates.lng
                ),
                theme.dimmed(),
            ));
        }

        let placeholder = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(theme.border)));
        frame.render_widget(placeholder, area);
    }
}
