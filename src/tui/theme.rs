//! # Theme
//!
//! Two palettes behind the dark-mode flag. Components take a `&Theme`
//! instead of naming `Color`s directly, so the toggle reaches every pane.

use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub rating: Color,
    pub price: Color,
    pub danger: Color,
    pub highlight_fg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            rating: Color::Yellow,
            price: Color::Green,
            danger: Color::Red,
            highlight_fg: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            text: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            border: Color::Gray,
            rating: Color::Magenta,
            price: Color::Green,
            danger: Color::Red,
            highlight_fg: Color::Black,
        }
    }

    pub fn from_flag(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    /// Style for the cursor row/card in gallery and list views.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Style for secondary text (addresses, help bars, placeholders).
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag_picks_palette() {
        assert_eq!(Theme::from_flag(true).text, Color::White);
        assert_eq!(Theme::from_flag(false).text, Color::Black);
    }
}
