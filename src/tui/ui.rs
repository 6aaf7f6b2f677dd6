//! Frame composition: lays out the title bar, the active view, and the
//! help bar, then stacks whichever overlay is open on top. Overlay
//! priority is editor > filter panel > detail — only one receives events
//! at a time, and the event loop routes with the same precedence.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;

use crate::core::model::ViewMode;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Detail, Editor, FilterPanel, Gallery, ListView, MapView, TitleBar};
use crate::tui::theme::Theme;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let theme = Theme::from_flag(app.dark_mode);
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    // Title bar
    TitleBar {
        view_mode: app.view_mode,
        shown: app.filtered.len(),
        total: app.restaurants.len(),
        filters_active: !app.filters.is_empty(),
        is_loading: app.is_loading,
        status_message: &app.status_message,
        theme: &theme,
    }
    .render(frame, title_area);

    // Active view
    match app.view_mode {
        ViewMode::Gallery => {
            Gallery::new(&mut tui.gallery, &app.filtered, &theme).render(frame, main_area);
        }
        ViewMode::List => {
            ListView::new(&mut tui.list, &app.filtered, &theme).render(frame, main_area);
        }
        ViewMode::Map => {
            MapView::new(&app.filtered, &theme).render(frame, main_area);
        }
    }

    draw_help_bar(frame, help_area, tui, &theme);

    // Overlays, lowest priority first so the active one draws on top.
    let overlay_open = tui.editor.is_some() || tui.filter_panel.is_some();
    if let Some(selected) = &app.selected
        && !overlay_open
    {
        Detail::new(&mut tui.detail, selected, &theme).render(frame, frame.area());
    }
    if let Some(panel) = &mut tui.filter_panel
        && tui.editor.is_none()
    {
        FilterPanel::new(panel, &theme).render(frame, frame.area());
    }
    if let Some(editor) = &mut tui.editor {
        Editor::new(editor, &theme).render(frame, frame.area());
    }
}

fn draw_help_bar(frame: &mut Frame, area: Rect, tui: &TuiState, theme: &Theme) {
    let help = if tui.editor.is_some() || tui.filter_panel.is_some() {
        // Overlay help lives in the overlay's bottom border.
        ""
    } else {
        " ↑↓←→ Navigate  Enter Open  Tab View  f Filter  a Add  d Dark  q Quit "
    };
    frame.render_widget(Line::from(help).style(theme.dimmed()), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::tui::components::{EditorState, FilterPanelState};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_gallery_view() {
        let app = App::new();
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Mesa"));
        assert!(text.contains("Casa San Isidro"));
        assert!(text.contains("6 places"));
    }

    #[test]
    fn test_draw_list_view() {
        let mut app = App::new();
        update(&mut app, Action::SetViewMode(ViewMode::List));
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Cuisine"));
        assert!(text.contains("Sushi Zen"));
    }

    #[test]
    fn test_draw_map_placeholder() {
        let mut app = App::new();
        update(&mut app, Action::SetViewMode(ViewMode::Map));
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Interactive Map View"));
        assert!(text.contains("display all 6 restaurants"));
    }

    #[test]
    fn test_detail_overlay_draws_over_selection() {
        let mut app = App::new();
        let record = app.restaurants[3].clone();
        update(&mut app, Action::Select(Some(record)));
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("El Cielo"));
        assert!(text.contains("e Edit"));
    }

    #[test]
    fn test_editor_overlay_wins_over_detail() {
        let mut app = App::new();
        let sel = app.restaurants[0].clone();
        update(&mut app, Action::Select(Some(sel)));
        let mut tui = TuiState::new();
        tui.editor = Some(EditorState::add());
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Add Restaurant"));
        assert!(!text.contains("e Edit"));
    }

    #[test]
    fn test_filter_panel_overlay() {
        let app = App::new();
        let mut tui = TuiState::new();
        tui.filter_panel = Some(FilterPanelState::new(&app.filters, app.cities()));
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Filters"));
        assert!(text.contains("Min rating"));
    }
}
