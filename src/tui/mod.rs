//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (GUI, web,
//! etc.) in the future if needed.
//!
//! ## Event Routing
//!
//! Exactly one layer owns the keyboard at any moment, checked in
//! priority order: editor overlay → filter panel → detail overlay →
//! the active view. Overlay components emit high-level events
//! (`EditorEvent::Save`, `FilterEvent::Patch`, ...) which this loop
//! translates into store actions; they never touch the store themselves.
//!
//! ## Redraw Strategy
//!
//! The loop polls with a 250ms timeout and only redraws after an event
//! arrived. There are no animations and no background tasks, so an idle
//! Mesa burns no cycles repainting an unchanged frame.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor
//! because ratatui's `set_cursor_position` resets the terminal's blink
//! timer on every `draw()` call, making blinking cursors appear erratic
//! during continuous redraws.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::model::{FilterPatch, ViewMode};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    Detail, DetailEvent, DetailState, EditorEvent, EditorState, FilterEvent, FilterPanelState,
    GalleryState, ListViewState, ViewEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent per-view component states
    pub gallery: GalleryState,
    pub list: ListViewState,
    pub detail: DetailState,
    // Overlays (None = hidden)
    pub filter_panel: Option<FilterPanelState>,
    pub editor: Option<EditorState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            gallery: GalleryState::new(),
            list: ListViewState::new(),
            detail: DetailState::new(),
            filter_panel: None,
            editor: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Editor overlay has first claim on events
            if let Some(editor) = &mut tui.editor {
                match editor.handle_event(&event) {
                    Some(EditorEvent::Save(record)) => {
                        if editor.is_editing() {
                            update(&mut app, Action::Update(record.clone()));
                            update(&mut app, Action::SetEditMode(false));
                            app.status_message = format!("Updated {}", record.name);
                        } else {
                            update(&mut app, Action::Add(record.clone()));
                            update(&mut app, Action::SetAddMode(false));
                            app.status_message = format!("Added {}", record.name);
                        }
                        debug!("Editor saved record {}", record.id);
                        tui.editor = None;
                    }
                    Some(EditorEvent::Cancel) => {
                        update(&mut app, Action::SetEditMode(false));
                        update(&mut app, Action::SetAddMode(false));
                        tui.editor = None;
                    }
                    None => {}
                }
                continue;
            }

            // Filter panel: patches stream straight into the store
            if let Some(panel) = &mut tui.filter_panel {
                match panel.handle_event(&event) {
                    Some(FilterEvent::Patch(patch)) => {
                        update(&mut app, Action::SetFilters(patch));
                    }
                    Some(FilterEvent::Dismiss) => {
                        tui.filter_panel = None;
                    }
                    None => {}
                }
                continue;
            }

            // Detail overlay while a record is selected
            if let Some(record) = app.selected.clone() {
                let theme = Theme::from_flag(app.dark_mode);
                match Detail::new(&mut tui.detail, &record, &theme).handle_event(&event) {
                    Some(DetailEvent::Edit) => {
                        update(&mut app, Action::SetEditMode(true));
                        tui.editor = Some(EditorState::edit(&record));
                    }
                    Some(DetailEvent::Delete(id)) => {
                        update(&mut app, Action::Delete(id));
                        app.status_message = format!("Deleted {}", record.name);
                    }
                    Some(DetailEvent::Dismiss) => {
                        update(&mut app, Action::Select(None));
                    }
                    None => {}
                }
                continue;
            }

            // Main views
            match event {
                TuiEvent::InputChar('q') => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::Tab => {
                    let next_view_mode = app.view_mode.next();
                    update(&mut app, Action::SetViewMode(next_view_mode));
                }
                TuiEvent::InputChar('g') => {
                    update(&mut app, Action::SetViewMode(ViewMode::Gallery));
                }
                TuiEvent::InputChar('l') => {
                    update(&mut app, Action::SetViewMode(ViewMode::List));
                }
                TuiEvent::InputChar('m') => {
                    update(&mut app, Action::SetViewMode(ViewMode::Map));
                }
                TuiEvent::InputChar('d') => {
                    update(&mut app, Action::ToggleDarkMode);
                }
                TuiEvent::InputChar('f') | TuiEvent::InputChar('/') => {
                    tui.filter_panel = Some(FilterPanelState::new(&app.filters, app.cities()));
                }
                TuiEvent::InputChar('a') => {
                    update(&mut app, Action::SetAddMode(true));
                    tui.editor = Some(EditorState::add());
                }
                TuiEvent::InputChar('c') => {
                    update(&mut app, Action::SetFilters(FilterPatch::clear_all()));
                    app.status_message = "Filters cleared".to_string();
                }
                other => {
                    // Cursor movement and Enter go to the active view
                    let opened = match app.view_mode {
                        ViewMode::Gallery => tui.gallery.handle_event(&other),
                        ViewMode::List => tui.list.handle_event(&other),
                        ViewMode::Map => None,
                    };
                    if let Some(ViewEvent::Open(index)) = opened
                        && let Some(record) = app.filtered.get(index).cloned()
                    {
                        tui.detail = DetailState::new();
                        update(&mut app, Action::Select(Some(record)));
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
