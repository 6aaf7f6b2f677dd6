use ratatui::Frame;
use ratatui::layout::Rect;

/// A renderable piece of the catalog UI.
///
/// Stateless components (`TitleBar`, `MapView`) carry only props and
/// draw them. Stateful ones (`Gallery`, `ListView`, overlays) are
/// transient wrappers built each frame around a `*State` value that
/// lives in `TuiState` across frames.
///
/// `render` takes `&mut self` so a component can update cursors, scroll
/// offsets, and layout caches during the render pass — the same contract
/// as Ratatui's `StatefulWidget`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
///
/// Implementors translate low-level `TuiEvent`s into one high-level
/// event the event loop knows how to dispatch (`ViewEvent::Open`,
/// `FilterEvent::Patch`, ...). Returning `None` means the event was
/// either consumed internally (cursor moved, character typed) or
/// ignored.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
