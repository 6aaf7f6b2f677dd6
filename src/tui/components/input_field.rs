//! # InputField Component
//!
//! Single-line text input used by the filter panel and the record editor.
//! Owns its buffer and a byte-offset cursor; display-column math goes
//! through `unicode-width` so wide characters behave.

use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Emitted when the field consumed an event.
#[derive(Debug, PartialEq, Eq)]
pub enum InputFieldEvent {
    /// Buffer contents changed.
    Changed,
    /// Enter was pressed.
    Submitted,
}

#[derive(Default)]
pub struct InputField {
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn insert_str(&mut self, s: &str) {
        self.buffer.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Byte offset of the char boundary left of the cursor.
    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.prev_boundary();
        self.buffer.remove(at);
        self.cursor = at;
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        self.buffer.remove(self.cursor);
        true
    }

    /// Display column of the cursor (sum of widths left of it). The
    /// owning overlay draws the buffer and parks the terminal cursor at
    /// this column.
    pub fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }
}

impl EventHandler for InputField {
    type Event = InputFieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<InputFieldEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert_char(*c);
                Some(InputFieldEvent::Changed)
            }
            // Flatten pasted newlines: these fields are single-line.
            TuiEvent::Paste(data) => {
                self.insert_str(&data.replace('\n', " "));
                Some(InputFieldEvent::Changed)
            }
            TuiEvent::Backspace => self.backspace().then_some(InputFieldEvent::Changed),
            TuiEvent::DeleteChar => self.delete().then_some(InputFieldEvent::Changed),
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    let next = self.buffer[self.cursor..]
                        .chars()
                        .next()
                        .map(|c| c.len_utf8())
                        .unwrap_or(0);
                    self.cursor += next;
                }
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputFieldEvent::Submitted),
            _ => None,
        }
    }
}
