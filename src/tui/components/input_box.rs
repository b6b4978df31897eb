//! # InputBox Component
//!
//! Single-line text field used for new todos and inside the edit dialog.
//!
//! ## Responsibilities
//!
//! - Capture text input (typed chars and bracketed paste)
//! - Handle editing (backspace, delete, left/right, home/end)
//! - Emit `Submit` on Enter with the current text
//! - Scroll horizontally so the cursor stays visible
//!
//! The buffer is *not* cleared on submit. The parent clears it once the
//! submitted text was accepted, so a rejected entry stays editable.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (2) consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top border + content line + bottom border
pub const INPUT_HEIGHT: u16 = 3;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed; carries the current text (possibly empty)
    Submit(String),
    ContentChanged,
}

/// Text field with a title.
///
/// # Props
///
/// - `title`: border title
/// - `dimmed`: render greyed out while another widget has focus
pub struct InputBox {
    pub buffer: String,
    pub title: String,
    pub dimmed: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl InputBox {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            title: title.into(),
            dimmed: false,
            cursor: 0,
        }
    }

    /// Start with `text` in the buffer and the cursor at its end.
    pub fn with_text(title: impl Into<String>, text: &str) -> Self {
        let mut input = Self::new(title);
        input.buffer = text.to_string();
        input.cursor = input.buffer.len();
        input
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Returns the byte offset where the visible window starts and the cursor
    /// column inside it, for a field `width` cells wide.
    fn visible_window(&self, width: usize) -> (usize, usize) {
        if width == 0 {
            return (self.cursor, 0);
        }
        // Walk back from the cursor until the text before it fills the field
        let mut start = self.cursor;
        let mut used = 0;
        for (i, c) in self.buffer[..self.cursor].char_indices().rev() {
            let w = c.width().unwrap_or(0);
            if used + w >= width {
                break;
            }
            used += w;
            start = i;
        }
        (start, used)
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let (start, cursor_col) = self.visible_window(width);

        let style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        let border_style = if self.dimmed {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.as_str());
        let input = Paragraph::new(&self.buffer[start..]).block(block).style(style);
        frame.render_widget(input, area);

        if !self.dimmed {
            frame.set_cursor_position((area.x + 1 + cursor_col as u16, area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Items are single-line
                let flat = text
                    .split(['\r', '\n'])
                    .filter(|piece| !piece.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
