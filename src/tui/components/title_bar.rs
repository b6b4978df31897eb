//! # TitleBar Component
//!
//! Top status line: app name, item count, and the current status message.
//! Stateless; everything it shows arrives as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    pub item_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(item_count: usize, status_message: String) -> Self {
        Self {
            item_count,
            status_message,
        }
    }

    fn text(&self) -> String {
        let noun = if self.item_count == 1 { "item" } else { "items" };
        if self.status_message.is_empty() {
            format!("Tally ({} {noun})", self.item_count)
        } else {
            format!(
                "Tally ({} {noun}) | {}",
                self.item_count, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
