//! # TodoList Component
//!
//! Numbered, scrollable view of the todo items.
//!
//! `TodoList` is a transient component (created each frame) that wraps
//! `&'a mut TodoListState` (persistent selection/scroll) and the item slice
//! (props). Long items are cut to `max_chars` characters plus `...`; the full
//! text is available through the view dialog.

use std::borrow::Cow;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::tui::component::Component;

/// Selection and scroll state, persisted in `TuiState`.
#[derive(Default)]
pub struct TodoListState {
    pub list_state: ListState,
}

impl TodoListState {
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.list_state.select(index);
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let idx = self
            .selected()
            .map(|i| i.saturating_sub(1))
            .unwrap_or(len - 1);
        self.select(Some(idx));
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let idx = self.selected().map(|i| (i + 1).min(len - 1)).unwrap_or(0);
        self.select(Some(idx));
    }

    /// Keep the selection inside `0..len` after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        match self.selected() {
            Some(_) if len == 0 => self.select(None),
            Some(i) if i >= len => self.select(Some(len - 1)),
            _ => {}
        }
    }
}

/// Shorten `text` to its first line and at most `max_chars` characters.
pub fn truncate_item(text: &str, max_chars: usize) -> Cow<'_, str> {
    let mut lines = text.lines();
    let first_line = lines.next().unwrap_or("").trim_end_matches('\r');
    let multi_line = lines.any(|line| !line.trim().is_empty());
    if first_line.chars().count() > max_chars {
        let head: String = first_line.chars().take(max_chars).collect();
        Cow::Owned(format!("{head}..."))
    } else if multi_line {
        Cow::Owned(format!("{first_line}..."))
    } else {
        Cow::Borrowed(first_line)
    }
}

pub struct TodoList<'a> {
    state: &'a mut TodoListState,
    items: &'a [String],
    max_chars: usize,
    focused: bool,
}

impl<'a> TodoList<'a> {
    pub fn new(
        state: &'a mut TodoListState,
        items: &'a [String],
        max_chars: usize,
        focused: bool,
    ) -> Self {
        Self {
            state,
            items,
            max_chars,
            focused,
        }
    }
}

impl Component for TodoList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Todos ({}) ", self.items.len()));

        if self.items.is_empty() {
            let empty = Paragraph::new("Nothing to do yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let number_width = self.items.len().to_string().len();
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let number = format!("{:>width$}. ", i + 1, width = number_width);
                ListItem::new(Line::from(vec![
                    Span::styled(number, Style::default().fg(Color::DarkGray)),
                    Span::raw(truncate_item(item, self.max_chars)),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };

        let list = List::new(rows).block(block).highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_truncate_item() {
        assert_eq!(truncate_item("Buy milk", 23), "Buy milk");
        assert_eq!(
            truncate_item("Remember to call the plumber", 23),
            "Remember to call the pl..."
        );
        assert_eq!(truncate_item("exactly five", 12), "exactly five");
        assert_eq!(truncate_item("first\nsecond", 23), "first...");
        assert_eq!(truncate_item("ünïcödé", 3), "ünï...");
    }

    #[test]
    fn test_truncate_item_line_endings() {
        assert_eq!(truncate_item("abc\r\n", 23), "abc");
        assert_eq!(truncate_item("abc\n\n", 23), "abc");
        assert_eq!(truncate_item("abc\r", 23), "abc");
        assert_eq!(truncate_item("abc\r\ndef", 23), "abc...");
    }

    #[test]
    fn test_select_next_and_previous() {
        let mut state = TodoListState::default();
        state.select_next(3);
        assert_eq!(state.selected(), Some(0));
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected(), Some(2));
        state.select_previous(3);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_select_previous_from_none_picks_last() {
        let mut state = TodoListState::default();
        state.select_previous(4);
        assert_eq!(state.selected(), Some(3));
        let mut empty = TodoListState::default();
        empty.select_previous(0);
        assert_eq!(empty.selected(), None);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = TodoListState::default();
        state.select(Some(2));
        state.clamp(2);
        assert_eq!(state.selected(), Some(1));
        state.clamp(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_render_numbers_and_truncates() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let items = vec![
            "Buy milk".to_string(),
            "A very long item that will be cut".to_string(),
        ];
        let mut state = TodoListState::default();

        terminal
            .draw(|f| TodoList::new(&mut state, &items, 10, false).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Todos (2)"));
        assert!(text.contains("1. Buy milk"));
        assert!(text.contains("2. A very lon..."));
        assert!(!text.contains("will be cut"));
    }

    #[test]
    fn test_render_empty() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TodoListState::default();

        terminal
            .draw(|f| TodoList::new(&mut state, &[], 23, true).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Nothing to do yet."));
    }
}
