//! # Dialog Component
//!
//! Modal overlays opened from cursor mode:
//!
//! - **View**: full text of the selected item (long items are truncated in the list)
//! - **Update**: input box prefilled with the item; Enter saves, Esc cancels
//! - **Delete**: yes/no confirmation before removing an item
//!
//! Follows the persistent state + transient wrapper pattern: `Dialog` lives
//! in `TuiState` while open, `DialogView` is created each frame to draw it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::action::Action;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::input_box::{INPUT_HEIGHT, InputBox, InputEvent};
use crate::tui::event::TuiEvent;

const DIALOG_WIDTH: u16 = 60;
/// Border (2) + horizontal padding (2)
const DIALOG_OVERHEAD: u16 = 4;

pub enum Dialog {
    View { text: String },
    Edit { index: usize, input: InputBox },
    ConfirmDelete { index: usize },
}

/// Events emitted by an open dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogEvent {
    /// The user said YES; run this action and close.
    Confirm(Action),
    /// The user said NO (or OK on the view dialog); just close.
    Dismiss,
}

impl Dialog {
    pub fn edit(index: usize, text: &str) -> Self {
        Dialog::Edit {
            index,
            input: InputBox::with_text("Todo", text),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Dialog::View { .. } => " Todo Item ",
            Dialog::Edit { .. } => " Update ",
            Dialog::ConfirmDelete { .. } => " Delete ",
        }
    }

    fn help(&self) -> &'static str {
        match self {
            Dialog::View { .. } => " Enter/Esc OK ",
            Dialog::Edit { .. } => " Enter YES  Esc NO ",
            Dialog::ConfirmDelete { .. } => " y YES  n NO ",
        }
    }
}

impl EventHandler for Dialog {
    type Event = DialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DialogEvent> {
        match self {
            Dialog::View { .. } => match event {
                TuiEvent::Submit | TuiEvent::Escape | TuiEvent::InputChar('q') => {
                    Some(DialogEvent::Dismiss)
                }
                _ => None,
            },
            Dialog::Edit { index, input } => match event {
                TuiEvent::Escape => Some(DialogEvent::Dismiss),
                _ => match input.handle_event(event)? {
                    InputEvent::Submit(text) => Some(DialogEvent::Confirm(Action::Edit {
                        index: *index,
                        text,
                    })),
                    InputEvent::ContentChanged => None,
                },
            },
            Dialog::ConfirmDelete { index } => match event {
                TuiEvent::Submit | TuiEvent::InputChar('y' | 'Y') => {
                    Some(DialogEvent::Confirm(Action::Delete(*index)))
                }
                TuiEvent::Escape | TuiEvent::InputChar('n' | 'N') => Some(DialogEvent::Dismiss),
                _ => None,
            },
        }
    }
}

/// Transient render wrapper for an open dialog.
pub struct DialogView<'a> {
    dialog: &'a mut Dialog,
}

impl<'a> DialogView<'a> {
    pub fn new(dialog: &'a mut Dialog) -> Self {
        Self { dialog }
    }
}

impl Component for DialogView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = DIALOG_WIDTH.min(area.width);
        let inner_width = width.saturating_sub(DIALOG_OVERHEAD).max(1);

        let body_lines: Vec<Line> = match &*self.dialog {
            Dialog::View { text } => textwrap::wrap(text, inner_width as usize)
                .into_iter()
                .map(|l| Line::from(l.into_owned()))
                .collect(),
            Dialog::ConfirmDelete { .. } => {
                vec![Line::from("Do you want to delete this todo item?")]
            }
            Dialog::Edit { .. } => Vec::new(),
        };
        let body_height = match &*self.dialog {
            Dialog::Edit { .. } => INPUT_HEIGHT,
            _ => (body_lines.len() as u16).max(1),
        };
        // body + borders
        let height = (body_height + 2).min(area.height);

        let overlay = centered_rect(width, height, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(self.dialog.title())
            .title_bottom(Line::from(self.dialog.help()).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        match &mut *self.dialog {
            Dialog::Edit { input, .. } => input.render(frame, inner),
            _ => frame.render_widget(Paragraph::new(body_lines), inner),
        }
    }
}

/// Center a `width` x `height` rect inside `outer`.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_confirm_delete_yes_and_no() {
        let mut dialog = Dialog::ConfirmDelete { index: 2 };
        assert_eq!(
            dialog.handle_event(&TuiEvent::InputChar('y')),
            Some(DialogEvent::Confirm(Action::Delete(2)))
        );
        assert_eq!(
            dialog.handle_event(&TuiEvent::Submit),
            Some(DialogEvent::Confirm(Action::Delete(2)))
        );
        assert_eq!(
            dialog.handle_event(&TuiEvent::InputChar('n')),
            Some(DialogEvent::Dismiss)
        );
        assert_eq!(dialog.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_edit_submits_current_text() {
        let mut dialog = Dialog::edit(0, "Buy milk");
        for _ in 0.."milk".len() {
            dialog.handle_event(&TuiEvent::Backspace);
        }
        for c in "oat milk".chars() {
            assert_eq!(dialog.handle_event(&TuiEvent::InputChar(c)), None);
        }
        assert_eq!(
            dialog.handle_event(&TuiEvent::Submit),
            Some(DialogEvent::Confirm(Action::Edit {
                index: 0,
                text: "Buy oat milk".to_string()
            }))
        );
    }

    #[test]
    fn test_edit_allows_blank_and_escape_cancels() {
        let mut dialog = Dialog::edit(1, "x");
        dialog.handle_event(&TuiEvent::Backspace);
        assert_eq!(
            dialog.handle_event(&TuiEvent::Submit),
            Some(DialogEvent::Confirm(Action::Edit {
                index: 1,
                text: String::new()
            }))
        );
        assert_eq!(
            dialog.handle_event(&TuiEvent::Escape),
            Some(DialogEvent::Dismiss)
        );
    }

    #[test]
    fn test_view_dismisses() {
        let mut dialog = Dialog::View {
            text: "hello".to_string(),
        };
        assert_eq!(dialog.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(
            dialog.handle_event(&TuiEvent::Escape),
            Some(DialogEvent::Dismiss)
        );
    }

    #[test]
    fn test_view_renders_full_wrapped_text() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut dialog = Dialog::View {
            text: "Remember to call the plumber about the kitchen sink".to_string(),
        };

        terminal
            .draw(|f| DialogView::new(&mut dialog).render(f, f.area()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Todo Item"));
        assert!(text.contains("Remember to call the plumber"));
        assert!(text.contains("kitchen sink"));
    }

    #[test]
    fn test_delete_renders_question() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut dialog = Dialog::ConfirmDelete { index: 0 };

        terminal
            .draw(|f| DialogView::new(&mut dialog).render(f, f.area()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Do you want to delete this todo item?"));
        assert!(text.contains("y YES"));
    }

    #[test]
    fn test_centered_rect() {
        let outer = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 10, outer);
        assert_eq!(rect, Rect::new(20, 20, 60, 10));
    }
}
