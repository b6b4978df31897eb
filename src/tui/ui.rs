use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::{DialogView, TitleBar, TodoList};
use crate::tui::{InputMode, TuiState};

const INPUT_HELP: &str = " Enter Add  Esc/Tab List  Ctrl+C Quit ";
const CURSOR_HELP: &str = " ↑↓ Select  Enter View  e Edit  d Delete  Tab Input  q Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(INPUT_HEIGHT), Min(0), Length(1)]);
    let [title_area, input_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.items().len(), app.status_message.clone()).render(frame, title_area);

    // Main area - show error OR the list
    if let Some(error_msg) = &app.error {
        draw_error_view(frame, main_area, &error_msg.to_string());
        draw_help(frame, help_area, " Press any key to exit ", true);
        return;
    }

    tui.input_box.render(frame, input_area);

    let focused = tui.input_mode == InputMode::Cursor && tui.dialog.is_none();
    TodoList::new(
        &mut tui.todo_list,
        app.items(),
        tui.max_display_chars,
        focused,
    )
    .render(frame, main_area);

    match &tui.notice {
        Some(notice) => draw_help(frame, help_area, notice, true),
        None => {
            let help = match tui.input_mode {
                InputMode::Input => INPUT_HELP,
                InputMode::Cursor => CURSOR_HELP,
            };
            draw_help(frame, help_area, help, false);
        }
    }

    if let Some(dialog) = tui.dialog.as_mut() {
        let area = frame.area();
        DialogView::new(dialog).render(frame, area);
    }
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str, highlight: bool) {
    let style = if highlight {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(Span::styled(text.to_string(), style));
    frame.render_widget(line, area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(Block::bordered().title("ERROR").border_style(Style::default().fg(Color::Red)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}
