//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Modes
//!
//! - **Input**: typing goes to the "new todo" box; Enter adds.
//! - **Cursor**: arrow keys select an item; Enter views it, `e` edits,
//!   `d` deletes. Typing any other character jumps back to Input.
//!
//! While a dialog is open every event goes to it. After a fatal store
//! error the next key ends the session.
//!
//! The loop redraws only after an event; idle it sleeps in `poll` for up
//! to 500ms.

mod component;
pub mod components;
mod event;
mod ui;

use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use log::{debug, info};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{Dialog, DialogEvent, InputBox, InputEvent, TodoListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigate the list with arrow keys. Typing auto-switches to Input.
    Cursor,
    /// Text editing in the input box. Esc/Tab switches to Cursor.
    Input,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub todo_list: TodoListState,
    pub input_mode: InputMode,
    /// Open modal overlay (None = hidden)
    pub dialog: Option<Dialog>,
    /// Rejected-input message shown until the next key press
    pub notice: Option<String>,
    pub max_display_chars: usize,
    pub confirm_delete: bool,
}

impl TuiState {
    pub fn new(max_display_chars: usize, confirm_delete: bool) -> Self {
        Self {
            input_box: InputBox::new("Enter your todo here"),
            todo_list: TodoListState::default(),
            input_mode: InputMode::Input, // User expects to type immediately
            dialog: None,
            notice: None,
            max_display_chars,
            confirm_delete,
        }
    }
}

/// Whether the event loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Hide
        );
    }
}

/// Run the interactive session until the user quits or a store error ends it.
/// On return, `app.error` holds the fatal error, if any.
pub fn run(app: &mut App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(config.max_display_chars, config.confirm_delete);
    if !app.items().is_empty() {
        tui.todo_list.select(Some(0));
    }

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, app, &mut tui));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.input_box.dimmed = tui.input_mode == InputMode::Cursor || tui.dialog.is_some();

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if dispatch(app, tui, event) == Flow::Quit {
                info!("Session ended");
                return Ok(());
            }
        }
    }
}

/// Route one event to the dialog, the input box or the list.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Flow {
    // Resize just needs a redraw
    if event == TuiEvent::Resize {
        return Flow::Continue;
    }

    // Ctrl+C always quits regardless of mode; so does any key after a fatal error
    if event == TuiEvent::ForceQuit || app.error.is_some() {
        return apply(app, tui, Action::Quit);
    }

    // A notice is dismissed by the next key, which is still processed
    tui.notice = None;

    if let Some(dialog) = tui.dialog.as_mut() {
        return match dialog.handle_event(&event) {
            Some(DialogEvent::Confirm(action)) => {
                tui.dialog = None;
                apply(app, tui, action)
            }
            Some(DialogEvent::Dismiss) => {
                tui.dialog = None;
                Flow::Continue
            }
            None => Flow::Continue,
        };
    }

    match tui.input_mode {
        InputMode::Input => dispatch_input(app, tui, event),
        InputMode::Cursor => dispatch_cursor(app, tui, event),
    }
}

fn dispatch_input(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Flow {
    match event {
        TuiEvent::Escape | TuiEvent::Tab | TuiEvent::CursorDown => {
            enter_cursor_mode(app, tui);
            Flow::Continue
        }
        _ => match tui.input_box.handle_event(&event) {
            Some(InputEvent::Submit(text)) => {
                let before = app.items().len();
                let flow = apply(app, tui, Action::Add(text));
                if app.items().len() > before {
                    tui.input_box.clear();
                    tui.todo_list.select(Some(app.items().len() - 1));
                }
                flow
            }
            Some(InputEvent::ContentChanged) | None => Flow::Continue,
        },
    }
}

fn dispatch_cursor(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Flow {
    let len = app.items().len();
    let selected = tui.todo_list.selected().filter(|&i| i < len);

    match event {
        TuiEvent::CursorUp => tui.todo_list.select_previous(len),
        TuiEvent::CursorDown => tui.todo_list.select_next(len),
        TuiEvent::CursorHome if len > 0 => tui.todo_list.select(Some(0)),
        TuiEvent::CursorEnd if len > 0 => tui.todo_list.select(Some(len - 1)),
        TuiEvent::Tab | TuiEvent::Escape => tui.input_mode = InputMode::Input,
        TuiEvent::InputChar('q') => return apply(app, tui, Action::Quit),
        TuiEvent::Submit => {
            if let Some(text) = selected.and_then(|i| app.editor.get(i)) {
                tui.dialog = Some(Dialog::View {
                    text: text.to_string(),
                });
            }
        }
        TuiEvent::InputChar('e') => {
            if let Some(i) = selected
                && let Some(text) = app.editor.get(i)
            {
                tui.dialog = Some(Dialog::edit(i, text));
            }
        }
        TuiEvent::InputChar('d') => {
            if let Some(i) = selected {
                if tui.confirm_delete {
                    tui.dialog = Some(Dialog::ConfirmDelete { index: i });
                } else {
                    return apply(app, tui, Action::Delete(i));
                }
            }
        }
        // Typing auto-switches to Input mode and forwards the event
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
            tui.input_mode = InputMode::Input;
            tui.input_box.handle_event(&event);
        }
        _ => {}
    }
    Flow::Continue
}

fn enter_cursor_mode(app: &App, tui: &mut TuiState) {
    tui.input_mode = InputMode::Cursor;
    let len = app.items().len();
    if tui.todo_list.selected().is_none() && len > 0 {
        tui.todo_list.select(Some(len - 1));
    }
}

fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Flow {
    debug!("Applying {:?}", action);
    let effect = update(app, action);
    tui.todo_list.clamp(app.items().len());
    match effect {
        Effect::Quit => Flow::Quit,
        Effect::Notice => {
            tui.notice = Some(app.status_message.clone());
            Flow::Continue
        }
        // The error view stays up until the next key
        Effect::Fatal | Effect::None => Flow::Continue,
    }
}
