//! # Actions
//!
//! Everything that can happen to the todo list becomes an `Action`.
//! User submits the input box? That's `Action::Add(text)`.
//! User confirms the delete dialog? That's `Action::Delete(index)`.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! `update()` is the only caller of the `Editor` mutations, so every front
//! end gets the same messages and the same fatal-error handling.

use log::{error, info};

use crate::core::editor::EditorError;
use crate::core::state::App;

pub const EMPTY_INPUT_NOTICE: &str = "Please enter your todo first!";
pub const UPDATED_NOTICE: &str = "Todo item has been successfully updated!";
pub const DELETED_NOTICE: &str = "Todo item has been successfully deleted!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Edit { index: usize, text: String },
    Delete(usize),
    Quit,
}

/// What the front end should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The input was rejected; show `status_message` as a dismissible notice.
    Notice,
    /// A store operation failed; `app.error` is set and the session must end.
    Fatal,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Add(text) => match app.editor.append(text) {
            Ok(()) => {
                info!("Added todo #{}", app.editor.len());
                app.status_message = format!("{} todo items", app.editor.len());
                Effect::None
            }
            Err(e) => handle_error(app, e),
        },
        Action::Edit { index, text } => match app.editor.update_at(index, text) {
            Ok(()) => {
                info!("Updated todo at index {}", index);
                app.status_message = UPDATED_NOTICE.to_string();
                Effect::None
            }
            Err(e) => handle_error(app, e),
        },
        Action::Delete(index) => match app.editor.remove_at(index) {
            Ok(_) => {
                info!("Deleted todo at index {}", index);
                app.status_message = DELETED_NOTICE.to_string();
                Effect::None
            }
            Err(e) => handle_error(app, e),
        },
        Action::Quit => Effect::Quit,
    }
}

fn handle_error(app: &mut App, e: EditorError) -> Effect {
    match e {
        EditorError::EmptyItem => {
            app.status_message = EMPTY_INPUT_NOTICE.to_string();
            Effect::Notice
        }
        EditorError::IndexOutOfRange { .. } => {
            app.status_message = e.to_string();
            Effect::Notice
        }
        EditorError::Store(e) => {
            error!("Store failure: {}", e);
            app.error = Some(e);
            app.status_message = "Could not save todo list".to_string();
            Effect::Fatal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::editor::Editor;
    use crate::core::store::StoreError;
    use crate::test_support::{FailingStore, test_app};

    #[test]
    fn test_add_appends() {
        let mut app = test_app(&[]);
        assert_eq!(update(&mut app, Action::Add("Buy milk".into())), Effect::None);
        assert_eq!(app.items(), ["Buy milk".to_string()].as_slice());
    }

    #[test]
    fn test_add_empty_is_a_notice() {
        let mut app = test_app(&[]);
        assert_eq!(update(&mut app, Action::Add(String::new())), Effect::Notice);
        assert_eq!(app.status_message, EMPTY_INPUT_NOTICE);
        assert!(app.items().is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn test_edit_sets_updated_notice() {
        let mut app = test_app(&["a"]);
        let effect = update(
            &mut app,
            Action::Edit {
                index: 0,
                text: "b".into(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.status_message, UPDATED_NOTICE);
        assert_eq!(app.items(), ["b".to_string()].as_slice());
    }

    #[test]
    fn test_delete_sets_deleted_notice() {
        let mut app = test_app(&["a", "b"]);
        assert_eq!(update(&mut app, Action::Delete(0)), Effect::None);
        assert_eq!(app.status_message, DELETED_NOTICE);
        assert_eq!(app.items(), ["b".to_string()].as_slice());
    }

    #[test]
    fn test_stale_index_is_a_notice() {
        let mut app = test_app(&["a"]);
        assert_eq!(update(&mut app, Action::Delete(3)), Effect::Notice);
        assert!(app.error.is_none());
        assert_eq!(app.items().len(), 1);
    }

    #[test]
    fn test_store_failure_is_fatal() {
        let editor = Editor::open(Box::new(FailingStore::with_items(&["a"]))).unwrap();
        let mut app = App::new(editor);
        assert_eq!(update(&mut app, Action::Add("b".into())), Effect::Fatal);
        assert!(matches!(app.error, Some(StoreError::Io { .. })));
        assert!(app.error.as_ref().unwrap().to_string().contains("read-only"));
        assert_eq!(app.items(), ["a".to_string()].as_slice());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app(&[]);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
