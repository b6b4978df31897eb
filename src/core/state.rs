//! # Application State
//!
//! Core business state for Tally. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── editor: Editor               // the todo list + its store
//! ├── status_message: String       // status bar text / notices
//! └── error: Option<StoreError>    // fatal store error, shown before exit
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::editor::Editor;
use crate::core::store::StoreError;

pub const WELCOME_MESSAGE: &str = "Welcome to Tally!";

pub struct App {
    pub editor: Editor,
    pub status_message: String,
    /// Set once a load/save fails. The front end shows it and exits.
    pub error: Option<StoreError>,
}

impl App {
    pub fn new(editor: Editor) -> Self {
        Self {
            editor,
            status_message: String::from(WELCOME_MESSAGE),
            error: None,
        }
    }

    pub fn items(&self) -> &[String] {
        self.editor.items()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app(&["one"]);
        assert_eq!(app.status_message, super::WELCOME_MESSAGE);
        assert!(app.error.is_none());
        assert_eq!(app.items(), ["one".to_string()].as_slice());
    }
}
