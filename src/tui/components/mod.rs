//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, item count, status message
//! - `TodoList`: transient wrapper over `TodoListState` + the item slice
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: single-line text field, emits `InputEvent`
//! - `Dialog`: view / update / delete overlays, emits `DialogEvent`
//!
//! Components receive external data as props rather than reaching into
//! `App`, so each one can be rendered against a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Top status line)
//! ├── input_box.rs    (Text field for new todos and edits)
//! ├── todo_list.rs    (Numbered, truncated item list)
//! └── dialog.rs       (Modal overlays)
//! ```

pub mod dialog;
pub mod input_box;
pub mod title_bar;
pub mod todo_list;

pub use dialog::{Dialog, DialogEvent, DialogView};
pub use input_box::{InputBox, InputEvent};
pub use title_bar::TitleBar;
pub use todo_list::{TodoList, TodoListState};
