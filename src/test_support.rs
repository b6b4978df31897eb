//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use crate::core::editor::Editor;
use crate::core::state::App;
use crate::core::store::{StoreError, TodoStore};

/// Shared log of every snapshot passed to `save`, oldest first.
pub type SaveLog = Rc<RefCell<Vec<Vec<String>>>>;

/// An in-memory store that remembers the current snapshot and every save.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<Vec<String>>,
    saves: SaveLog,
}

impl MemoryStore {
    pub fn with_items(items: &[&str]) -> Self {
        Self {
            items: RefCell::new(items.iter().map(|s| s.to_string()).collect()),
            saves: SaveLog::default(),
        }
    }

    /// Handle to the save log that outlives the store being boxed into an `Editor`.
    pub fn saves(&self) -> SaveLog {
        Rc::clone(&self.saves)
    }
}

impl TodoStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.items.borrow().clone())
    }

    fn save(&self, items: &[String]) -> Result<(), StoreError> {
        *self.items.borrow_mut() = items.to_vec();
        self.saves.borrow_mut().push(items.to_vec());
        Ok(())
    }
}

/// Loads fine, refuses every save (simulates a read-only or full disk).
pub struct FailingStore {
    items: Vec<String>,
}

impl FailingStore {
    pub fn with_items(items: &[&str]) -> Self {
        Self {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TodoStore for FailingStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.items.clone())
    }

    fn save(&self, _items: &[String]) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from("/read-only/todo.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

/// Creates a test App backed by a MemoryStore holding `items`.
pub fn test_app(items: &[&str]) -> App {
    let editor = Editor::open(Box::new(MemoryStore::with_items(items)))
        .expect("memory store never fails to load");
    App::new(editor)
}
