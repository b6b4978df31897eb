//! # List Editor
//!
//! Owns the in-memory todo list and is the only thing allowed to mutate it.
//! Every mutation is followed by a synchronous save of the full list; if the
//! save fails the mutation is undone, so memory never runs ahead of disk.

use std::fmt;

use log::{debug, warn};

use crate::core::store::{StoreError, TodoStore};

#[derive(Debug)]
pub enum EditorError {
    /// Append was called with empty or whitespace-only text.
    EmptyItem,
    /// The index does not address an item in the current list.
    IndexOutOfRange { index: usize, len: usize },
    /// Loading or saving through the store failed.
    Store(StoreError),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::EmptyItem => write!(f, "todo text is empty"),
            EditorError::IndexOutOfRange { index, len } => {
                write!(f, "no todo at index {index} (list has {len} items)")
            }
            EditorError::Store(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for EditorError {
    fn from(e: StoreError) -> Self {
        EditorError::Store(e)
    }
}

/// Returns true if `text` would be rejected by [`Editor::append`].
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

pub struct Editor {
    items: Vec<String>,
    store: Box<dyn TodoStore>,
}

impl Editor {
    /// Seed the list from the store. A missing file yields an empty list.
    pub fn open(store: Box<dyn TodoStore>) -> Result<Self, EditorError> {
        let items = store.load()?;
        debug!("Editor opened with {} items", items.len());
        Ok(Self { items, store })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn append(&mut self, text: impl Into<String>) -> Result<(), EditorError> {
        let text = text.into();
        if is_blank(&text) {
            return Err(EditorError::EmptyItem);
        }
        self.items.push(text);
        if let Err(e) = self.store.save(&self.items) {
            self.items.pop();
            return Err(self.save_failed(e));
        }
        Ok(())
    }

    /// Replace the item at `index`. Blank text is accepted here.
    pub fn update_at(&mut self, index: usize, text: impl Into<String>) -> Result<(), EditorError> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange { index, len })?;
        let previous = std::mem::replace(slot, text.into());
        if let Err(e) = self.store.save(&self.items) {
            self.items[index] = previous;
            return Err(self.save_failed(e));
        }
        Ok(())
    }

    /// Remove the item at `index`, shifting later items down. Returns the removed text.
    pub fn remove_at(&mut self, index: usize) -> Result<String, EditorError> {
        if index >= self.items.len() {
            return Err(EditorError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        if let Err(e) = self.store.save(&self.items) {
            self.items.insert(index, removed);
            return Err(self.save_failed(e));
        }
        Ok(removed)
    }

    fn save_failed(&self, e: StoreError) -> EditorError {
        warn!("Save failed, mutation rolled back: {}", e);
        EditorError::Store(e)
    }
}
