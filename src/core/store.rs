//! # Todo Persistence
//!
//! Load/save the todo list to `~/.tally/todo.json`.
//!
//! The file is a single JSON array of strings. Every save rewrites the whole
//! file (write `.tmp`, then `rename()`); there is no incremental update.
//! A missing file means "first run" and loads as an empty list. Anything
//! else that goes wrong is surfaced to the caller as a `StoreError`.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

/// File name of the todo list inside the data directory.
pub const FILE_NAME: &str = "todo.json";

/// Errors from loading or saving the todo file.
#[derive(Debug)]
pub enum StoreError {
    /// Reading, writing or renaming the file failed (permissions, disk full...).
    Io { path: PathBuf, source: io::Error },
    /// The file exists but is not a JSON array of strings.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The list could not be serialized.
    Encode(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "todo file I/O error ({}): {source}", path.display())
            }
            StoreError::Corrupt { path, source } => {
                write!(f, "todo file {} is corrupt: {source}", path.display())
            }
            StoreError::Encode(e) => write!(f, "failed to encode todo list: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Corrupt { source, .. } => Some(source),
            StoreError::Encode(e) => Some(e),
        }
    }
}

/// The load/save boundary between the in-memory list and durable storage.
pub trait TodoStore {
    /// Returns the most recently saved list, or an empty list if nothing was saved yet.
    fn load(&self) -> Result<Vec<String>, StoreError>;

    /// Replaces the stored snapshot with `items`. Always called with the full list.
    fn save(&self, items: &[String]) -> Result<(), StoreError>;
}

/// Stores the list as a JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Returns `~/.tally/`. Not created here; `FileStore::save` creates it lazily.
pub fn data_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    Ok(home.join(".tally"))
}

/// Returns the default todo file path, `~/.tally/todo.json`.
pub fn default_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(FILE_NAME))
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json(path: &Path, data: &[String]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data).map_err(StoreError::Encode)?;
    fs::write(&tmp_path, json).map_err(io_err(&tmp_path))?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_err(path)(e));
    }
    Ok(())
}

impl TodoStore for FileStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "No todo file at {}, starting with an empty list",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                error!("Failed to read {}: {}", self.path.display(), e);
                return Err(io_err(&self.path)(e));
            }
        };

        let items: Vec<String> = serde_json::from_slice(&bytes).map_err(|source| {
            error!("Todo file {} is corrupt: {}", self.path.display(), source);
            StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!("Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn save(&self, items: &[String]) -> Result<(), StoreError> {
        atomic_write_json(&self.path, items)?;
        debug!("Saved {} items to {}", items.len(), self.path.display());
        Ok(())
    }
}
