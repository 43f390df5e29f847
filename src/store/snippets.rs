//! Saved clipboard snippets

use crate::store::persist;
use crate::utils::error::{FloatballError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the snippet list inside the save directory
pub const SNIPPET_FILE_NAME: &str = "options.json";

/// Insertion-ordered set of snippets.
///
/// `index` always holds exactly the elements of `items`; every mutation goes
/// through methods that update both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetSet {
    items: Vec<String>,
    index: HashSet<String>,
}

impl SnippetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a loaded list. Later repeats of a text are dropped.
    pub fn from_items(items: Vec<String>) -> Self {
        let mut set = Self::new();
        for item in items {
            if !set.index.contains(&item) {
                set.index.insert(item.clone());
                set.items.push(item);
            }
        }
        set
    }

    /// Append `text` unless an identical snippet exists. Exact match only.
    pub fn insert(&mut self, text: &str) -> bool {
        if self.index.contains(text) {
            return false;
        }
        self.index.insert(text.to_string());
        self.items.push(text.to_string());
        true
    }

    /// Put `text` back at `position`; false if it is already present.
    ///
    /// `position` past the end appends.
    pub fn insert_at(&mut self, position: usize, text: &str) -> bool {
        if self.index.contains(text) {
            return false;
        }
        let position = position.min(self.items.len());
        self.index.insert(text.to_string());
        self.items.insert(position, text.to_string());
        true
    }

    /// Remove and return the snippet at `position`.
    pub fn remove(&mut self, position: usize) -> Result<String> {
        if position >= self.items.len() {
            return Err(FloatballError::IndexOutOfRange {
                position,
                len: self.items.len(),
            });
        }
        let text = self.items.remove(position);
        self.index.remove(&text);
        Ok(text)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text)
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.items.get(position).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

/// Snippet list bound to its file; every mutation is written through.
#[derive(Debug)]
pub struct ClipboardStore {
    path: PathBuf,
    snippets: SnippetSet,
    // Set when the file exists but could not be read or backed up
    locked: bool,
}

impl ClipboardStore {
    /// Load the store from `path`. A missing file gives an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = persist::load_snippets(&path)?;
        let snippets = SnippetSet::from_items(items);
        info!("Loaded {} snippets from {:?}", snippets.len(), path);
        Ok(Self {
            path,
            snippets,
            locked: false,
        })
    }

    /// Empty store that has not touched disk yet
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snippets: SnippetSet::new(),
            locked: false,
        }
    }

    /// Empty store that refuses to write over the file at `path`.
    ///
    /// Used when that file exists but could neither be read nor copied
    /// aside. Relocating to another file lifts the lock.
    pub fn locked(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        warn!("Snippet file {:?} is locked against writes", path);
        Self {
            path,
            snippets: SnippetSet::new(),
            locked: true,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Add `text`; false without mutation if it is already saved.
    ///
    /// Memory is rolled back when the write fails.
    pub fn add(&mut self, text: &str) -> Result<bool> {
        self.check_writable()?;
        if !self.snippets.insert(text) {
            debug!("Snippet already present, not adding");
            return Ok(false);
        }
        if let Err(e) = self.save() {
            let last = self.snippets.len() - 1;
            let _ = self.snippets.remove(last);
            return Err(e);
        }
        debug!("Added snippet #{}", self.snippets.len());
        Ok(true)
    }

    /// Delete the snippet at `position` and persist.
    ///
    /// The snippet is put back in place when the write fails.
    pub fn delete(&mut self, position: usize) -> Result<String> {
        self.check_writable()?;
        let removed = self.snippets.remove(position)?;
        if let Err(e) = self.save() {
            self.snippets.insert_at(position, &removed);
            return Err(e);
        }
        debug!("Deleted snippet at {}", position);
        Ok(removed)
    }

    /// Point the store at a new file and write the current list there.
    pub fn relocate(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        if self.locked && path == self.path {
            return Err(FloatballError::StoreLocked(path));
        }
        info!("Relocating snippets from {:?} to {:?}", self.path, path);
        persist::save_snippets(&path, self.snippets.as_slice())?;
        self.path = path;
        self.locked = false;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.check_writable()?;
        persist::save_snippets(&self.path, self.snippets.as_slice())
    }

    fn check_writable(&self) -> Result<()> {
        if self.locked {
            return Err(FloatballError::StoreLocked(self.path.clone()));
        }
        Ok(())
    }

    pub fn items(&self) -> &[String] {
        self.snippets.as_slice()
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.snippets.get(position)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.snippets.contains(text)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
