//! Note Repository
//!
//! Persists the whole note list as one JSON array under a single key.
//! Every mutation is load -> change -> save of the full list.

use serde::Deserialize;

use super::traits::KeyValueStore;
use crate::domain::Note;
use crate::error::StorageResult;
use crate::legacy::import_markup;

/// A stored list entry: the structured form, or a raw HTML string written by
/// older versions of the widget
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredNote {
    Structured(Note),
    Markup(String),
}

impl From<StoredNote> for Note {
    fn from(stored: StoredNote) -> Self {
        match stored {
            StoredNote::Structured(note) => note,
            StoredNote::Markup(markup) => Note::from(import_markup(&markup)),
        }
    }
}

pub struct NoteRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> NoteRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read and decode the list, surfacing any failure
    pub fn try_load(&self) -> StorageResult<Vec<Note>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let stored: Vec<StoredNote> = serde_json::from_str(&raw)?;
        Ok(stored.into_iter().map(Note::from).collect())
    }

    /// Load the list; a missing or unreadable value yields an empty list
    pub fn load(&self) -> Vec<Note> {
        self.try_load().unwrap_or_else(|e| {
            log::error!("Error loading notes from '{}': {}", self.key, e);
            Vec::new()
        })
    }

    /// Encode and write the full list
    pub fn try_save(&self, notes: &[Note]) -> StorageResult<()> {
        let json = serde_json::to_string(notes)?;
        self.store.set(&self.key, &json)
    }

    /// Best-effort save; failures are logged only
    pub fn save(&self, notes: &[Note]) {
        if let Err(e) = self.try_save(notes) {
            log::error!("Error saving notes to '{}': {}", self.key, e);
        }
    }

    /// Insert a note at the front of the list. Returns the new length.
    pub fn add(&self, note: Note) -> usize {
        let mut notes = self.load();
        notes.insert(0, note);
        self.save(&notes);
        notes.len()
    }

    /// Remove the note at `index`; out-of-range indices change nothing
    pub fn delete(&self, index: usize) -> Option<Note> {
        let mut notes = self.load();
        if index >= notes.len() {
            log::debug!("Ignoring delete of index {} (list has {})", index, notes.len());
            return None;
        }
        let removed = notes.remove(index);
        self.save(&notes);
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
