//! Thread-safe handle over one `NotesStore`.
//!
//! # Invariants
//! - Every operation runs under the single store mutex, so writers are
//!   serialized and readers never observe a half-applied update.
//! - A poisoned lock is recovered; store operations cannot leave the
//!   collection half-mutated because they validate before writing.

use crate::config::StoreConfig;
use crate::model::note::{Note, NoteId, NoteUpdate};
use crate::store::clock::{Clock, SystemClock};
use crate::store::notes_store::{NotesStore, StoreResult};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, shareable store handle for multi-threaded hosts.
pub struct SharedNotesStore<C: Clock = SystemClock> {
    inner: Arc<Mutex<NotesStore<C>>>,
}

impl<C: Clock> Clone for SharedNotesStore<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedNotesStore<SystemClock> {
    pub fn new() -> Self {
        Self::from_store(NotesStore::new())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::from_store(NotesStore::with_config(config))
    }
}

impl Default for SharedNotesStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SharedNotesStore<C> {
    pub fn from_store(store: NotesStore<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn add_note(&self, content: &str, title: Option<&str>) -> StoreResult<Note> {
        self.lock().add_note(content, title)
    }

    pub fn all_notes(&self) -> Vec<Note> {
        self.lock().all_notes()
    }

    pub fn get_note(&self, id: NoteId) -> Option<Note> {
        self.lock().get_note(id)
    }

    pub fn update_note(&self, id: NoteId, update: NoteUpdate) -> StoreResult<Note> {
        self.lock().update_note(id, update)
    }

    pub fn delete_note(&self, id: NoteId) -> StoreResult<String> {
        self.lock().delete_note(id)
    }

    pub fn search_notes(&self, query: &str) -> Vec<Note> {
        self.lock().search_notes(query)
    }

    pub fn notes_ordered_by_date(&self) -> Vec<Note> {
        self.lock().notes_ordered_by_date()
    }

    pub fn favorite_notes(&self) -> Vec<Note> {
        self.lock().favorite_notes()
    }

    pub fn count(&self) -> usize {
        self.lock().count()
    }

    fn lock(&self) -> MutexGuard<'_, NotesStore<C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
