//! In-memory note store.
//!
//! # Responsibility
//! - Own the ordered note collection (insertion order).
//! - Validate input and assign ids/timestamps on create.
//! - Re-derive title/excerpt whenever content changes.
//!
//! # Invariants
//! - Stored content is never blank.
//! - Ids are unique and strictly increasing per store.
//! - Every read returns cloned notes; the collection is never exposed.
//! - Failed operations leave the collection untouched.

use crate::config::StoreConfig;
use crate::model::note::{non_empty, Note, NoteId, NoteUpdate};
use crate::search::query::SearchQuery;
use crate::store::clock::{Clock, IdGenerator, SystemClock};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Expected failure of a store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Content is empty or whitespace-only.
    EmptyContent,
    /// Id can never refer to a stored note.
    InvalidId(NoteId),
    /// No stored note has this id.
    NotFound(NoteId),
}

/// Coarse error category for callers that only branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Validation,
    NotFound,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::EmptyContent | Self::InvalidId(_) => StoreErrorKind::Validation,
            Self::NotFound(_) => StoreErrorKind::NotFound,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content cannot be empty"),
            Self::InvalidId(id) => write!(f, "invalid note id: {id}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Owner of all notes in the process.
pub struct NotesStore<C: Clock = SystemClock> {
    notes: Vec<Note>,
    ids: IdGenerator,
    config: StoreConfig,
    clock: C,
}

impl NotesStore<SystemClock> {
    /// Creates an empty store with default config and wall-clock time.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for NotesStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NotesStore<C> {
    /// Creates an empty store reading time from `clock`.
    pub fn with_clock(config: StoreConfig, clock: C) -> Self {
        debug!(
            "event=store_init module=store status=ok id_strategy={:?} title_max_chars={} excerpt_max_chars={}",
            config.id_strategy, config.title_max_chars, config.excerpt_max_chars
        );
        Self {
            notes: Vec::new(),
            ids: IdGenerator::new(config.id_strategy),
            config,
            clock,
        }
    }

    /// Adds a note, deriving its title unless a non-empty one is supplied.
    ///
    /// # Errors
    /// - `EmptyContent` when `content` is blank.
    pub fn add_note(&mut self, content: &str, title: Option<&str>) -> StoreResult<Note> {
        if content.trim().is_empty() {
            info!("event=note_add module=store status=rejected reason=empty_content");
            return Err(StoreError::EmptyContent);
        }

        let now = self.clock.now_ms();
        let id = self.ids.next_id(now);
        let note = Note::compose(id, content.to_string(), title, now, &self.config);
        self.notes.push(note.clone());

        debug!(
            "event=note_add module=store status=ok id={} content_chars={} count={}",
            id,
            content.chars().count(),
            self.notes.len()
        );
        Ok(note)
    }

    /// Returns copies of every note in insertion order.
    pub fn all_notes(&self) -> Vec<Note> {
        self.notes.to_vec()
    }

    /// Returns a copy of the note with `id`, if any.
    pub fn get_note(&self, id: NoteId) -> Option<Note> {
        self.notes.iter().find(|note| note.id == id).cloned()
    }

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// New content regenerates title and excerpt; a non-empty `title` in the
    /// same request is applied afterwards and wins. `updated_at` is refreshed
    /// even when no field value changes.
    ///
    /// # Errors
    /// - `InvalidId` for non-positive ids.
    /// - `NotFound` when no note has `id`.
    /// - `EmptyContent` when `update.content` is blank; nothing is modified.
    pub fn update_note(&mut self, id: NoteId, update: NoteUpdate) -> StoreResult<Note> {
        let index = self.position_of(id, "note_update")?;
        if update
            .content
            .as_deref()
            .is_some_and(|content| content.trim().is_empty())
        {
            info!(
                "event=note_update module=store status=rejected reason=empty_content id={}",
                id
            );
            return Err(StoreError::EmptyContent);
        }

        let now = self.clock.now_ms();
        let NoteUpdate {
            content,
            title,
            favorite,
        } = update;
        let content_changed = content.is_some();
        let note = &mut self.notes[index];

        if let Some(content) = content {
            note.replace_content(content, &self.config);
        }
        if let Some(title) = non_empty(title.as_deref()) {
            note.title = title.to_string();
        }
        if let Some(favorite) = favorite {
            note.favorite = favorite;
        }
        note.touch(now);

        debug!(
            "event=note_update module=store status=ok id={} content_changed={} favorite={}",
            id, content_changed, note.favorite
        );
        Ok(note.clone())
    }

    /// Removes the note with `id` and returns a confirmation message.
    ///
    /// # Errors
    /// - `InvalidId` for non-positive ids.
    /// - `NotFound` when no note has `id`.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<String> {
        let index = self.position_of(id, "note_delete")?;
        self.notes.remove(index);

        debug!(
            "event=note_delete module=store status=ok id={} count={}",
            id,
            self.notes.len()
        );
        Ok(format!("note {id} deleted"))
    }

    /// Case-insensitive substring search over title and content.
    ///
    /// Blank queries return no notes. Results keep store order.
    pub fn search_notes(&self, query: &str) -> Vec<Note> {
        let Some(query) = SearchQuery::parse(query) else {
            return Vec::new();
        };

        let hits: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| query.matches(note))
            .cloned()
            .collect();
        debug!(
            "event=note_search module=store status=ok hits={} scanned={}",
            hits.len(),
            self.notes.len()
        );
        hits
    }

    /// Returns copies sorted by `updated_at` descending.
    ///
    /// Ties keep insertion order.
    pub fn notes_ordered_by_date(&self) -> Vec<Note> {
        let mut ordered = self.notes.to_vec();
        ordered.sort_by(|left, right| right.updated_at.cmp(&left.updated_at));
        ordered
    }

    /// Returns copies of favorite notes in store order.
    pub fn favorite_notes(&self) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| note.favorite)
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn position_of(&self, id: NoteId, event: &str) -> StoreResult<usize> {
        if !id.is_valid() {
            info!(
                "event={} module=store status=rejected reason=invalid_id id={}",
                event, id
            );
            return Err(StoreError::InvalidId(id));
        }

        self.notes
            .iter()
            .position(|note| note.id == id)
            .ok_or_else(|| {
                info!(
                    "event={} module=store status=rejected reason=not_found id={}",
                    event, id
                );
                StoreError::NotFound(id)
            })
    }
}
