//! Note record and update request model.
//!
//! # Responsibility
//! - Define the canonical note shape returned by the store.
//! - Keep derived fields consistent whenever content changes.
//!
//! # Invariants
//! - `content` is never blank for a stored note.
//! - `updated_at >= created_at`.
//! - `title`/`excerpt` are re-derived together with every content change.

use crate::config::StoreConfig;
use crate::model::derive::{derive_excerpt_with_limit, derive_title_with_limit};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Process-unique note identifier.
///
/// Positive values only; the store never assigns zero or negative ids, so a
/// non-positive id stands for "missing" at API boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wraps a raw id value without validation.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether this id could have been assigned by a store.
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored text record with derived title/excerpt metadata.
///
/// Values handed out by the store are independent copies; mutating one never
/// reaches store state. `#[non_exhaustive]` keeps construction inside this
/// crate so every note originates from `NotesStore::add_note`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Note {
    /// Sole lookup key.
    pub id: NoteId,
    /// Authoritative body, stored exactly as supplied.
    pub content: String,
    /// Derived from the first content line unless explicitly overridden.
    pub title: String,
    /// Trimmed content, truncated with an ellipsis marker when long.
    pub excerpt: String,
    /// Unix epoch milliseconds. Immutable after creation.
    pub created_at: i64,
    /// Unix epoch milliseconds. Refreshed on every successful update.
    pub updated_at: i64,
    pub favorite: bool,
}

impl Note {
    /// Builds a new note; callers must have validated `content` already.
    pub(crate) fn compose(
        id: NoteId,
        content: String,
        title: Option<&str>,
        now_ms: i64,
        config: &StoreConfig,
    ) -> Self {
        let title = match non_empty(title) {
            Some(explicit) => explicit.to_string(),
            None => derive_title_with_limit(&content, config.title_max_chars),
        };
        let excerpt = derive_excerpt_with_limit(&content, config.excerpt_max_chars);
        Self {
            id,
            content,
            title,
            excerpt,
            created_at: now_ms,
            updated_at: now_ms,
            favorite: false,
        }
    }

    /// Replaces content and regenerates both derived fields.
    pub(crate) fn replace_content(&mut self, content: String, config: &StoreConfig) {
        self.title = derive_title_with_limit(&content, config.title_max_chars);
        self.excerpt = derive_excerpt_with_limit(&content, config.excerpt_max_chars);
        self.content = content;
    }

    /// Refreshes `updated_at`, never moving it backwards.
    pub(crate) fn touch(&mut self, now_ms: i64) {
        self.updated_at = self.updated_at.max(now_ms);
    }
}

/// Partial update request for `NotesStore::update_note`.
///
/// Absent fields are left untouched. When both `content` and `title` are
/// set, the explicit title wins over the one derived from the new content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub content: Option<String>,
    pub title: Option<String>,
    pub favorite: Option<bool>,
}

impl NoteUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = Some(favorite);
        self
    }
}

/// Empty titles mean "derive one"; any other text, whitespace included, is
/// kept verbatim.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
