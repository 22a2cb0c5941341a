//! Core domain logic for MemNote.
//! This crate is the single source of truth for note invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;

pub use config::{IdStrategy, LoggingConfig, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::derive::{
    derive_excerpt, derive_excerpt_with_limit, derive_title, derive_title_with_limit,
    DEFAULT_EXCERPT_MAX_CHARS, DEFAULT_TITLE_MAX_CHARS, ELLIPSIS, UNTITLED,
};
pub use model::note::{Note, NoteId, NoteUpdate};
pub use search::query::SearchQuery;
pub use store::clock::{Clock, SystemClock};
pub use store::notes_store::{NotesStore, StoreError, StoreErrorKind, StoreResult};
pub use store::shared::SharedNotesStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
