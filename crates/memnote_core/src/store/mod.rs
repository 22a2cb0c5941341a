//! Note store and its collaborators.
//!
//! # Responsibility
//! - Own the note collection and every note's identity.
//! - Report validation/not-found failures as values, never panics.
//!
//! # Invariants
//! - Callers only ever receive copies of stored notes.
//! - Ids are unique for the lifetime of a store.

pub mod clock;
pub mod notes_store;
pub mod shared;
