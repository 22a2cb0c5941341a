//! Note domain model.
//!
//! # Responsibility
//! - Define the note record handed out by the store.
//! - Derive title/excerpt projections from raw content.
//!
//! # Invariants
//! - Derived fields are pure functions of `content` unless explicitly
//!   overridden by the caller.
//! - Notes are only constructed inside this crate.

pub mod derive;
pub mod note;
