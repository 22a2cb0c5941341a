//! In-memory note search.
//!
//! # Responsibility
//! - Compile user query text into a reusable matcher.
//! - Keep matching rules (fields, case folding) in one place.

pub mod query;
