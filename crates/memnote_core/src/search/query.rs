//! Case-insensitive substring matching over note title and content.
//!
//! # Invariants
//! - Blank queries never compile; callers treat them as "no results".
//! - Query text is matched literally; regex metacharacters are escaped.
//! - Any non-blank query yields a matcher. Long queries, or queries the regex
//!   engine refuses, use a lowercase substring comparison instead.

use crate::model::note::Note;
use log::debug;
use regex::{Regex, RegexBuilder};

/// Queries longer than this skip regex compilation entirely.
const REGEX_QUERY_MAX_CHARS: usize = 1024;

#[derive(Debug, Clone)]
enum Matcher {
    Pattern(Regex),
    /// Lowercased query, compared against lowercased text.
    Folded(String),
}

/// Compiled search query.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    matcher: Matcher,
}

impl SearchQuery {
    /// Compiles `raw` after trimming it.
    ///
    /// Returns `None` only for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let query_chars = trimmed.chars().count();
        if query_chars > REGEX_QUERY_MAX_CHARS {
            return Some(Self::folded(trimmed));
        }

        match RegexBuilder::new(&regex::escape(trimmed))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(Self {
                matcher: Matcher::Pattern(pattern),
            }),
            Err(err) => {
                debug!(
                    "event=search_query_fallback module=search status=ok query_chars={} error={}",
                    query_chars, err
                );
                Some(Self::folded(trimmed))
            }
        }
    }

    /// Whether the query occurs in the note title or content.
    pub fn matches(&self, note: &Note) -> bool {
        self.matches_text(&note.title) || self.matches_text(&note.content)
    }

    fn folded(trimmed: &str) -> Self {
        Self {
            matcher: Matcher::Folded(trimmed.to_lowercase()),
        }
    }

    fn matches_text(&self, text: &str) -> bool {
        match &self.matcher {
            Matcher::Pattern(pattern) => pattern.is_match(text),
            Matcher::Folded(needle) => text.to_lowercase().contains(needle.as_str()),
        }
    }
}
