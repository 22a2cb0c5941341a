//! Title/excerpt projections derived from note content.
//!
//! # Invariants
//! - Every function here is pure and deterministic.
//! - Lengths are counted in Unicode scalar values, never bytes, so
//!   truncation cannot split a multi-byte character.

/// Title returned when content has no usable first line.
pub const UNTITLED: &str = "Untitled";
/// Marker appended to truncated projections.
pub const ELLIPSIS: &str = "...";
/// Maximum first-line characters kept in a derived title.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 50;
/// Maximum characters kept in a derived excerpt.
pub const DEFAULT_EXCERPT_MAX_CHARS: usize = 100;

/// Derives a title from the first line of `content`.
///
/// Rules:
/// - blank content, or a blank first line, yields [`UNTITLED`].
/// - a first line longer than 50 characters is cut to 50 and suffixed with
///   [`ELLIPSIS`].
/// - the result is trimmed.
pub fn derive_title(content: &str) -> String {
    derive_title_with_limit(content, DEFAULT_TITLE_MAX_CHARS)
}

/// Same as [`derive_title`] with a caller-provided character limit.
pub fn derive_title_with_limit(content: &str, max_chars: usize) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return UNTITLED.to_string();
    }

    let first_line = trimmed
        .split_once('\n')
        .map_or(trimmed, |(first, _)| first);
    if first_line.trim().is_empty() {
        return UNTITLED.to_string();
    }

    match truncate_with_ellipsis(first_line, max_chars) {
        Some(truncated) => truncated.trim().to_string(),
        None => first_line.trim().to_string(),
    }
}

/// Derives a short excerpt from `content` using the default 100-char limit.
pub fn derive_excerpt(content: &str) -> String {
    derive_excerpt_with_limit(content, DEFAULT_EXCERPT_MAX_CHARS)
}

/// Derives an excerpt: trimmed content, cut to `max_chars` plus
/// [`ELLIPSIS`] when longer. Empty content yields an empty excerpt.
pub fn derive_excerpt_with_limit(content: &str, max_chars: usize) -> String {
    if content.is_empty() {
        return String::new();
    }

    let trimmed = content.trim();
    truncate_with_ellipsis(trimmed, max_chars).unwrap_or_else(|| trimmed.to_string())
}

/// Returns `Some(prefix + ELLIPSIS)` when `value` exceeds `max_chars`.
fn truncate_with_ellipsis(value: &str, max_chars: usize) -> Option<String> {
    // Byte offset of the first char past the limit; absent when it fits.
    let (cut, _) = value.char_indices().nth(max_chars)?;
    let mut truncated = String::with_capacity(cut + ELLIPSIS.len());
    truncated.push_str(&value[..cut]);
    truncated.push_str(ELLIPSIS);
    Some(truncated)
}
