//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by the note list screen.
//! - Own text normalization and list-card preview derivation.
//!
//! # Invariants
//! - `id` is generated once and never changes for the note lifetime.
//! - `text` is trimmed, non-empty and at most `max_chars` characters long.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const PREVIEW_ELLIPSIS: &str = "...";

/// Stable identifier for one note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Text validation failures for note input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTextError {
    /// Input is empty or whitespace-only after trimming.
    Empty,
}

impl Display for NoteTextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "note text must not be blank"),
        }
    }
}

impl Error for NoteTextError {}

/// One user-entered list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable ID used by the UI as list key.
    pub id: NoteId,
    /// Normalized note text.
    pub text: String,
    /// Completion flag.
    pub done: bool,
    /// Pinned notes sort ahead of unpinned ones in display order.
    pub pinned: bool,
}

impl Note {
    /// Creates a note with a fresh ID and default flags.
    ///
    /// `text` is stored as given; callers go through
    /// [`normalize_note_text`] first.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a note with a caller-provided ID.
    pub fn with_id(id: NoteId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
            pinned: false,
        }
    }

    /// Character count used by list statistics.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Case-insensitive substring match. `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle)
    }
}

/// Trims and caps raw input text.
///
/// Input longer than `max_chars` is cut to the first `max_chars` characters,
/// matching an input control with `maxLength`.
///
/// # Errors
/// - Returns [`NoteTextError::Empty`] when nothing is left after trimming.
pub fn normalize_note_text(raw: &str, max_chars: usize) -> Result<String, NoteTextError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NoteTextError::Empty);
    }

    if trimmed.chars().count() <= max_chars {
        return Ok(trimmed.to_string());
    }

    let capped = trimmed.chars().take(max_chars).collect::<String>();
    let capped = capped.trim_end();
    if capped.is_empty() {
        return Err(NoteTextError::Empty);
    }
    Ok(capped.to_string())
}

/// Derives the single-line card preview for a note.
///
/// Rules:
/// - whitespace runs (newlines included) collapse to one space;
/// - the first `max_chars` characters are kept, `...` marks truncation.
pub fn derive_preview(text: &str, max_chars: usize) -> String {
    let collapsed = WHITESPACE_RE.replace_all(text.trim(), " ");
    if collapsed.chars().count() <= max_chars {
        return collapsed.into_owned();
    }

    let mut preview = collapsed
        .chars()
        .take(max_chars)
        .collect::<String>()
        .trim_end()
        .to_string();
    preview.push_str(PREVIEW_ELLIPSIS);
    preview
}

#[cfg(test)]
mod tests {
    use super::{derive_preview, normalize_note_text, Note, NoteTextError};

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(
            normalize_note_text("  Buy milk \n", 180).expect("text should normalize"),
            "Buy milk"
        );
    }

    #[test]
    fn normalize_rejects_blank_input() {
        assert_eq!(normalize_note_text("", 180), Err(NoteTextError::Empty));
        assert_eq!(normalize_note_text(" \t\n ", 180), Err(NoteTextError::Empty));
    }

    #[test]
    fn normalize_caps_by_characters_not_bytes() {
        let raw = "é".repeat(200);
        let normalized = normalize_note_text(&raw, 180).expect("text should normalize");
        assert_eq!(normalized.chars().count(), 180);
    }

    #[test]
    fn normalize_drops_trailing_space_left_by_cap() {
        let normalized = normalize_note_text("abc def", 4).expect("text should normalize");
        assert_eq!(normalized, "abc");
    }

    #[test]
    fn preview_collapses_newlines_and_truncates() {
        let preview = derive_preview("line one\n\nline   two and more", 12);
        assert_eq!(preview, "line one lin...");
        assert_eq!(derive_preview("short", 12), "short");
    }

    #[test]
    fn new_note_starts_open_and_unpinned() {
        let note = Note::new("hello");
        assert!(!note.id.is_nil());
        assert!(!note.done);
        assert!(!note.pinned);
        assert_eq!(note.char_count(), 5);
    }
}
