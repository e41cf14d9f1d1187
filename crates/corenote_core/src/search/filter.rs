//! In-memory note search and display ordering.
//!
//! # Responsibility
//! - Filter notes by case-insensitive substring.
//! - Promote pinned notes to the front of the visible list.
//!
//! # Invariants
//! - Filtering never reorders; it keeps the collection's newest-first order.
//! - The pinned sort is stable, so insertion order survives inside each group.
//! - A blank query matches every note.

use crate::model::note::Note;

/// Parsed search input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    needle: Option<String>,
}

impl NoteQuery {
    /// Builds a query from raw search-box text.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let needle = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
        Self { needle }
    }

    /// Whether this query matches everything.
    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }

    /// Returns whether `note` passes this query.
    pub fn matches(&self, note: &Note) -> bool {
        match self.needle.as_deref() {
            Some(needle) => note.matches_lowercase(needle),
            None => true,
        }
    }
}

/// Filters `notes` by `query` and returns the display ordering.
pub fn search_notes(notes: &[Note], query: &NoteQuery) -> Vec<Note> {
    let mut visible = notes
        .iter()
        .filter(|note| query.matches(note))
        .cloned()
        .collect::<Vec<_>>();
    sort_pinned_first(&mut visible);
    visible
}

/// Stable-sorts pinned notes ahead of unpinned notes.
pub fn sort_pinned_first(notes: &mut [Note]) {
    notes.sort_by_key(|note| !note.pinned);
}

#[cfg(test)]
mod tests {
    use super::{search_notes, sort_pinned_first, NoteQuery};
    use crate::model::note::Note;

    fn texts(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|note| note.text.as_str()).collect()
    }

    #[test]
    fn blank_query_is_detected() {
        assert!(NoteQuery::new("   ").is_blank());
        assert!(!NoteQuery::new(" milk ").is_blank());
    }

    #[test]
    fn query_trims_and_ignores_case() {
        let note = Note::new("Hello World");
        assert!(NoteQuery::new("  HELLO ").matches(&note));
        assert!(NoteQuery::new("o w").matches(&note));
        assert!(!NoteQuery::new("bye").matches(&note));
    }

    #[test]
    fn pinned_sort_is_stable() {
        let mut notes = vec![Note::new("c"), Note::new("b"), Note::new("a")];
        notes[2].pinned = true;
        notes[0].pinned = true;
        sort_pinned_first(&mut notes);
        assert_eq!(texts(&notes), vec!["c", "a", "b"]);
    }

    #[test]
    fn search_filters_then_promotes_pinned() {
        let mut notes = vec![
            Note::new("tea later"),
            Note::new("call mom"),
            Note::new("Tea now"),
        ];
        notes[2].pinned = true;
        let visible = search_notes(&notes, &NoteQuery::new("tea"));
        assert_eq!(texts(&visible), vec!["Tea now", "tea later"]);
    }
}
