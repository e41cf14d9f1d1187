//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered note collection for the lifetime of one screen.
//! - Keep positional details (head insertion, in-place replace) out of the
//!   store service.
//!
//! # Invariants
//! - Collection order is newest-created first.
//! - `replace` never moves a note or changes its `id`.
//! - IDs are unique within the collection.

use crate::model::note::{Note, NoteId};

/// Repository interface for note list storage.
pub trait NoteRepository {
    /// Inserts one note at the head of the collection.
    fn insert_front(&mut self, note: Note);
    /// Gets one note by id.
    fn get(&self, id: NoteId) -> Option<&Note>;
    /// Applies `f` to the matching note in place and returns the updated copy.
    ///
    /// Returns `None` when the id is absent; `f` is not called then.
    fn update<F>(&mut self, id: NoteId, f: F) -> Option<Note>
    where
        F: FnOnce(&mut Note);
    /// Removes the matching note and returns it.
    fn remove(&mut self, id: NoteId) -> Option<Note>;
    /// Removes every note, returning how many were dropped.
    fn clear(&mut self) -> usize;
    /// Full collection, newest first.
    fn all(&self) -> &[Note];
}

/// `Vec`-backed repository; index 0 is the newest note.
#[derive(Debug, Default, Clone)]
pub struct MemoryNoteRepository {
    notes: Vec<Note>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

impl NoteRepository for MemoryNoteRepository {
    fn insert_front(&mut self, note: Note) {
        debug_assert!(self.position(note.id).is_none(), "duplicate note id");
        self.notes.insert(0, note);
    }

    fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    fn update<F>(&mut self, id: NoteId, f: F) -> Option<Note>
    where
        F: FnOnce(&mut Note),
    {
        let note = self.notes.iter_mut().find(|note| note.id == id)?;
        f(note);
        Some(note.clone())
    }

    fn remove(&mut self, id: NoteId) -> Option<Note> {
        let index = self.position(id)?;
        Some(self.notes.remove(index))
    }

    fn clear(&mut self) -> usize {
        let removed = self.notes.len();
        self.notes.clear();
        removed
    }

    fn all(&self) -> &[Note] {
        &self.notes
    }
}
