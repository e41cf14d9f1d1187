//! Note list use-case service.
//!
//! # Responsibility
//! - Be the only mutation path for the note collection.
//! - Validate input text before it reaches the repository.
//! - Derive search results and list statistics.
//!
//! # Invariants
//! - Rejected calls (`EmptyText`, `NoteNotFound`) leave state untouched.
//! - `edit`/`toggle_*` preserve `id` and list position.
//! - `stats` always covers the full collection, never a filtered view.
//! - Log events carry metadata only, never note text.

use crate::config::{ConfigError, NoteStoreConfig};
use crate::model::note::{derive_preview, normalize_note_text, Note, NoteId, NoteTextError};
use crate::repo::note_repo::{MemoryNoteRepository, NoteRepository};
use crate::search::filter::{search_notes, NoteQuery};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection reasons reported by [`NoteStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteStoreError {
    /// Text is blank after trimming.
    EmptyText,
    /// Target note does not exist.
    NoteNotFound(NoteId),
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "note text must not be blank"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for NoteStoreError {}

impl From<NoteTextError> for NoteStoreError {
    fn from(value: NoteTextError) -> Self {
        match value {
            NoteTextError::Empty => Self::EmptyText,
        }
    }
}

/// Aggregate numbers shown under the input box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteStats {
    /// Number of notes in the collection.
    pub count: usize,
    /// Sum of note text lengths in characters.
    pub total_chars: usize,
    /// Notes with `done == true`.
    pub completed_count: usize,
    /// Notes with `pinned == true`.
    pub pinned_count: usize,
}

/// Note list facade over repository implementations.
pub struct NoteStore<R: NoteRepository = MemoryNoteRepository> {
    repo: R,
    config: NoteStoreConfig,
}

impl NoteStore<MemoryNoteRepository> {
    /// Creates an empty in-memory store with default limits.
    pub fn new() -> Self {
        Self {
            repo: MemoryNoteRepository::new(),
            config: NoteStoreConfig::default(),
        }
    }

    /// Creates an empty in-memory store with custom limits.
    ///
    /// # Errors
    /// - Returns [`ConfigError`] when `config` fails validation.
    pub fn with_config(config: NoteStoreConfig) -> Result<Self, ConfigError> {
        Self::with_repo(MemoryNoteRepository::new(), config)
    }
}

impl Default for NoteStore<MemoryNoteRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: NoteRepository> NoteStore<R> {
    /// Creates a store using the provided repository implementation.
    ///
    /// # Errors
    /// - Returns [`ConfigError`] when `config` fails validation.
    pub fn with_repo(repo: R, config: NoteStoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { repo, config })
    }

    /// Active limits.
    pub fn config(&self) -> &NoteStoreConfig {
        &self.config
    }

    /// Creates one note at the head of the list.
    ///
    /// # Errors
    /// - [`NoteStoreError::EmptyText`] when `raw_text` is blank.
    pub fn add(&mut self, raw_text: &str) -> Result<Note, NoteStoreError> {
        let text = match normalize_note_text(raw_text, self.config.max_text_chars) {
            Ok(text) => text,
            Err(err) => {
                debug!("event=note_add module=store status=rejected reason=empty_text");
                return Err(err.into());
            }
        };

        let note = Note::new(text);
        self.repo.insert_front(note.clone());
        info!(
            "event=note_add module=store status=ok note_id={} chars={} count={}",
            note.id,
            note.char_count(),
            self.len()
        );
        Ok(note)
    }

    /// Replaces the text of one note, keeping its flags and position.
    ///
    /// # Errors
    /// - [`NoteStoreError::EmptyText`] when `raw_text` is blank.
    /// - [`NoteStoreError::NoteNotFound`] when `id` is absent.
    pub fn edit(&mut self, id: NoteId, raw_text: &str) -> Result<Note, NoteStoreError> {
        let text = match normalize_note_text(raw_text, self.config.max_text_chars) {
            Ok(text) => text,
            Err(err) => {
                debug!(
                    "event=note_edit module=store status=rejected reason=empty_text note_id={id}"
                );
                return Err(err.into());
            }
        };

        let updated = self.repo.update(id, |note| note.text = text);
        self.finish_update("note_edit", id, updated)
    }

    /// Flips the completion flag of one note.
    ///
    /// # Errors
    /// - [`NoteStoreError::NoteNotFound`] when `id` is absent.
    pub fn toggle_done(&mut self, id: NoteId) -> Result<Note, NoteStoreError> {
        let updated = self.repo.update(id, |note| note.done = !note.done);
        self.finish_update("note_toggle_done", id, updated)
    }

    /// Flips the pinned flag of one note.
    ///
    /// # Errors
    /// - [`NoteStoreError::NoteNotFound`] when `id` is absent.
    pub fn toggle_pinned(&mut self, id: NoteId) -> Result<Note, NoteStoreError> {
        let updated = self.repo.update(id, |note| note.pinned = !note.pinned);
        self.finish_update("note_toggle_pinned", id, updated)
    }

    /// Removes one note. Absent ids are a no-op and return `None`.
    ///
    /// Callers holding an edit session for `id` must close it themselves.
    pub fn delete(&mut self, id: NoteId) -> Option<Note> {
        let removed = self.repo.remove(id);
        match removed {
            Some(_) => info!(
                "event=note_delete module=store status=ok note_id={id} count={}",
                self.len()
            ),
            None => debug!("event=note_delete module=store status=noop note_id={id}"),
        }
        removed
    }

    /// Removes every note and returns how many were dropped.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.repo.clear();
        info!("event=notes_clear module=store status=ok removed={removed}");
        removed
    }

    /// Case-insensitive substring search in display order (pinned first).
    ///
    /// A blank query returns the whole collection.
    pub fn search(&self, query: &str) -> Vec<Note> {
        let query = NoteQuery::new(query);
        let hits = search_notes(self.repo.all(), &query);
        debug!(
            "event=notes_search module=store status=ok blank={} hits={}",
            query.is_blank(),
            hits.len()
        );
        hits
    }

    /// Unfiltered display order.
    pub fn display_notes(&self) -> Vec<Note> {
        self.search("")
    }

    /// Collection statistics, independent of any search filter.
    pub fn stats(&self) -> NoteStats {
        self.repo
            .all()
            .iter()
            .fold(NoteStats::default(), |mut stats, note| {
                stats.count += 1;
                stats.total_chars += note.char_count();
                stats.completed_count += usize::from(note.done);
                stats.pinned_count += usize::from(note.pinned);
                stats
            })
    }

    /// Card preview for one note using configured length.
    pub fn preview(&self, note: &Note) -> String {
        derive_preview(&note.text, self.config.preview_chars)
    }

    /// Raw collection, newest first.
    pub fn notes(&self) -> &[Note] {
        self.repo.all()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.repo.get(id)
    }

    pub fn len(&self) -> usize {
        self.repo.all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.all().is_empty()
    }

    fn finish_update(
        &self,
        event: &'static str,
        id: NoteId,
        updated: Option<Note>,
    ) -> Result<Note, NoteStoreError> {
        match updated {
            Some(note) => {
                info!(
                    "event={event} module=store status=ok note_id={id} done={} pinned={}",
                    note.done, note.pinned
                );
                Ok(note)
            }
            None => {
                debug!("event={event} module=store status=rejected reason=not_found note_id={id}");
                Err(NoteStoreError::NoteNotFound(id))
            }
        }
    }
}
