//! Per-process screen session behind the FFI surface.
//!
//! # Responsibility
//! - Own the `NoteStore` and counter for the lifetime of the host screen.
//! - Track UI-only state the core does not know about: the note under edit
//!   and the current search text.
//!
//! # Invariants
//! - `editing` always names a note that exists in the store.
//! - Deleting the edited note, or clearing all notes, closes the edit session.

use corenote_core::{
    Counter, Note, NoteId, NoteStore, NoteStoreConfig, NoteStoreError, DEFAULT_MAX_TEXT_CHARS,
};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard, OnceLock};

const MAX_TEXT_CHARS_ENV: &str = "CORENOTE_MAX_TEXT_CHARS";

static SESSION: OnceLock<Mutex<ScreenSession>> = OnceLock::new();

/// Edit-session failures on top of store rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `save_edit` was called with no note open.
    NoActiveEdit,
    Store(NoteStoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActiveEdit => write!(f, "no note is being edited"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::NoActiveEdit => None,
        }
    }
}

impl From<NoteStoreError> for SessionError {
    fn from(value: NoteStoreError) -> Self {
        Self::Store(value)
    }
}

/// UI-owned state for one note list screen.
#[derive(Default)]
pub struct ScreenSession {
    store: NoteStore,
    counter: Counter,
    editing: Option<NoteId>,
    search_text: String,
}

impl ScreenSession {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut NoteStore {
        &mut self.store
    }

    pub fn counter_mut(&mut self) -> &mut Counter {
        &mut self.counter
    }

    pub fn counter(&self) -> Counter {
        self.counter
    }

    pub fn editing(&self) -> Option<NoteId> {
        self.editing
    }

    /// Opens the edit session for `id`.
    pub fn begin_edit(&mut self, id: NoteId) -> Result<Note, SessionError> {
        let note = self
            .store
            .get(id)
            .cloned()
            .ok_or(NoteStoreError::NoteNotFound(id))?;
        self.editing = Some(id);
        Ok(note)
    }

    /// Saves the open edit. Blank text keeps the session open.
    pub fn save_edit(&mut self, raw_text: &str) -> Result<Note, SessionError> {
        let id = self.editing.ok_or(SessionError::NoActiveEdit)?;
        let note = self.store.edit(id, raw_text)?;
        self.editing = None;
        Ok(note)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Deletes one note and closes the edit session if it pointed at it.
    pub fn delete(&mut self, id: NoteId) -> Option<Note> {
        let removed = self.store.delete(id);
        if removed.is_some() && self.editing == Some(id) {
            self.editing = None;
        }
        removed
    }

    pub fn clear_all(&mut self) -> usize {
        self.editing = None;
        self.store.clear_all()
    }

    /// Stores `text` as the active search and returns the matching view.
    pub fn search(&mut self, text: &str) -> Vec<Note> {
        self.search_text = text.trim().to_string();
        self.visible_notes()
    }

    /// Display list under the active search text.
    pub fn visible_notes(&self) -> Vec<Note> {
        self.store.search(&self.search_text)
    }
}

/// Locks the process-wide session, creating it on first use.
///
/// A poisoned lock is recovered: the session is plain data and every
/// mutation leaves it consistent before returning.
pub fn lock_session() -> MutexGuard<'static, ScreenSession> {
    let session = SESSION.get_or_init(|| Mutex::new(ScreenSession::new(build_store())));
    session
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn build_store() -> NoteStore {
    let max_text_chars = max_text_chars_from_env(std::env::var(MAX_TEXT_CHARS_ENV).ok());
    let config = NoteStoreConfig::default().with_max_text_chars(max_text_chars);

    match NoteStore::with_config(config) {
        Ok(store) => {
            info!("event=session_init module=ffi status=ok max_text_chars={max_text_chars}");
            store
        }
        Err(err) => {
            warn!("event=session_init module=ffi status=fallback error={err}");
            NoteStore::new()
        }
    }
}

/// Resolves the text cap from the raw env value.
///
/// Missing, unparsable or zero values fall back to the default cap.
fn max_text_chars_from_env(raw: Option<String>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_MAX_TEXT_CHARS)
}
