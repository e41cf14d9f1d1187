//! Core domain logic for CoreNote.
//! This crate is the single source of truth for note list invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{ConfigError, NoteStoreConfig, DEFAULT_MAX_TEXT_CHARS, DEFAULT_PREVIEW_CHARS};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::counter::Counter;
pub use model::note::{derive_preview, normalize_note_text, Note, NoteId, NoteTextError};
pub use repo::note_repo::{MemoryNoteRepository, NoteRepository};
pub use search::filter::{search_notes, sort_pinned_first, NoteQuery};
pub use service::note_store::{NoteStats, NoteStore, NoteStoreError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
