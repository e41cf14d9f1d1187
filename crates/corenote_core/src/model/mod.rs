//! Domain model for the note list screen.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep text validation next to the record it guards.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard remove; there are no tombstones in memory.

pub mod counter;
pub mod note;
