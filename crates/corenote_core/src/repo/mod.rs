//! Repository layer for note storage.
//!
//! # Responsibility
//! - Define the storage contract used by the note store service.
//! - Keep collection layout details away from use-case logic.
//!
//! # Invariants
//! - Repositories store already-normalized notes; validation happens above.

pub mod note_repo;
