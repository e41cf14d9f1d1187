//! Flutter-facing bridge crate for CoreNote.

pub mod api;
mod session;
