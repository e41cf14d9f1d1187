//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for UI integration: envelopes, not panics.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Note ids cross the boundary as UTF-8 UUID strings.
//! - List responses are already in display order (pinned first).

use crate::session::lock_session;
use corenote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Note, NoteId,
};
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One note as rendered by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Stable note ID in string form.
    pub id: String,
    pub text: String,
    /// Single-line card preview.
    pub preview: String,
    pub done: bool,
    pub pinned: bool,
}

/// Result envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the operation changed state.
    pub ok: bool,
    /// Affected note after the operation, when there is one.
    pub note: Option<NoteItem>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note: Option<NoteItem>) -> Self {
        Self {
            ok: true,
            note,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note: None,
            message: message.into(),
        }
    }
}

/// Display list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListResponse {
    /// Notes in display order.
    pub items: Vec<NoteItem>,
    pub message: String,
}

/// Stats line shown under the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteStatsResponse {
    pub count: u32,
    pub total_chars: u32,
    pub completed_count: u32,
    pub pinned_count: u32,
}

/// Adds one note from the draft input.
///
/// # FFI contract
/// - Blank input returns `ok=false`; the list is unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn note_add(text: String) -> NoteActionResponse {
    let mut session = lock_session();
    match session.store_mut().add(&text) {
        Ok(note) => {
            let item = to_note_item(&note, session.store().config().preview_chars);
            NoteActionResponse::success("Note added.", Some(item))
        }
        Err(err) => NoteActionResponse::failure(format!("note_add rejected: {err}")),
    }
}

/// Replaces the text of one note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_edit(note_id: String, text: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };
    let mut session = lock_session();
    match session.store_mut().edit(id, &text) {
        Ok(note) => {
            let item = to_note_item(&note, session.store().config().preview_chars);
            NoteActionResponse::success("Note updated.", Some(item))
        }
        Err(err) => NoteActionResponse::failure(format!("note_edit rejected: {err}")),
    }
}

/// Deletes one note; closes the edit session if it pointed at it.
///
/// # FFI contract
/// - Unknown id is a no-op reported as `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(note_id: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };
    let mut session = lock_session();
    match session.delete(id) {
        Some(note) => {
            let item = to_note_item(&note, session.store().config().preview_chars);
            NoteActionResponse::success("Note deleted.", Some(item))
        }
        None => NoteActionResponse::failure(format!("note_delete no-op: note not found: {id}")),
    }
}

/// Flips the done flag of one note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_toggle_done(note_id: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };
    let mut session = lock_session();
    match session.store_mut().toggle_done(id) {
        Ok(note) => {
            let item = to_note_item(&note, session.store().config().preview_chars);
            NoteActionResponse::success("Note updated.", Some(item))
        }
        Err(err) => NoteActionResponse::failure(format!("note_toggle_done rejected: {err}")),
    }
}

/// Flips the pinned flag of one note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_toggle_pinned(note_id: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };
    let mut session = lock_session();
    match session.store_mut().toggle_pinned(id) {
        Ok(note) => {
            let item = to_note_item(&note, session.store().config().preview_chars);
            NoteActionResponse::success("Note updated.", Some(item))
        }
        Err(err) => NoteActionResponse::failure(format!("note_toggle_pinned rejected: {err}")),
    }
}

/// Removes every note and closes any open edit.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_clear() -> NoteActionResponse {
    let removed = lock_session().clear_all();
    NoteActionResponse::success(format!("Cleared {removed} note(s)."), None)
}

/// Sets the active search text and returns the filtered display list.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_search(text: String) -> NoteListResponse {
    let mut session = lock_session();
    let notes = session.search(&text);
    to_list_response(&notes, session.store().config().preview_chars)
}

/// Returns the display list under the active search text.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> NoteListResponse {
    let session = lock_session();
    let notes = session.visible_notes();
    to_list_response(&notes, session.store().config().preview_chars)
}

/// Returns stats over all notes, ignoring the active search.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_stats() -> NoteStatsResponse {
    let stats = lock_session().store().stats();
    NoteStatsResponse {
        count: saturating_u32(stats.count),
        total_chars: saturating_u32(stats.total_chars),
        completed_count: saturating_u32(stats.completed_count),
        pinned_count: saturating_u32(stats.pinned_count),
    }
}

/// Opens the edit dialog for one note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_begin_edit(note_id: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };
    let mut session = lock_session();
    match session.begin_edit(id) {
        Ok(note) => {
            let item = to_note_item(&note, session.store().config().preview_chars);
            NoteActionResponse::success("Editing note.", Some(item))
        }
        Err(err) => NoteActionResponse::failure(format!("note_begin_edit rejected: {err}")),
    }
}

/// Saves the open edit dialog.
///
/// # FFI contract
/// - Blank text returns `ok=false` and keeps the dialog open.
#[flutter_rust_bridge::frb(sync)]
pub fn note_save_edit(text: String) -> NoteActionResponse {
    let mut session = lock_session();
    match session.save_edit(&text) {
        Ok(note) => {
            let item = to_note_item(&note, session.store().config().preview_chars);
            NoteActionResponse::success("Note updated.", Some(item))
        }
        Err(err) => NoteActionResponse::failure(format!("note_save_edit rejected: {err}")),
    }
}

/// Closes the edit dialog without saving.
#[flutter_rust_bridge::frb(sync)]
pub fn note_cancel_edit() {
    lock_session().cancel_edit();
}

/// ID of the note open in the edit dialog, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn note_editing_id() -> Option<String> {
    lock_session().editing().map(|id| id.to_string())
}

#[flutter_rust_bridge::frb(sync)]
pub fn counter_increment() -> i64 {
    lock_session().counter_mut().increment()
}

#[flutter_rust_bridge::frb(sync)]
pub fn counter_decrement() -> i64 {
    lock_session().counter_mut().decrement()
}

#[flutter_rust_bridge::frb(sync)]
pub fn counter_reset() -> i64 {
    lock_session().counter_mut().reset()
}

#[flutter_rust_bridge::frb(sync)]
pub fn counter_value() -> i64 {
    lock_session().counter().value()
}

fn parse_note_id(raw: &str) -> Result<NoteId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid note id `{}`", raw.trim()))
}

fn to_note_item(note: &Note, preview_chars: usize) -> NoteItem {
    NoteItem {
        id: note.id.to_string(),
        text: note.text.clone(),
        preview: corenote_core::derive_preview(&note.text, preview_chars),
        done: note.done,
        pinned: note.pinned,
    }
}

fn to_list_response(notes: &[Note], preview_chars: usize) -> NoteListResponse {
    let items = notes
        .iter()
        .map(|note| to_note_item(note, preview_chars))
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No notes yet.".to_string()
    } else {
        format!("{} note(s).", items.len())
    };
    NoteListResponse { items, message }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, counter_decrement, counter_increment, counter_reset, counter_value,
        init_logging, note_add, note_begin_edit, note_delete, note_edit, note_editing_id,
        note_save_edit, note_toggle_done, note_toggle_pinned, notes_list, notes_search,
        notes_stats, ping,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    // Tests share one process-wide session, so they assert on their own
    // unique notes instead of global counts.

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn note_add_rejects_blank_text() {
        let response = note_add("   ".to_string());
        assert!(!response.ok);
        assert!(response.note.is_none());
    }

    #[test]
    fn note_add_then_search_finds_note() {
        let token = unique_token("ffi-search");
        let created = note_add(format!("note {token}"));
        assert!(created.ok, "{}", created.message);
        let created_id = created.note.expect("created note").id;

        let response = notes_search(token.to_uppercase());
        let listed = notes_list();
        notes_search(String::new());

        assert!(response.items.iter().any(|item| item.id == created_id));
        assert!(listed.items.iter().any(|item| item.id == created_id));
        assert!(notes_stats().count >= 1);
    }

    #[test]
    fn toggles_and_edit_round_trip_through_ffi() {
        let token = unique_token("ffi-toggle");
        let created = note_add(token.clone()).note.expect("created note");

        let pinned = note_toggle_pinned(created.id.clone());
        assert!(pinned.ok, "{}", pinned.message);
        assert!(pinned.note.as_ref().expect("note").pinned);

        let done = note_toggle_done(created.id.clone());
        assert!(done.note.as_ref().expect("note").done);

        let edited = note_edit(created.id.clone(), format!("{token} edited"));
        let edited = edited.note.expect("edited note");
        assert!(edited.pinned);
        assert!(edited.done);
        assert!(edited.text.ends_with("edited"));

        assert!(note_delete(created.id.clone()).ok);
        assert!(!note_delete(created.id).ok);
    }

    #[test]
    fn malformed_note_id_is_rejected() {
        let response = note_toggle_done("not-a-uuid".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid note id"));
    }

    #[test]
    fn edit_dialog_flow_saves_and_closes() {
        let token = unique_token("ffi-dialog");
        let created = note_add(token.clone()).note.expect("created note");

        assert!(note_begin_edit(created.id.clone()).ok);
        assert_eq!(note_editing_id(), Some(created.id.clone()));
        assert!(!note_save_edit("  ".to_string()).ok);
        let saved = note_save_edit(format!("{token} saved"));
        assert!(saved.ok, "{}", saved.message);

        assert!(!note_save_edit("again".to_string()).ok);
        assert!(note_delete(created.id).ok);
    }

    #[test]
    fn counter_steps_through_ffi() {
        counter_reset();
        assert_eq!(counter_increment(), 1);
        assert_eq!(counter_increment(), 2);
        assert_eq!(counter_decrement(), 1);
        assert_eq!(counter_value(), 1);
        assert_eq!(counter_reset(), 0);
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
