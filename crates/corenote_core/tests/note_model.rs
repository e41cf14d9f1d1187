use corenote_core::{derive_preview, normalize_note_text, Counter, Note, NoteTextError};
use uuid::Uuid;

#[test]
fn note_new_sets_defaults() {
    let note = Note::new("hello");

    assert!(!note.id.is_nil());
    assert_eq!(note.text, "hello");
    assert!(!note.done);
    assert!(!note.pinned);
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut note = Note::with_id(id, "Buy milk");
    note.pinned = true;

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["text"], "Buy milk");
    assert_eq!(json["done"], false);
    assert_eq!(json["pinned"], true);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn normalize_rejects_whitespace_only_input() {
    assert_eq!(normalize_note_text("\n\t ", 180), Err(NoteTextError::Empty));
}

#[test]
fn preview_fits_two_line_card() {
    let preview = derive_preview("Groceries:\n- milk\n- eggs", 100);
    assert_eq!(preview, "Groceries: - milk - eggs");
}

#[test]
fn counter_serializes_as_value_object() {
    let mut counter = Counter::new();
    counter.increment();
    counter.increment();

    let json = serde_json::to_value(counter).unwrap();
    assert_eq!(json["value"], 2);
}
