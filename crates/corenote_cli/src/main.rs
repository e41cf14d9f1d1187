//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `corenote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use corenote_core::NoteStore;

fn main() {
    println!("corenote_core ping={}", corenote_core::ping());
    println!("corenote_core version={}", corenote_core::core_version());

    let mut store = NoteStore::new();
    let scripted = ["Buy milk", "Call mom", "   "];
    for text in scripted {
        if let Err(err) = store.add(text) {
            println!("corenote_core add rejected: {err}");
        }
    }
    if let Some(first) = store.notes().last().map(|note| note.id) {
        let _ = store.toggle_pinned(first);
    }

    let stats = store.stats();
    println!(
        "corenote_core notes={} total_chars={} completed={} pinned={}",
        stats.count, stats.total_chars, stats.completed_count, stats.pinned_count
    );
    for note in store.display_notes() {
        let marker = if note.pinned { "*" } else { "-" };
        println!("{marker} {}", note.text);
    }
}
