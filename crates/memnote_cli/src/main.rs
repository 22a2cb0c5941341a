//! CLI demo entry point.
//!
//! # Responsibility
//! - Walk through every `NotesStore` operation and print the results.
//! - Enable file logging when `MEMNOTE_LOG_DIR` is set.

use log::info;
use memnote_core::{init_logging, LoggingConfig, Note, NoteUpdate, NotesStore};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    if let Some(config) = LoggingConfig::from_env() {
        init_logging(&config)?;
    }
    info!(
        "event=demo_start module=cli status=ok version={}",
        memnote_core::core_version()
    );

    println!("=== CREATE STORE ===");
    let mut store = NotesStore::new();
    println!("memnote_core version={}", memnote_core::core_version());
    println!("Total notes: {}", store.count());

    println!("\n=== ADD NOTES ===");
    let first = store.add_note(
        "# My first note\nThis is the content of my first Markdown note.",
        None,
    )?;
    println!("Note 1 added: {}", first.id);
    println!("Details:\n{}", serde_json::to_string_pretty(&first)?);
    let second = store.add_note(
        "# Learning Rust\nToday I learned about iterators and adapters like map, filter and find.",
        None,
    )?;
    println!("Note 2 added: {}", second.id);
    let third = store.add_note(
        "# Task list\n- Study ownership\n- Practice with structs\n- Do slice exercises",
        Some("Today's tasks"),
    )?;
    println!("Note 3 added: {}", third.id);

    println!("\n=== VALIDATION: EMPTY NOTE ===");
    match store.add_note("   ", None) {
        Ok(note) => println!("Unexpectedly added: {}", note.id),
        Err(err) => println!("Result: {err}"),
    }

    println!("\n=== ALL NOTES ===");
    let all = store.all_notes();
    println!("Total notes: {}", all.len());
    print_titles(&all);

    println!("\n=== GET NOTE BY ID ===");
    if let Some(found) = store.get_note(first.id) {
        println!("Found: {}", found.title);
        println!("Content: {}", found.content);
    }

    println!("\n=== UPDATE NOTE ===");
    let updated = store.update_note(
        first.id,
        NoteUpdate::new()
            .content("# My first note, updated\nI have changed the content of this note."),
    )?;
    println!("New title: {}", updated.title);

    println!("\n=== MARK AS FAVORITE ===");
    let favorite = store.update_note(second.id, NoteUpdate::new().favorite(true))?;
    println!("Favorite set on: {}", favorite.title);

    println!("\n=== SEARCH ===");
    let hits = store.search_notes("rust");
    println!("Notes found: {}", hits.len());
    print_titles(&hits);

    println!("\n=== ORDERED BY DATE ===");
    for note in store.notes_ordered_by_date() {
        println!("- {} (updated at {} ms)", note.title, note.updated_at);
    }

    println!("\n=== FAVORITES ===");
    let favorites = store.favorite_notes();
    println!("Total favorites: {}", favorites.len());
    print_titles(&favorites);

    println!("\n=== DELETE NOTE ===");
    println!("{}", store.delete_note(third.id)?);
    println!("Total notes after delete: {}", store.count());

    println!("\n=== ENCAPSULATION ===");
    println!("The note collection is a private field of NotesStore.");
    println!("It is only reachable through the store's public methods.");
    println!("Total notes (via public API): {}", store.count());

    Ok(())
}

fn print_titles(notes: &[Note]) {
    for note in notes {
        println!("- {} (id: {})", note.title, note.id);
    }
}
