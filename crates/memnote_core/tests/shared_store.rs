use memnote_core::{NoteUpdate, SharedNotesStore, StoreError};
use std::collections::HashSet;
use std::thread;

#[test]
fn concurrent_writers_get_unique_ids() {
    let store = SharedNotesStore::new();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                (0..25)
                    .map(|idx| {
                        store
                            .add_note(&format!("worker {worker} note {idx}"), None)
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id {id}");
        }
    }
    assert_eq!(ids.len(), 200);
    assert_eq!(store.count(), 200);
}

#[test]
fn clones_share_one_collection() {
    let writer = SharedNotesStore::new();
    let reader = writer.clone();

    let created = writer.add_note("shared body", None).unwrap();
    writer
        .update_note(created.id, NoteUpdate::new().favorite(true))
        .unwrap();

    assert_eq!(reader.count(), 1);
    assert_eq!(reader.favorite_notes().len(), 1);
    assert_eq!(reader.search_notes("SHARED").len(), 1);
    assert_eq!(reader.get_note(created.id).map(|note| note.favorite), Some(true));

    reader.delete_note(created.id).unwrap();
    assert!(writer.all_notes().is_empty());
    assert!(writer.notes_ordered_by_date().is_empty());
    assert_eq!(
        writer.delete_note(created.id).unwrap_err(),
        StoreError::NotFound(created.id)
    );
}
