use notelist_core::{Filter, NoteStore};

#[test]
fn delete_is_idempotent_and_ignores_absent_ids() {
    let mut store = NoteStore::new();
    let id = store.add("only", "active").unwrap();

    store.delete(id);
    assert!(store.is_empty());

    // Second delete of the same id and a never-issued id both no-op.
    store.delete(id);
    store.delete(9999);
    assert!(store.is_empty());
}

#[test]
fn clear_under_completed_removes_only_completed_notes() {
    let mut store = NoteStore::new();
    store.add("keep active", "active").unwrap();
    store.add("drop one", "completed").unwrap();
    store.add("keep other", "pending").unwrap();
    store.add("drop two", "completed").unwrap();

    store.set_filter(Filter::Completed);
    assert_eq!(store.clear_candidate_count(), 2);
    assert_eq!(store.clear_filtered(), 2);

    store.set_filter(Filter::All);
    let remaining: Vec<&str> = store.view().iter().map(|note| note.title.as_str()).collect();
    assert_eq!(remaining, vec!["keep active", "keep other"]);
}

#[test]
fn clear_under_active_leaves_other_status_notes_untouched() {
    let mut store = NoteStore::new();
    store.add("drop", "active").unwrap();
    store.add("keep done", "completed").unwrap();
    store.add("keep parked", "waiting").unwrap();

    store.set_filter(Filter::Active);
    assert_eq!(store.clear_filtered(), 1);
    assert_eq!(store.len(), 2);
    assert_eq!(store.counts().active, 0);
}

#[test]
fn clear_under_all_empties_the_entire_collection() {
    let mut store = NoteStore::new();
    store.add("a", "active").unwrap();
    store.add("b", "completed").unwrap();
    store.add("c", "pending").unwrap();

    assert_eq!(store.clear_candidate_count(), 3);
    assert_eq!(store.clear_filtered(), 3);
    assert!(store.is_empty());
}

#[test]
fn clear_with_empty_filtered_view_is_a_noop() {
    let mut store = NoteStore::new();
    store.add("still here", "pending").unwrap();

    // No completed notes exist, so the completed view is empty even
    // though the store is not.
    store.set_filter(Filter::Completed);
    assert_eq!(store.clear_candidate_count(), 0);
    assert_eq!(store.clear_filtered(), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn clear_on_an_empty_store_returns_zero() {
    let mut store = NoteStore::new();
    assert_eq!(store.clear_filtered(), 0);
    assert!(store.is_empty());
}
