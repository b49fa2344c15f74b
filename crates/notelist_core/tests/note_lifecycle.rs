use notelist_core::{Filter, Note, NoteStore};

#[test]
fn session_walkthrough_matches_expected_views() {
    let mut store = NoteStore::new();
    store.add("Buy milk", "Active").unwrap();
    store.add("Pay bills", "completed").unwrap();
    store.add("Call mom", "pending").unwrap();

    let all: Vec<(&str, &str)> = store
        .view()
        .iter()
        .map(|note| (note.title.as_str(), note.status.as_str()))
        .collect();
    assert_eq!(
        all,
        vec![
            ("Buy milk", "active"),
            ("Pay bills", "completed"),
            ("Call mom", "pending"),
        ]
    );

    store.set_filter(Filter::Active);
    let active: Vec<&str> = store.view().iter().map(|note| note.title.as_str()).collect();
    assert_eq!(active, vec!["Buy milk"]);

    store.set_filter(Filter::Completed);
    assert_eq!(store.clear_filtered(), 1);

    store.set_filter(Filter::All);
    let remaining: Vec<(&str, &str)> = store
        .view()
        .iter()
        .map(|note| (note.title.as_str(), note.status.as_str()))
        .collect();
    assert_eq!(
        remaining,
        vec![("Buy milk", "active"), ("Call mom", "pending")]
    );
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let note = Note::new(42, "Ship release", "Active").unwrap();

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], 42);
    assert_eq!(json["title"], "Ship release");
    assert_eq!(json["status"], "active");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn filter_serialization_uses_lowercase_names() {
    assert_eq!(serde_json::to_value(Filter::All).unwrap(), "all");
    assert_eq!(serde_json::to_value(Filter::Active).unwrap(), "active");
    assert_eq!(serde_json::to_value(Filter::Completed).unwrap(), "completed");

    let decoded: Filter = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(decoded, Filter::Completed);
}
