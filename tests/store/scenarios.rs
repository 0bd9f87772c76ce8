//! Create / find / scan scenarios against a fresh store.

use hateoas_messages::{FieldSet, Message, MessageStore, Store, ENTITY_ID};

fn sample_message() -> Message {
    Message::builder()
        .title("Title666")
        .content("Test")
        .sender("10.11.12.13/sender")
        .build()
}

// ============================================================================
// Scenario A: create, count, find with every field
// ============================================================================

#[test]
fn create_then_find_all_fields() {
    let store = MessageStore::new();

    let created = store.create(sample_message()).unwrap();
    assert_eq!(store.count().unwrap(), 1);

    let id = created.entity_id.clone().unwrap();
    let found = store.find(&id, &FieldSet::all()).unwrap().unwrap();
    assert_eq!(found.entity_id.as_deref(), Some(id.as_str()));
    assert_eq!(found.title.as_deref(), Some("Title666"));
    assert_eq!(found.content.as_deref(), Some("Test"));
    assert_eq!(found.sender.as_deref(), Some("10.11.12.13/sender"));
}

// ============================================================================
// Scenario B: find with identity and title only
// ============================================================================

#[test]
fn find_identity_and_title() {
    let store = MessageStore::new();
    let id = store.create(sample_message()).unwrap().entity_id.unwrap();

    let found = store
        .find(&id, &FieldSet::from_names([ENTITY_ID, "title"]))
        .unwrap()
        .unwrap();
    assert_eq!(found.entity_id.as_deref(), Some(id.as_str()));
    assert_eq!(found.title.as_deref(), Some("Title666"));
    assert!(found.content.is_none());
    assert!(found.sender.is_none());

    // Unselected fields must not show up in the JSON at all.
    let json = serde_json::to_value(&found).unwrap();
    assert!(json.get("content").is_none());
    assert!(json.get("sender").is_none());
}

// ============================================================================
// Scenario C: scan within and past the end
// ============================================================================

#[test]
fn scan_single_message() {
    let store = MessageStore::new();
    let created = store.create(sample_message()).unwrap();

    let first = store.scan(0, 10, &FieldSet::all()).unwrap();
    assert_eq!(first, vec![created]);

    let past_end = store.scan(1, 10, &FieldSet::all()).unwrap();
    assert!(past_end.is_empty());
}

#[test]
fn stored_record_is_not_affected_by_caller_changes() {
    let store = MessageStore::new();
    let mut created = store.create(sample_message()).unwrap();
    let id = created.entity_id.clone().unwrap();

    created.title = Some("changed locally".into());

    let found = store.find(&id, &FieldSet::all()).unwrap().unwrap();
    assert_eq!(found.title.as_deref(), Some("Title666"));
}
