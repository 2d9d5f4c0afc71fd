//! Passage store tests: memory and JSON file backends

mod common;

use std::fs;

use common::save_request;
use recite::passage::HistoryPolicy;
use recite::session::EditSession;
use recite::store::{JsonFileStore, MemoryStore, PassageStore, StoreError};
use tempfile::TempDir;
use uuid::Uuid;

// ========================================================================
// Contract shared by both stores
// ========================================================================

fn exercise_contract(store: &mut dyn PassageStore) {
    let first = store.save(save_request("first passage", vec![0])).unwrap();
    let second = store.save(save_request("second passage", vec![2])).unwrap();

    let listed: Vec<Uuid> = store.list().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(listed, vec![second.id, first.id]);

    assert_eq!(store.get(first.id).unwrap().original_text, "first passage");
    assert_eq!(store.get(Uuid::new_v4()), Err(StoreError::NotFound));

    let public_id = store.publish(first.id).unwrap();
    assert_eq!(store.publish(first.id).unwrap(), public_id);
    let shared = store.fetch_public(public_id).unwrap();
    assert_eq!(shared.original_text, "first passage");
    assert_eq!(shared.selected_word_indices, vec![0]);

    store.delete(first.id).unwrap();
    assert_eq!(store.fetch_public(public_id), Err(StoreError::NotFound));
    assert_eq!(store.delete(first.id), Err(StoreError::NotFound));
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_memory_store_contract() {
    exercise_contract(&mut MemoryStore::default());
}

#[test]
fn test_file_store_contract() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("library.json"), 30).unwrap();
    exercise_contract(&mut store);
}

#[test]
fn test_capacity_exceeded_is_distinct() {
    let mut store = MemoryStore::new(2);
    store.save(save_request("a", vec![0])).unwrap();
    store.save(save_request("b", vec![0])).unwrap();
    let err = store.save(save_request("c", vec![0])).unwrap_err();
    assert_eq!(err, StoreError::CapacityExceeded { limit: 2 });
    assert!(err.user_message().contains("Storage limit reached"));
    assert_eq!(store.list().unwrap().len(), 2);
}

// ========================================================================
// JSON file persistence
// ========================================================================

#[test]
fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("library.json");

    let mut request = save_request("alpha beta gamma", vec![0, 4]);
    request.highlight_groups = vec![vec![2]];
    let (id, public_id) = {
        let mut store = JsonFileStore::open(&path, 30).unwrap();
        let saved = store.save(request).unwrap();
        let public_id = store.publish(saved.id).unwrap();
        (saved.id, public_id)
    };

    let store = JsonFileStore::open(&path, 30).unwrap();
    let saved = store.get(id).unwrap();
    assert_eq!(saved.selected_word_indices, vec![0, 4]);
    assert_eq!(saved.highlight_groups, vec![vec![2]]);
    assert_eq!(saved.public_id, Some(public_id));
    assert_eq!(store.library().version, 1);
}

#[test]
fn test_missing_file_is_empty_library() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("absent.json"), 30).unwrap();
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("library.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        JsonFileStore::open(&path, 30),
        Err(StoreError::Unavailable(_))
    ));
    // The file is left for the user to inspect
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_entries_without_groups_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("library.json");
    let id = Uuid::new_v4();
    fs::write(
        &path,
        format!(
            r#"{{"version":1,"entries":[{{"id":"{}","title":"t","original_text":"one two","selected_word_indices":[2],"created_at":0}}]}}"#,
            id
        ),
    )
    .unwrap();

    let store = JsonFileStore::open(&path, 30).unwrap();
    let saved = store.get(id).unwrap();
    assert!(saved.highlight_groups.is_empty());
    assert_eq!(saved.public_id, None);
}

#[test]
fn test_failed_write_rolls_back() {
    let dir = TempDir::new().unwrap();
    let parent = dir.path().join("store");
    let mut store = JsonFileStore::open(parent.join("library.json"), 30).unwrap();
    let kept = store.save(save_request("kept", vec![0])).unwrap();

    // Replace the directory with a file so the next write cannot succeed
    fs::remove_dir_all(&parent).unwrap();
    fs::write(&parent, "blocker").unwrap();

    let mut session = EditSession::new("lost passage", HistoryPolicy::Coalesced);
    session.engine_mut().toggle_click(0);
    let request = session.save_request(50).unwrap();

    let err = store.save(request).unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
    assert!(!err.user_message().contains("limit"));

    let ids: Vec<Uuid> = store.list().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![kept.id]);
    assert!(matches!(store.publish(kept.id), Err(StoreError::Unavailable(_))));
    assert_eq!(store.get(kept.id).unwrap().public_id, None);

    // The editing session is untouched and can try again
    assert_eq!(session.engine().selected_indices(), vec![0]);
    assert!(session.engine().can_undo());
}
