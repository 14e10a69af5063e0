use super::DedupStore;

use std::fs;
use tempfile::tempdir;

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let store = DedupStore::open(dir.path().join("completed_ids.json"));
    assert!(store.is_empty());
    assert!(!store.contains("1"));
}

#[test]
fn test_add_and_contains() {
    let dir = tempdir().unwrap();
    let mut store = DedupStore::open(dir.path().join("completed_ids.json"));

    assert!(store.add("7"));
    assert!(store.contains("7"));
    assert!(!store.contains("8"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_add_is_idempotent() {
    let dir = tempdir().unwrap();
    let mut store = DedupStore::open(dir.path().join("completed_ids.json"));

    assert!(store.add("42"));
    assert!(!store.add("42"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_file_is_sorted_json_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("completed_ids.json");
    let mut store = DedupStore::open(&path);

    store.add("9");
    store.add("10");
    store.add("1");

    let raw = fs::read_to_string(&path).unwrap();
    let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(ids, vec!["1", "10", "9"]);
}

#[test]
fn test_reopen_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("completed_ids.json");

    {
        let mut store = DedupStore::open(&path);
        store.add("3");
        store.add("5");
    }

    let store = DedupStore::open(&path);
    assert!(store.contains("3"));
    assert!(store.contains("5"));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("completed_ids.json");
    fs::write(&path, "{ not json").unwrap();

    let mut store = DedupStore::open(&path);
    assert!(store.is_empty());

    // A corrupt file must not block new completions.
    assert!(store.add("1"));
    let raw = fs::read_to_string(&path).unwrap();
    let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn test_truncated_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("completed_ids.json");
    fs::write(&path, "[\"1\", \"2\"").unwrap();

    let store = DedupStore::open(&path);
    assert!(store.is_empty());
}

#[test]
fn test_flush_rewrites_whole_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("completed_ids.json");
    let mut store = DedupStore::open(&path);

    store.add("1");
    store.add("2");
    store.flush().unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(ids, vec!["1", "2"]);
}
