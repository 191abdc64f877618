// Integration tests for the JSON file store
// Covers persistence across reopen, legacy migration, failed writes and
// workspace scoping

use crypt_core::ops::snippet_ops;
use crypt_core::{CryptError, SnippetStore};
use crypt_store::JsonFileStore;
use std::fs;
use tempfile::TempDir;

// Helper to create a test data directory
fn setup_data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp data directory")
}

#[test]
fn test_missing_file_opens_empty() {
    // Given: A data directory with no store file
    let dir = setup_data_dir();
    let path = dir.path().join("crypt.buriedCode.json");

    // When: We open the store
    let store = JsonFileStore::open(&path).unwrap();

    // Then: It is empty and nothing was written yet
    assert!(store.snippets().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_snippets_survive_reopen() {
    // Given: A store with two buried snippets
    let dir = setup_data_dir();
    let path = dir.path().join("crypt.buriedCode.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    let first = snippet_ops::bury(&mut store, "/a/b.ts", 10, "return x+1;", None).unwrap();
    let second = snippet_ops::bury(
        &mut store,
        "/a/c.rs",
        3,
        "fn old() {}",
        Some("superseded".to_string()),
    )
    .unwrap();
    drop(store);

    // When: We reopen the same file
    let reopened = JsonFileStore::open(&path).unwrap();

    // Then: Both snippets come back in insertion order, unchanged
    assert_eq!(reopened.snippets(), &[first, second][..]);
}

#[test]
fn test_last_seen_version_survives_reopen() {
    // Given: A store that recorded a version
    let dir = setup_data_dir();
    let path = dir.path().join("crypt.buriedCode.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    store.set_last_seen_version("0.3.0").unwrap();
    snippet_ops::bury(&mut store, "/a/b.ts", 0, "x", None).unwrap();

    // When: We reopen it
    let reopened = JsonFileStore::open(&path).unwrap();

    // Then: The version is still there alongside the snippets
    assert_eq!(reopened.last_seen_version(), Some("0.3.0"));
    assert_eq!(reopened.snippets().len(), 1);
}

#[test]
fn test_legacy_array_is_migrated_on_next_write() {
    // Given: A legacy store file holding a bare array
    let dir = setup_data_dir();
    let path = dir.path().join("crypt.buriedCode.json");
    fs::write(
        &path,
        r#"[{"id":"1700000000000","code":"return x+1;","filePath":"/a/b.ts",
             "fileName":"b.ts","line":10,"timestamp":1700000000000}]"#,
    )
    .unwrap();

    // When: We open it and perform a write
    let mut store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.snippets().len(), 1);
    snippet_ops::bury(&mut store, "/a/b.ts", 2, "let y = 2;", None).unwrap();

    // Then: The file is rewritten in the versioned layout
    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["schemaVersion"], 1);
    assert_eq!(value["snippets"].as_array().unwrap().len(), 2);
    assert_eq!(value["snippets"][0]["id"], "1700000000000");
}

#[test]
fn test_corrupt_file_is_a_persistence_error() {
    // Given: A store file with garbage in it
    let dir = setup_data_dir();
    let path = dir.path().join("crypt.buriedCode.json");
    fs::write(&path, b"{ not json").unwrap();

    // When: We open it
    let result = JsonFileStore::open(&path);

    // Then: Opening fails instead of silently discarding the data
    assert!(matches!(result, Err(CryptError::Persistence { .. })));
}

#[test]
fn test_failed_write_keeps_previous_state() {
    // Given: A store with one snippet whose directory then becomes unusable
    let dir = setup_data_dir();
    let store_dir = dir.path().join("ws");
    let path = store_dir.join("crypt.buriedCode.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    let kept = snippet_ops::bury(&mut store, "/a/b.ts", 1, "keep me", None).unwrap();
    fs::remove_dir_all(&store_dir).unwrap();
    fs::write(&store_dir, b"now a file").unwrap();

    // When: A further bury cannot be persisted
    let result = snippet_ops::bury(&mut store, "/a/b.ts", 5, "lost", None);

    // Then: The error surfaces and the in-memory view is unchanged
    assert!(matches!(result, Err(CryptError::Persistence { .. })));
    assert_eq!(store.snippets(), &[kept][..]);
}

#[test]
fn test_workspaces_are_isolated() {
    // Given: Two workspace roots sharing a data directory
    let data = setup_data_dir();
    let ws_a = setup_data_dir();
    let ws_b = setup_data_dir();

    // When: We bury into workspace A only
    let mut store_a = JsonFileStore::for_workspace(data.path(), ws_a.path()).unwrap();
    snippet_ops::bury(&mut store_a, "/a/b.ts", 0, "only in A", None).unwrap();
    let store_b = JsonFileStore::for_workspace(data.path(), ws_b.path()).unwrap();

    // Then: Workspace B sees nothing and the files differ
    assert!(store_b.snippets().is_empty());
    assert_ne!(store_a.path(), store_b.path());

    // And: Reopening workspace A finds its snippet
    let reopened = JsonFileStore::for_workspace(data.path(), ws_a.path()).unwrap();
    assert_eq!(reopened.snippets().len(), 1);
}
