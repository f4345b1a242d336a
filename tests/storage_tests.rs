//! File-backed key-value store tests

use roadmap_browser::core::storage::{FileBackend, LocalStore, StorageBackend};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_values_persist_across_stores() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("storage.json");

    let mut store = LocalStore::new(FileBackend::new(&path));
    store.set("activeTab", "css");
    store.set("visits", &3_u32);
    store.set("seen", &vec!["html".to_string(), "css".to_string()]);

    let reopened = LocalStore::new(FileBackend::new(&path));
    assert_eq!(reopened.get("activeTab", String::new()), "css");
    assert_eq!(reopened.get("visits", 0_u32), 3);
    assert_eq!(
        reopened.get::<Vec<String>>("seen", Vec::new()),
        ["html", "css"]
    );
}

#[test]
fn test_file_holds_one_json_object_of_json_strings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = LocalStore::new(FileBackend::new(&path));
    store.set("visits", &3_u32);

    let raw: BTreeMap<String, String> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw.get("visits").map(String::as_str), Some("3"));
}

#[test]
fn test_remove_deletes_only_that_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = LocalStore::new(FileBackend::new(&path));
    store.set("a", "1");
    store.set("b", "2");
    store.remove("a");

    assert_eq!(store.get("a", "gone".to_string()), "gone");
    assert_eq!(store.get("b", String::new()), "2");
}

#[test]
fn test_corrupt_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "{ definitely not json").unwrap();

    let store = LocalStore::new(FileBackend::new(&path));
    assert_eq!(store.get("activeTab", "home".to_string()), "home");
    assert!(store.get_raw("activeTab").is_none());
    assert!(store.backend().get_item("activeTab").is_err());
}

#[test]
fn test_missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::new(dir.path().join("absent.json"));

    assert_eq!(backend.get_item("anything").unwrap(), None);
    assert!(!backend.path().exists());
}

#[test]
fn test_directory_in_place_of_file_degrades_silently() {
    let dir = TempDir::new().unwrap();

    let mut store = LocalStore::new(FileBackend::new(dir.path()));
    store.set("activeTab", "css");
    store.remove("activeTab");
    assert_eq!(store.get("activeTab", "home".to_string()), "home");
}
