use client_core::error::StorageError;
use client_core::favorites::{FAVORITES_KEY, FavoritesStore, FileStore, KeyValueStore};

use tempfile::TempDir;

/// **VALUE**: Verifies favorites survive across store instances backed by the same file.
///
/// **WHY THIS MATTERS**: Favorites must persist between runs, the way browser storage
/// persists between page loads.
///
/// **BUG THIS CATCHES**: Would catch writes that only land in memory or a temp file
/// that is never renamed into place.
#[test]
fn given_file_store_when_reopened_then_favorites_persist() {
    // GIVEN: A store in a fresh data dir
    let dir = TempDir::new().unwrap();
    let first = FavoritesStore::new(FileStore::new(dir.path()));

    // WHEN: Adding favorites and reopening
    first.toggle(25);
    first.toggle(151);
    drop(first);
    let second = FavoritesStore::new(FileStore::new(dir.path()));

    // THEN: Same membership
    assert!(second.exists(25));
    assert!(second.exists(151));
    assert!(!second.exists(1));
    assert_eq!(second.ids(), vec![25, 151]);
}

/// **VALUE**: Verifies a missing data dir reads as empty and is created on first write.
///
/// **BUG THIS CATCHES**: Would catch `create_dir_all` being skipped before the write.
#[test]
fn given_missing_data_dir_when_toggling_then_dir_is_created() {
    // GIVEN: A nested dir that doesn't exist yet
    let root = TempDir::new().unwrap();
    let data_dir = root.path().join("nested").join("pokedex");
    let store = FavoritesStore::new(FileStore::new(&data_dir));
    assert!(!store.exists(25));

    // WHEN: Toggling
    store.toggle(25);

    // THEN: File exists and holds the favorite
    assert!(store.storage().path().exists());
    assert!(store.exists(25));
    assert!(!data_dir.join("local_storage.json.tmp").exists());
}

/// **VALUE**: Verifies a corrupt storage file degrades to empty and is repaired by toggle.
///
/// **WHY THIS MATTERS**: A truncated file after a disk-full event must not lock the
/// user out of favorites.
///
/// **BUG THIS CATCHES**: Would catch `set_item` refusing to write over a corrupt file.
#[test]
fn given_corrupt_storage_file_when_toggling_then_file_is_rewritten() {
    // GIVEN: Garbage on disk
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("local_storage.json"), "{{{").unwrap();
    let store = FavoritesStore::new(FileStore::new(dir.path()));

    // THEN: Reads as empty
    assert!(!store.exists(25));

    // WHEN: Toggling
    store.toggle(25);

    // THEN: Valid again
    assert!(store.exists(25));
    let raw = store.storage().get_item(FAVORITES_KEY).unwrap();
    assert_eq!(raw.as_deref(), Some("[25]"));
}

/// **VALUE**: Verifies other keys in the same storage file are preserved.
///
/// **BUG THIS CATCHES**: Would catch favorites writes clobbering the whole map.
#[test]
fn given_other_keys_when_toggling_then_other_keys_preserved() {
    let dir = TempDir::new().unwrap();
    let storage = FileStore::new(dir.path());
    storage.set_item("theme", "dark").unwrap();
    let store = FavoritesStore::new(storage);

    store.toggle(7);

    assert_eq!(
        store.storage().get_item("theme").unwrap().as_deref(),
        Some("dark")
    );
}

/// **VALUE**: Verifies an unreadable storage file is reported, not replaced.
///
/// **WHY THIS MATTERS**: Only a file that parses as garbage may be overwritten; an I/O
/// failure says nothing about its contents.
///
/// **BUG THIS CATCHES**: Would catch `set_item` treating every read error as an empty map.
#[test]
fn given_unreadable_storage_path_when_setting_item_then_io_error_and_contents_untouched() {
    // GIVEN: The storage path is a directory holding other data
    let dir = TempDir::new().unwrap();
    let storage = FileStore::new(dir.path());
    std::fs::create_dir(storage.path()).unwrap();
    std::fs::write(storage.path().join("keep.txt"), "data").unwrap();

    // WHEN: Writing a key
    let result = storage.set_item(FAVORITES_KEY, "[25]");

    // THEN: Io error, existing data untouched
    assert!(matches!(result, Err(StorageError::Io { .. })), "got {result:?}");
    assert_eq!(
        std::fs::read_to_string(storage.path().join("keep.txt")).unwrap(),
        "data"
    );
}
