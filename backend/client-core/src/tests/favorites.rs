// Unit tests for the favorites store
// Focus: toggle/exists contract and degradation on broken storage

use crate::error::storage::StorageError;
use crate::favorites::{FAVORITES_KEY, FavoritesStore, KeyValueStore, MemoryStore};

use common::ErrorLocation;

use std::cell::Cell;
use std::panic::Location;

/// Storage whose every call fails, like a browser with storage disabled.
struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable {
            message: String::from("storage disabled"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable {
            message: String::from("quota exceeded"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// In-memory storage whose next read can be made to fail once.
struct FlakyReadStore {
    inner: MemoryStore,
    fail_next_read: Cell<bool>,
}

impl FlakyReadStore {
    fn seeded(raw: &str) -> Self {
        let inner = MemoryStore::new();
        inner.set_item(FAVORITES_KEY, raw).unwrap();
        Self {
            inner,
            fail_next_read: Cell::new(false),
        }
    }
}

impl KeyValueStore for FlakyReadStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_next_read.replace(false) {
            return Err(StorageError::Unavailable {
                message: String::from("storage briefly locked"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value)
    }
}

/// **VALUE**: Verifies an empty store reports no favorites for any id.
///
/// **WHY THIS MATTERS**: First launch has nothing persisted; every detail page must
/// render "Save to favorites" without erroring.
///
/// **BUG THIS CATCHES**: Would catch treating a missing key as an error.
#[test]
fn given_empty_store_when_checking_exists_then_false_for_every_id() {
    // GIVEN: Nothing persisted
    let store = FavoritesStore::new(MemoryStore::new());

    // THEN: No id is a favorite
    for id in [0, 1, 25, 151, u32::MAX] {
        assert!(!store.exists(id), "id {id} should not be a favorite");
    }
    assert!(store.ids().is_empty());
}

/// **VALUE**: Verifies toggle negates membership and is immediately visible.
///
/// **WHY THIS MATTERS**: The detail page flips its button label right after toggling.
///
/// **BUG THIS CATCHES**: Would catch a toggle that doesn't persist before returning.
#[test]
fn given_any_id_when_toggled_then_exists_is_negated() {
    // GIVEN: A store with some unrelated favorite
    let store = FavoritesStore::new(MemoryStore::new());
    store.toggle(4);

    for id in [1, 4, 25, 150] {
        // WHEN: Toggling
        let before = store.exists(id);
        store.toggle(id);

        // THEN: Membership flipped
        assert_eq!(store.exists(id), !before, "toggle should flip #{id}");
    }
}

/// **VALUE**: Verifies a double toggle restores the exact prior set.
///
/// **WHY THIS MATTERS**: Users undo by clicking again; other favorites must survive.
///
/// **BUG THIS CATCHES**: Would catch a remove that clears more than the one id.
#[test]
fn given_existing_favorites_when_toggling_25_twice_then_set_unchanged() {
    // GIVEN: Two existing favorites
    let store = FavoritesStore::new(MemoryStore::new());
    store.toggle(1);
    store.toggle(7);
    let before = store.ids();

    // WHEN: Toggling 25 twice
    store.toggle(25);
    assert!(store.exists(25));
    store.toggle(25);

    // THEN: Back to the original set
    assert_eq!(store.ids(), before);
    assert!(!store.exists(25));
}

/// **VALUE**: Verifies the persisted form is a JSON array under the well-known key.
///
/// **WHY THIS MATTERS**: Existing data written by earlier versions uses exactly this layout.
///
/// **BUG THIS CATCHES**: Would catch a key rename or a switch to a map encoding.
#[test]
fn given_toggles_when_inspecting_storage_then_json_array_under_favorites_key() {
    // GIVEN: A backing store we can inspect
    let backing = MemoryStore::new();
    let store = FavoritesStore::new(&backing);

    // WHEN: Adding two favorites
    store.toggle(25);
    store.toggle(1);

    // THEN: Raw value is an array
    let raw = backing.get_item(FAVORITES_KEY).unwrap();
    assert_eq!(raw.as_deref(), Some("[25,1]"));
}

/// **VALUE**: Verifies corrupt persisted data reads as empty and is recoverable.
///
/// **WHY THIS MATTERS**: Storage can be hand-edited or truncated; the app must keep working.
///
/// **BUG THIS CATCHES**: Would catch propagating the JSON error or panicking.
#[test]
fn given_corrupt_value_when_using_store_then_reads_empty_and_toggle_recovers() {
    // GIVEN: Garbage under the favorites key
    let backing = MemoryStore::new();
    backing.set_item(FAVORITES_KEY, "{not json").unwrap();
    let store = FavoritesStore::new(&backing);

    // THEN: Reads as empty
    assert!(!store.exists(25));
    assert!(store.ids().is_empty());

    // WHEN: Toggling overwrites the corrupt value
    store.toggle(25);

    // THEN: Store is healthy again
    assert!(store.exists(25));
    assert_eq!(store.ids(), vec![25]);
}

/// **VALUE**: Verifies an unavailable backend never surfaces an error or panic.
///
/// **WHY THIS MATTERS**: Storage failures must never be fatal to page rendering.
///
/// **BUG THIS CATCHES**: Would catch an `unwrap` sneaking into the read or write path.
#[test]
fn given_unavailable_storage_when_toggling_then_silently_no_ops() {
    // GIVEN: Storage that always fails
    let store = FavoritesStore::new(UnavailableStore);

    // WHEN: Toggling
    store.toggle(25);

    // THEN: Deterministic false, no panic
    assert!(!store.exists(25));
    assert!(store.ids().is_empty());
}

/// **VALUE**: Verifies a failed read during toggle leaves the persisted set intact.
///
/// **WHY THIS MATTERS**: A transient read error must never look like "no favorites";
/// writing the toggled empty set would wipe everything the user saved.
///
/// **BUG THIS CATCHES**: Would catch toggle falling back to an empty set on any read
/// error and then persisting `[id]` over the real favorites.
#[test]
fn given_transient_read_failure_when_toggling_then_existing_favorites_kept() {
    // GIVEN: Three persisted favorites and a read that will fail once
    let store = FavoritesStore::new(FlakyReadStore::seeded("[1,4,7]"));
    store.storage().fail_next_read.set(true);

    // WHEN: Toggling during the failure
    store.toggle(25);

    // THEN: Toggle dropped, nothing overwritten
    assert_eq!(store.ids(), vec![1, 4, 7]);
    assert!(!store.exists(25));

    // WHEN: Toggling once storage is readable again
    store.toggle(25);

    // THEN: Applied on top of the existing set
    assert_eq!(store.ids(), vec![1, 4, 7, 25]);
}
