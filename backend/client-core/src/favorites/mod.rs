//! Favorites store: the set of Pokémon ids the user has marked.
//!
//! The store never fails outward. Unreadable, missing or corrupt storage reads
//! as an empty set. A toggle only replaces the persisted set when it is missing
//! or corrupt; if storage can't be read or written the toggle is logged and dropped.

pub mod storage;

pub use storage::{FileStore, KeyValueStore, MemoryStore};

use crate::error::storage::StorageError;

use common::ErrorLocation;
use models::FavoriteSet;

use std::panic::Location;

use log::{debug, info, warn};

/// Well-known storage key holding the serialized id array.
pub const FAVORITES_KEY: &str = "favorites";

pub struct FavoritesStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Whether `id` is currently a favorite. Never fails.
    pub fn exists(&self, id: u32) -> bool {
        self.read_or_empty().contains(id)
    }

    /// Remove `id` if it is a favorite, otherwise add it.
    ///
    /// The new set is written before returning, so a following [`exists`](Self::exists)
    /// observes it. If storage can't be read or written the store is left as it was.
    pub fn toggle(&self, id: u32) {
        let mut favorites = match self.read() {
            Ok(favorites) => favorites,
            Err(e @ StorageError::Corrupt { .. }) => {
                warn!("Favorites corrupt, replacing on toggle of #{id}: {e}");
                FavoriteSet::new()
            }
            Err(e) => {
                warn!("Favorites unreadable, toggle of #{id} dropped: {e}");
                return;
            }
        };
        let is_favorite = favorites.toggle(id);

        match self.write(&favorites) {
            Ok(()) => {
                if is_favorite {
                    info!("Added pokemon #{id} to favorites");
                } else {
                    info!("Removed pokemon #{id} from favorites");
                }
            }
            Err(e) => warn!("Failed to persist favorites, toggle of #{id} dropped: {e}"),
        }
    }

    /// Current favorites in the order they were added. Empty on any storage failure.
    pub fn ids(&self) -> Vec<u32> {
        self.read_or_empty().ids().to_vec()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read_or_empty(&self) -> FavoriteSet {
        match self.read() {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!("Favorites unreadable, treating as empty: {e}");
                FavoriteSet::new()
            }
        }
    }

    fn read(&self) -> Result<FavoriteSet, StorageError> {
        let Some(raw) = self.storage.get_item(FAVORITES_KEY)? else {
            debug!("No favorites persisted yet");
            return Ok(FavoriteSet::new());
        };

        serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
            key: FAVORITES_KEY.to_string(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn write(&self, favorites: &FavoriteSet) -> Result<(), StorageError> {
        let raw = serde_json::to_string(favorites).map_err(|e| StorageError::Unavailable {
            message: format!("Failed to serialize favorites: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.storage.set_item(FAVORITES_KEY, &raw)
    }
}
