use crate::error::PokedexError;

use client_core::config::AppConfig;
use client_core::favorites::{FavoritesStore, FileStore, KeyValueStore};
use client_core::PokeApiClient;

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;

use log::debug;

/// Everything a command needs, passed explicitly.
///
/// Generic over the favorites backend so tests can run against memory.
pub struct AppContext<S: KeyValueStore> {
    pub client: PokeApiClient,
    pub favorites: FavoritesStore<S>,
    pub list_limit: u32,
}

impl<S: KeyValueStore> AppContext<S> {
    pub fn new(client: PokeApiClient, storage: S, list_limit: u32) -> Self {
        Self {
            client,
            favorites: FavoritesStore::new(storage),
            list_limit,
        }
    }
}

impl AppContext<FileStore> {
    /// Wire the real client and the file-backed favorites from config.
    pub fn from_config(config: &AppConfig, data_dir: &Path) -> Result<Self, PokedexError> {
        let client = PokeApiClient::with_timeout(&config.api.base_url, config.api.timeout())
            .map_err(|e| PokedexError::Core {
                message: format!("Failed to create API client: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let storage = FileStore::new(data_dir);
        debug!("Favorites stored at {}", storage.path().display());

        Ok(Self::new(client, storage, config.catalog.list_limit))
    }
}
