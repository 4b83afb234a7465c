pub mod config;
pub mod error;
pub mod favorites;
pub mod pokeapi_client;

#[cfg(test)]
mod tests;

pub use favorites::FavoritesStore;
pub use pokeapi_client::PokeApiClient;

pub const POKEAPI_HOSTNAME: &str = "pokeapi.co";
pub const POKEAPI_BASE_URL: &str = const_format::concatcp!("https://", POKEAPI_HOSTNAME, "/api/v2/");

/// Listing size used by the original catalog: the first-generation Pokédex.
pub const DEFAULT_LIST_LIMIT: u32 = 151;

/// Upper bound on any listing request, from config or the command line.
pub const MAX_LIST_LIMIT: u32 = 2000;

/// Directory name under the platform config/data dirs.
pub const APP_DIR_NAME: &str = "pokedex";
