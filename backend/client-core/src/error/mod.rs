pub mod config;
pub mod pokeapi_client;
pub mod storage;

pub use config::ConfigError;
pub use pokeapi_client::FetchError;
pub use storage::StorageError;
