use common::ErrorLocation;

use std::panic::Location;

use client_core::error::ConfigError;
use thiserror::Error;

/// Errors that stop the front end before a page can be rendered.
///
/// Fetch failures are not here: they become not-found or unavailable pages.
#[derive(Debug, Error)]
pub enum PokedexError {
    /// Error from this App
    #[error("Pokedex Error: {message} {location}")]
    Pokedex {
        message: String,
        location: ErrorLocation,
    },

    /// Configuration could not be loaded or resolved
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core setup (HTTP client construction, etc.)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ConfigError> for PokedexError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        PokedexError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
