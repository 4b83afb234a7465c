//! Shared building blocks for the Pokédex workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, HTTP status helpers
//! - **models**: Pure data structures (Pokémon summaries, favorites)
//! - **client-core**: PokeAPI client, favorites store, configuration
//! - **pokedex**: Terminal front end wiring everything together

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
