//! Domain models for the Pokédex.
//!
//! Pure data structures representing the catalog entities and the user's
//! favorites. Models carry validation but no I/O; fetching and persistence
//! live in client-core.

pub mod error;
pub mod favorites;
pub mod pokemon;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use favorites::FavoriteSet;
pub use pokemon::builder::PokemonSummaryBuilder;
pub use pokemon::list_entry::PokemonListEntry;
pub use pokemon::pokemon_ref::PokemonRef;
pub use pokemon::{PokemonSprites, PokemonSummary, dream_world_artwork_url};

#[cfg(test)]
mod tests;
