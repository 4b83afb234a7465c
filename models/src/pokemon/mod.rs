pub mod builder;
pub mod list_entry;
pub mod pokemon_ref;

use serde::{Deserialize, Serialize};

const DREAM_WORLD_ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/dream-world";

/// Reduced, immutable view of one Pokémon as returned by the catalog API.
///
/// Upstream data reaches this type through
/// [`PokemonSummaryBuilder`](builder::PokemonSummaryBuilder), which checks for a non-zero
/// id, a non-empty name and http(s) sprite URLs. Building it by hand skips those checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    pub sprites: PokemonSprites,
}

/// Sprite image URLs. Upstream sends `null` for variants that don't exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    pub dream_world_front: Option<String>,
}

impl PokemonSprites {
    /// The four in-game sprites, in display order, skipping missing ones.
    pub fn gallery(&self) -> Vec<&str> {
        [
            &self.front_default,
            &self.back_default,
            &self.front_shiny,
            &self.back_shiny,
        ]
        .into_iter()
        .filter_map(|sprite| sprite.as_deref())
        .collect()
    }

    pub(crate) fn all(&self) -> [(&'static str, &Option<String>); 5] {
        [
            ("front_default", &self.front_default),
            ("back_default", &self.back_default),
            ("front_shiny", &self.front_shiny),
            ("back_shiny", &self.back_shiny),
            ("dream_world_front", &self.dream_world_front),
        ]
    }
}

/// Artwork URL for a Pokémon id, derived without an API call.
pub fn dream_world_artwork_url(id: u32) -> String {
    format!("{DREAM_WORLD_ARTWORK_BASE_URL}/{id}.svg")
}
