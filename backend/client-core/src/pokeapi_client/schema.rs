//! Wire shapes of the PokeAPI responses we consume.
//!
//! Only the fields we read are declared; serde ignores the rest. Anything that
//! fails to deserialize here is a malformed response.

use models::{PokemonSprites, PokemonSummary, PokemonSummaryBuilder};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPokemon {
    pub id: u32,
    pub name: String,
    pub sprites: ApiSprites,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiSprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<ApiOtherSprites>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiOtherSprites {
    #[serde(default)]
    pub dream_world: Option<ApiDreamWorld>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiDreamWorld {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPokemonList {
    pub results: Vec<ApiNamedResource>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiNamedResource {
    pub name: String,
}

impl ApiPokemon {
    /// Validate and reduce to the domain summary.
    #[track_caller]
    pub(crate) fn into_summary(self) -> Result<PokemonSummary, models::ModelError> {
        let dream_world_front = self
            .sprites
            .other
            .and_then(|other| other.dream_world)
            .and_then(|dream_world| dream_world.front_default);

        PokemonSummaryBuilder::default()
            .with_id(self.id)
            .with_name(self.name)
            .with_sprites(PokemonSprites {
                front_default: self.sprites.front_default,
                back_default: self.sprites.back_default,
                front_shiny: self.sprites.front_shiny,
                back_shiny: self.sprites.back_shiny,
                dream_world_front,
            })
            .build()
    }
}
