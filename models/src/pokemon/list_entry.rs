use crate::dream_world_artwork_url;

use serde::{Deserialize, Serialize};

/// One row of the catalog listing.
///
/// The listing endpoint only returns names; ids are the 1-based position in
/// the upstream list, which is ordered by national dex number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListEntry {
    pub id: u32,
    pub name: String,
}

impl PokemonListEntry {
    pub fn dream_world_image_url(&self) -> String {
        dream_world_artwork_url(self.id)
    }
}
