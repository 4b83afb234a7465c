//! The user's favorite Pokémon ids.

use serde::{Deserialize, Serialize};

/// Set of favorite Pokémon ids.
///
/// Stored as a plain JSON array of integers. Duplicates in persisted data are
/// dropped on load; insertion order is kept only for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct FavoriteSet {
    ids: Vec<u32>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Removes `id` if present, otherwise appends it.
    ///
    /// Returns `true` when `id` is a member afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(position) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }
}

impl From<Vec<u32>> for FavoriteSet {
    fn from(raw: Vec<u32>) -> Self {
        let mut ids = Vec::with_capacity(raw.len());
        for id in raw {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }
}

impl From<FavoriteSet> for Vec<u32> {
    fn from(set: FavoriteSet) -> Self {
        set.ids
    }
}
