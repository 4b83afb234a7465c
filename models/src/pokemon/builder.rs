use crate::error::model_error::ModelError;
use crate::{ErrorLocation, PokemonSprites, PokemonSummary};

use std::panic::Location;

/// Builder for creating validated PokemonSummary instances.
///
/// The API response is untrusted input; this is the single place where its
/// shape is checked before it becomes a domain value.
#[derive(Debug, Default)]
pub struct PokemonSummaryBuilder {
    id: Option<u32>,
    name: Option<String>,
    sprites: Option<PokemonSprites>,
}

impl PokemonSummaryBuilder {
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_sprites(mut self, sprites: PokemonSprites) -> Self {
        self.sprites = Some(sprites);
        self
    }

    /// Build the PokemonSummary with validation.
    #[track_caller]
    pub fn build(self) -> Result<PokemonSummary, ModelError> {
        let id = self.id.ok_or_else(|| ModelError::Validation {
            message: String::from("Pokemon id is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if id == 0 {
            return Err(ModelError::Validation {
                message: String::from("Pokemon id must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let name = self.name.ok_or_else(|| ModelError::Validation {
            message: String::from("Pokemon name is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if name.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Pokemon name cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let sprites = self.sprites.ok_or_else(|| ModelError::Validation {
            message: String::from("Sprites are required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        for (field, url) in sprites.all() {
            if let Some(url) = url {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ModelError::Validation {
                        message: format!("Invalid sprite URL for {field}: {url}"),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            }
        }

        Ok(PokemonSummary { id, name, sprites })
    }
}
