use crate::error::model_error::ModelError;
use crate::ErrorLocation;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::str::FromStr;

/// How a caller identifies a Pokémon: by national dex number or by name.
///
/// Names are passed upstream as given; the API decides what casing it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokemonRef {
    Id(u32),
    Name(String),
}

impl FromStr for PokemonRef {
    type Err = ModelError;

    #[track_caller]
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Pokemon name or id cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed
                .parse::<u32>()
                .ok()
                .filter(|id| *id != 0)
                .map(PokemonRef::Id)
                .ok_or_else(|| ModelError::Validation {
                    message: format!("Invalid Pokemon id: {trimmed}"),
                    location: ErrorLocation::from(Location::caller()),
                });
        }

        if matches!(trimmed, "." | "..") {
            return Err(ModelError::Validation {
                message: format!("Invalid Pokemon name: {trimmed}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(PokemonRef::Name(trimmed.to_string()))
    }
}

impl PokemonRef {
    /// Whether this ref maps to exactly one `/pokemon/{nameOrId}` path segment.
    ///
    /// URL path normalization swallows empty, `.` and `..` segments.
    pub fn is_addressable(&self) -> bool {
        match self {
            PokemonRef::Id(id) => *id != 0,
            PokemonRef::Name(name) => !matches!(name.as_str(), "" | "." | ".."),
        }
    }
}

impl From<u32> for PokemonRef {
    fn from(id: u32) -> Self {
        PokemonRef::Id(id)
    }
}

impl Display for PokemonRef {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            PokemonRef::Id(id) => write!(formatter, "{id}"),
            PokemonRef::Name(name) => write!(formatter, "{name}"),
        }
    }
}
