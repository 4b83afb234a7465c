//! Plain-text page renderers.
//!
//! Renderers are pure: they take already-fetched data and return the page
//! body. Commands decide which page to show.

pub mod detail;
pub mod favorites;
pub mod listing;

use client_core::error::FetchError;

use models::PokemonRef;

/// How the page ended up, so the binary can pick an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: PageStatus,
    pub body: String,
}

impl Page {
    pub fn ok(body: String) -> Self {
        Self {
            status: PageStatus::Ok,
            body,
        }
    }
}

/// Fallback page for a failed fetch.
pub fn render_fetch_error(pokemon: &str, error: &FetchError) -> Page {
    match error {
        FetchError::NotFound { .. } => Page {
            status: PageStatus::NotFound,
            body: format!("No Pokémon called \"{pokemon}\" was found.\n"),
        },
        FetchError::NetworkFailure { status, .. } => {
            let detail = match status {
                Some(code) if code.is_server_error() => format!(" (server answered {code})"),
                Some(code) => format!(" (HTTP {code})"),
                None => String::new(),
            };
            Page {
                status: PageStatus::Unavailable,
                body: format!("The Pokédex is unavailable right now{detail}. Try again later.\n"),
            }
        }
        FetchError::InvalidRequest { .. } => Page {
            status: PageStatus::Unavailable,
            body: format!("Could not build a request for \"{pokemon}\".\n"),
        },
    }
}

/// Fallback page for a failed listing fetch.
pub fn render_listing_error(error: &FetchError) -> Page {
    match error {
        FetchError::NotFound { .. } => Page {
            status: PageStatus::NotFound,
            body: String::from("The Pokémon listing could not be found upstream.\n"),
        },
        _ => render_fetch_error("the Pokémon listing", error),
    }
}

/// Shorthand for commands that only have a [`PokemonRef`].
pub fn render_lookup_error(pokemon: &PokemonRef, error: &FetchError) -> Page {
    render_fetch_error(&pokemon.to_string(), error)
}

/// `mr-mime` -> `Mr-mime`; display only, lookups keep the raw name.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
