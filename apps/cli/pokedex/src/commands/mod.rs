//! One function per user-facing page.
//!
//! Fetch failures are rendered, never returned: the page layer owns the
//! not-found and unavailable states.

use crate::cli::Command;
use crate::context::AppContext;
use crate::pages::{self, Page, detail};

use client_core::favorites::KeyValueStore;

use models::PokemonRef;

use log::{debug, error, info};

pub async fn dispatch<S: KeyValueStore>(ctx: &AppContext<S>, command: &Command) -> Page {
    match command {
        Command::List { limit } => list(ctx, *limit).await,
        Command::Show { pokemon } => show(ctx, pokemon).await,
        Command::Toggle { pokemon } => toggle(ctx, pokemon).await,
        Command::Favorites => favorites(ctx),
    }
}

/// Listing page for the first `limit` Pokémon (config default when `None`).
pub async fn list<S: KeyValueStore>(ctx: &AppContext<S>, limit: Option<u32>) -> Page {
    let limit = limit.unwrap_or(ctx.list_limit);
    debug!("Rendering listing of {limit} pokemon");

    match ctx.client.list_pokemon(limit).await {
        Ok(entries) => Page::ok(pages::listing::render(&entries)),
        Err(e) => {
            error!("Listing failed: {e}");
            pages::render_listing_error(&e)
        }
    }
}

/// Detail page with the favorite button state.
pub async fn show<S: KeyValueStore>(ctx: &AppContext<S>, pokemon: &PokemonRef) -> Page {
    match ctx.client.get_pokemon_info(pokemon).await {
        Ok(summary) => {
            let is_favorite = ctx.favorites.exists(summary.id);
            Page::ok(detail::render(&summary, is_favorite))
        }
        Err(e) => {
            error!("Lookup of {pokemon} failed: {e}");
            pages::render_lookup_error(pokemon, &e)
        }
    }
}

/// Flip favorite state, then show the detail page.
///
/// Celebrates only on the transition into favorites. If storage is
/// unavailable the toggle is dropped and the page shows the unchanged state.
pub async fn toggle<S: KeyValueStore>(ctx: &AppContext<S>, pokemon: &PokemonRef) -> Page {
    let summary = match ctx.client.get_pokemon_info(pokemon).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Lookup of {pokemon} failed, favorites untouched: {e}");
            return pages::render_lookup_error(pokemon, &e);
        }
    };

    let was_favorite = ctx.favorites.exists(summary.id);
    ctx.favorites.toggle(summary.id);
    let is_favorite = ctx.favorites.exists(summary.id);

    let mut body = String::new();
    if is_favorite && !was_favorite {
        info!("#{} {} is a new favorite", summary.id, summary.name);
        body.push_str(detail::CELEBRATION_BANNER);
        body.push_str("\n\n");
    }
    body.push_str(&detail::render(&summary, is_favorite));

    Page::ok(body)
}

pub fn favorites<S: KeyValueStore>(ctx: &AppContext<S>) -> Page {
    Page::ok(pages::favorites::render(&ctx.favorites.ids()))
}
