use crate::pages::display_name;

use models::PokemonSummary;

use std::fmt::Write;

pub const FAVORITE_LABEL: &str = "[★ In favorites]";
pub const NOT_FAVORITE_LABEL: &str = "[☆ Save to favorites]";

/// Shown once when a Pokémon goes from not-favorite to favorite.
pub const CELEBRATION_BANNER: &str = "🎉 🎊 ✨  New favorite!  ✨ 🎊 🎉";

const NO_IMAGE_PLACEHOLDER: &str = "(no image)";

pub fn render(pokemon: &PokemonSummary, is_favorite: bool) -> String {
    let label = if is_favorite {
        FAVORITE_LABEL
    } else {
        NOT_FAVORITE_LABEL
    };

    let mut page = String::new();
    let _ = writeln!(
        page,
        "#{:03} {}    {}",
        pokemon.id,
        display_name(&pokemon.name),
        label
    );
    let _ = writeln!(
        page,
        "Artwork: {}",
        pokemon
            .sprites
            .dream_world_front
            .as_deref()
            .unwrap_or(NO_IMAGE_PLACEHOLDER)
    );
    let _ = writeln!(page, "\nSprites:");

    let sprites = [
        ("front", &pokemon.sprites.front_default),
        ("back", &pokemon.sprites.back_default),
        ("front shiny", &pokemon.sprites.front_shiny),
        ("back shiny", &pokemon.sprites.back_shiny),
    ];
    for (label, url) in sprites {
        let _ = writeln!(
            page,
            "  {:<12} {}",
            label,
            url.as_deref().unwrap_or(NO_IMAGE_PLACEHOLDER)
        );
    }

    page
}
