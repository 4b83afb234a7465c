use crate::pages::display_name;

use models::PokemonListEntry;

use std::fmt::Write;

pub fn render(entries: &[PokemonListEntry]) -> String {
    let mut page = format!("Pokémon ({})\n\n", entries.len());

    for entry in entries {
        let _ = writeln!(
            page,
            "#{:03}  {:<14} {}",
            entry.id,
            display_name(&entry.name),
            entry.dream_world_image_url()
        );
    }

    page
}
