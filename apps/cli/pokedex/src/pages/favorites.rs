use models::dream_world_artwork_url;

use std::fmt::Write;

pub const EMPTY_MESSAGE: &str = "No favorites yet. Use `pokedex toggle <name>` to add one.";

pub fn render(ids: &[u32]) -> String {
    if ids.is_empty() {
        return format!("Favorites\n\n{EMPTY_MESSAGE}\n");
    }

    let mut page = format!("Favorites ({})\n\n", ids.len());
    for id in ids {
        let _ = writeln!(page, "#{:03}  {}", id, dream_world_artwork_url(*id));
    }
    page
}
