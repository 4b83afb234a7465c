mod builder;
mod pokemon_ref;
