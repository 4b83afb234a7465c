use client_core::MAX_LIST_LIMIT;

use models::PokemonRef;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Browse the Pokédex and keep a list of favorites.
#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about)]
pub struct Cli {
    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Mirror debug logs to the console
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the first N Pokémon
    List {
        /// How many to list (defaults to the configured list limit)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_LIST_LIMIT)))]
        limit: Option<u32>,
    },

    /// Show one Pokémon by name or national dex number
    Show {
        #[arg(value_name = "NAME_OR_ID")]
        pokemon: PokemonRef,
    },

    /// Add or remove a Pokémon from favorites
    Toggle {
        #[arg(value_name = "NAME_OR_ID")]
        pokemon: PokemonRef,
    },

    /// List favorite Pokémon
    Favorites,
}
