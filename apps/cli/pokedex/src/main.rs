use pokedex::cli::Cli;
use pokedex::commands;
use pokedex::context::AppContext;
use pokedex::error::PokedexError;
use pokedex::logger::initialize as LoggerInitialize;
use pokedex::pages::{Page, PageStatus};

use client_core::config::{AppConfig, default_config_dir};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(page) => {
            print!("{}", page.body);
            match page.status {
                PageStatus::Ok => ExitCode::SUCCESS,
                PageStatus::NotFound | PageStatus::Unavailable => ExitCode::FAILURE,
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<Page, PokedexError> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let config = AppConfig::load(&config_dir)?;
    let data_dir = config.data_dir()?;

    create_dir_all(&data_dir).map_err(|e| PokedexError::Pokedex {
        message: format!("Failed to create data directory {}: {e}", data_dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    LoggerInitialize(&data_dir, cli.verbose)?;

    info!("Pokedex starting");
    info!("Data directory: {}", data_dir.display());

    let ctx = AppContext::from_config(&config, &data_dir)?;

    Ok(commands::dispatch(&ctx, &cli.command).await)
}
