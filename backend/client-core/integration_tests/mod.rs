mod config;
mod favorites;
mod pokeapi_client;
