mod favorites;
mod pokeapi_client;
