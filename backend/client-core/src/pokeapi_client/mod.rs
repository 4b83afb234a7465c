pub(crate) mod schema;

use crate::error::pokeapi_client::FetchError;

use schema::{ApiPokemon, ApiPokemonList};

use common::{ErrorLocation, HttpStatusCode};
use models::{PokemonListEntry, PokemonRef, PokemonSummary};

use std::panic::Location;
use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const POKEMON_ENDPOINT: &str = "pokemon";
const LIMIT_QUERY_KEY: &str = "limit";

/// Read-only client for the PokeAPI catalog.
///
/// One GET per call; no retries and no caching.
#[derive(Clone)]
pub struct PokeApiClient {
    base_url: Url,
    client: Client,
}

impl PokeApiClient {
    pub fn new(base_url_str: &str) -> Result<Self, FetchError> {
        Self::with_timeout(base_url_str, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(base_url_str: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = normalize_base_url(base_url_str)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch one Pokémon and reduce it to a [`PokemonSummary`].
    ///
    /// # Errors
    /// - [`FetchError::NotFound`] when upstream answers 404, or without a request
    ///   when `pokemon` can't name a single entity (see [`PokemonRef::is_addressable`]).
    /// - [`FetchError::NetworkFailure`] for transport errors, other non-2xx
    ///   statuses and payloads that don't match the expected shape.
    pub async fn get_pokemon_info(
        &self,
        pokemon: &PokemonRef,
    ) -> Result<PokemonSummary, FetchError> {
        if !pokemon.is_addressable() {
            debug!("Pokemon {pokemon:?} has no entity path, skipping request");
            return Err(FetchError::NotFound {
                name_or_id: pokemon.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let url = self.pokemon_url(pokemon)?;
        debug!("Fetching pokemon {pokemon} from {url}");

        let response = self.client.get(url).send().await?;
        let response = check_status(response, &pokemon.to_string()).await?;

        let json: Value = response.json().await?;
        let raw: ApiPokemon = serde_json::from_value(json)?;
        let summary = raw.into_summary()?;

        debug!("Fetched pokemon #{} {}", summary.id, summary.name);
        Ok(summary)
    }

    /// Enumerate the first `limit` Pokémon in national dex order.
    pub async fn list_pokemon(&self, limit: u32) -> Result<Vec<PokemonListEntry>, FetchError> {
        let mut url = self.base_url.join(POKEMON_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair(LIMIT_QUERY_KEY, &limit.to_string());
        debug!("Listing pokemon from {url}");

        let response = self.client.get(url).send().await?;
        let response = check_status(response, POKEMON_ENDPOINT).await?;

        let json: Value = response.json().await?;
        let list: ApiPokemonList = serde_json::from_value(json)?;

        let mut entries = Vec::with_capacity(list.results.len());
        for (index, resource) in list.results.into_iter().enumerate() {
            if resource.name.trim().is_empty() {
                return Err(FetchError::NetworkFailure {
                    message: format!("Malformed response: empty name at index {index}"),
                    status: None,
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let id = u32::try_from(index + 1).map_err(|_| FetchError::NetworkFailure {
                message: String::from("Malformed response: listing too large"),
                status: None,
                location: ErrorLocation::from(Location::caller()),
            })?;

            entries.push(PokemonListEntry {
                id,
                name: resource.name,
            });
        }

        Ok(entries)
    }

    fn pokemon_url(&self, pokemon: &PokemonRef) -> Result<Url, FetchError> {
        let mut url = self.base_url.join(POKEMON_ENDPOINT)?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidRequest {
                message: format!("Base URL cannot hold path segments: {}", self.base_url),
                location: ErrorLocation::from(Location::caller()),
            })?
            .push(&pokemon.to_string());
        Ok(url)
    }
}

/// `Url::join` drops the last path segment unless the base ends with `/`.
fn normalize_base_url(base_url_str: &str) -> Result<Url, FetchError> {
    if base_url_str.ends_with('/') {
        Ok(Url::parse(base_url_str)?)
    } else {
        Ok(Url::parse(&format!("{base_url_str}/"))?)
    }
}

async fn check_status(response: Response, name_or_id: &str) -> Result<Response, FetchError> {
    let status = HttpStatusCode(response.status().as_u16());

    if response.status().is_success() {
        return Ok(response);
    }

    if status.is_not_found() {
        debug!("Upstream has no entry for {name_or_id}");
        return Err(FetchError::NotFound {
            name_or_id: name_or_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    warn!("Upstream returned HTTP {status} for {name_or_id}");
    Err(FetchError::NetworkFailure {
        message: format!(
            "HTTP {} - {}",
            status,
            response.text().await.unwrap_or_default()
        ),
        status: Some(status),
        location: ErrorLocation::from(Location::caller()),
    })
}
