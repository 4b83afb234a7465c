// Unit tests for the PokeAPI client that need no network

use crate::PokeApiClient;
use crate::pokeapi_client::schema::ApiPokemon;

use serde_json::json;

/// **VALUE**: Verifies the nested dream-world sprite is lifted into the summary.
///
/// **WHY THIS MATTERS**: The detail page's hero image is this sprite; it lives two
/// levels deep under `sprites.other.dream_world` upstream.
///
/// **BUG THIS CATCHES**: Would catch a wrong serde path leaving it always `None`.
#[test]
fn given_full_payload_when_reduced_then_dream_world_sprite_is_kept() {
    // GIVEN: A payload with extra fields we don't model
    let payload = json!({
        "id": 151,
        "name": "mew",
        "base_experience": 300,
        "sprites": {
            "front_default": "https://img.example/151.png",
            "back_default": null,
            "front_shiny": "https://img.example/shiny/151.png",
            "back_shiny": null,
            "other": {
                "dream_world": { "front_default": "https://img.example/dw/151.svg" },
                "home": { "front_default": "https://img.example/home/151.png" }
            }
        }
    });

    // WHEN: Deserializing and reducing
    let raw: ApiPokemon = serde_json::from_value(payload).unwrap();
    let summary = raw.into_summary().unwrap();

    // THEN: Reduced fields only
    assert_eq!(summary.id, 151);
    assert_eq!(summary.name, "mew");
    assert_eq!(
        summary.sprites.dream_world_front.as_deref(),
        Some("https://img.example/dw/151.svg")
    );
    assert_eq!(summary.sprites.back_default, None);
}

/// **VALUE**: Verifies a payload without `other` still reduces.
///
/// **BUG THIS CATCHES**: Would catch `other` being required by the schema.
#[test]
fn given_payload_without_other_sprites_when_reduced_then_dream_world_is_none() {
    let payload = json!({
        "id": 10001,
        "name": "deoxys-attack",
        "sprites": {
            "front_default": null,
            "back_default": null,
            "front_shiny": null,
            "back_shiny": null
        }
    });

    let raw: ApiPokemon = serde_json::from_value(payload).unwrap();
    let summary = raw.into_summary().unwrap();

    assert_eq!(summary.sprites.dream_world_front, None);
    assert!(summary.sprites.gallery().is_empty());
}

/// **VALUE**: Verifies a missing trailing slash on the base URL is tolerated.
///
/// **WHY THIS MATTERS**: `Url::join` would otherwise drop the `v2` segment and
/// every request would 404.
///
/// **BUG THIS CATCHES**: Would catch removing base URL normalization.
#[test]
fn given_base_url_without_trailing_slash_when_creating_client_then_slash_is_added() {
    let client = PokeApiClient::new("https://pokeapi.co/api/v2").unwrap();

    assert_eq!(client.base_url().as_str(), "https://pokeapi.co/api/v2/");
}

#[test]
fn given_unparseable_base_url_when_creating_client_then_invalid_request() {
    let result = PokeApiClient::new("not a url");

    assert!(matches!(
        result,
        Err(crate::error::FetchError::InvalidRequest { .. })
    ));
}
