use client_core::PokeApiClient;
use client_core::error::FetchError;

use models::PokemonRef;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PIKACHU_FIXTURE: &str = include_str!("fixtures/pikachu.json");

fn client_for(server: &MockServer) -> PokeApiClient {
    PokeApiClient::new(&server.uri()).expect("mock server URI should be valid")
}

/// **VALUE**: Verifies a known name resolves to its reduced summary.
///
/// **WHY THIS MATTERS**: This is the detail page's only data source.
///
/// **BUG THIS CATCHES**: Would catch a wrong endpoint path, a schema mismatch with
/// the real payload, or sprite fields being dropped during reduction.
#[tokio::test]
async fn given_known_name_when_fetching_then_returns_summary_with_sprites() {
    // GIVEN: Upstream serving the real pikachu payload
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(PIKACHU_FIXTURE, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Fetching by name
    let summary = client
        .get_pokemon_info(&PokemonRef::Name(String::from("pikachu")))
        .await
        .expect("pikachu should be found");

    // THEN: id 25 and non-empty sprites
    assert_eq!(summary.id, 25);
    assert_eq!(summary.name, "pikachu");
    assert_eq!(summary.sprites.gallery().len(), 4);
    assert!(
        summary
            .sprites
            .dream_world_front
            .as_deref()
            .is_some_and(|url| url.ends_with("dream-world/25.svg"))
    );
}

/// **VALUE**: Verifies lookup by numeric id uses the same endpoint.
///
/// **BUG THIS CATCHES**: Would catch ids being formatted differently from names.
#[tokio::test]
async fn given_numeric_id_when_fetching_then_requests_id_segment() {
    // GIVEN: Upstream answering on /pokemon/25
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(PIKACHU_FIXTURE, "application/json"),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Fetching by id
    let summary = client.get_pokemon_info(&PokemonRef::Id(25)).await.unwrap();

    // THEN: Same entity
    assert_eq!(summary.name, "pikachu");
}

/// **VALUE**: Verifies an unknown name fails with NotFound.
///
/// **WHY THIS MATTERS**: The page layer renders a not-found state only for this variant.
///
/// **BUG THIS CATCHES**: Would catch 404 being reported as a network failure, or
/// the 404 body ("Not Found", plain text) being parsed as a summary.
#[tokio::test]
async fn given_unknown_name_when_fetching_then_not_found() {
    // GIVEN: Upstream returning PokeAPI's plain-text 404
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/not-a-real-pokemon"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Fetching
    let result = client
        .get_pokemon_info(&PokemonRef::Name(String::from("not-a-real-pokemon")))
        .await;

    // THEN: NotFound naming the request
    match result {
        Err(FetchError::NotFound { name_or_id, .. }) => {
            assert_eq!(name_or_id, "not-a-real-pokemon");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

/// **VALUE**: Verifies upstream 5xx is a network failure carrying the status.
///
/// **BUG THIS CATCHES**: Would catch every non-2xx being collapsed into NotFound.
#[tokio::test]
async fn given_server_error_when_fetching_then_network_failure_with_status() {
    // GIVEN: Upstream down
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Fetching
    let result = client.get_pokemon_info(&PokemonRef::Id(1)).await;

    // THEN: NetworkFailure with 503
    match result {
        Err(FetchError::NetworkFailure { status, message, .. }) => {
            let status = status.expect("status should be recorded");
            assert!(status.is_server_error());
            assert!(message.contains("maintenance"));
        }
        other => panic!("expected NetworkFailure, got {other:?}"),
    }
}

/// **VALUE**: Verifies a payload that doesn't match the schema is a network failure.
///
/// **WHY THIS MATTERS**: Upstream shape is untrusted; a missing `sprites` object must
/// not produce a half-filled summary.
///
/// **BUG THIS CATCHES**: Would catch making schema fields optional with defaults.
#[tokio::test]
async fn given_malformed_payload_when_fetching_then_network_failure() {
    // GIVEN: 200 with the wrong shape
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "twenty-five",
            "name": "pikachu"
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Fetching
    let result = client
        .get_pokemon_info(&PokemonRef::Name(String::from("pikachu")))
        .await;

    // THEN: NetworkFailure, not NotFound
    let err = result.unwrap_err();
    assert!(err.is_network_failure(), "got {err:?}");
    assert!(err.to_string().contains("Malformed response"));
}

/// **VALUE**: Verifies schema-valid but semantically invalid data is rejected.
///
/// **BUG THIS CATCHES**: Would catch skipping the builder validation after serde.
#[tokio::test]
async fn given_zero_id_payload_when_fetching_then_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 0,
            "name": "missingno",
            "sprites": {
                "front_default": null,
                "back_default": null,
                "front_shiny": null,
                "back_shiny": null
            }
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.get_pokemon_info(&PokemonRef::Id(1)).await;

    assert!(result.unwrap_err().is_network_failure());
}

/// **VALUE**: Verifies an unreachable upstream is a network failure without status.
///
/// **BUG THIS CATCHES**: Would catch transport errors escaping as panics.
#[tokio::test]
async fn given_unreachable_upstream_when_fetching_then_network_failure() {
    // GIVEN: A local port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let client = PokeApiClient::new(&format!("http://127.0.0.1:{port}")).unwrap();

    // WHEN: Fetching
    let result = client.get_pokemon_info(&PokemonRef::Id(25)).await;

    // THEN: NetworkFailure
    match result {
        Err(FetchError::NetworkFailure { status, .. }) => assert!(status.is_none()),
        other => panic!("expected NetworkFailure, got {other:?}"),
    }
}

/// **VALUE**: Verifies dot-segment names are not found without hitting the listing.
///
/// **WHY THIS MATTERS**: `..` would normalize to `/pokemon`, whose list payload then
/// fails the entity schema and shows an outage page for a simple typo.
///
/// **BUG THIS CATCHES**: Would catch dot segments reaching the wire.
#[tokio::test]
async fn given_dot_segment_name_when_fetching_then_not_found_without_request() {
    // GIVEN: Upstream that must not be called
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    for name in [".", ".."] {
        // WHEN: Fetching
        let result = client
            .get_pokemon_info(&PokemonRef::Name(String::from(name)))
            .await;

        // THEN: NotFound naming the input
        match result {
            Err(FetchError::NotFound { name_or_id, .. }) => assert_eq!(name_or_id, name),
            other => panic!("expected NotFound for {name:?}, got {other:?}"),
        }
    }
}

/// **VALUE**: Verifies the listing sends `limit` and numbers entries from 1.
///
/// **WHY THIS MATTERS**: The listing page links each row by id and derives its artwork URL
/// from that id.
///
/// **BUG THIS CATCHES**: Would catch 0-based ids (off-by-one artwork) or a missing limit.
#[tokio::test]
async fn given_listing_when_fetching_then_entries_numbered_from_one() {
    // GIVEN: Upstream listing three entries
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=3&limit=3",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" },
                { "name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Listing
    let entries = client.list_pokemon(3).await.unwrap();

    // THEN: 1-based ids in upstream order
    let ids: Vec<u32> = entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(entries[2].name, "venusaur");
    assert!(entries[0].dream_world_image_url().ends_with("/1.svg"));
}

#[tokio::test]
async fn given_listing_without_results_when_fetching_then_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0 })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.list_pokemon(151).await;

    assert!(result.unwrap_err().is_network_failure());
}
