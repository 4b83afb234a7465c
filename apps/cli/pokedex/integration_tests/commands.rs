use pokedex::cli::Command;
use pokedex::commands;
use pokedex::context::AppContext;
use pokedex::pages::PageStatus;
use pokedex::pages::detail::{CELEBRATION_BANNER, FAVORITE_LABEL, NOT_FAVORITE_LABEL};

use client_core::PokeApiClient;
use client_core::favorites::MemoryStore;

use models::PokemonRef;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for commands: real client against a mock upstream,
// favorites in memory
// ============================================================================

async fn upstream_with_pikachu() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 25,
            "name": "pikachu",
            "sprites": {
                "front_default": "https://img.example/25.png",
                "back_default": "https://img.example/back/25.png",
                "front_shiny": "https://img.example/shiny/25.png",
                "back_shiny": "https://img.example/back/shiny/25.png",
                "other": { "dream_world": { "front_default": "https://img.example/dw/25.svg" } }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon/not-a-real-pokemon"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;
    server
}

fn context_for(server: &MockServer) -> AppContext<MemoryStore> {
    let client = PokeApiClient::new(&server.uri()).expect("mock URI should be valid");
    AppContext::new(client, MemoryStore::new(), 151)
}

fn pikachu() -> PokemonRef {
    PokemonRef::Name(String::from("pikachu"))
}

/// **VALUE**: Verifies the first toggle celebrates and the second does not.
///
/// **WHY THIS MATTERS**: The celebration marks the transition into favorites only;
/// removing a favorite must not celebrate.
///
/// **BUG THIS CATCHES**: Would catch celebrating on removal or on every toggle.
#[tokio::test]
async fn given_pokemon_when_toggled_twice_then_celebrates_only_on_add() {
    // GIVEN: Empty favorites
    let server = upstream_with_pikachu().await;
    let ctx = context_for(&server);

    // WHEN: First toggle
    let added = commands::toggle(&ctx, &pikachu()).await;

    // THEN: Celebration and favorite label
    assert_eq!(added.status, PageStatus::Ok);
    assert!(added.body.starts_with(CELEBRATION_BANNER));
    assert!(added.body.contains(FAVORITE_LABEL));
    assert!(ctx.favorites.exists(25));

    // WHEN: Second toggle
    let removed = commands::toggle(&ctx, &pikachu()).await;

    // THEN: No celebration, back to not-favorite
    assert!(!removed.body.contains(CELEBRATION_BANNER));
    assert!(removed.body.contains(NOT_FAVORITE_LABEL));
    assert!(!ctx.favorites.exists(25));
}

/// **VALUE**: Verifies the detail page reads favorite state from the injected store.
///
/// **BUG THIS CATCHES**: Would catch `show` ignoring the store and always rendering
/// the not-favorite label.
#[tokio::test]
async fn given_favorite_when_showing_then_detail_has_favorite_label() {
    // GIVEN: Pikachu already a favorite
    let server = upstream_with_pikachu().await;
    let ctx = context_for(&server);
    ctx.favorites.toggle(25);

    // WHEN: Showing
    let page = commands::show(&ctx, &pikachu()).await;

    // THEN: Favorite label, no celebration
    assert_eq!(page.status, PageStatus::Ok);
    assert!(page.body.contains(FAVORITE_LABEL));
    assert!(!page.body.contains(CELEBRATION_BANNER));
}

/// **VALUE**: Verifies an unknown name renders a not-found page and leaves favorites alone.
///
/// **WHY THIS MATTERS**: A typo must never add a phantom id.
///
/// **BUG THIS CATCHES**: Would catch toggling before the lookup succeeds.
#[tokio::test]
async fn given_unknown_name_when_toggling_then_not_found_and_favorites_untouched() {
    let server = upstream_with_pikachu().await;
    let ctx = context_for(&server);

    let page = commands::toggle(&ctx, &PokemonRef::Name(String::from("not-a-real-pokemon"))).await;

    assert_eq!(page.status, PageStatus::NotFound);
    assert!(page.body.contains("not-a-real-pokemon"));
    assert!(ctx.favorites.ids().is_empty());
}

#[tokio::test]
async fn given_favorites_when_dispatching_favorites_command_then_lists_ids() {
    let server = upstream_with_pikachu().await;
    let ctx = context_for(&server);
    ctx.favorites.toggle(25);
    ctx.favorites.toggle(1);

    let page = commands::dispatch(&ctx, &Command::Favorites).await;

    assert_eq!(page.status, PageStatus::Ok);
    assert!(page.body.starts_with("Favorites (2)"));
    assert!(page.body.contains("#025"));
    assert!(page.body.contains("#001"));
}

/// **VALUE**: Verifies the listing falls back to the configured limit.
///
/// **BUG THIS CATCHES**: Would catch a hard-coded limit ignoring configuration.
#[tokio::test]
async fn given_no_limit_when_listing_then_uses_context_limit() {
    // GIVEN: Upstream expecting limit=151
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(wiremock::matchers::query_param("limit", "151"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = context_for(&server);

    // WHEN: Listing without a limit
    let page = commands::dispatch(&ctx, &Command::List { limit: None }).await;

    // THEN: Rendered with the one entry
    assert_eq!(page.status, PageStatus::Ok);
    assert!(page.body.contains("Bulbasaur"));
}

#[tokio::test]
async fn given_upstream_down_when_listing_then_unavailable_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let ctx = context_for(&server);

    let page = commands::list(&ctx, Some(10)).await;

    assert_eq!(page.status, PageStatus::Unavailable);
    assert!(page.body.contains("500"));
}
