use crate::{ModelError, PokemonSprites, PokemonSummaryBuilder};

fn pikachu_sprites() -> PokemonSprites {
    PokemonSprites {
        front_default: Some(String::from(
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
        )),
        back_default: Some(String::from(
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/back/25.png",
        )),
        front_shiny: None,
        back_shiny: None,
        dream_world_front: None,
    }
}

/// **VALUE**: Verifies a complete, well-formed summary builds.
///
/// **WHY THIS MATTERS**: This is the happy path every successful fetch goes through.
///
/// **BUG THIS CATCHES**: Would catch over-eager validation rejecting `None` sprites,
/// which upstream sends for many Pokémon.
#[test]
fn given_valid_fields_when_building_summary_then_succeeds() {
    // GIVEN: A fully populated builder
    let builder = PokemonSummaryBuilder::default()
        .with_id(25)
        .with_name("pikachu")
        .with_sprites(pikachu_sprites());

    // WHEN: Building
    let summary = builder.build().expect("valid summary should build");

    // THEN: Fields are carried through untouched
    assert_eq!(summary.id, 25);
    assert_eq!(summary.name, "pikachu");
    assert_eq!(summary.sprites.gallery().len(), 2);
}

/// **VALUE**: Verifies that id zero is rejected.
///
/// **WHY THIS MATTERS**: National dex numbers start at 1; a zero id means the
/// upstream payload was malformed and must surface as a failure, not a fake entity.
///
/// **BUG THIS CATCHES**: Would catch removal of the zero-id guard.
#[test]
fn given_zero_id_when_building_summary_then_returns_validation_error() {
    // GIVEN: Builder with id zero
    let builder = PokemonSummaryBuilder::default()
        .with_id(0)
        .with_name("missingno")
        .with_sprites(PokemonSprites::default());

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Pokemon id must be non-zero");
        }
    }
}

/// **VALUE**: Verifies that a blank name is rejected.
///
/// **WHY THIS MATTERS**: Pages title themselves with the name; an empty one would
/// render a headerless detail page.
///
/// **BUG THIS CATCHES**: Would catch if whitespace-only names slipped through.
#[test]
fn given_blank_name_when_building_summary_then_returns_validation_error() {
    // GIVEN: Builder with whitespace name
    let builder = PokemonSummaryBuilder::default()
        .with_id(25)
        .with_name("   ")
        .with_sprites(PokemonSprites::default());

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Pokemon name cannot be empty");
        }
    }
}

/// **VALUE**: Verifies that non-http sprite URLs are rejected.
///
/// **WHY THIS MATTERS**: Sprite URLs are handed to whatever renders images; a
/// `javascript:` or relative value from a broken upstream must not pass.
///
/// **BUG THIS CATCHES**: Would catch if sprite validation were skipped.
#[test]
fn given_non_http_sprite_when_building_summary_then_returns_validation_error() {
    // GIVEN: A sprite with an unsupported scheme
    let sprites = PokemonSprites {
        back_shiny: Some(String::from("ftp://example.com/25.png")),
        ..PokemonSprites::default()
    };
    let builder = PokemonSummaryBuilder::default()
        .with_id(25)
        .with_name("pikachu")
        .with_sprites(sprites);

    // WHEN: Building
    let result = builder.build();

    // THEN: The offending field is named
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert!(message.contains("back_shiny"), "got: {message}");
        }
    }
}

/// **VALUE**: Verifies that missing required fields are reported.
///
/// **BUG THIS CATCHES**: Would catch a builder that defaults missing ids or names.
#[test]
fn given_missing_name_when_building_summary_then_returns_validation_error() {
    let result = PokemonSummaryBuilder::default()
        .with_id(1)
        .with_sprites(PokemonSprites::default())
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Pokemon name is required");
        }
    }
}
